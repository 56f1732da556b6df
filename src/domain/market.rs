// src/domain/market.rs
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use super::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    Tw,
    Jp,
    Kr,
    Th,
}

impl Region {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tw => "TW",
            Self::Jp => "JP",
            Self::Kr => "KR",
            Self::Th => "TH",
        }
    }
}

/// Upstream booking platform a native record was imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Source {
    Kkday,
    Klook,
}

impl Source {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kkday => "KKDAY",
            Self::Klook => "KLOOK",
        }
    }
}

macro_rules! text_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                $(
                    if value == Self::$variant.as_str() {
                        return Ok(Self::$variant);
                    }
                )+
                Err(DomainError::Validation(format!(
                    "unknown {}: {value}",
                    stringify!($ty).to_lowercase()
                )))
            }
        }
    };
}

text_enum!(Region { Tw, Jp, Kr, Th });
text_enum!(Source { Kkday, Klook });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_wire_names() {
        assert_eq!(serde_json::to_value(Region::Tw).unwrap(), "TW");
        assert_eq!("TH".parse::<Region>().unwrap(), Region::Th);
        assert!("tw".parse::<Region>().is_err());
    }

    #[test]
    fn source_wire_names() {
        assert_eq!(serde_json::to_value(Source::Klook).unwrap(), "KLOOK");
        assert_eq!(Source::Kkday.to_string(), "KKDAY");
        assert_eq!(
            "AGODA".parse::<Source>(),
            Err(DomainError::Validation("unknown source: AGODA".into()))
        );
    }
}
