// src/domain/pagination/gate.rs
//! Validation gate: every list request goes through here before a store is
//! touched, whether it arrives as a next key or as raw query parameters.
use super::{
    codec::decode_next_key,
    error::{CursorError, GateError},
    limit::PageLimit,
    listing::{FilterRules, Listing, OptionsOf},
    options::ListOptions,
};
use serde_json::Value;

/// A list call as the transport hands it over.
///
/// A next key replaces every other parameter; raw parameters are only looked
/// at when no token was supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum ListRequest<P> {
    NextKey(String),
    Params(P),
}

/// Raw list parameters split into the parts the gate normalises.
#[derive(Debug, Clone, PartialEq)]
pub struct RawList<F, C> {
    pub filters: F,
    pub limit: Option<u64>,
    pub cursor: C,
}

impl<F, C: Default> RawList<F, C> {
    pub fn new(filters: F, limit: Option<u64>) -> Self {
        Self {
            filters,
            limit,
            cursor: C::default(),
        }
    }
}

pub trait IntoRawList<F, C> {
    fn into_raw(self) -> RawList<F, C>;
}

pub fn resolve_options<L, P>(request: ListRequest<P>) -> Result<OptionsOf<L>, GateError>
where
    L: Listing,
    P: IntoRawList<L::Filters, L::Cursor>,
{
    match request {
        ListRequest::NextKey(token) => Ok(validate_next_key::<L>(&token)?),
        ListRequest::Params(params) => options_from_params::<L>(params.into_raw()),
    }
}

/// Decode a next key and check it against the listing's options shape.
pub fn validate_next_key<L: Listing>(token: &str) -> Result<OptionsOf<L>, CursorError> {
    let record = decode_next_key(token)?;
    let options: OptionsOf<L> = serde_json::from_value(Value::Object(record))
        .map_err(|err| CursorError::Schema(err.to_string()))?;
    options.filters.check().map_err(CursorError::Schema)?;
    Ok(options)
}

fn options_from_params<L: Listing>(
    raw: RawList<L::Filters, L::Cursor>,
) -> Result<OptionsOf<L>, GateError> {
    let RawList {
        filters,
        limit,
        cursor,
    } = raw;
    filters.check().map_err(GateError::InvalidArgument)?;
    let limit = match limit {
        Some(value) => {
            PageLimit::new(value).map_err(|err| GateError::InvalidArgument(err.to_string()))?
        }
        None => L::DEFAULT_LIMIT,
    };
    Ok(ListOptions {
        filters,
        limit,
        cursor,
    })
}
