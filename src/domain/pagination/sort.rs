// src/domain/pagination/sort.rs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: &'static str,
    pub direction: SortDirection,
    pub nulls_first: bool,
}

impl SortKey {
    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
            nulls_first: false,
        }
    }

    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
            nulls_first: false,
        }
    }

    pub const fn nulls_first(mut self) -> Self {
        self.nulls_first = true;
        self
    }
}

/// Ordering a listing asks the store to honour verbatim.
///
/// The last key is the tie-break and must be unique per record, so two pages
/// never disagree about where a record with a repeated primary value sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    keys: &'static [SortKey],
}

impl SortSpec {
    pub const fn new(keys: &'static [SortKey]) -> Self {
        assert!(!keys.is_empty(), "sort spec needs a tie-break key");
        Self { keys }
    }

    pub const fn keys(&self) -> &'static [SortKey] {
        self.keys
    }

    pub fn tie_break(&self) -> &'static SortKey {
        &self.keys[self.keys.len() - 1]
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keys.iter().map(|key| key.column)
    }

    /// Strict operator for a row-value keyset predicate, `None` when the keys
    /// mix directions or null placement and a row comparison would be wrong.
    pub fn keyset_comparator(&self) -> Option<&'static str> {
        let first = self.keys[0].direction;
        let uniform = self
            .keys
            .iter()
            .all(|key| key.direction == first && !key.nulls_first);
        if !uniform {
            return None;
        }
        Some(match first {
            SortDirection::Asc => ">",
            SortDirection::Desc => "<",
        })
    }
}
