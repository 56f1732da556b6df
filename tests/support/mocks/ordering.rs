// tests/support/mocks/ordering.rs
// Applies a SortSpec and PageStart to in-memory rows the same way the
// Postgres repositories do in SQL.
use chrono::{DateTime, Utc};
use kiosk_core::domain::pagination::{PageStart, SortDirection, SortSpec};
use std::cmp::Ordering;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Int(i64),
    Text(String),
    Time(DateTime<Utc>),
    Id(Uuid),
}

fn compare_column(a: Option<SortValue>, b: Option<SortValue>, direction: SortDirection, nulls_first: bool) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => {
            if nulls_first {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        (Some(_), None) => {
            if nulls_first {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.cmp(&b),
            SortDirection::Desc => b.cmp(&a),
        },
    }
}

/// Sort, position and cut `rows` into one page.
///
/// An `AfterKey` anchor that is not among `rows` yields an empty page, like
/// the row-value subquery does when the anchor row is gone.
pub fn page_of<R, K>(
    mut rows: Vec<R>,
    sort: &SortSpec,
    start: &PageStart<K>,
    limit: u32,
    column: impl Fn(&R, &str) -> Option<SortValue>,
    key: impl Fn(&R) -> K,
) -> Vec<R>
where
    K: PartialEq,
{
    rows.sort_by(|a, b| {
        sort.keys()
            .iter()
            .map(|k| compare_column(column(a, k.column), column(b, k.column), k.direction, k.nulls_first))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });

    let skip = match start {
        PageStart::First => 0,
        PageStart::Offset(n) => usize::try_from(*n).unwrap(),
        PageStart::AfterKey(anchor) => match rows.iter().position(|row| key(row) == *anchor) {
            Some(index) => index + 1,
            None => rows.len(),
        },
    };

    rows.into_iter()
        .skip(skip)
        .take(limit as usize)
        .collect()
}
