//! SQL fragments shared by list queries. Every list query already carries a
//! `WHERE` clause when these are appended.
use crate::domain::{
    errors::{DomainError, DomainResult},
    pagination::{PageStart, SortSpec},
};
use sqlx::{Encode, Postgres, QueryBuilder, Type};

/// Restricts rows to those strictly after the anchor row `key` of `table`,
/// comparing every sort column at once.
pub(super) fn push_after_key<'a, K>(
    builder: &mut QueryBuilder<'a, Postgres>,
    alias: &str,
    table: &str,
    sort: &SortSpec,
    key: K,
) -> DomainResult<()>
where
    K: 'a + Encode<'a, Postgres> + Type<Postgres>,
{
    let op = sort
        .keyset_comparator()
        .ok_or_else(|| DomainError::persistence("sort order cannot resume from a key"))?;
    let qualified = sort
        .columns()
        .map(|column| format!("{alias}.{column}"))
        .collect::<Vec<_>>()
        .join(", ");
    let bare = sort.columns().collect::<Vec<_>>().join(", ");

    builder.push(format_args!(
        " AND ({qualified}) {op} (SELECT {bare} FROM {table} WHERE id = "
    ));
    builder.push_bind(key);
    builder.push(")");
    Ok(())
}

pub(super) fn push_order_by(builder: &mut QueryBuilder<'_, Postgres>, alias: &str, sort: &SortSpec) {
    builder.push(" ORDER BY ");
    for (index, key) in sort.keys().iter().enumerate() {
        if index > 0 {
            builder.push(", ");
        }
        builder.push(format_args!(
            "{alias}.{} {}",
            key.column,
            key.direction.as_sql()
        ));
        builder.push(if key.nulls_first {
            " NULLS FIRST"
        } else {
            " NULLS LAST"
        });
    }
}

/// `LIMIT`, plus `OFFSET` for offset listings. Keyset starts are already
/// excluded by the predicate.
pub(super) fn push_window<K>(builder: &mut QueryBuilder<'_, Postgres>, start: &PageStart<K>, limit: i64) {
    builder.push(" LIMIT ");
    builder.push_bind(limit);
    if let PageStart::Offset(offset) = start {
        builder.push(" OFFSET ");
        // Decoded offsets never exceed `MAX_OFFSET`, which fits in an i64.
        builder.push_bind(i64::try_from(*offset).unwrap_or(i64::MAX));
    }
}

/// Case-insensitive substring match of `column` against `needle`. LIKE
/// metacharacters in the needle match literally.
pub(super) fn push_contains(builder: &mut QueryBuilder<'_, Postgres>, column: &str, needle: &str) {
    builder.push(format_args!(" AND {column} ILIKE "));
    builder.push_bind(contains_pattern(needle));
    builder.push(" ESCAPE '\\'");
}

fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_escapes_like_metacharacters() {
        assert_eq!(contains_pattern("tour"), "%tour%");
        assert_eq!(contains_pattern("a_b"), r"%a\_b%");
        assert_eq!(contains_pattern("100%"), r"%100\%%");
        assert_eq!(contains_pattern(r"c:\x"), r"%c:\\x%");
    }

    #[test]
    fn push_contains_declares_the_escape_character() {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT 1 FROM t n WHERE true");
        push_contains(&mut builder, "n.name", "_");
        assert_eq!(
            builder.sql(),
            r"SELECT 1 FROM t n WHERE true AND n.name ILIKE $1 ESCAPE '\'"
        );
    }
}
