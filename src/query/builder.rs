//! Query Builder
//!
//! Pure construction of parameterized SQL text. Data values are always bound
//! through `$n` placeholders resolved by the driver; table and column names
//! are interpolated only after they have passed the identifier validator, so
//! every identifier reaching these functions is trusted.

use crate::error::{ApiError, ApiResult};
use crate::schema::ColumnDescriptor;

/// Row cap for generic fetch-all; larger tables are silently truncated.
pub const FETCH_LIMIT: i64 = 1000;

/// Row cap for search results.
pub const SEARCH_LIMIT: i64 = 100;

// ==================
// Generic table queries
// ==================

/// `SELECT *` over a validated table, natural order, fixed limit.
pub fn fetch_all(table: &str) -> String {
    format!("SELECT * FROM {} LIMIT {}", table, FETCH_LIMIT)
}

/// Case-insensitive substring search over one validated column.
///
/// The single `$1` parameter takes the `%term%` pattern.
pub fn search_column(table: &str, column: &str) -> String {
    format!(
        "SELECT * FROM {} WHERE CAST({} AS TEXT) ILIKE $1 LIMIT {}",
        table, column, SEARCH_LIMIT
    )
}

/// Case-insensitive substring search OR-joined over every character/text
/// family column, reusing a single `$1` pattern bind.
pub fn search_text_columns(table: &str, columns: &[ColumnDescriptor]) -> ApiResult<String> {
    let predicates: Vec<String> = columns
        .iter()
        .filter(|c| c.is_searchable())
        .map(|c| format!("CAST({} AS TEXT) ILIKE $1", c.name))
        .collect();

    if predicates.is_empty() {
        return Err(ApiError::NoTextColumns);
    }

    Ok(format!(
        "SELECT * FROM {} WHERE {} LIMIT {}",
        table,
        predicates.join(" OR "),
        SEARCH_LIMIT
    ))
}

/// Wrap a raw search term in ILIKE wildcards.
pub fn wildcard_pattern(term: &str) -> String {
    format!("%{}%", term)
}

// ==================
// Demo item statements
// ==================

pub const ITEM_SELECT_ALL: &str =
    "SELECT id, field1, field2, created_at FROM your_table ORDER BY id";

pub const ITEM_SELECT_BY_ID: &str =
    "SELECT id, field1, field2, created_at FROM your_table WHERE id = $1";

pub const ITEM_INSERT: &str =
    "INSERT INTO your_table (field1, field2) VALUES ($1, $2) RETURNING id";

pub const ITEM_EXISTS: &str = "SELECT id FROM your_table WHERE id = $1";

pub const ITEM_DELETE: &str = "DELETE FROM your_table WHERE id = $1";

/// Partial update over the fields actually present in the request.
///
/// Parameters are numbered in field order (field1 before field2) with the id
/// bound last; callers must bind in the same order.
pub fn update_item(has_field1: bool, has_field2: bool) -> ApiResult<String> {
    let mut assignments = Vec::new();
    let mut param = 0;

    if has_field1 {
        param += 1;
        assignments.push(format!("field1 = ${}", param));
    }
    if has_field2 {
        param += 1;
        assignments.push(format!("field2 = ${}", param));
    }

    if assignments.is_empty() {
        return Err(ApiError::NoUpdateFields);
    }

    param += 1;
    Ok(format!(
        "UPDATE your_table SET {} WHERE id = ${}",
        assignments.join(", "),
        param
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, data_type: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.to_string(),
            data_type: data_type.to_string(),
        }
    }

    #[test]
    fn test_fetch_all_has_fixed_limit() {
        assert_eq!(fetch_all("your_table"), "SELECT * FROM your_table LIMIT 1000");
    }

    #[test]
    fn test_search_column_casts_and_binds() {
        assert_eq!(
            search_column("your_table", "field1"),
            "SELECT * FROM your_table WHERE CAST(field1 AS TEXT) ILIKE $1 LIMIT 100"
        );
    }

    #[test]
    fn test_search_text_columns_filters_to_text_family() {
        let columns = vec![
            column("id", "integer"),
            column("field1", "character varying"),
            column("field2", "character varying"),
            column("created_at", "timestamp without time zone"),
        ];
        let sql = search_text_columns("your_table", &columns).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM your_table \
             WHERE CAST(field1 AS TEXT) ILIKE $1 OR CAST(field2 AS TEXT) ILIKE $1 \
             LIMIT 100"
        );
    }

    #[test]
    fn test_search_without_text_columns_is_an_error() {
        let columns = vec![column("id", "integer"), column("score", "double precision")];
        let err = search_text_columns("numbers", &columns).unwrap_err();
        assert!(matches!(err, ApiError::NoTextColumns));
    }

    #[test]
    fn test_wildcard_pattern_wraps_term() {
        assert_eq!(wildcard_pattern("example"), "%example%");
    }

    #[test]
    fn test_update_both_fields() {
        let sql = update_item(true, true).unwrap();
        assert_eq!(
            sql,
            "UPDATE your_table SET field1 = $1, field2 = $2 WHERE id = $3"
        );
    }

    #[test]
    fn test_update_single_field_skips_the_other() {
        assert_eq!(
            update_item(true, false).unwrap(),
            "UPDATE your_table SET field1 = $1 WHERE id = $2"
        );
        assert_eq!(
            update_item(false, true).unwrap(),
            "UPDATE your_table SET field2 = $1 WHERE id = $2"
        );
    }

    #[test]
    fn test_update_without_fields_is_an_error() {
        let err = update_item(false, false).unwrap_err();
        assert!(matches!(err, ApiError::NoUpdateFields));
    }
}
