//! Schema descriptor types

use serde::Serialize;

/// A column as described by the catalog
#[derive(Debug, Clone, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Declared type from the database's own vocabulary,
    /// e.g. "character varying", "integer", "timestamp without time zone"
    #[serde(rename = "type")]
    pub data_type: String,
}

impl ColumnDescriptor {
    /// Whether this column is a candidate for text search.
    ///
    /// Matches the character/text type family: "character varying",
    /// "character", "text", "varchar".
    pub fn is_searchable(&self) -> bool {
        self.data_type.starts_with("character")
            || self.data_type == "text"
            || self.data_type == "varchar"
    }
}

/// A table with its columns in ordinal position order
#[derive(Debug, Clone, Serialize)]
pub struct TableDescriptor {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
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
    fn test_character_family_is_searchable() {
        assert!(column("field1", "character varying").is_searchable());
        assert!(column("code", "character").is_searchable());
        assert!(column("body", "text").is_searchable());
        assert!(column("label", "varchar").is_searchable());
    }

    #[test]
    fn test_non_text_types_are_not_searchable() {
        assert!(!column("id", "integer").is_searchable());
        assert!(!column("created_at", "timestamp without time zone").is_searchable());
        assert!(!column("active", "boolean").is_searchable());
        assert!(!column("score", "double precision").is_searchable());
    }

    #[test]
    fn test_wire_shape_uses_type_key() {
        let json = serde_json::to_value(column("field1", "character varying")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "field1", "type": "character varying"})
        );
    }
}
