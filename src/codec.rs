//! Row Codec
//!
//! Converts raw database row values into transport-safe JSON. Every value is
//! first lifted into the tagged [`SqlValue`] variant and then encoded: dates
//! and timestamps become ISO-8601 text, numerics stay numeric, SQL NULL maps
//! to JSON null. Applied uniformly to every generic row-returning endpoint.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Number, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo};

use crate::error::ApiResult;
use crate::schema::ColumnDescriptor;

/// A single database value in transport-neutral form
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl SqlValue {
    /// Encode to the wire representation
    pub fn into_json(self) -> Value {
        match self {
            SqlValue::Null => Value::Null,
            SqlValue::Bool(b) => Value::Bool(b),
            SqlValue::Int(i) => Value::Number(i.into()),
            SqlValue::Float(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
            SqlValue::Text(s) => Value::String(s),
            SqlValue::Timestamp(ts) => {
                Value::String(ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
            }
        }
    }
}

/// Decode one column of a row by its runtime Postgres type.
///
/// Unknown types fall back to a textual decode and finally to `Null` rather
/// than failing the whole row.
pub fn decode_column(row: &PgRow, index: usize) -> Result<SqlValue, sqlx::Error> {
    let type_name = row.columns()[index].type_info().name();

    let value = match type_name {
        "BOOL" => row
            .try_get::<Option<bool>, _>(index)?
            .map_or(SqlValue::Null, SqlValue::Bool),
        "INT2" => row
            .try_get::<Option<i16>, _>(index)?
            .map_or(SqlValue::Null, |v| SqlValue::Int(v as i64)),
        "INT4" => row
            .try_get::<Option<i32>, _>(index)?
            .map_or(SqlValue::Null, |v| SqlValue::Int(v as i64)),
        "INT8" => row
            .try_get::<Option<i64>, _>(index)?
            .map_or(SqlValue::Null, SqlValue::Int),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)?
            .map_or(SqlValue::Null, |v| SqlValue::Float(v as f64)),
        "FLOAT8" => row
            .try_get::<Option<f64>, _>(index)?
            .map_or(SqlValue::Null, SqlValue::Float),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(index)?
            .map_or(SqlValue::Null, SqlValue::Timestamp),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(index)?
            .map_or(SqlValue::Null, |v| SqlValue::Timestamp(v.naive_utc())),
        // Date-only values carry their ISO text form directly.
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)?
            .map_or(SqlValue::Null, |v| {
                SqlValue::Text(v.format("%Y-%m-%d").to_string())
            }),
        "TEXT" | "VARCHAR" | "CHAR" | "BPCHAR" | "NAME" => row
            .try_get::<Option<String>, _>(index)?
            .map_or(SqlValue::Null, SqlValue::Text),
        _ => match row.try_get::<Option<String>, _>(index) {
            Ok(v) => v.map_or(SqlValue::Null, SqlValue::Text),
            Err(_) => SqlValue::Null,
        },
    };

    Ok(value)
}

/// Encode a full row against the introspected column order.
///
/// The column sequence must be in ordinal position order; values are zipped
/// positionally, exactly mirroring the `SELECT *` column order.
pub fn encode_row(columns: &[ColumnDescriptor], row: &PgRow) -> ApiResult<Map<String, Value>> {
    let mut encoded = Map::with_capacity(columns.len());

    for (index, column) in columns.iter().enumerate().take(row.len()) {
        let value = decode_column(row, index)?;
        encoded.insert(column.name.clone(), value.into_json());
    }

    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_null_encodes_to_json_null() {
        assert_eq!(SqlValue::Null.into_json(), Value::Null);
    }

    #[test]
    fn test_numerics_stay_numeric() {
        assert_eq!(SqlValue::Int(42).into_json(), serde_json::json!(42));
        assert_eq!(SqlValue::Float(1.5).into_json(), serde_json::json!(1.5));
        assert_eq!(SqlValue::Bool(true).into_json(), serde_json::json!(true));
    }

    #[test]
    fn test_timestamp_encodes_iso_8601() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap();
        assert_eq!(
            SqlValue::Timestamp(ts).into_json(),
            Value::String("2024-03-09T14:30:05".to_string())
        );
    }

    #[test]
    fn test_timestamp_keeps_subsecond_precision() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(14, 30, 5, 123456)
            .unwrap();
        assert_eq!(
            SqlValue::Timestamp(ts).into_json(),
            Value::String("2024-03-09T14:30:05.123456".to_string())
        );
    }

    #[test]
    fn test_text_passes_through() {
        assert_eq!(
            SqlValue::Text("hello".to_string()).into_json(),
            Value::String("hello".to_string())
        );
    }
}
