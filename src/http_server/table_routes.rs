//! Generic Table HTTP Routes
//!
//! Endpoints for listing tables, fetching a table's rows, and searching a
//! table. Every handler is a single stateless pass: validate identifiers,
//! build SQL, execute, encode rows.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::server::AppState;
use crate::codec;
use crate::error::{ApiError, ApiResult};
use crate::query::builder;
use crate::schema::{self, validator, ColumnDescriptor};

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub column: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TableDataResponse {
    pub columns: Vec<ColumnDescriptor>,
    pub data: Vec<Map<String, Value>>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub columns: Vec<ColumnDescriptor>,
    pub data: Vec<Map<String, Value>>,
    pub count: usize,
}

// ==================
// Table Routes
// ==================

/// Create the generic table routes
pub fn table_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tables", get(list_tables_handler))
        .route("/table/{name}", get(table_data_handler))
        .route("/search/{name}", get(search_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List all tables in the public schema
async fn list_tables_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    let tables = schema::list_tables(&state.pool).await?;
    Ok(Json(tables))
}

/// Fetch a table's columns and up to 1000 rows
async fn table_data_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<TableDataResponse>> {
    if !validator::is_allowed_table(&state.pool, &name).await? {
        return Err(ApiError::TableNotFound);
    }

    let table = schema::describe_table(&state.pool, &name).await?;

    let rows = sqlx::query(&builder::fetch_all(&table.name))
        .fetch_all(&state.pool)
        .await?;

    let data = rows
        .iter()
        .map(|row| codec::encode_row(&table.columns, row))
        .collect::<ApiResult<Vec<_>>>()?;

    Ok(Json(TableDataResponse {
        columns: table.columns,
        data,
    }))
}

/// Case-insensitive substring search over one column or all text columns
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    // Request-field validation happens before any catalog access.
    if params.q.is_empty() {
        return Err(ApiError::MissingSearchTerm);
    }

    if !validator::is_allowed_table(&state.pool, &name).await? {
        return Err(ApiError::TableNotFound);
    }

    let table = schema::describe_table(&state.pool, &name).await?;

    // A supplied column is used only after catalog validation, and the
    // interpolated identifier is taken from the introspected list rather
    // than the raw query string. An unknown column falls back to the
    // all-text-columns search.
    let mut target = None;
    if let Some(c) = params.column.as_deref() {
        if !c.is_empty() && validator::is_allowed_column(&state.pool, &name, c).await? {
            target = table.columns.iter().find(|d| d.name == c);
        }
    }

    let sql = match target {
        Some(column) => builder::search_column(&table.name, &column.name),
        None => builder::search_text_columns(&table.name, &table.columns)?,
    };

    let rows = sqlx::query(&sql)
        .bind(builder::wildcard_pattern(&params.q))
        .fetch_all(&state.pool)
        .await?;

    let data = rows
        .iter()
        .map(|row| codec::encode_row(&table.columns, row))
        .collect::<ApiResult<Vec<_>>>()?;

    Ok(Json(SearchResponse {
        count: data.len(),
        columns: table.columns,
        data,
    }))
}
