//! Demo Item HTTP Routes
//!
//! CRUD over the demo `your_table` entity. Create and update validate the
//! request body before touching the database; update and delete wrap their
//! existence check and mutation in a single transaction so the check cannot
//! race the act.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::meta_routes::MessageResponse;
use super::server::AppState;
use crate::error::{ApiError, ApiResult};
use crate::query::builder;
use crate::schema;

// ==================
// Request/Response Types
// ==================

/// The demo entity: id and created_at are server-generated
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    pub field1: String,
    pub field2: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Body for create (both fields required) and update (at least one)
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub field1: Option<String>,
    pub field2: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
    pub message: String,
}

// ==================
// Item Routes
// ==================

/// Create the demo item routes
pub fn item_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/items", get(list_items_handler).post(create_item_handler))
        .route(
            "/items/{id}",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List every item, ordered by id
async fn list_items_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Item>>> {
    if !schema::table_exists(&state.pool, "your_table").await? {
        return Err(ApiError::ItemsTableMissing);
    }

    let items = sqlx::query_as::<_, Item>(builder::ITEM_SELECT_ALL)
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(items))
}

/// Fetch a single item by id
async fn get_item_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Item>> {
    let item = sqlx::query_as::<_, Item>(builder::ITEM_SELECT_BY_ID)
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(ApiError::ItemNotFound)?;

    Ok(Json(item))
}

/// Insert a new item; both fields are mandatory
async fn create_item_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ItemPayload>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let (field1, field2) = match (payload.field1, payload.field2) {
        (Some(f1), Some(f2)) => (f1, f2),
        _ => return Err(ApiError::MissingItemFields),
    };

    let id = sqlx::query_scalar::<_, i32>(builder::ITEM_INSERT)
        .bind(field1)
        .bind(field2)
        .fetch_one(&state.pool)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Item created successfully".to_string(),
        }),
    ))
}

/// Partial update from the fields present in the body
async fn update_item_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<ItemPayload>,
) -> ApiResult<Json<MessageResponse>> {
    // Rejects an empty body before any database access.
    let sql = builder::update_item(payload.field1.is_some(), payload.field2.is_some())?;

    let mut tx = state.pool.begin().await?;

    let exists = sqlx::query_scalar::<_, i32>(builder::ITEM_EXISTS)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    if exists.is_none() {
        return Err(ApiError::ItemNotFound);
    }

    // Bind order mirrors the builder: fields in declaration order, id last.
    let mut query = sqlx::query(&sql);
    if let Some(field1) = &payload.field1 {
        query = query.bind(field1);
    }
    if let Some(field2) = &payload.field2 {
        query = query.bind(field2);
    }
    query.bind(id).execute(&mut *tx).await?;

    tx.commit().await?;

    Ok(Json(MessageResponse {
        message: "Item updated successfully".to_string(),
    }))
}

/// Delete an item by id
async fn delete_item_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    let mut tx = state.pool.begin().await?;

    let exists = sqlx::query_scalar::<_, i32>(builder::ITEM_EXISTS)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    if exists.is_none() {
        return Err(ApiError::ItemNotFound);
    }

    sqlx::query(builder::ITEM_DELETE)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(Json(MessageResponse {
        message: "Item deleted successfully".to_string(),
    }))
}
