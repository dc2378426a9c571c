use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    error::{AppError, Result},
    models::{Product, ProductRequest},
    routes::{creation_failure, lookup_failure},
    services::product_service,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct FieldsQuery {
    pub fields: Option<String>,
}

pub async fn get_all_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_service::list_all(state.store.as_ref()).await?;

    Ok(Json(products))
}

pub async fn get_products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(params): Query<FieldsQuery>,
) -> Result<Json<Vec<Map<String, Value>>>> {
    let products = product_service::list_by_category(state.store.as_ref(), category_id)
        .await
        .map_err(lookup_failure)?;

    Ok(Json(product_service::project(
        &products,
        params.fields.as_deref(),
    )))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    let product = product_service::get_by_id(state.store.as_ref(), id)
        .await
        .map_err(lookup_failure)?;

    Ok(Json(product))
}

pub async fn add_product(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    payload: std::result::Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(payload) = payload.map_err(|e| creation_failure(AppError::BadRequest(e.body_text())))?;

    let product = product_service::add(state.store.as_ref(), payload, category_id)
        .await
        .map_err(creation_failure)?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn partial_update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Product>> {
    let Json(updates) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let product = product_service::partial_update(state.store.as_ref(), id, &updates)
        .await
        .map_err(lookup_failure)?;

    Ok(Json(product))
}
