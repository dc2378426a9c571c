use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, Result},
    models::{Category, CreateCategoryRequest},
    routes::{creation_failure, lookup_failure},
    services::category_service,
    AppState,
};

pub async fn get_all_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = category_service::list_all(state.store.as_ref()).await?;

    Ok(Json(categories))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>> {
    let category = category_service::get_by_id(state.store.as_ref(), id)
        .await
        .map_err(lookup_failure)?;

    Ok(Json(category))
}

pub async fn add_category(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>)> {
    let Json(payload) = payload.map_err(|e| creation_failure(AppError::BadRequest(e.body_text())))?;

    let category = category_service::add(state.store.as_ref(), &payload)
        .await
        .map_err(creation_failure)?;

    Ok((StatusCode::CREATED, Json(category)))
}
