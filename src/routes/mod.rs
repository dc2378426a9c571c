mod categories;
mod health;
mod images;
mod products;

use axum::{routing::get, Router};

use crate::{error::AppError, AppState};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/api/categories",
            get(categories::get_all_categories).post(categories::add_category),
        )
        .route("/api/categories/:id", get(categories::get_category))
        .route("/api/products", get(products::get_all_products))
        .route(
            "/api/products/category/:category_id",
            get(products::get_products_by_category),
        )
        .route(
            "/api/products/:id",
            get(products::get_product)
                .post(products::add_product)
                .patch(products::partial_update_product),
        )
        .route(
            "/api/image/:product_id",
            get(images::get_product_image).post(images::upload_product_image),
        )
}

/// Creation endpoints answer 400 whatever went wrong.
fn creation_failure(err: AppError) -> AppError {
    tracing::warn!("Creation failed: {}", err);
    match err {
        AppError::BadRequest(_) => err,
        other => AppError::BadRequest(other.to_string()),
    }
}

/// Lookups by id, listing by category and PATCH answer 404 whatever went wrong.
fn lookup_failure(err: AppError) -> AppError {
    tracing::warn!("Lookup failed: {}", err);
    match err {
        AppError::NotFound(_) => err,
        other => AppError::NotFound(other.to_string()),
    }
}
