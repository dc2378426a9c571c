use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{error::AppError, services::product_service, AppState};

const IMAGE_FIELD: &str = "image";

/// Failures of `POST /api/image/{productId}`, answered in plain text.
#[derive(Debug)]
pub enum ImageUploadError {
    ProductNotFound,
    ReadFailed(String),
    MissingImage,
    Store(AppError),
}

impl From<AppError> for ImageUploadError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => ImageUploadError::ProductNotFound,
            other => ImageUploadError::Store(other),
        }
    }
}

impl IntoResponse for ImageUploadError {
    fn into_response(self) -> Response {
        match self {
            ImageUploadError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "Product not found").into_response()
            }
            ImageUploadError::ReadFailed(reason) => {
                tracing::error!("Failed to read uploaded image: {}", reason);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to upload image").into_response()
            }
            ImageUploadError::MissingImage => StatusCode::BAD_REQUEST.into_response(),
            ImageUploadError::Store(err) => err.into_response(),
        }
    }
}

pub async fn get_product_image(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> crate::error::Result<Response> {
    let image = product_service::get_image(state.store.as_ref(), product_id).await?;

    if image.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], image).into_response())
}

pub async fn upload_product_image(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    mut multipart: Multipart,
) -> Result<&'static str, ImageUploadError> {
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ImageUploadError::ReadFailed(e.body_text()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ImageUploadError::ReadFailed(e.body_text()))?;
        image = Some(bytes);
        break;
    }

    let image = image.ok_or(ImageUploadError::MissingImage)?;
    product_service::set_image(state.store.as_ref(), product_id, &image).await?;

    Ok("Image uploaded successfully")
}
