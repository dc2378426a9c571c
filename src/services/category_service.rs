use crate::{
    database::CatalogStore,
    error::{AppError, Result},
    models::{Category, CreateCategoryRequest},
};

pub async fn list_all(store: &dyn CatalogStore) -> Result<Vec<Category>> {
    store.list_categories().await
}

pub async fn get_by_id(store: &dyn CatalogStore, id: i64) -> Result<Category> {
    store
        .find_category(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category not found with ID: {}", id)))
}

pub async fn add(store: &dyn CatalogStore, req: &CreateCategoryRequest) -> Result<Category> {
    let category = store.insert_category(req).await?;
    tracing::info!("Created category {} ({})", category.id, category.name);

    Ok(category)
}
