use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Category, CreateCategoryRequest},
};

/// Find category by ID
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

/// Get all categories (flat list)
pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories")
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

/// Create a new category
pub async fn create_category(pool: &PgPool, req: &CreateCategoryRequest) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name)
         VALUES ($1)
         RETURNING id, name",
    )
    .bind(&req.name)
    .fetch_one(pool)
    .await?;

    Ok(category)
}
