use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    database::{check_health, CatalogStore},
    error::Result,
    models::{Category, CreateCategoryRequest, NewProduct, Product, ProductUpdate},
    queries::{category_queries, product_queries},
};

#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn ping(&self) -> Result<()> {
        check_health(&self.pool).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        category_queries::get_all(&self.pool).await
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>> {
        category_queries::find_by_id(&self.pool, id).await
    }

    async fn insert_category(&self, req: &CreateCategoryRequest) -> Result<Category> {
        category_queries::create_category(&self.pool, req).await
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        product_queries::get_all(&self.pool).await
    }

    async fn list_products_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        product_queries::find_by_category_id(&self.pool, category_id).await
    }

    async fn find_product(&self, id: i64) -> Result<Option<Product>> {
        product_queries::find_by_id(&self.pool, id).await
    }

    async fn insert_product(&self, product: &NewProduct) -> Result<Product> {
        product_queries::create_product(&self.pool, product).await
    }

    async fn update_product(&self, id: i64, updates: &[ProductUpdate]) -> Result<Option<Product>> {
        product_queries::update_product(&self.pool, id, updates).await
    }

    async fn find_product_image(&self, id: i64) -> Result<Option<Option<Vec<u8>>>> {
        product_queries::find_image(&self.pool, id).await
    }

    async fn set_product_image(&self, id: i64, image: &[u8]) -> Result<bool> {
        product_queries::set_image(&self.pool, id, image).await
    }
}
