use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Category, CreateCategoryRequest, NewProduct, Product, ProductUpdate},
};

/// Persistence operations over the `categories` and `products` tables.
///
/// Lookups return `Ok(None)` on a miss; turning a miss into an error is left
/// to the services.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn ping(&self) -> Result<()>;

    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn find_category(&self, id: i64) -> Result<Option<Category>>;
    async fn insert_category(&self, req: &CreateCategoryRequest) -> Result<Category>;

    async fn list_products(&self) -> Result<Vec<Product>>;
    async fn list_products_by_category(&self, category_id: i64) -> Result<Vec<Product>>;
    async fn find_product(&self, id: i64) -> Result<Option<Product>>;
    async fn insert_product(&self, product: &NewProduct) -> Result<Product>;

    /// Applies all `updates` atomically. `Ok(None)` if the product is absent.
    async fn update_product(&self, id: i64, updates: &[ProductUpdate]) -> Result<Option<Product>>;

    /// Outer `None`: no such product. Inner `None`: product without image.
    async fn find_product_image(&self, id: i64) -> Result<Option<Option<Vec<u8>>>>;

    /// Returns `false` if the product is absent.
    async fn set_product_image(&self, id: i64, image: &[u8]) -> Result<bool>;
}
