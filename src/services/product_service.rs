use std::str::FromStr;

use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde_json::{json, Map, Value};

use crate::{
    database::CatalogStore,
    error::{AppError, Result},
    models::{NewProduct, Product, ProductRequest, ProductUpdate, MAX_DESCRIPTION_LEN},
    services::category_service,
    utils::base64_bytes,
};

/// Fields a caller may select with `?fields=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Name,
    Price,
    Description,
    Image,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Id,
        ProductField::Name,
        ProductField::Price,
        ProductField::Description,
        ProductField::Image,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Id => "id",
            ProductField::Name => "name",
            ProductField::Price => "price",
            ProductField::Description => "description",
            ProductField::Image => "image",
        }
    }

    /// An empty or absent list selects every field; unknown names are dropped.
    pub fn parse_selection(fields: Option<&str>) -> Vec<ProductField> {
        match fields {
            None | Some("") => Self::ALL.to_vec(),
            Some(list) => list.split(',').filter_map(|name| name.parse().ok()).collect(),
        }
    }

    fn value_of(self, product: &Product) -> Value {
        match self {
            ProductField::Id => json!(product.id),
            ProductField::Name => json!(product.name),
            ProductField::Price => json!(product.price.to_f64()),
            ProductField::Description => json!(product.description),
            ProductField::Image => json!(product.image.as_deref().map(base64_bytes::encode)),
        }
    }
}

impl FromStr for ProductField {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(())
    }
}

pub async fn list_all(store: &dyn CatalogStore) -> Result<Vec<Product>> {
    store.list_products().await
}

/// No category existence check: an unknown id simply matches nothing.
pub async fn list_by_category(store: &dyn CatalogStore, category_id: i64) -> Result<Vec<Product>> {
    store.list_products_by_category(category_id).await
}

pub async fn get_by_id(store: &dyn CatalogStore, id: i64) -> Result<Product> {
    store
        .find_product(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product not found with ID: {}", id)))
}

pub async fn add(
    store: &dyn CatalogStore,
    req: ProductRequest,
    category_id: i64,
) -> Result<Product> {
    let category = category_service::get_by_id(store, category_id)
        .await
        .map_err(|e| match e {
            AppError::NotFound(msg) => AppError::BadRequest(msg),
            other => other,
        })?;

    let new_product = validate_new_product(req, category.id)?;
    let product = store.insert_product(&new_product).await?;
    tracing::info!("Created product {} in category {}", product.id, category.id);

    Ok(product)
}

pub fn validate_new_product(req: ProductRequest, category_id: i64) -> Result<NewProduct> {
    let name = req
        .name
        .ok_or_else(|| AppError::BadRequest("name is required".to_string()))?;

    let price = req
        .price
        .ok_or_else(|| AppError::BadRequest("price is required".to_string()))?;

    if let Some(ref description) = req.description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::BadRequest(format!(
                "description exceeds {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }
    }

    if matches!(req.stock, Some(stock) if stock < 0) {
        return Err(AppError::BadRequest("stock must not be negative".to_string()));
    }

    Ok(NewProduct {
        name,
        price,
        description: req.description,
        supplier: req.supplier,
        stock: req.stock,
        image: req.image,
        category_id,
    })
}

/// Builds one reduced map per product, preserving input order.
pub fn project(products: &[Product], fields: Option<&str>) -> Vec<Map<String, Value>> {
    let selection = ProductField::parse_selection(fields);

    products
        .iter()
        .map(|product| {
            selection
                .iter()
                .map(|field| (field.as_str().to_string(), field.value_of(product)))
                .collect()
        })
        .collect()
}

/// Validates the whole update map before anything is written.
///
/// Only `name` (string) and `price` (number or numeric string) are accepted.
/// `description` is rejected like any other field.
pub fn parse_updates(updates: &Map<String, Value>) -> Result<Vec<ProductUpdate>> {
    updates
        .iter()
        .map(|(key, value)| match key.as_str() {
            "name" => value
                .as_str()
                .map(|name| ProductUpdate::Name(name.to_string()))
                .ok_or_else(|| AppError::InvalidField(format!("name must be a string: {}", value))),
            "price" => parse_price(value)
                .map(ProductUpdate::Price)
                .ok_or_else(|| AppError::InvalidField(format!("price is not numeric: {}", value))),
            other => Err(AppError::InvalidField(other.to_string())),
        })
        .collect()
}

fn parse_price(value: &Value) -> Option<Decimal> {
    let raw = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .ok()
}

pub async fn partial_update(
    store: &dyn CatalogStore,
    id: i64,
    updates: &Map<String, Value>,
) -> Result<Product> {
    let updates = parse_updates(updates)?;

    let product = store
        .update_product(id, &updates)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product not found with ID: {}", id)))?;

    tracing::info!("Updated product {} ({} fields)", id, updates.len());

    Ok(product)
}

/// Empty when the product exists without an image.
pub async fn get_image(store: &dyn CatalogStore, product_id: i64) -> Result<Vec<u8>> {
    store
        .find_product_image(product_id)
        .await?
        .map(Option::unwrap_or_default)
        .ok_or_else(|| AppError::NotFound(format!("Product not found with ID: {}", product_id)))
}

pub async fn set_image(store: &dyn CatalogStore, product_id: i64, image: &[u8]) -> Result<()> {
    if !store.set_product_image(product_id, image).await? {
        return Err(AppError::NotFound(format!(
            "Product not found with ID: {}",
            product_id
        )));
    }

    tracing::info!("Stored {} byte image for product {}", image.len(), product_id);

    Ok(())
}
