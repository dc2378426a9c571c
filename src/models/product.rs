use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{models::Category, utils::base64_bytes};

pub const MAX_DESCRIPTION_LEN: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: Option<String>,
    pub supplier: Option<String>,
    /// Stored as `BIGINT`, so stock is capped at `i64::MAX`; larger values are
    /// rejected when the request body is decoded.
    pub stock: Option<i64>,
    #[serde(with = "base64_bytes", default)]
    pub image: Option<Vec<u8>>,
    pub category: Category,
}

/// Flat row shape produced by the product/category join.
#[derive(Debug, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub supplier: Option<String>,
    pub stock: Option<i64>,
    pub image: Option<Vec<u8>>,
    pub category_id: i64,
    pub category_name: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            description: row.description,
            supplier: row.supplier,
            stock: row.stock,
            image: row.image,
            category: Category {
                id: row.category_id,
                name: row.category_name,
            },
        }
    }
}

/// Body of `POST /api/products/{categoryId}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRequest {
    pub name: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option", default)]
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub supplier: Option<String>,
    pub stock: Option<i64>,
    #[serde(with = "base64_bytes", default)]
    pub image: Option<Vec<u8>>,
}

/// Validated product fields ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub supplier: Option<String>,
    pub stock: Option<i64>,
    pub image: Option<Vec<u8>>,
    pub category_id: i64,
}

/// A single field change accepted by `PATCH /api/products/{id}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductUpdate {
    Name(String),
    Price(Decimal),
}
