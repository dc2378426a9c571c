#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
    body::{self, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use catalog_back::{
    app,
    config::{AppConfig, CorsConfig, DatabaseConfig, ServerConfig},
    models::{Category, CreateCategoryRequest, NewProduct, Product, ProductUpdate},
    AppError, AppState, CatalogStore, Result,
};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

pub const BOUNDARY: &str = "catalog-test-boundary";

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    products: Vec<Product>,
    next_category_id: i64,
    next_product_id: i64,
}

/// In-memory catalog store; `set_broken(true)` makes every call fail.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    broken: AtomicBool,
}

impl MemoryStore {
    pub fn set_broken(&self, broken: bool) {
        self.broken.store(broken, Ordering::SeqCst);
    }

    pub fn product_count(&self) -> usize {
        self.tables.lock().unwrap().products.len()
    }

    fn check(&self) -> Result<()> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(AppError::InternalError("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> Result<()> {
        self.check()
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().categories.clone())
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_category(&self, req: &CreateCategoryRequest) -> Result<Category> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_category_id += 1;
        let category = Category {
            id: tables.next_category_id,
            name: req.name.clone(),
        };
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().products.clone())
    }

    async fn list_products_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .products
            .iter()
            .filter(|p| p.category.id == category_id)
            .cloned()
            .collect())
    }

    async fn find_product(&self, id: i64) -> Result<Option<Product>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_product(&self, product: &NewProduct) -> Result<Product> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let category = tables
            .categories
            .iter()
            .find(|c| c.id == product.category_id)
            .cloned()
            .ok_or_else(|| AppError::InternalError("foreign key violation".to_string()))?;

        tables.next_product_id += 1;
        let stored = Product {
            id: tables.next_product_id,
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            supplier: product.supplier.clone(),
            stock: product.stock,
            image: product.image.clone(),
            category,
        };
        tables.products.push(stored.clone());
        Ok(stored)
    }

    async fn update_product(&self, id: i64, updates: &[ProductUpdate]) -> Result<Option<Product>> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let Some(product) = tables.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        for update in updates {
            match update {
                ProductUpdate::Name(name) => product.name = name.clone(),
                ProductUpdate::Price(price) => product.price = *price,
            }
        }
        Ok(Some(product.clone()))
    }

    async fn find_product_image(&self, id: i64) -> Result<Option<Option<Vec<u8>>>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .products
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.image.clone()))
    }

    async fn set_product_image(&self, id: i64, image: &[u8]) -> Result<bool> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        match tables.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.image = Some(image.to_vec());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_body_size: 1024 * 1024,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:4200".to_string()],
        },
    }
}

pub fn new_product(name: &str, price: Decimal, category_id: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
        description: Some(format!("{} description", name)),
        supplier: Some("Acme".to_string()),
        stock: Some(10),
        image: None,
        category_id,
    }
}

/// Router over a fresh in-memory store.
pub struct TestApp {
    router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let state = AppState::new(store.clone());
        let router = app::router(state, &test_config()).expect("router");

        Self { router, store }
    }

    pub async fn seed_category(&self, name: &str) -> Category {
        self.store
            .insert_category(&CreateCategoryRequest {
                name: name.to_string(),
            })
            .await
            .expect("seed category")
    }

    pub async fn seed_product(&self, name: &str, category_id: i64) -> Product {
        self.store
            .insert_product(&new_product(name, Decimal::new(999, 2), category_id))
            .await
            .expect("seed product")
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        self.send(request).await
    }

    pub async fn upload(&self, uri: &str, field: &str, bytes: &[u8]) -> Response {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"photo.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("request");

        self.send(request).await
    }
}

pub async fn response_bytes(response: Response) -> Vec<u8> {
    body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes")
        .to_vec()
}

pub async fn response_json(response: Response) -> Value {
    serde_json::from_slice(&response_bytes(response).await).expect("json response")
}
