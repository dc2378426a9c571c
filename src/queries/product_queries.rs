use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductRow, ProductUpdate},
};

const PRODUCT_COLUMNS: &str = "p.id, p.name, p.price, p.description, p.supplier, p.stock, p.image,
         c.id AS category_id, c.name AS category_name";

pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    let rows = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {PRODUCT_COLUMNS}
         FROM products p
         INNER JOIN categories c ON c.id = p.category_id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Product::from).collect())
}

pub async fn find_by_category_id(pool: &PgPool, category_id: i64) -> Result<Vec<Product>> {
    let rows = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {PRODUCT_COLUMNS}
         FROM products p
         INNER JOIN categories c ON c.id = p.category_id
         WHERE p.category_id = $1"
    ))
    .bind(category_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Product::from).collect())
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Product>> {
    let row = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {PRODUCT_COLUMNS}
         FROM products p
         INNER JOIN categories c ON c.id = p.category_id
         WHERE p.id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Product::from))
}

pub async fn create_product(pool: &PgPool, product: &NewProduct) -> Result<Product> {
    let row = sqlx::query_as::<_, ProductRow>(&format!(
        "WITH p AS (
             INSERT INTO products (name, price, description, supplier, stock, image, category_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *
         )
         SELECT {PRODUCT_COLUMNS}
         FROM p
         INNER JOIN categories c ON c.id = p.category_id"
    ))
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.description)
    .bind(&product.supplier)
    .bind(product.stock)
    .bind(&product.image)
    .bind(product.category_id)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Applies every update in a single statement; `None` when the product does not exist.
pub async fn update_product(
    pool: &PgPool,
    id: i64,
    updates: &[ProductUpdate],
) -> Result<Option<Product>> {
    if updates.is_empty() {
        return find_by_id(pool, id).await;
    }

    let mut query_builder = update_query(id, updates);

    let row = query_builder
        .build_query_as::<ProductRow>()
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Product::from))
}

/// `UPDATE ... RETURNING` wrapped in a CTE so the row comes back joined with its category.
fn update_query(id: i64, updates: &[ProductUpdate]) -> QueryBuilder<'static, Postgres> {
    let mut query_builder = QueryBuilder::<Postgres>::new("WITH p AS (UPDATE products SET ");

    {
        let mut separated = query_builder.separated(", ");
        for update in updates {
            match update {
                ProductUpdate::Name(name) => {
                    separated.push("name = ");
                    separated.push_bind_unseparated(name.clone());
                }
                ProductUpdate::Price(price) => {
                    separated.push("price = ");
                    separated.push_bind_unseparated(*price);
                }
            }
        }
    }

    query_builder.push(" WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(format!(
        " RETURNING *)
         SELECT {PRODUCT_COLUMNS}
         FROM p
         INNER JOIN categories c ON c.id = p.category_id"
    ));

    query_builder
}

/// `None` when the product does not exist, `Some(None)` when it has no image.
pub async fn find_image(pool: &PgPool, id: i64) -> Result<Option<Option<Vec<u8>>>> {
    let image = sqlx::query_scalar::<_, Option<Vec<u8>>>("SELECT image FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(image)
}

pub async fn set_image(pool: &PgPool, id: i64, image: &[u8]) -> Result<bool> {
    let result = sqlx::query("UPDATE products SET image = $1 WHERE id = $2")
        .bind(image)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
