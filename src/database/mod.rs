mod connection;
mod pg_store;
mod store;

pub use connection::{check_health, create_pool};
pub use pg_store::PgCatalogStore;
pub use store::CatalogStore;
