mod app_error;

pub use app_error::AppError;

/// Result alias used by stores, services and handlers.
pub type Result<T> = std::result::Result<T, AppError>;
