// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use error::{AppError, Result};

use store::ZoneStore;

// App state for sharing across the application.
// The store is read-only after startup; handlers only ever see cloned records.
pub struct AppState {
    pub store: ZoneStore,
}
