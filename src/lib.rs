//! Ministry portal: bilingual content API over an in-memory store.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod i18n;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, StorageError};
pub use i18n::{translate, Language, TranslationKey};
pub use routes::{api_routes, build_router, common_routes};
pub use state::AppState;
pub use store::{MemStorage, Storage};
