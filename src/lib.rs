pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod web;

pub use config::ServerConfig;
pub use database::RosterStore;
pub use error::{ConfigError, RosterError};
pub use models::{Activity, RosterSnapshot};
pub use web::{build_router, AppState};
