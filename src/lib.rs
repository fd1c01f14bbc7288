pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;

pub use config::Settings;
pub use error::{AppError, AppResult};
