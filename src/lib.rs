pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod security;
pub mod state;
pub mod webhook;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
