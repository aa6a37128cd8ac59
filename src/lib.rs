pub mod app;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod schemas;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use app::app;
pub use config::AppConfig;
pub use state::AppState;
