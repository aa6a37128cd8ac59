use anyhow::{Context, Result};
use std::sync::Arc;

use crate::auth::{Blocklist, TokenKeys};
use crate::config::AppConfig;
use crate::database::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tokens: Arc<TokenKeys>,
    pub blocklist: Arc<Blocklist>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        let tokens = TokenKeys::from_config(&config.security)
            .context("JWT_SECRET_KEY must be set outside development")?;

        let db = Database::connect(&config.database)
            .await
            .context("Failed to initialize database")?;

        Ok(Self {
            db,
            tokens: Arc::new(tokens),
            blocklist: Arc::new(Blocklist::new()),
            config: Arc::new(config),
        })
    }
}
