use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Revoked token identifiers (`jti`) for the lifetime of the process.
///
/// Entries remember the token expiry so they can be dropped once the token
/// would be rejected as expired anyway.
#[derive(Debug, Default)]
pub struct Blocklist {
    revoked: RwLock<HashMap<String, i64>>,
}

impl Blocklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when `jti` was already revoked, so one caller wins a race
    pub async fn revoke(&self, jti: &str, expires_at: i64) -> bool {
        let now = Utc::now().timestamp();
        let mut revoked = self.revoked.write().await;
        revoked.retain(|_, exp| *exp > now);
        let inserted = revoked.insert(jti.to_string(), expires_at).is_none();
        tracing::debug!("Revoked token {} ({} entries)", jti, revoked.len());
        inserted
    }

    pub async fn is_revoked(&self, jti: &str) -> bool {
        self.revoked.read().await.contains_key(jti)
    }
}

#[cfg(test)]
impl Blocklist {
    pub async fn len(&self) -> usize {
        self.revoked.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.revoked.read().await.is_empty()
    }
}
