use crate::domain::model::PortfolioPayload;
use crate::domain::ports::PortfolioSource;
use crate::utils::error::{PortfolioError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Default)]
struct CacheEntry {
    payload: Option<Arc<PortfolioPayload>>,
    fetched_at: Option<Instant>,
}

impl CacheEntry {
    fn fresh(&self, ttl: Duration) -> Option<Arc<PortfolioPayload>> {
        match (&self.payload, self.fetched_at) {
            (Some(payload), Some(at)) if at.elapsed() < ttl => Some(Arc::clone(payload)),
            _ => None,
        }
    }
}

/// 有期限的作品集快取；刷新失敗時沿用舊資料
pub struct CacheGuard {
    source: Arc<dyn PortfolioSource>,
    ttl: Duration,
    entry: RwLock<CacheEntry>,
}

impl CacheGuard {
    pub fn new(source: Arc<dyn PortfolioSource>) -> Self {
        Self::with_ttl(source, DEFAULT_TTL)
    }

    pub fn with_ttl(source: Arc<dyn PortfolioSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entry: RwLock::new(CacheEntry::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get(&self) -> Result<Arc<PortfolioPayload>> {
        if let Some(payload) = self.entry.read().await.fresh(self.ttl) {
            tracing::debug!("Serving cached portfolio data");
            return Ok(payload);
        }

        tracing::info!("Fetching fresh portfolio data from {}", self.source.describe());

        match self.source.fetch().await {
            Ok(payload) => {
                let payload = Arc::new(payload);
                let mut entry = self.entry.write().await;
                entry.payload = Some(Arc::clone(&payload));
                entry.fetched_at = Some(Instant::now());
                Ok(payload)
            }
            Err(e) => {
                let entry = self.entry.read().await;
                match &entry.payload {
                    Some(stale) => {
                        tracing::warn!("⚠️ Portfolio refresh failed, serving stale data: {}", e);
                        Ok(Arc::clone(stale))
                    }
                    None => {
                        tracing::error!("❌ Portfolio refresh failed with nothing cached: {}", e);
                        Err(PortfolioError::UpstreamUnavailable {
                            message: e.to_string(),
                        })
                    }
                }
            }
        }
    }
}
