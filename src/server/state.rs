use crate::adapters::http::build_client;
use crate::adapters::{LocalFileSource, MergedSource, RemotePageSource, WebhookNotifier};
use crate::config::toml_config::DEFAULT_TIMEOUT_SECONDS;
use crate::config::{SourceConfig, TomlConfig};
use crate::core::cache::CacheGuard;
use crate::core::prober::StatusProber;
use crate::core::relay::ContactRelay;
use crate::domain::ports::{Notifier, PortfolioSource};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Shared by every handler; the cache is the only mutable piece.
#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<CacheGuard>,
    pub prober: Option<Arc<StatusProber>>,
    pub relay: Arc<ContactRelay>,
}

impl AppState {
    pub fn new(
        portfolio: Arc<CacheGuard>,
        prober: Option<Arc<StatusProber>>,
        relay: Arc<ContactRelay>,
    ) -> Self {
        Self {
            portfolio,
            prober,
            relay,
        }
    }

    pub fn from_config(config: &TomlConfig) -> Result<Self> {
        let source = build_source(&config.sources)?;
        tracing::info!(
            "Portfolio source: {} (cache TTL {:?})",
            source.describe(),
            config.cache_ttl()
        );
        let portfolio = Arc::new(CacheGuard::with_ttl(source, config.cache_ttl()));

        let prober = match &config.status {
            Some(status) => {
                tracing::info!("Status monitoring proxied from {}", status.base_url);
                let client = build_client(status.timeout())?;
                Some(Arc::new(StatusProber::new(client, &status.base_url)))
            }
            None => {
                tracing::info!("Status monitoring not configured");
                None
            }
        };

        let notifier: Option<Arc<dyn Notifier>> = match config.webhook_url() {
            Some(url) => {
                let client = build_client(config.contact_timeout())?;
                Some(Arc::new(WebhookNotifier::new(client, url)))
            }
            None => None,
        };
        let relay = Arc::new(ContactRelay::new(notifier, config.relay_settings()));

        Ok(Self::new(portfolio, prober, relay))
    }
}

fn build_source(sources: &[SourceConfig]) -> Result<Arc<dyn PortfolioSource>> {
    let mut built: Vec<Arc<dyn PortfolioSource>> = Vec::with_capacity(sources.len());

    for source in sources {
        let source: Arc<dyn PortfolioSource> = match source {
            SourceConfig::Remote {
                endpoint,
                timeout_seconds,
            } => {
                let timeout =
                    Duration::from_secs(timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS));
                Arc::new(RemotePageSource::new(build_client(timeout)?, endpoint.clone()))
            }
            SourceConfig::Local { data_dir } => Arc::new(LocalFileSource::new(data_dir)),
        };
        built.push(source);
    }

    if built.len() == 1 {
        Ok(built.remove(0))
    } else {
        Ok(Arc::new(MergedSource::new(built)))
    }
}
