use crate::domain::model::PortfolioPayload;
use crate::domain::ports::PortfolioSource;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Combines several sources; earlier sources win per section.
pub struct MergedSource {
    sources: Vec<Arc<dyn PortfolioSource>>,
}

impl MergedSource {
    pub fn new(sources: Vec<Arc<dyn PortfolioSource>>) -> Self {
        Self { sources }
    }
}

#[async_trait]
impl PortfolioSource for MergedSource {
    async fn fetch(&self) -> Result<PortfolioPayload> {
        let mut payload = PortfolioPayload::default();
        let mut succeeded = 0usize;
        let mut last_error = None;

        for source in &self.sources {
            match source.fetch().await {
                Ok(part) => {
                    payload.merge(part);
                    succeeded += 1;
                }
                Err(e) => {
                    tracing::warn!("Source {} failed: {}", source.describe(), e);
                    last_error = Some(e);
                }
            }
        }

        if succeeded == 0 {
            return Err(last_error.unwrap_or_else(|| PortfolioError::ConfigError {
                message: "no portfolio sources configured".to_string(),
            }));
        }

        Ok(payload)
    }

    fn describe(&self) -> String {
        let parts: Vec<String> = self.sources.iter().map(|s| s.describe()).collect();
        format!("merged [{}]", parts.join(", "))
    }
}
