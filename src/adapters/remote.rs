use crate::domain::model::PortfolioPayload;
use crate::domain::ports::PortfolioSource;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;

static EMBEDDED_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*\bid\s*=\s*["']portfolio-data["'][^>]*>(.*?)</script>"#)
        .unwrap()
});

/// Pulls the payload from a remote page: either a JSON document, or an HTML
/// page carrying it in `<script type="application/json" id="portfolio-data">`.
pub struct RemotePageSource {
    client: Client,
    endpoint: String,
}

impl RemotePageSource {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    fn parse_body(&self, body: &str) -> Result<PortfolioPayload> {
        let trimmed = body.trim_start();
        if trimmed.starts_with('{') {
            return Ok(serde_json::from_str(trimmed)?);
        }

        let embedded = EMBEDDED_DATA_RE
            .captures(body)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| PortfolioError::UpstreamUnavailable {
                message: format!("{} has no embedded portfolio data", self.endpoint),
            })?;

        Ok(serde_json::from_str(embedded.as_str().trim())?)
    }
}

#[async_trait]
impl PortfolioSource for RemotePageSource {
    async fn fetch(&self) -> Result<PortfolioPayload> {
        tracing::debug!("Making request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        tracing::debug!("Upstream response status: {}", status);

        if status.is_client_error() || status.is_server_error() {
            return Err(PortfolioError::UpstreamStatus {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        self.parse_body(&body)
    }

    fn describe(&self) -> String {
        format!("remote page {}", self.endpoint)
    }
}
