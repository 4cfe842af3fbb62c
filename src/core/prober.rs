use crate::domain::model::ProbeResult;
use crate::utils::error::{PortfolioError, Result};
use reqwest::Client;
use serde_json::Value;

/// 監控 API 的候選路徑，依優先順序排列
pub const CANDIDATE_PATHS: [&str; 4] = [
    "/api/monitors",
    "/status.json",
    "/api/status",
    "/api/monitors/",
];

/// 依序嘗試候選路徑，第一個成功且非空的回應勝出
pub struct StatusProber {
    client: Client,
    base_url: String,
}

impl StatusProber {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn candidates(&self) -> Vec<String> {
        CANDIDATE_PATHS
            .iter()
            .map(|path| format!("{}{}", self.base_url, path))
            .collect()
    }

    pub async fn probe(&self) -> Result<ProbeResult> {
        let mut last_error = None;

        for url in self.candidates() {
            match self.try_candidate(&url).await {
                Ok(data) => {
                    tracing::debug!("Status candidate {} answered", url);
                    return Ok(ProbeResult { source: url, data });
                }
                Err(e) => {
                    tracing::debug!("Status candidate {} failed: {}", url, e);
                    last_error = Some(e);
                }
            }
        }

        let last_error = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no candidates".to_string());
        tracing::warn!("All status candidates under {} failed: {}", self.base_url, last_error);

        Err(PortfolioError::AllCandidatesFailed { last_error })
    }

    async fn try_candidate(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            return Err(PortfolioError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let data = serde_json::from_str(&text).unwrap_or(Value::String(text));

        match &data {
            Value::Null => Err(empty_body(url)),
            Value::String(s) if s.is_empty() => Err(empty_body(url)),
            _ => Ok(data),
        }
    }
}

fn empty_body(url: &str) -> PortfolioError {
    PortfolioError::EmptyBody {
        url: url.to_string(),
    }
}
