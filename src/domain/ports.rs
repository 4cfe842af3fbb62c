use crate::domain::model::{PortfolioPayload, WebhookMessage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Loads a fresh portfolio payload (remote page, local files, or a merge of both).
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    async fn fetch(&self) -> Result<PortfolioPayload>;

    /// 用於日誌
    fn describe(&self) -> String;
}

/// Delivers a contact notification to the outside world.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, message: &WebhookMessage) -> Result<()>;
}
