use crate::domain::model::WebhookMessage;
use crate::domain::ports::Notifier;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Posts contact notifications to a chat webhook. No retries.
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn deliver(&self, message: &WebhookMessage) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(message)
            .send()
            .await
            .map_err(|e| PortfolioError::RelayUnavailable {
                message: format!("webhook request failed: {}", e),
            })?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(PortfolioError::RelayUnavailable {
                message: format!("webhook responded with HTTP {}", status),
            });
        }

        tracing::debug!("Webhook accepted message ({})", status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Embed, EmbedFooter};
    use httpmock::prelude::*;
    use serde_json::json;

    fn message() -> WebhookMessage {
        WebhookMessage {
            username: "Portfolio Bot".to_string(),
            avatar_url: None,
            embeds: vec![Embed {
                title: "title".to_string(),
                color: 1,
                fields: vec![],
                timestamp: "2026-01-01T00:00:00.000Z".to_string(),
                footer: EmbedFooter {
                    text: "footer".to_string(),
                },
            }],
        }
    }

    #[tokio::test]
    async fn test_posts_json_message() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/hooks/contact")
                    .json_body_partial(json!({ "username": "Portfolio Bot" }).to_string());
                then.status(204);
            })
            .await;

        let notifier = WebhookNotifier::new(Client::new(), server.url("/hooks/contact"));
        tokio_test::assert_ok!(notifier.deliver(&message()).await);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_redirect_status_is_not_a_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/hooks/contact");
                then.status(304);
            })
            .await;

        let notifier = WebhookNotifier::new(Client::new(), server.url("/hooks/contact"));
        tokio_test::assert_ok!(notifier.deliver(&message()).await);
    }

    #[tokio::test]
    async fn test_error_status_is_relay_unavailable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/hooks/contact");
                then.status(429);
            })
            .await;

        let notifier = WebhookNotifier::new(Client::new(), server.url("/hooks/contact"));
        let err = notifier.deliver(&message()).await.unwrap_err();
        assert!(matches!(err, PortfolioError::RelayUnavailable { .. }));
    }
}
