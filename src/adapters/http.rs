use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

/// 所有對外請求共用的 client，一律帶明確的逾時
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(5)))
        .user_agent(concat!("portfolio-api/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
