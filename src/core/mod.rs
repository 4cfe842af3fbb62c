pub mod cache;
pub mod prober;
pub mod relay;
pub mod sanitize;

pub use crate::domain::model::{PortfolioPayload, ProbeResult};
pub use crate::domain::ports::{Notifier, PortfolioSource};
pub use crate::utils::error::Result;
