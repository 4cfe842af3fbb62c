pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::TomlConfig;
pub use crate::core::{cache::CacheGuard, prober::StatusProber, relay::ContactRelay, sanitize::sanitize};
pub use server::{build_router, serve, AppState};
pub use utils::error::{PortfolioError, Result};
