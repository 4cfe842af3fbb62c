use crate::core::cache::DEFAULT_TTL;
use crate::core::relay::RelaySettings;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3050;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub sources: Vec<SourceConfig>,
    pub cache: CacheConfig,
    pub status: Option<StatusConfig>,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Remote {
        endpoint: String,
        timeout_seconds: Option<u64>,
    },
    Local {
        data_dir: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub webhook_url: Option<String>,
    pub allowed_origins: Vec<String>,
    pub username: String,
    pub avatar_url: Option<String>,
    pub footer: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            sources: vec![SourceConfig::Local {
                data_dir: "data".to_string(),
            }],
            cache: CacheConfig::default(),
            status: None,
            contact: ContactConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: "public".to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL.as_secs(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        let relay = RelaySettings::default();
        Self {
            webhook_url: None,
            allowed_origins: relay.allowed_origins,
            username: relay.username,
            avatar_url: relay.avatar_url,
            footer: relay.footer,
            timeout_seconds: None,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTACT_WEBHOOK_URL})，找不到的保留原字樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(PortfolioError::MissingConfigError {
                field: "sources".to_string(),
            });
        }

        for source in &self.sources {
            match source {
                SourceConfig::Remote {
                    endpoint,
                    timeout_seconds,
                } => {
                    validate_url("sources.endpoint", endpoint)?;
                    if let Some(secs) = timeout_seconds {
                        validate_range("sources.timeout_seconds", *secs, 1, 120)?;
                    }
                }
                SourceConfig::Local { data_dir } => {
                    validate_path("sources.data_dir", data_dir)?;
                }
            }
        }

        validate_path("server.static_dir", &self.server.static_dir)?;
        validate_range("cache.ttl_seconds", self.cache.ttl_seconds, 1, 86_400)?;

        if let Some(status) = &self.status {
            validate_url("status.base_url", &status.base_url)?;
            if let Some(secs) = status.timeout_seconds {
                validate_range("status.timeout_seconds", secs, 1, 120)?;
            }
        }

        if let Some(url) = self.webhook_url() {
            validate_url("contact.webhook_url", url)?;
        }
        if let Some(secs) = self.contact.timeout_seconds {
            validate_range("contact.timeout_seconds", secs, 1, 120)?;
        }
        if self.contact.allowed_origins.is_empty() {
            return Err(PortfolioError::MissingConfigError {
                field: "contact.allowed_origins".to_string(),
            });
        }

        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_seconds)
    }

    /// 未設定或環境變數未展開時視為沒有 webhook
    pub fn webhook_url(&self) -> Option<&str> {
        self.contact
            .webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && !url.contains("${"))
    }

    pub fn contact_timeout(&self) -> Duration {
        Duration::from_secs(self.contact.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn relay_settings(&self) -> RelaySettings {
        RelaySettings {
            allowed_origins: self.contact.allowed_origins.clone(),
            username: self.contact.username.clone(),
            avatar_url: self.contact.avatar_url.clone(),
            footer: self.contact.footer.clone(),
        }
    }
}

impl StatusConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
