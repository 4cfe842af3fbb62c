pub mod toml_config;

pub use toml_config::{SourceConfig, TomlConfig};

#[cfg(feature = "cli")]
mod cli {
    use super::TomlConfig;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "portfolio-api")]
    #[command(about = "Portfolio data API with status proxy and contact relay")]
    pub struct CliConfig {
        #[arg(long, short, help = "Path to a TOML configuration file")]
        pub config: Option<PathBuf>,

        #[arg(long, env = "PORT", help = "Listen port (overrides the config file)")]
        pub port: Option<u16>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,
    }

    impl CliConfig {
        /// defaults < TOML < PORT / --port
        pub fn load_settings(&self) -> Result<TomlConfig> {
            let mut settings = match &self.config {
                Some(path) => {
                    tracing::info!("Loading configuration from {}", path.display());
                    TomlConfig::from_file(path)?
                }
                None => {
                    tracing::info!("No configuration file given, using defaults");
                    TomlConfig::default()
                }
            };

            if let Some(port) = self.port {
                settings.server.port = port;
            }

            settings.validate()?;
            Ok(settings)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::Write;
        use tempfile::NamedTempFile;

        #[test]
        fn test_port_flag_overrides_file() {
            let mut temp_file = NamedTempFile::new().unwrap();
            temp_file.write_all(b"[server]\nport = 2050\n").unwrap();

            let cli = CliConfig::parse_from([
                "portfolio-api",
                "--config",
                temp_file.path().to_str().unwrap(),
                "--port",
                "9999",
            ]);
            let settings = cli.load_settings().unwrap();
            assert_eq!(settings.server.port, 9999);
        }

        #[test]
        fn test_port_env_overrides_file_and_flag_overrides_env() {
            let mut temp_file = NamedTempFile::new().unwrap();
            temp_file.write_all(b"[server]\nport = 2050\n").unwrap();
            let path = temp_file.path().to_str().unwrap().to_string();

            std::env::set_var("PORT", "4321");
            let from_env = CliConfig::try_parse_from(["portfolio-api", "--config", &path]);
            let from_flag = CliConfig::try_parse_from([
                "portfolio-api",
                "--config",
                &path,
                "--port",
                "9999",
            ]);
            std::env::remove_var("PORT");

            let from_env = from_env.unwrap();
            assert_eq!(from_env.port, Some(4321));
            assert_eq!(from_env.load_settings().unwrap().server.port, 4321);
            assert_eq!(from_flag.unwrap().load_settings().unwrap().server.port, 9999);
        }

        #[test]
        fn test_file_port_without_flag() {
            let mut temp_file = NamedTempFile::new().unwrap();
            temp_file.write_all(b"[server]\nport = 2050\n").unwrap();

            let cli = CliConfig {
                config: Some(temp_file.path().to_path_buf()),
                port: None,
                verbose: false,
                log_json: false,
            };
            assert_eq!(cli.load_settings().unwrap().server.port, 2050);
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
