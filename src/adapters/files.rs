use crate::domain::model::PortfolioPayload;
use crate::domain::ports::PortfolioSource;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::PathBuf;

/// `profile.json` 的欄位攤平到最上層，其他檔案各自對應一個區段
const PROFILE_FILE: &str = "profile";
const SECTION_FILES: [&str; 8] = [
    "contact",
    "skills",
    "experience",
    "volunteer",
    "projects",
    "site",
    "legal",
    "homelab",
];

/// Reads one JSON file per section from a data directory.
pub struct LocalFileSource {
    data_dir: PathBuf,
}

impl LocalFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    async fn read_section(&self, section: &str) -> Result<Option<Value>> {
        let path = self.data_dir.join(format!("{}.json", section));
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let value = serde_json::from_str(&content).map_err(|e| {
                    tracing::error!("Malformed data file {}: {}", path.display(), e);
                    PortfolioError::SerializationError(e)
                })?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No data file for section '{}'", section);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl PortfolioSource for LocalFileSource {
    async fn fetch(&self) -> Result<PortfolioPayload> {
        let mut merged = Map::new();
        let mut found = 0usize;

        if let Some(profile) = self.read_section(PROFILE_FILE).await? {
            found += 1;
            match profile {
                Value::Object(fields) => merged.extend(fields),
                _ => {
                    return Err(PortfolioError::ConfigError {
                        message: format!(
                            "{}/{}.json must contain a JSON object",
                            self.data_dir.display(),
                            PROFILE_FILE
                        ),
                    })
                }
            }
        }

        for section in SECTION_FILES {
            if let Some(value) = self.read_section(section).await? {
                found += 1;
                merged.insert(section.to_string(), value);
            }
        }

        if found == 0 {
            return Err(PortfolioError::UpstreamUnavailable {
                message: format!("no data files found in {}", self.data_dir.display()),
            });
        }

        tracing::debug!("Loaded {} data files from {}", found, self.data_dir.display());
        Ok(serde_json::from_value(Value::Object(merged))?)
    }

    fn describe(&self) -> String {
        format!("data directory {}", self.data_dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        std::fs::write(dir.path().join(name), content).unwrap();
    }

    #[tokio::test]
    async fn test_loads_sections_from_files() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "profile.json",
            r#"{"name": "Ada", "title": "Engineer", "contact": {"email": "ada@example.com"}}"#,
        );
        write(
            &dir,
            "experience.json",
            r#"[{"period": "2024 - Present", "company": "Analytical Engines", "position": "Programmer"}]"#,
        );
        write(&dir, "homelab.json", r#"{"servers": 3}"#);

        let payload = LocalFileSource::new(dir.path()).fetch().await.unwrap();

        assert_eq!(payload.name.as_deref(), Some("Ada"));
        assert_eq!(
            payload.contact.unwrap().email.as_deref(),
            Some("ada@example.com")
        );
        assert_eq!(payload.experience.unwrap()[0].company, "Analytical Engines");
        assert_eq!(payload.homelab.unwrap()["servers"], 3);
        assert!(payload.skills.is_none());
        assert!(payload.projects.is_none());
    }

    #[tokio::test]
    async fn test_contact_file_is_its_own_section() {
        let dir = TempDir::new().unwrap();
        write(&dir, "contact.json", r#"{"github": "https://github.com/ada"}"#);

        let payload = LocalFileSource::new(dir.path()).fetch().await.unwrap();
        assert_eq!(
            payload.contact.unwrap().github.as_deref(),
            Some("https://github.com/ada")
        );
        assert!(payload.name.is_none());
    }

    #[tokio::test]
    async fn test_empty_directory_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let result = LocalFileSource::new(dir.path()).fetch().await;
        assert!(matches!(result, Err(PortfolioError::UpstreamUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "skills.json", "[{ not json");

        let result = LocalFileSource::new(dir.path()).fetch().await;
        assert!(matches!(result, Err(PortfolioError::SerializationError(_))));
    }
}
