use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }
}

/// Loads a YAML config through the given provider. A missing file is not an
/// error; the config type's `Default` is used instead.
pub fn load_config<TProvider, TConfig>(provider: &TProvider) -> Result<TConfig, String>
where
    TProvider: ConfigContentProvider,
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    let config = match provider.get_config_content()? {
        Some(content) => serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?,
        None => TConfig::default(),
    };

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn load_config_from_yaml_file<TConfig>(file_path: &str) -> Result<TConfig, String>
where
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    load_config(&FileContentConfigProvider::new(file_path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
    struct TestConfig {
        name: String,
        port: u16,
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.name.is_empty() && self.port != 0 {
                return Err("name must be set when port is set".to_string());
            }
            Ok(())
        }
    }

    struct StaticContentProvider {
        content: Option<String>,
    }

    impl ConfigContentProvider for StaticContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.clone())
        }
    }

    #[test]
    fn test_load_config_parses_yaml() {
        let provider = StaticContentProvider {
            content: Some("name: server\nport: 5000\n".to_string()),
        };

        let config: TestConfig = load_config(&provider).unwrap();
        assert_eq!(
            config,
            TestConfig {
                name: "server".to_string(),
                port: 5000
            }
        );
    }

    #[test]
    fn test_load_config_missing_file_falls_back_to_default() {
        let provider = StaticContentProvider { content: None };

        let config: TestConfig = load_config(&provider).unwrap();
        assert_eq!(config, TestConfig::default());
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let provider = StaticContentProvider {
            content: Some("name: ''\nport: 5000\n".to_string()),
        };

        let result: Result<TestConfig, String> = load_config(&provider);
        assert!(result.unwrap_err().contains("validation"));
    }

    #[test]
    fn test_load_config_rejects_malformed_yaml() {
        let provider = StaticContentProvider {
            content: Some("not yaml: [".to_string()),
        };

        let result: Result<TestConfig, String> = load_config(&provider);
        assert!(result.is_err());
    }
}
