//! Text encodings of an environment
//!
//! A deployment file holds exactly one variant; it is read on its own and
//! never layered over another source.

use crate::error::{ConfigurationError, Result};
use crate::EnvironmentConfig;
use figment::{
    providers::{Format, Json, Toml},
    Figment,
};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Supported transport formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(ConfigurationError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => f.write_str("toml"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown format '{other}', expected 'toml' or 'json'")),
        }
    }
}

/// Encode an environment as pretty-printed text
pub fn to_string(config: &EnvironmentConfig, format: ConfigFormat) -> Result<String> {
    let encoded = match format {
        ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
    };

    encoded.map_err(|details| ConfigurationError::SerializeError { details })
}

/// Decode an environment from text
pub fn from_str(content: &str, format: ConfigFormat) -> Result<EnvironmentConfig> {
    let decoded = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };

    decoded.map_err(|details| ConfigurationError::ParseError { details })
}

/// Load a single deployment file, format chosen by extension
pub fn load_from_file(path: &Path) -> Result<EnvironmentConfig> {
    debug!("Loading environment from: {}", path.display());

    if !path.exists() {
        return Err(ConfigurationError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let figment = match ConfigFormat::from_path(path)? {
        ConfigFormat::Toml => Figment::from(Toml::file(path)),
        ConfigFormat::Json => Figment::from(Json::file(path)),
    };

    let config: EnvironmentConfig = figment.extract().map_err(|e| ConfigurationError::ParseError {
        details: e.to_string(),
    })?;

    info!(
        "Loaded {} environment from {}",
        config.environment(),
        path.display()
    );
    Ok(config)
}

/// Write an environment to `path`, format chosen by extension
pub fn save_to_file(config: &EnvironmentConfig, path: &Path) -> Result<()> {
    let content = to_string(config, ConfigFormat::from_path(path)?)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;

    debug!("Saved environment to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Environment;
    use std::path::PathBuf;

    #[test]
    fn test_toml_layout() {
        let toml = to_string(&EnvironmentConfig::development(), ConfigFormat::Toml).unwrap();

        assert!(toml.contains("production = false"));
        assert!(toml.contains("apiServerUrl = \"http://127.0.0.1:5000\""));
        assert!(toml.contains("[auth0]"));
        assert!(toml.contains("callbackURL = \"http://localhost:8100\""));
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
production = true
apiServerUrl = "https://coffee.example.com"

[auth0]
url = "cheermoon"
audience = "COFFEE_SHOP"
clientId = "L3p1j1Q7VH5RHbJZiI39532zLPC7ZZnv"
callbackURL = "https://shop.example.com"
"#;

        let config = from_str(content, ConfigFormat::Toml).unwrap();
        assert_eq!(config.environment(), Environment::Production);
        assert_eq!(config.auth0.callback_url, "https://shop.example.com");
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let content = r#"{"production": false, "apiServerUrl": "http://127.0.0.1:5000"}"#;

        let err = from_str(content, ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, ConfigurationError::ParseError { .. }));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(&PathBuf::from("env/production.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(&PathBuf::from("environment.JSON")).unwrap(),
            ConfigFormat::Json
        );
        assert!(ConfigFormat::from_path(&PathBuf::from("environment.ts")).is_err());
        assert!(ConfigFormat::from_path(&PathBuf::from("environment")).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigurationError::NotFound { .. }));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deploy").join("production.json");
        let config = EnvironmentConfig::production();

        save_to_file(&config, &path).unwrap();
        assert_eq!(load_from_file(&path).unwrap(), config);
    }
}
