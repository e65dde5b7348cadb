mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| "config.yaml".to_string());

    let config = if explicit_path.is_some() || Path::new(&config_path).exists() {
        load_from(&config_path).await?
    } else {
        debug!("No configuration file at {}, using defaults", config_path);
        Config::default()
    };

    with_api_key(config, env::var(API_KEY_ENV).ok())
}

pub async fn load_from(config_path: impl AsRef<Path>) -> Result<Config> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from: {}", config_path.display());

    let config_str = tokio::fs::read_to_string(config_path).await?;
    from_yaml(&config_str)
}

pub fn from_yaml(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to a defaulted struct.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Applies the environment secret over the file value and refuses to continue without one.
pub fn with_api_key(mut config: Config, env_value: Option<String>) -> Result<Config> {
    if let Some(key) = env_value.filter(|key| !key.trim().is_empty()) {
        config.gemini.api_key = key;
    }

    if config.gemini.api_key.trim().is_empty() {
        return Err(Error::config(format!(
            "{} is not set in the environment or the configuration file",
            API_KEY_ENV
        )));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = from_yaml("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert!(config.gemini.api_key.is_empty());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = from_yaml("server:\n  port: 8081\ngemini:\n  model: gemini-1.5-pro\n").unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(
            config.gemini.base_url,
            "https://generativelanguage.googleapis.com"
        );
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = with_api_key(Config::default(), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_blank_env_value_does_not_count() {
        let err = with_api_key(Config::default(), Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_env_overrides_file_key() {
        let mut config = Config::default();
        config.gemini.api_key = "from-file".to_string();

        let config = with_api_key(config, Some("from-env".to_string())).unwrap();
        assert_eq!(config.gemini.api_key, "from-env");
    }

    #[test]
    fn test_file_key_used_without_env() {
        let mut config = Config::default();
        config.gemini.api_key = "from-file".to_string();

        let config = with_api_key(config, None).unwrap();
        assert_eq!(config.gemini.api_key, "from-file");
    }

    #[test]
    fn test_instruction_context_default_and_override() {
        let mut gemini = GeminiConfig::default();
        assert_eq!(&*gemini.instruction_context(), prompt::SYSTEM_PROMPT);

        gemini.system_prompt = Some("Identify dog breeds.".to_string());
        assert_eq!(&*gemini.instruction_context(), "Identify dog breeds.");
    }
}
