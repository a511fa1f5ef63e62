//! Configuration loader for Mentor.
//!
//! Reads `mentor.toml` (or the file passed with `--config`) and
//! deserializes it into [`MentorConfig`]. Every key is optional; missing
//! keys take the built-in defaults.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use mentor_types::config::MentorConfig;
use mentor_types::error::ConfigError;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "mentor.toml";

/// Load and validate configuration.
///
/// - `path = None`: reads `./mentor.toml`; a missing file yields defaults.
/// - `path = Some(p)`: `p` must exist.
/// - A file that fails to parse or validate is an error, never silently
///   replaced by defaults.
pub async fn load_config(path: Option<&Path>) -> Result<MentorConfig, ConfigError> {
    let (config_path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !explicit => {
            tracing::debug!("No {} found, using defaults", config_path.display());
            let config = MentorConfig::default();
            config.validate()?;
            return Ok(config);
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: config_path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    let config = parse_config(&content, &config_path)?;
    tracing::info!(path = %config_path.display(), "Loaded configuration");
    Ok(config)
}

/// Parse and validate TOML configuration text.
pub fn parse_config(content: &str, origin: &Path) -> Result<MentorConfig, ConfigError> {
    let config: MentorConfig = toml::from_str(content).map_err(|err| ConfigError::Parse {
        path: origin.display().to_string(),
        message: err.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Turn the raw `--api-key` / `OPENROUTER_API_KEY` value into a secret.
///
/// Absent or blank keys are rejected.
pub fn resolve_api_key(raw: Option<String>) -> Result<SecretString, ConfigError> {
    match raw {
        Some(key) if !key.trim().is_empty() => Ok(SecretString::from(key.trim().to_string())),
        _ => Err(ConfigError::MissingApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_explicit_valid_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("mentor.toml");
        tokio::fs::write(
            &config_path,
            r#"
web_dir = "public"

[chat]
primary_model = "mistralai/mistral-7b-instruct:free"
history_limit = 9
temperature = 0.2

[upstream]
base_url = "http://localhost:8089/v1"
timeout_secs = 5
"#,
        )
        .await
        .unwrap();

        let config = load_config(Some(&config_path)).await.unwrap();
        assert_eq!(config.web_dir, "public");
        assert_eq!(config.chat.primary_model, "mistralai/mistral-7b-instruct:free");
        assert_eq!(config.chat.fallback_model, "meta-llama/llama-3-8b-instruct");
        assert_eq!(config.chat.history_limit, 9);
        assert_eq!(config.chat.max_tokens, 300);
        assert_eq!(config.upstream.base_url, "http://localhost:8089/v1");
        assert_eq!(config.upstream.timeout_secs, 5);
    }

    #[tokio::test]
    async fn load_config_empty_file_is_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("mentor.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = load_config(Some(&config_path)).await.unwrap();
        assert_eq!(config.chat.primary_model, "google/gemma-7b-it:free");
        assert_eq!(config.chat.history_limit, 15);
        assert_eq!(config.upstream.timeout_secs, 60);
        assert_eq!(config.web_dir, "static");
    }

    #[tokio::test]
    async fn load_config_explicit_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(Some(&tmp.path().join("absent.toml")))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn load_config_malformed_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("mentor.toml");
        tokio::fs::write(&config_path, "this is not valid toml {{{{")
            .await
            .unwrap();

        let err = load_config(Some(&config_path)).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn parse_config_rejects_small_history_limit() {
        let err = parse_config("[chat]\nhistory_limit = 2\n", Path::new("mentor.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn parse_config_rejects_zero_timeout() {
        let err = parse_config("[upstream]\ntimeout_secs = 0\n", Path::new("mentor.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn resolve_api_key_accepts_value() {
        let key = resolve_api_key(Some("  sk-or-v1-abc  ".to_string())).unwrap();
        assert_eq!(key.expose_secret(), "sk-or-v1-abc");
    }

    #[test]
    fn resolve_api_key_rejects_missing_or_blank() {
        assert!(matches!(resolve_api_key(None), Err(ConfigError::MissingApiKey)));
        assert!(matches!(
            resolve_api_key(Some("   ".to_string())),
            Err(ConfigError::MissingApiKey)
        ));
    }
}
