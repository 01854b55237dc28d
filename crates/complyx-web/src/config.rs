//! Configuration loading for Complyx.
//! Reads complyx.toml from the current directory or the path in the
//! COMPLYX_CONFIG env var. API keys are referenced by env-var name and
//! never stored in the file.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// "openai" | "openai_compatible" | "anthropic"
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Required for "openai_compatible", ignored otherwise.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_provider()    -> String { "openai".to_string() }
fn default_model()       -> String { "gpt-4o-mini".to_string() }
fn default_api_key_env() -> String { "OPENAI_API_KEY".to_string() }

impl LlmConfig {
    /// Resolve the API key from the configured env var, if set.
    pub fn api_key(&self) -> Option<SecretString> {
        std::env::var(&self.api_key_env).ok().map(SecretString::from)
    }
}

impl Config {
    /// Load configuration from complyx.toml.
    /// Checks COMPLYX_CONFIG env var first, then the current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("COMPLYX_CONFIG")
            .unwrap_or_else(|_| "complyx.toml".to_string());

        if !Path::new(&path).exists() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Copy complyx.example.toml to complyx.toml and edit it.",
                path
            );
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str("[llm]\n").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
        assert!(config.llm.base_url.is_none());
    }

    #[test]
    fn test_compatible_provider_config() {
        let config: Config = toml::from_str(
            "[llm]\nprovider = \"openai_compatible\"\nmodel = \"mistral\"\nbase_url = \"http://localhost:8000\"\n",
        )
        .unwrap();
        assert_eq!(config.llm.provider, "openai_compatible");
        assert_eq!(config.llm.base_url.as_deref(), Some("http://localhost:8000"));
    }
}
