use crate::error::RepoLensError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoLensConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub generative: GenerativeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_github_timeout")]
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: default_github_timeout(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_github_timeout() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerativeConfig {
    pub token: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_generative_timeout")]
    pub timeout_secs: u64,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            token: None,
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_generative_timeout(),
        }
    }
}

fn default_model() -> String {
    "mistralai/Mistral-7B-Instruct".to_string()
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_generative_timeout() -> u64 {
    30
}

impl GenerativeConfig {
    /// A blank token counts as no credential at all.
    pub fn credential(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn model_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.model)
    }
}

impl RepoLensConfig {
    pub fn validate(&self) -> Result<(), RepoLensError> {
        if self.server.port == 0 {
            return Err(RepoLensError::ConfigParse(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if self.github.timeout_secs == 0 {
            return Err(RepoLensError::ConfigParse(
                "github.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.generative.timeout_secs == 0 {
            return Err(RepoLensError::ConfigParse(
                "generative.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.generative.endpoint.trim().is_empty() {
            return Err(RepoLensError::ConfigParse(
                "generative.endpoint must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: RepoLensConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.github.api_base, "https://api.github.com");
        assert_eq!(cfg.github.timeout_secs, 10);
        assert!(cfg.generative.credential().is_none());
        assert_eq!(
            cfg.generative.model_url(),
            "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct"
        );
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[server]
port = 9000

[github]
api_base = "http://127.0.0.1:9"
timeout_secs = 2

[generative]
token = "hf_secret"
model = "some/model"
endpoint = "http://127.0.0.1:9/models/"
timeout_secs = 5
"#;
        let cfg: RepoLensConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.github.api_base, "http://127.0.0.1:9");
        assert_eq!(cfg.generative.credential(), Some("hf_secret"));
        assert_eq!(cfg.generative.model_url(), "http://127.0.0.1:9/models/some/model");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn blank_token_is_not_a_credential() {
        let toml_str = r#"
[generative]
token = "   "
"#;
        let cfg: RepoLensConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.generative.credential().is_none());
    }

    #[test]
    fn validate_rejects_zero_timeouts() {
        let toml_str = r#"
[github]
timeout_secs = 0
"#;
        let cfg: RepoLensConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("github.timeout_secs"));
    }

    #[test]
    fn validate_rejects_zero_port() {
        let toml_str = r#"
[server]
port = 0
"#;
        let cfg: RepoLensConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
