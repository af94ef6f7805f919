use crate::error::{RepoLensError, Result};
use crate::types::config::RepoLensConfig;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "repolens.toml";
pub const TOKEN_ENV_VAR: &str = "HF_TOKEN";

/// Loads the optional repolens.toml. An explicitly named file must exist;
/// the default file is used only when present. The generative credential
/// falls back to the environment when the file does not set one.
pub fn load(explicit: Option<&Path>) -> Result<RepoLensConfig> {
    let mut config = match explicit {
        Some(path) => read_config(path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                read_config(default)?
            } else {
                RepoLensConfig::default()
            }
        }
    };

    if config.generative.token.is_none() {
        config.generative.token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty());
    }

    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<RepoLensConfig> {
    if !path.exists() {
        return Err(RepoLensError::ConfigNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RepoLensError::ConfigParse(format!("{}: {}", path.display(), e)))
}
