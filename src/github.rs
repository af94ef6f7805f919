use crate::types::config::GithubConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const COMMITS_PER_PAGE: usize = 100;
// Commit counting stops here; both scoring thresholds sit far below it.
const MAX_COMMIT_PAGES: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct RepositoryMetadata {
    pub star_count: u64,
    pub primary_language: String,
    pub commit_count: u64,
}

impl Default for RepositoryMetadata {
    fn default() -> Self {
        Self {
            star_count: 0,
            primary_language: "Unknown".to_string(),
            commit_count: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RepoInfo {
    stargazers_count: Option<u64>,
    language: Option<String>,
}

/// Fetches stars, language, and commit count. Every failure mode is
/// recovered to defaults; an unreachable metadata API never fails an
/// assessment.
pub fn fetch_metadata(config: &GithubConfig, owner: &str, repo: &str) -> RepositoryMetadata {
    let client = match reqwest::blocking::Client::builder()
        .user_agent(concat!("repolens/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(error = %err, "metadata client unavailable, using defaults");
            return RepositoryMetadata::default();
        }
    };

    let info = fetch_repo_info(&client, config, owner, repo);
    let commit_count = fetch_commit_count(&client, config, owner, repo);

    RepositoryMetadata {
        star_count: info
            .as_ref()
            .and_then(|info| info.stargazers_count)
            .unwrap_or(0),
        primary_language: info
            .and_then(|info| info.language)
            .unwrap_or_else(|| "Unknown".to_string()),
        commit_count,
    }
}

fn fetch_repo_info(
    client: &reqwest::blocking::Client,
    config: &GithubConfig,
    owner: &str,
    repo: &str,
) -> Option<RepoInfo> {
    let url = format!("{}/repos/{owner}/{repo}", config.api_base);
    let response = match client.get(&url).send() {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, "repository metadata fetch failed");
            return None;
        }
    };
    if !response.status().is_success() {
        tracing::debug!(status = %response.status(), "repository metadata unavailable");
        return None;
    }
    response.json::<RepoInfo>().ok()
}

fn fetch_commit_count(
    client: &reqwest::blocking::Client,
    config: &GithubConfig,
    owner: &str,
    repo: &str,
) -> u64 {
    let url = format!("{}/repos/{owner}/{repo}/commits", config.api_base);
    let mut total = 0u64;

    for page in 1..=MAX_COMMIT_PAGES {
        let response = match client
            .get(&url)
            .query(&[
                ("per_page", COMMITS_PER_PAGE.to_string()),
                ("page", page.to_string()),
            ])
            .send()
        {
            Ok(response) => response,
            Err(_) => break,
        };
        if !response.status().is_success() {
            break;
        }
        let Ok(commits) = response.json::<Vec<serde_json::Value>>() else {
            break;
        };
        if commits.is_empty() {
            break;
        }
        total += commits.len() as u64;
        if commits.len() < COMMITS_PER_PAGE {
            break;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_empty_metadata_shape() {
        let metadata = RepositoryMetadata::default();
        assert_eq!(metadata.star_count, 0);
        assert_eq!(metadata.primary_language, "Unknown");
        assert_eq!(metadata.commit_count, 0);
    }

    #[test]
    fn repo_info_deserializes_with_null_language() {
        let info: RepoInfo =
            serde_json::from_str(r#"{"stargazers_count": 42, "language": null, "name": "x"}"#)
                .expect("payload should deserialize");
        assert_eq!(info.stargazers_count, Some(42));
        assert_eq!(info.language, None);
    }

    #[test]
    fn unreachable_api_recovers_to_defaults() {
        let config = GithubConfig {
            api_base: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        };
        let metadata = fetch_metadata(&config, "nobody", "nothing");
        assert_eq!(metadata.star_count, 0);
        assert_eq!(metadata.primary_language, "Unknown");
        assert_eq!(metadata.commit_count, 0);
    }
}
