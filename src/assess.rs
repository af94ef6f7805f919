use crate::detect;
use crate::error::{RepoLensError, Result};
use crate::feedback;
use crate::github;
use crate::snapshot::Snapshot;
use crate::types::assessment::Assessment;
use crate::types::config::RepoLensConfig;

/// Runs one full assessment: metadata, snapshot, detectors, feedback.
/// The snapshot's storage is released when it goes out of scope, on
/// success and on every error path alike.
pub fn assess(url: &str, config: &RepoLensConfig) -> Result<Assessment> {
    let (owner, repo) = parse_repo_url(url)?;
    tracing::info!(owner = %owner, repo = %repo, "assessing repository");

    let metadata = github::fetch_metadata(&config.github, &owner, &repo);
    let snapshot = Snapshot::clone_from(url)?;
    let files = snapshot.file_listing();
    tracing::debug!(file_count = files.len(), "snapshot materialized");

    let signals = detect::inspect(snapshot.root(), &files);
    let generator = feedback::select_generator(&config.generative);
    Ok(generator.generate(&signals, &metadata))
}

/// Derives (owner, name) from the last two path segments of the URL.
pub fn parse_repo_url(url: &str) -> Result<(String, String)> {
    let trimmed = url.trim().trim_end_matches('/');
    let mut segments = trimmed.rsplit('/');
    let repo = segments
        .next()
        .unwrap_or_default()
        .trim_end_matches(".git");
    let owner = segments.next().unwrap_or_default();

    if owner.is_empty() || repo.is_empty() {
        return Err(RepoLensError::InvalidRepoUrl(url.to_string()));
    }
    Ok((owner.to_string(), repo.to_string()))
}
