use crate::detect::RepoSignals;
use crate::feedback::deterministic::deterministic_assessment;
use crate::feedback::{parser, FeedbackGenerator};
use crate::github::RepositoryMetadata;
use crate::types::assessment::Assessment;
use crate::types::config::GenerativeConfig;
use serde_json::json;
use std::time::Duration;

const MAX_NEW_TOKENS: u32 = 400;

pub struct GenerativeGenerator {
    config: GenerativeConfig,
}

impl GenerativeGenerator {
    pub fn new(config: GenerativeConfig) -> Self {
        Self { config }
    }

    fn completion(&self, prompt: &str) -> Option<String> {
        let token = self.config.credential()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()
            .ok()?;

        let response = client
            .post(self.config.model_url())
            .bearer_auth(token)
            .json(&json!({
                "inputs": prompt,
                "parameters": { "max_new_tokens": MAX_NEW_TOKENS, "return_full_text": false },
            }))
            .send()
            .ok()?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "generative endpoint returned non-success");
            return None;
        }

        let body: serde_json::Value = response.json().ok()?;
        extract_generated_text(&body)
    }
}

impl FeedbackGenerator for GenerativeGenerator {
    fn generate(&self, signals: &RepoSignals, metadata: &RepositoryMetadata) -> Assessment {
        let prompt = build_prompt(signals, metadata);
        let Some(completion) = self.completion(&prompt) else {
            tracing::warn!("generative call failed, falling back to deterministic feedback");
            return deterministic_assessment(signals, metadata);
        };

        match assessment_from_completion(&completion) {
            Some(assessment) => assessment,
            None => {
                tracing::warn!("generative completion did not validate, falling back");
                deterministic_assessment(signals, metadata)
            }
        }
    }
}

/// Pure half of the generative path: completion text in, validated
/// assessment out, None when the text does not follow the asked format.
pub fn assessment_from_completion(completion: &str) -> Option<Assessment> {
    let parsed = parser::parse_completion(completion)?;
    Some(Assessment::new(parsed.score, parsed.summary, parsed.roadmap))
}

pub fn build_prompt(signals: &RepoSignals, metadata: &RepositoryMetadata) -> String {
    format!(
        "You are reviewing a software repository from its structural signals.\n\
         Signals: structure={structure}, readme_present={readme}, readme_has_content={content}, \
         tests_present={tests}, commit_count={commits}, star_count={stars}, language={language}.\n\
         Reply in exactly this format, with no extra sections:\n\
         Summary: <one sentence describing the project's quality>\n\
         Score: <integer from 0 to 100>\n\
         Roadmap\n\
         - <five to seven concrete improvement recommendations, one per line>\n",
        structure = signals.structure.name(),
        readme = signals.has_readme,
        content = signals.readme_has_content,
        tests = signals.has_tests,
        commits = metadata.commit_count,
        stars = metadata.star_count,
        language = metadata.primary_language,
    )
}

fn extract_generated_text(body: &serde_json::Value) -> Option<String> {
    body.get(0)?
        .get("generated_text")?
        .as_str()
        .map(str::to_string)
}
