use crate::types::assessment::Assessment;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    repository: &'a str,
    generated_at: DateTime<Utc>,
    score: u8,
    summary: &'a str,
    roadmap: &'a [String],
}

pub fn to_json(repository: &str, assessment: &Assessment) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        repository,
        generated_at: Utc::now(),
        score: assessment.score,
        summary: &assessment.summary,
        roadmap: &assessment.roadmap,
    })
}
