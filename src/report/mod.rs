pub mod json;
pub mod md;

use crate::error::RepoLensError;
use crate::types::assessment::Assessment;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    repository: &str,
    assessment: &Assessment,
    format: OutputFormat,
) -> Result<String, RepoLensError> {
    match format {
        OutputFormat::Json => json::to_json(repository, assessment).map_err(RepoLensError::Json),
        OutputFormat::Md => Ok(md::to_markdown(repository, assessment)),
    }
}
