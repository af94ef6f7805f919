pub mod deterministic;
pub mod generative;
pub mod parser;

use crate::detect::RepoSignals;
use crate::github::RepositoryMetadata;
use crate::types::assessment::Assessment;
use crate::types::config::GenerativeConfig;

pub trait FeedbackGenerator {
    fn generate(&self, signals: &RepoSignals, metadata: &RepositoryMetadata) -> Assessment;
}

pub fn select_generator(config: &GenerativeConfig) -> Box<dyn FeedbackGenerator> {
    if config.credential().is_some() {
        Box::new(generative::GenerativeGenerator::new(config.clone()))
    } else {
        tracing::debug!("no generative credential configured, using deterministic feedback");
        Box::new(deterministic::DeterministicGenerator)
    }
}
