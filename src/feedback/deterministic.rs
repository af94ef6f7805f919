use crate::detect::structure::StructureClass;
use crate::detect::RepoSignals;
use crate::feedback::FeedbackGenerator;
use crate::github::RepositoryMetadata;
use crate::types::assessment::Assessment;

// Canonical scoring constants; every bonus is additive on top of the base.
pub const BASE_SCORE: i64 = 40;
const STRUCTURE_CLEAN_BONUS: i64 = 15;
const STRUCTURE_MODERATE_BONUS: i64 = 8;
const README_BONUS: i64 = 10;
const TESTS_BONUS: i64 = 15;
const ACTIVE_COMMITS_BONUS: i64 = 10;
const POPULARITY_BONUS: i64 = 5;

const ACTIVE_COMMITS_THRESHOLD: u64 = 50;
const SPARSE_COMMITS_THRESHOLD: u64 = 10;
const POPULARITY_THRESHOLD: u64 = 20;

pub struct DeterministicGenerator;

impl FeedbackGenerator for DeterministicGenerator {
    fn generate(&self, signals: &RepoSignals, metadata: &RepositoryMetadata) -> Assessment {
        deterministic_assessment(signals, metadata)
    }
}

/// Rule-based scoring; total over all inputs, never fails.
pub fn deterministic_assessment(
    signals: &RepoSignals,
    metadata: &RepositoryMetadata,
) -> Assessment {
    let mut score = BASE_SCORE;
    let mut roadmap = Vec::new();

    match signals.structure {
        StructureClass::Clean => score += STRUCTURE_CLEAN_BONUS,
        StructureClass::Moderate => score += STRUCTURE_MODERATE_BONUS,
        StructureClass::Basic => {
            roadmap.push("Improve project structure (src/, tests/, docs/)".to_string());
        }
    }

    if signals.has_readme {
        score += README_BONUS;
        if !signals.readme_has_content {
            roadmap.push("Expand the README with setup, usage, and examples".to_string());
        }
    } else {
        roadmap.push(
            "Add a comprehensive README with project overview, setup instructions, and usage examples"
                .to_string(),
        );
    }

    if signals.has_tests {
        score += TESTS_BONUS;
    } else {
        roadmap.push("Add unit and integration tests".to_string());
    }

    if metadata.commit_count > ACTIVE_COMMITS_THRESHOLD {
        score += ACTIVE_COMMITS_BONUS;
    } else if metadata.commit_count < SPARSE_COMMITS_THRESHOLD {
        roadmap.push("Commit more frequently with meaningful messages".to_string());
    }

    if metadata.star_count > POPULARITY_THRESHOLD {
        score += POPULARITY_BONUS;
    }

    let summary = format!(
        "{} {} project {} documentation and {} tests.",
        signals.structure.title(),
        metadata.primary_language,
        if signals.has_readme { "with" } else { "without" },
        if signals.has_tests { "with" } else { "without" },
    );

    if roadmap.is_empty() {
        roadmap.push("Prepare the project for open-source contributions".to_string());
    }

    Assessment::new(score, summary, roadmap)
}
