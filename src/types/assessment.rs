use serde::Serialize;

pub const MAX_ROADMAP_ITEMS: usize = 7;

/// Final output of one assessment: built by exactly one feedback generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub score: u8,
    pub summary: String,
    pub roadmap: Vec<String>,
}

impl Assessment {
    pub fn new(score: i64, summary: String, mut roadmap: Vec<String>) -> Self {
        roadmap.truncate(MAX_ROADMAP_ITEMS);
        Self {
            score: score.clamp(0, 100) as u8,
            summary,
            roadmap,
        }
    }
}
