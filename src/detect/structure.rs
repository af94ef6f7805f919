use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureClass {
    #[default]
    Basic,
    Moderate,
    Clean,
}

impl StructureClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Moderate => "moderate",
            Self::Clean => "clean",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Moderate => "Moderate",
            Self::Clean => "Clean",
        }
    }
}

pub fn classify(root: &Path, files: &[PathBuf]) -> StructureClass {
    let mut top_level_dirs = HashSet::new();
    for path in files {
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let mut components = relative.components();
        let first = components.next();
        // Only paths with at least one directory between root and file
        // contribute a top-level directory name.
        if let (Some(first), Some(_)) = (first, components.next()) {
            top_level_dirs.insert(first.as_os_str().to_string_lossy().into_owned());
        }
    }

    let score = [
        top_level_dirs.contains("src"),
        top_level_dirs.contains("tests"),
        top_level_dirs.contains("docs"),
        files.len() > 10,
    ]
    .iter()
    .filter(|present| **present)
    .count();

    match score {
        3.. => StructureClass::Clean,
        2 => StructureClass::Moderate,
        _ => StructureClass::Basic,
    }
}
