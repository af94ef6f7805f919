pub mod readme;
pub mod structure;
pub mod testing;

use std::path::{Path, PathBuf};
use structure::StructureClass;

#[derive(Debug, Clone, Default)]
pub struct RepoSignals {
    pub structure: StructureClass,
    pub has_readme: bool,
    pub readme_has_content: bool,
    pub has_tests: bool,
}

pub fn inspect(root: &Path, files: &[PathBuf]) -> RepoSignals {
    let (has_readme, readme_has_content) = readme::detect_readme(root, files);

    RepoSignals {
        structure: structure::classify(root, files),
        has_readme,
        readme_has_content,
        has_tests: testing::detect_tests(root, files),
    }
}
