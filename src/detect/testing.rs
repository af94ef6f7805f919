use std::path::{Component, Path, PathBuf};

const TEST_DIRS: [&str; 4] = ["tests", "__tests__", "test", "spec"];

const TEST_FILE_SUFFIXES: [&str; 8] = [
    "_test.py", "test_.py", ".test.js", ".spec.js", ".test.ts", ".spec.ts", "_test.go",
    "_test.rs",
];

const TEST_CONFIG_FILES: [&str; 7] = [
    "pytest.ini",
    "tox.ini",
    "jest.config.js",
    "jest.config.ts",
    "vitest.config.ts",
    "mocha.opts",
    "phpunit.xml",
];

pub fn detect_tests(root: &Path, files: &[PathBuf]) -> bool {
    files.iter().any(|path| is_test_path(root, path))
}

fn is_test_path(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let name = path
        .file_name()
        .and_then(|file| file.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let components = relative.components().collect::<Vec<_>>();
    let in_test_dir = components
        .iter()
        .take(components.len().saturating_sub(1))
        .any(|component| match component {
            Component::Normal(part) => {
                let part = part.to_string_lossy().to_lowercase();
                TEST_DIRS.contains(&part.as_str())
            }
            _ => false,
        });

    in_test_dir
        || TEST_FILE_SUFFIXES
            .iter()
            .any(|suffix| name.ends_with(suffix))
        || TEST_CONFIG_FILES.contains(&name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(relative: &[&str]) -> bool {
        let root = Path::new("/repo");
        let files = relative.iter().map(|p| root.join(p)).collect::<Vec<_>>();
        detect_tests(root, &files)
    }

    #[test]
    fn empty_listing_has_no_tests() {
        assert!(!detect(&[]));
    }

    #[test]
    fn test_directory_component_matches_case_insensitively() {
        assert!(detect(&["src/Tests/helpers.py"]));
        assert!(detect(&["__tests__/app.jsx"]));
        assert!(detect(&["spec/models/user.rb"]));
    }

    #[test]
    fn file_named_like_a_test_dir_does_not_match_on_its_own_name() {
        // The directory rule excludes the final path component.
        assert!(!detect(&["src/test"]));
        assert!(!detect(&["tests"]));
    }

    #[test]
    fn per_language_suffixes_match() {
        assert!(detect(&["src/parser_test.go"]));
        assert!(detect(&["src/utils.spec.ts"]));
        assert!(detect(&["pkg/codec_test.rs"]));
        assert!(detect(&["app/Button.test.js"]));
    }

    #[test]
    fn framework_config_files_match_exactly() {
        assert!(detect(&["pytest.ini"]));
        assert!(detect(&["conf/jest.config.ts"]));
        assert!(!detect(&["pytest.ini.bak"]));
    }

    #[test]
    fn ordinary_sources_do_not_match() {
        assert!(!detect(&["src/main.rs", "docs/guide.md", "Makefile"]));
        assert!(!detect(&["src/contest.rs"]));
    }
}
