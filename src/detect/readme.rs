use std::fs;
use std::path::{Path, PathBuf};

// Trimmed content below this length counts as no README at all,
// not merely a thin one.
pub const MIN_README_CHARS: usize = 50;

/// Returns (has_readme, readme_has_content) for the first root-level
/// README candidate in listing order. Files below the root never qualify.
pub fn detect_readme(root: &Path, files: &[PathBuf]) -> (bool, bool) {
    for path in files {
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if relative.components().count() != 1 {
            continue;
        }

        let name = path
            .file_name()
            .and_then(|file| file.to_str())
            .unwrap_or_default()
            .to_lowercase();
        if name != "readme" && !name.starts_with("readme.") {
            continue;
        }

        return match fs::read(path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                if content.trim().chars().count() >= MIN_README_CHARS {
                    (true, true)
                } else {
                    (false, false)
                }
            }
            Err(_) => (false, false),
        };
    }

    (false, false)
}
