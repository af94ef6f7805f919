use crate::error::{RepoLensError, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A shallow, history-stripped working copy of a remote repository.
/// The backing directory is per-request and removed on drop, whichever
/// way the assessment pipeline exits.
#[derive(Debug)]
pub struct Snapshot {
    root: PathBuf,
    _dir: TempDir,
}

impl Snapshot {
    pub fn clone_from(url: &str) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(&format!("repolens-{}-", url_slug(url)))
            .tempdir()?;
        let root = dir.path().join("repo");

        let output = Command::new("git")
            .arg("clone")
            .arg("--depth")
            .arg("1")
            .arg("--quiet")
            .arg(url)
            .arg(&root)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RepoLensError::SnapshotFailed(format!("{url}: {stderr}")));
        }

        let git_dir = root.join(".git");
        if git_dir.exists() {
            fs::remove_dir_all(&git_dir)?;
        }

        Ok(Self { root, _dir: dir })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_listing(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect()
    }
}

fn url_slug(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    format!("{digest:x}")[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let output = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args([
                "-c",
                "user.email=test@example.com",
                "-c",
                "user.name=test",
            ])
            .args(args)
            .output()
            .expect("git should run");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    fn seed_repo() -> TempDir {
        let dir = TempDir::new().expect("temp dir should be created");
        std::fs::write(dir.path().join("README.md"), "seed repository for snapshot tests")
            .expect("readme should write");
        std::fs::create_dir_all(dir.path().join("src")).expect("src dir should create");
        std::fs::write(dir.path().join("src/lib.rs"), "pub fn seed() {}")
            .expect("source should write");
        git(dir.path(), &["init"]);
        git(dir.path(), &["add", "-A"]);
        git(dir.path(), &["commit", "-m", "seed"]);
        dir
    }

    #[test]
    fn clone_materializes_files_and_strips_history() {
        let origin = seed_repo();
        let url = origin.path().to_string_lossy().to_string();

        let snapshot = Snapshot::clone_from(&url).expect("clone should succeed");
        assert!(snapshot.root().join("README.md").exists());
        assert!(snapshot.root().join("src/lib.rs").exists());
        assert!(!snapshot.root().join(".git").exists());

        let files = snapshot.file_listing();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn snapshot_storage_is_released_on_drop() {
        let origin = seed_repo();
        let url = origin.path().to_string_lossy().to_string();

        let snapshot = Snapshot::clone_from(&url).expect("clone should succeed");
        let root = snapshot.root().to_path_buf();
        assert!(root.exists());
        drop(snapshot);
        assert!(!root.exists());
    }

    #[test]
    fn unreachable_url_is_a_snapshot_failure() {
        let err = Snapshot::clone_from("https://127.0.0.1:9/nobody/nothing")
            .expect_err("clone should fail");
        assert!(matches!(err, RepoLensError::SnapshotFailed(_)));
    }

    #[test]
    fn url_slug_is_stable_and_short() {
        assert_eq!(url_slug("a"), url_slug("a"));
        assert_ne!(url_slug("a"), url_slug("b"));
        assert_eq!(url_slug("https://github.com/user/repo").len(), 8);
    }
}
