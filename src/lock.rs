//! src/lock.rs
// Bookkeeping for the hooks this tool manages.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::reporter::Reporter;

pub const LOCK_FILE: &str = ".githooks.lock";
pub const IGNORE_FILE: &str = ".gitignore";

/// Reads and writes the lock file and its `.gitignore` entry.
pub struct LockFileManager {
    root: PathBuf,
    lock_dir: PathBuf,
}

impl LockFileManager {
    /// `lock_dir` is resolved against `root`; `None` keeps the lock file in `root`.
    pub fn new(root: impl Into<PathBuf>, lock_dir: Option<&Path>) -> Self {
        let root = root.into();
        let lock_dir = match lock_dir {
            Some(dir) => root.join(dir),
            None => root.clone(),
        };
        Self { root, lock_dir }
    }

    pub fn lock_path(&self) -> PathBuf {
        self.lock_dir.join(LOCK_FILE)
    }

    pub fn ignore_path(&self) -> PathBuf {
        self.root.join(IGNORE_FILE)
    }

    /// Records `hook_names` unless `skip_lock`, then handles the `.gitignore` entry.
    ///
    /// `.gitignore` is only touched when a lock file was actually written.
    pub async fn record(
        &self,
        hook_names: &[String],
        skip_lock: bool,
        ignore_lock: bool,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        if skip_lock {
            reporter.skipped(&format!("Skipped creating a {LOCK_FILE} file"));
        } else {
            self.write(hook_names).await?;
            reporter.success(&format!("Created {LOCK_FILE} file"));
        }

        if ignore_lock && !skip_lock {
            self.add_to_ignore_file().await?;
            reporter.success(&format!("Added {LOCK_FILE} to {IGNORE_FILE}"));
        } else {
            reporter.skipped(&format!("Skipped adding {LOCK_FILE} to {IGNORE_FILE}"));
        }

        Ok(())
    }

    /// Replaces the lock file with `hook_names`; prior contents are not merged.
    pub async fn write(&self, hook_names: &[String]) -> Result<()> {
        if !self.lock_dir.exists() {
            fs::create_dir_all(&self.lock_dir)
                .await
                .context("Failed to create lock directory")?;
        }

        let path = self.lock_path();
        let content = serde_json::to_string(hook_names)?;
        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        log::debug!("lock file {} now lists {:?}", path.display(), hook_names);
        Ok(())
    }

    /// Hook names recorded in the lock file; empty when there is none.
    pub async fn read(&self) -> Result<Vec<String>> {
        let path = self.lock_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let names = serde_json::from_str(&content)
            .with_context(|| format!("{} is not a JSON list of hook names", path.display()))?;
        Ok(names)
    }

    pub fn exists(&self) -> bool {
        self.lock_path().exists()
    }

    async fn add_to_ignore_file(&self) -> Result<()> {
        let path = self.ignore_path();
        let mut content = if path.exists() {
            fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?
        } else {
            String::new()
        };

        if content.lines().any(|line| line.trim() == LOCK_FILE) {
            log::debug!("{LOCK_FILE} already listed in {}", path.display());
            return Ok(());
        }

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(LOCK_FILE);
        content.push('\n');

        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to update {}", path.display()))?;
        Ok(())
    }
}
