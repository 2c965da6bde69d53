//! src/commands/remove.rs

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

use crate::errors::HooksError;
use crate::hook::VALID_HOOKS;
use crate::installer::hooks_dir;
use crate::lock::LockFileManager;
use crate::reporter::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Missing,
    NotManaged,
    NotAHook,
}

/// Deletes hook files. With no `names`, every hook in the lock file is removed.
///
/// Only names in `VALID_HOOKS` are ever joined onto the hooks directory: a bad
/// name in `names` fails the whole call, a bad lock entry is skipped. Hooks absent
/// from the lock file are only removed with `force`. The lock file, when present,
/// is rewritten without the removed hooks.
pub async fn handle_remove(
    root: &Path,
    git_dir: &Path,
    lock_dir: Option<&Path>,
    names: &[String],
    force: bool,
    reporter: &mut dyn Reporter,
) -> Result<Vec<(String, RemoveOutcome)>> {
    if let Some(bad) = names.iter().find(|name| !is_hook_name(name)) {
        return Err(HooksError::UnknownHook(bad.clone()).into());
    }

    let lock = LockFileManager::new(root, lock_dir);
    let mut locked = lock.read().await?;

    let targets: Vec<String> = if names.is_empty() {
        locked.clone()
    } else {
        names.to_vec()
    };

    if targets.is_empty() {
        reporter.info("No hooks to remove");
        return Ok(Vec::new());
    }

    let hooks_dir = hooks_dir(root, git_dir);
    let mut outcomes = Vec::with_capacity(targets.len());

    for name in targets {
        if !is_hook_name(&name) {
            reporter.skipped(&format!("Skipped {name} - not a git hook name"));
            log::debug!("{name} -> {:?}", RemoveOutcome::NotAHook);
            outcomes.push((name, RemoveOutcome::NotAHook));
            continue;
        }

        let hook_path = hooks_dir.join(&name);

        let outcome = if !hook_path.exists() {
            reporter.skipped(&format!("{name} hook does not exist"));
            RemoveOutcome::Missing
        } else if !force && !locked.contains(&name) {
            reporter.skipped(&format!(
                "Skipped {name} hook - not present in lock file"
            ));
            RemoveOutcome::NotManaged
        } else {
            fs::remove_file(&hook_path)
                .await
                .with_context(|| format!("Failed to remove hook {}", hook_path.display()))?;
            locked.retain(|locked_name| locked_name != &name);
            reporter.success(&format!("Removed {name} hook"));
            RemoveOutcome::Removed
        };

        log::debug!("{name} -> {outcome:?}");
        outcomes.push((name, outcome));
    }

    if lock.exists() {
        lock.write(&locked).await?;
    }

    Ok(outcomes)
}

fn is_hook_name(name: &str) -> bool {
    VALID_HOOKS.contains(&name)
}
