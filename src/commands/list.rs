//! src/commands/list.rs

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

use crate::hook::HookDefinitionSet;
use crate::installer::hooks_dir;
use crate::reporter::Reporter;

/// Reports each configured hook that has a file in the hooks directory, with its contents.
pub async fn handle_list(
    root: &Path,
    git_dir: &Path,
    hooks: &HookDefinitionSet,
    reporter: &mut dyn Reporter,
) -> Result<Vec<String>> {
    let hooks_dir = hooks_dir(root, git_dir);
    let mut installed = Vec::new();

    for hook in hooks.iter() {
        let hook_path = hooks_dir.join(&hook.name);
        if !hook_path.is_file() {
            continue;
        }

        let content = fs::read_to_string(&hook_path)
            .await
            .with_context(|| format!("Failed to read hook {}", hook_path.display()))?;

        reporter.success(&hook.name);
        for line in content.lines() {
            reporter.info(&format!("    {line}"));
        }
        installed.push(hook.name.clone());
    }

    if installed.is_empty() {
        reporter.skipped("No configured hooks are installed");
    }

    Ok(installed)
}
