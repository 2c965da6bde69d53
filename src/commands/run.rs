//! src/commands/run.rs

use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

use crate::errors::HooksError;
use crate::hook::{render_script, HookDefinitionSet};

/// Runs a configured hook's commands through `sh` and returns its exit code.
pub async fn handle_hook(root: &Path, hooks: &HookDefinitionSet, name: &str) -> Result<i32> {
    let hook = hooks
        .get(name)
        .ok_or_else(|| HooksError::HookNotDefined(name.to_string()))?;

    let script = render_script(&hook.commands, false);
    log::debug!("running {} in {}:\n{}", name, root.display(), script);

    let status = Command::new("sh")
        .arg("-c")
        .arg(&script)
        .current_dir(root)
        .status()
        .await
        .with_context(|| format!("Failed to run hook '{name}'"))?;

    // 被信号终止时没有退出码
    Ok(status.code().unwrap_or(1))
}
