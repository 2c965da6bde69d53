//! src/commands/update.rs

use anyhow::Result;

use crate::hook::HookDefinitionSet;
use crate::installer::{HookInstaller, InstallOptions, InstallOutcome};
use crate::lock::{LockFileManager, LOCK_FILE};
use crate::reporter::Reporter;

/// Rewrites every configured hook and refreshes the lock file.
///
/// Existing hook files are always replaced; `.gitignore` is left alone.
pub async fn handle_update(
    installer: &HookInstaller,
    hooks: &HookDefinitionSet,
    options: &InstallOptions,
    reporter: &mut dyn Reporter,
) -> Result<Vec<(String, InstallOutcome)>> {
    let options = InstallOptions {
        force: true,
        ..options.clone()
    };
    let outcomes = installer.install(hooks, &options, reporter).await?;

    if outcomes.is_empty() {
        reporter.info("No hooks were updated. Add some to the configuration first");
        return Ok(outcomes);
    }

    if options.skip_lock {
        reporter.skipped(&format!("Skipped creating a {LOCK_FILE} file"));
    } else {
        LockFileManager::new(installer.root(), options.lock_dir.as_deref())
            .write(&hooks.names())
            .await?;
        reporter.success(&format!("Created {LOCK_FILE} file"));
    }

    Ok(outcomes)
}
