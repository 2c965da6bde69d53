//! src/installer.rs

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::hook::{host_needs_shebang_compat, render_script, HookDefinitionSet};
use crate::reporter::Reporter;

pub const DEFAULT_GIT_DIR: &str = ".git";

/// Options shared by the commands that write hook files.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Overwrite hook files that already exist.
    pub force: bool,
    /// Always prepend the bash shebang, whatever the host OS.
    pub force_windows: bool,
    /// Path to the git directory; relative paths are resolved against the working directory.
    pub git_dir: PathBuf,
    /// Do not write the lock file.
    pub skip_lock: bool,
    /// Add the lock file to `.gitignore`.
    pub ignore_lock: bool,
    /// Directory holding the lock file; defaults to the working directory.
    pub lock_dir: Option<PathBuf>,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            force: false,
            force_windows: false,
            git_dir: PathBuf::from(DEFAULT_GIT_DIR),
            skip_lock: false,
            ignore_lock: false,
            lock_dir: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Created,
    Skipped,
    Overwritten,
}

impl InstallOutcome {
    pub fn is_installed(self) -> bool {
        matches!(self, InstallOutcome::Created | InstallOutcome::Overwritten)
    }
}

/// Writes hook scripts into `{git_dir}/hooks` under a working directory.
pub struct HookInstaller {
    root: PathBuf,
    host_compat: bool,
}

impl HookInstaller {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            host_compat: host_needs_shebang_compat(),
        }
    }

    /// Overrides the host OS check used to decide on the bash shebang.
    #[cfg(test)]
    pub fn with_host_compat(mut self, host_compat: bool) -> Self {
        self.host_compat = host_compat;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn hooks_dir(&self, options: &InstallOptions) -> PathBuf {
        hooks_dir(&self.root, &options.git_dir)
    }

    /// Installs every hook in `hooks`, in order, and returns what happened to each.
    ///
    /// The first filesystem error aborts the run; hooks written before it stay on disk.
    pub async fn install(
        &self,
        hooks: &HookDefinitionSet,
        options: &InstallOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<Vec<(String, InstallOutcome)>> {
        let mut outcomes = Vec::with_capacity(hooks.len());
        if hooks.is_empty() {
            return Ok(outcomes);
        }

        let hooks_dir = self.hooks_dir(options);
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir)
                .await
                .with_context(|| {
                    format!("Failed to create hooks directory {}", hooks_dir.display())
                })?;
        }

        let windows_compat = self.host_compat || options.force_windows;

        for hook in hooks.iter() {
            let hook_path = hooks_dir.join(&hook.name);
            let exists = hook_path.exists();

            let outcome = match (exists, options.force) {
                (false, _) => InstallOutcome::Created,
                (true, false) => InstallOutcome::Skipped,
                (true, true) => InstallOutcome::Overwritten,
            };
            log::debug!("{} -> {:?} ({})", hook.name, outcome, hook_path.display());

            if outcome.is_installed() {
                let script = render_script(&hook.commands, windows_compat);
                write_hook_file(&hook_path, &script).await?;
            }

            match outcome {
                InstallOutcome::Created => reporter.success(&format!("Added {} hook", hook.name)),
                InstallOutcome::Skipped => {
                    reporter.skipped(&format!("{} already exists", hook.name))
                }
                InstallOutcome::Overwritten => {
                    reporter.success(&format!("Overwrote {} hook", hook.name))
                }
            }
            outcomes.push((hook.name.clone(), outcome));
        }

        Ok(outcomes)
    }
}

pub fn hooks_dir(root: &Path, git_dir: &Path) -> PathBuf {
    root.join(git_dir).join("hooks")
}

async fn write_hook_file(hook_path: &Path, script: &str) -> Result<()> {
    fs::write(hook_path, script)
        .await
        .with_context(|| format!("Failed to write hook {}", hook_path.display()))?;

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(hook_path)
            .await
            .with_context(|| format!("Failed to read metadata of {}", hook_path.display()))?
            .permissions();
        use std::os::unix::fs::PermissionsExt;
        perms.set_mode(0o755);
        fs::set_permissions(hook_path, perms)
            .await
            .context("Failed to set hook permissions")?;
    }

    Ok(())
}
