//! src/commands/add.rs

use anyhow::Result;

use crate::hook::HookDefinitionSet;
use crate::installer::{HookInstaller, InstallOptions, InstallOutcome};
use crate::lock::LockFileManager;
use crate::reporter::Reporter;

/// Installs the configured hooks and, when any were written, records them in the lock file.
pub async fn handle_add(
    installer: &HookInstaller,
    hooks: &HookDefinitionSet,
    options: &InstallOptions,
    reporter: &mut dyn Reporter,
) -> Result<Vec<(String, InstallOutcome)>> {
    let outcomes = installer.install(hooks, options, reporter).await?;

    if !outcomes.iter().any(|(_, outcome)| outcome.is_installed()) {
        reporter.info("No hooks were added. Try updating");
        return Ok(outcomes);
    }

    // 锁文件记录的是全部已配置的 hook，而不仅是本次写入的
    let lock = LockFileManager::new(installer.root(), options.lock_dir.as_deref());
    lock.record(&hooks.names(), options.skip_lock, options.ignore_lock, reporter)
        .await?;

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::HookDefinition;
    use crate::lock::{IGNORE_FILE, LOCK_FILE};
    use crate::reporter::MemoryReporter;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn hooks() -> HookDefinitionSet {
        vec![
            HookDefinition::single("pre-commit", "echo before-commit"),
            HookDefinition::single("commit-msg", "echo message"),
            HookDefinition::single("post-commit", "echo after-commit"),
        ]
        .into_iter()
        .collect()
    }

    fn installer(root: &Path) -> HookInstaller {
        HookInstaller::new(root).with_host_compat(false)
    }

    #[tokio::test]
    async fn pre_commit_end_to_end() {
        let dir = tempdir().unwrap();
        let hooks: HookDefinitionSet =
            std::iter::once(HookDefinition::single("pre-commit", "echo hi")).collect();
        let mut reporter = MemoryReporter::default();

        handle_add(
            &installer(dir.path()),
            &hooks,
            &InstallOptions::default(),
            &mut reporter,
        )
        .await
        .unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join(".git/hooks/pre-commit")).unwrap(),
            "echo hi"
        );
        assert!(reporter.contains("Added pre-commit hook"));
        assert_eq!(
            fs::read_to_string(dir.path().join(LOCK_FILE)).unwrap(),
            r#"["pre-commit"]"#
        );
    }

    #[tokio::test]
    async fn creates_the_lock_file_with_every_configured_hook() {
        let dir = tempdir().unwrap();
        let mut reporter = MemoryReporter::default();

        handle_add(
            &installer(dir.path()),
            &hooks(),
            &InstallOptions::default(),
            &mut reporter,
        )
        .await
        .unwrap();

        assert!(reporter.contains("Created .githooks.lock file"));
        assert_eq!(
            fs::read_to_string(dir.path().join(LOCK_FILE)).unwrap(),
            r#"["pre-commit","commit-msg","post-commit"]"#
        );
    }

    #[tokio::test]
    async fn lock_lists_skipped_hooks_too() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git/hooks")).unwrap();
        fs::write(dir.path().join(".git/hooks/pre-commit"), "custom").unwrap();

        handle_add(
            &installer(dir.path()),
            &hooks(),
            &InstallOptions::default(),
            &mut MemoryReporter::default(),
        )
        .await
        .unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join(LOCK_FILE)).unwrap(),
            r#"["pre-commit","commit-msg","post-commit"]"#
        );
    }

    #[tokio::test]
    async fn no_lock_option_skips_the_lock_file() {
        let dir = tempdir().unwrap();
        let options = InstallOptions {
            skip_lock: true,
            ..InstallOptions::default()
        };
        let mut reporter = MemoryReporter::default();

        handle_add(&installer(dir.path()), &hooks(), &options, &mut reporter)
            .await
            .unwrap();

        assert!(reporter.contains("Skipped creating a .githooks.lock file"));
        assert!(!dir.path().join(LOCK_FILE).exists());
    }

    #[tokio::test]
    async fn does_not_ignore_the_lock_file_by_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(IGNORE_FILE), "target\n").unwrap();
        let mut reporter = MemoryReporter::default();

        handle_add(
            &installer(dir.path()),
            &hooks(),
            &InstallOptions::default(),
            &mut reporter,
        )
        .await
        .unwrap();

        assert!(reporter.contains("Skipped adding .githooks.lock to .gitignore"));
        let ignore = fs::read_to_string(dir.path().join(IGNORE_FILE)).unwrap();
        assert!(!ignore.contains(LOCK_FILE));
    }

    #[tokio::test]
    async fn ignore_lock_option_adds_the_lock_file_to_gitignore() {
        let dir = tempdir().unwrap();
        let options = InstallOptions {
            ignore_lock: true,
            ..InstallOptions::default()
        };
        let mut reporter = MemoryReporter::default();

        handle_add(&installer(dir.path()), &hooks(), &options, &mut reporter)
            .await
            .unwrap();

        assert!(reporter.contains("Added .githooks.lock to .gitignore"));
        let ignore = fs::read_to_string(dir.path().join(IGNORE_FILE)).unwrap();
        assert!(ignore.contains(LOCK_FILE));
    }

    #[tokio::test]
    async fn empty_configuration_adds_nothing() {
        let dir = tempdir().unwrap();
        let mut reporter = MemoryReporter::default();

        let outcomes = handle_add(
            &installer(dir.path()),
            &HookDefinitionSet::new(),
            &InstallOptions::default(),
            &mut reporter,
        )
        .await
        .unwrap();

        assert!(outcomes.is_empty());
        assert_eq!(reporter.output(), "No hooks were added. Try updating");
        assert!(!dir.path().join(".git/hooks/pre-commit").exists());
        assert!(!dir.path().join(LOCK_FILE).exists());
    }

    #[tokio::test]
    async fn all_hooks_existing_leaves_the_lock_alone() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git/hooks")).unwrap();
        for hook in hooks().iter() {
            fs::write(dir.path().join(".git/hooks").join(&hook.name), "custom").unwrap();
        }
        let mut reporter = MemoryReporter::default();

        handle_add(
            &installer(dir.path()),
            &hooks(),
            &InstallOptions::default(),
            &mut reporter,
        )
        .await
        .unwrap();

        assert!(reporter.contains("pre-commit already exists"));
        assert!(reporter.contains("No hooks were added. Try updating"));
        assert!(!dir.path().join(LOCK_FILE).exists());
    }

    #[tokio::test]
    async fn force_windows_writes_shebang_first() {
        let dir = tempdir().unwrap();
        let hooks: HookDefinitionSet =
            std::iter::once(HookDefinition::single("pre-commit", "echo hi")).collect();
        let options = InstallOptions {
            force_windows: true,
            ..InstallOptions::default()
        };

        handle_add(
            &installer(dir.path()),
            &hooks,
            &options,
            &mut MemoryReporter::default(),
        )
        .await
        .unwrap();

        let content = fs::read_to_string(dir.path().join(".git/hooks/pre-commit")).unwrap();
        assert_eq!(content, "#!/bin/bash\necho hi");
    }
}
