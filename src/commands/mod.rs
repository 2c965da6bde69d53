//! src/commands/mod.rs

pub mod add;
pub mod init;
pub mod list;
pub mod remove;
pub mod run;
pub mod update;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::installer::{InstallOptions, DEFAULT_GIT_DIR};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Hook configuration file
    #[arg(long, global = true, env = "GITHOOKS_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GitDirArgs {
    /// Path to the git directory
    #[arg(long, default_value = DEFAULT_GIT_DIR)]
    pub git_dir: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct LockArgs {
    /// Do not create the lock file
    #[arg(long)]
    pub no_lock: bool,

    /// Directory the lock file is written to
    #[arg(long)]
    pub lock_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install the configured hooks into the git hooks directory
    #[command(alias = "a")]
    Add {
        /// Overwrite hooks that already exist
        #[arg(short, long)]
        force: bool,

        /// Add the bash shebang needed by Git for Windows
        #[arg(long)]
        force_win: bool,

        /// Add the lock file to .gitignore
        #[arg(long)]
        ignore_lock: bool,

        #[command(flatten)]
        lock: LockArgs,

        #[command(flatten)]
        git: GitDirArgs,
    },

    /// Rewrite every configured hook with the current configuration
    #[command(alias = "u")]
    Update {
        /// Add the bash shebang needed by Git for Windows
        #[arg(long)]
        force_win: bool,

        #[command(flatten)]
        lock: LockArgs,

        #[command(flatten)]
        git: GitDirArgs,
    },

    /// Remove managed hooks (all hooks in the lock file when none are named)
    #[command(alias = "rm")]
    Remove {
        /// Hooks to remove
        hooks: Vec<String>,

        /// Remove hooks even if they are not in the lock file
        #[arg(short, long)]
        force: bool,

        /// Directory the lock file is read from
        #[arg(long)]
        lock_dir: Option<PathBuf>,

        #[command(flatten)]
        git: GitDirArgs,
    },

    /// Show the configured hooks that are installed
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        git: GitDirArgs,
    },

    /// Run the commands of a configured hook
    Hook {
        /// Hook name, e.g. pre-commit
        name: String,
    },

    /// Create a starter configuration file
    Init,
}

impl Commands {
    /// Builds installer options for the hook-writing commands.
    pub fn install_options(&self) -> Option<InstallOptions> {
        match self {
            Commands::Add {
                force,
                force_win,
                ignore_lock,
                lock,
                git,
            } => Some(InstallOptions {
                force: *force,
                force_windows: *force_win,
                git_dir: git.git_dir.clone(),
                skip_lock: lock.no_lock,
                ignore_lock: *ignore_lock,
                lock_dir: lock.lock_dir.clone(),
            }),
            Commands::Update {
                force_win,
                lock,
                git,
            } => Some(InstallOptions {
                force: true,
                force_windows: *force_win,
                git_dir: git.git_dir.clone(),
                skip_lock: lock.no_lock,
                ignore_lock: false,
                lock_dir: lock.lock_dir.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_flags_map_to_install_options() {
        let cli = Cli::parse_from([
            "githooks",
            "add",
            "--force",
            "--force-win",
            "--no-lock",
            "--ignore-lock",
            "--git-dir",
            "test-git-dir",
        ]);
        let options = cli.command.install_options().unwrap();

        assert!(options.force);
        assert!(options.force_windows);
        assert!(options.skip_lock);
        assert!(options.ignore_lock);
        assert_eq!(options.git_dir, PathBuf::from("test-git-dir"));
    }

    #[test]
    fn add_defaults() {
        let cli = Cli::parse_from(["githooks", "add"]);
        let options = cli.command.install_options().unwrap();

        assert!(!options.force);
        assert!(!options.force_windows);
        assert!(!options.skip_lock);
        assert!(!options.ignore_lock);
        assert_eq!(options.git_dir, PathBuf::from(".git"));
        assert_eq!(options.lock_dir, None);
    }

    #[test]
    fn update_always_forces() {
        let cli = Cli::parse_from(["githooks", "update"]);
        assert!(cli.command.install_options().unwrap().force);
    }

    #[test]
    fn remove_takes_hook_names() {
        let cli = Cli::parse_from(["githooks", "remove", "pre-commit", "pre-push", "--force"]);
        match cli.command {
            Commands::Remove { hooks, force, .. } => {
                assert_eq!(hooks, vec!["pre-commit", "pre-push"]);
                assert!(force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
