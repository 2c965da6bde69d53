//! src/main.rs

use anyhow::{Context, Result};
use clap::Parser;

mod commands;
mod config;
mod errors;
mod hook;
mod installer;
mod lock;
mod reporter;

use commands::{Cli, Commands};
use installer::HookInstaller;
use reporter::ConsoleReporter;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let root = std::env::current_dir().context("Failed to get the working directory")?;
    let config_path = root.join(&cli.config);
    let mut reporter = ConsoleReporter;

    let install_options = cli.command.install_options();

    match cli.command {
        Commands::Add { .. } => {
            let hooks = config::load_config(&config_path).await?;
            if let Some(options) = install_options {
                commands::add::handle_add(&HookInstaller::new(&root), &hooks, &options, &mut reporter)
                    .await?;
            }
        }
        Commands::Update { .. } => {
            let hooks = config::load_config(&config_path).await?;
            if let Some(options) = install_options {
                commands::update::handle_update(
                    &HookInstaller::new(&root),
                    &hooks,
                    &options,
                    &mut reporter,
                )
                .await?;
            }
        }
        Commands::Remove {
            hooks,
            force,
            lock_dir,
            git,
        } => {
            commands::remove::handle_remove(
                &root,
                &git.git_dir,
                lock_dir.as_deref(),
                &hooks,
                force,
                &mut reporter,
            )
            .await?;
        }
        Commands::List { git } => {
            let hooks = config::load_config(&config_path).await?;
            commands::list::handle_list(&root, &git.git_dir, &hooks, &mut reporter).await?;
        }
        Commands::Hook { name } => {
            let hooks = config::load_config(&config_path).await?;
            let code = commands::run::handle_hook(&root, &hooks, &name).await?;
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Init => {
            commands::init::handle_init(&root, &cli.config, &mut reporter).await?;
        }
    }

    Ok(())
}
