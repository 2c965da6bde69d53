//! src/commands/init.rs

use crate::config;
use crate::reporter::Reporter;
use anyhow::{Context, Result};
use std::path::Path;

pub async fn handle_init(root: &Path, config_file: &Path, reporter: &mut dyn Reporter) -> Result<()> {
    let created = config::create_default_config(&root.join(config_file))
        .await
        .context("Failed to initialize configuration")?;

    if created {
        reporter.success(&format!("Created {}", config_file.display()));
    } else {
        reporter.skipped(&format!("{} already exists", config_file.display()));
    }
    Ok(())
}
