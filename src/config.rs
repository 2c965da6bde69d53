//! src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use crate::errors::HooksError;
use crate::hook::{HookDefinition, HookDefinitionSet, VALID_HOOKS};

pub const DEFAULT_CONFIG_FILE: &str = "githooks.toml";

const DEFAULT_CONFIG: &str = r#"# Git hooks managed by githooks.
# Each key is a git hook name; the value is a command or a list of commands.

[hooks]
pre-commit = "cargo fmt --all -- --check"
pre-push = [
    "cargo clippy --all-targets -- -D warnings",
    "cargo test",
]
"#;

/// On-disk shape of `githooks.toml`.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    hooks: toml::Table,
}

/// Writes a starter configuration file. Returns `false` when one already exists.
pub async fn create_default_config(path: &Path) -> Result<bool> {
    if config_exists(path).await? {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .context("Could not create config directory")?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .await
        .with_context(|| format!("Could not write config file {}", path.display()))?;

    log::debug!("wrote default config to {}", path.display());
    Ok(true)
}

/// Loads hook definitions from the configuration file at `path`.
pub async fn load_config(path: &Path) -> Result<HookDefinitionSet> {
    if !config_exists(path).await? {
        return Err(HooksError::ConfigNotFound(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    let hooks = parse_config(&content, path)?;

    log::debug!(
        "loaded {} hook(s) from {}: {:?}",
        hooks.len(),
        path.display(),
        hooks.names()
    );
    Ok(hooks)
}

async fn config_exists(path: &Path) -> Result<bool> {
    fs::try_exists(path)
        .await
        .with_context(|| format!("Could not check config file {}", path.display()))
}

/// Parses the contents of a configuration file, keeping the order hooks appear in.
pub fn parse_config(content: &str, path: &Path) -> Result<HookDefinitionSet, HooksError> {
    let file: ConfigFile = toml::from_str(content).map_err(|e| HooksError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    let mut hooks = HookDefinitionSet::new();
    for (name, value) in file.hooks {
        if !VALID_HOOKS.contains(&name.as_str()) {
            return Err(HooksError::UnknownHook(name));
        }
        let commands = normalize_commands(&name, value)?;
        hooks.insert(HookDefinition::new(name, commands));
    }
    Ok(hooks)
}

// 单个字符串统一转换为只有一个元素的列表
fn normalize_commands(name: &str, value: toml::Value) -> Result<Vec<String>, HooksError> {
    match value {
        toml::Value::String(command) => Ok(vec![command]),
        toml::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                toml::Value::String(command) => Ok(command),
                _ => Err(HooksError::InvalidCommands(name.to_string())),
            })
            .collect(),
        _ => Err(HooksError::InvalidCommands(name.to_string())),
    }
}
