//! src/hook.rs

/// Every hook name git will invoke from `$GIT_DIR/hooks`.
pub const VALID_HOOKS: &[&str] = &[
    "applypatch-msg",
    "pre-applypatch",
    "post-applypatch",
    "pre-commit",
    "pre-merge-commit",
    "prepare-commit-msg",
    "commit-msg",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-push",
    "pre-receive",
    "update",
    "proc-receive",
    "post-receive",
    "post-update",
    "reference-transaction",
    "push-to-checkout",
    "pre-auto-gc",
    "post-rewrite",
    "sendemail-validate",
    "fsmonitor-watchman",
    "p4-changelist",
    "p4-prepare-changelist",
    "p4-post-changelist",
    "p4-pre-submit",
    "post-index-change",
];

const WINDOWS_SHEBANG: &str = "#!/bin/bash";

/// A single configured hook: its name and the shell commands it runs, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookDefinition {
    pub name: String,
    pub commands: Vec<String>,
}

impl HookDefinition {
    pub fn new(name: impl Into<String>, commands: Vec<String>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }

    #[cfg(test)]
    pub fn single(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self::new(name, vec![command.into()])
    }
}

/// Hook definitions in the order they were configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookDefinitionSet {
    hooks: Vec<HookDefinition>,
}

impl HookDefinitionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hook, replacing the commands of an earlier definition with the same name
    /// while keeping its original position.
    pub fn insert(&mut self, hook: HookDefinition) {
        match self.hooks.iter_mut().find(|h| h.name == hook.name) {
            Some(existing) => existing.commands = hook.commands,
            None => self.hooks.push(hook),
        }
    }

    pub fn get(&self, name: &str) -> Option<&HookDefinition> {
        self.hooks.iter().find(|h| h.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.hooks.iter().map(|h| h.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HookDefinition> {
        self.hooks.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }
}

impl FromIterator<HookDefinition> for HookDefinitionSet {
    fn from_iter<I: IntoIterator<Item = HookDefinition>>(iter: I) -> Self {
        let mut set = HookDefinitionSet::new();
        for hook in iter {
            set.insert(hook);
        }
        set
    }
}

/// Whether the current host needs the bash shebang for git to run hook scripts.
pub fn host_needs_shebang_compat() -> bool {
    cfg!(windows)
}

/// Builds the body of a hook script from its commands.
///
/// With `windows_compat` the script starts with `#!/bin/bash` so Git for Windows
/// picks the bundled bash. Commands are joined by `\n` without a trailing newline.
pub fn render_script(commands: &[String], windows_compat: bool) -> String {
    let body = commands.join("\n");
    if windows_compat {
        format!("{WINDOWS_SHEBANG}\n{body}")
    } else {
        body
    }
}
