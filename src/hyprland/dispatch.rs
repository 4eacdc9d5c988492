//! [`WorkspaceDispatcher`] implementation that runs `hyprctl`.
//!
//! Each switch spawns `hyprctl dispatch workspace <N>` as a detached child.
//! Nothing waits for it on the calling thread; a short-lived reaper thread
//! collects the exit status and logs it.

use crate::traits::WorkspaceDispatcher;
use crate::workspace::WorkspaceNumber;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::process::{Command, Stdio};

/// Placeholder replaced by the workspace number.
pub const PLACEHOLDER: &str = "{workspace}";

/// Default switch command.
pub const DEFAULT_TEMPLATE: &str = "hyprctl dispatch workspace {workspace}";

/// Rejected command templates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("command template is empty")]
    Empty,
    #[error("command template {0:?} has no {{workspace}} placeholder")]
    MissingPlaceholder(String),
}

/// A whitespace-separated command line containing [`PLACEHOLDER`].
///
/// The line is split into argv directly; no shell is involved, so quoting
/// is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommandTemplate(String);

impl CommandTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, TemplateError> {
        let template = template.into();
        if template.trim().is_empty() {
            return Err(TemplateError::Empty);
        }
        if !template.contains(PLACEHOLDER) {
            return Err(TemplateError::MissingPlaceholder(template));
        }
        Ok(Self(template))
    }

    /// Program and arguments for `workspace`.
    pub fn argv(&self, workspace: WorkspaceNumber) -> Vec<String> {
        let n = workspace.to_string();
        self.0
            .split_whitespace()
            .map(|part| part.replace(PLACEHOLDER, &n))
            .collect()
    }

    /// The full invocation as a single string, e.g.
    /// `hyprctl dispatch workspace 3`.
    pub fn command_line(&self, workspace: WorkspaceNumber) -> String {
        self.argv(workspace).join(" ")
    }
}

impl Default for CommandTemplate {
    fn default() -> Self {
        Self(DEFAULT_TEMPLATE.to_string())
    }
}

impl TryFrom<String> for CommandTemplate {
    type Error = TemplateError;

    fn try_from(s: String) -> Result<Self, TemplateError> {
        Self::new(s)
    }
}

impl From<CommandTemplate> for String {
    fn from(t: CommandTemplate) -> Self {
        t.0
    }
}

impl fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Switches workspaces by spawning `hyprctl`.
#[derive(Debug, Clone, Default)]
pub struct HyprctlDispatcher {
    template: CommandTemplate,
}

impl HyprctlDispatcher {
    pub fn new(template: CommandTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &CommandTemplate {
        &self.template
    }
}

impl WorkspaceDispatcher for HyprctlDispatcher {
    fn switch_to(&self, workspace: WorkspaceNumber) {
        let line = self.template.command_line(workspace);
        let argv = self.template.argv(workspace);
        let Some((program, args)) = argv.split_first() else {
            warn!("empty command for workspace {}", workspace);
            return;
        };

        debug!("spawning `{}`", line);
        let spawned = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                std::thread::spawn(move || match child.wait() {
                    Ok(status) if !status.success() => {
                        debug!("`{}` exited with {}", line, status);
                    }
                    Ok(_) => {}
                    Err(e) => debug!("`{}`: wait failed: {}", line, e),
                });
            }
            Err(e) => warn!("failed to run `{}`: {}", line, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_line_for_workspace_three() {
        let t = CommandTemplate::default();
        assert_eq!(
            t.command_line(WorkspaceNumber(3)),
            "hyprctl dispatch workspace 3"
        );
        assert_eq!(
            t.argv(WorkspaceNumber(3)),
            vec!["hyprctl", "dispatch", "workspace", "3"]
        );
    }

    #[test]
    fn command_line_mentions_only_its_workspace() {
        let t = CommandTemplate::default();
        for k in 1..=15 {
            let argv = t.argv(WorkspaceNumber(k));
            let numbers: Vec<u32> = argv.iter().filter_map(|a| a.parse().ok()).collect();
            assert_eq!(numbers, vec![k]);
        }
    }

    #[test]
    fn template_requires_placeholder() {
        assert_eq!(CommandTemplate::new("   "), Err(TemplateError::Empty));
        assert_eq!(
            CommandTemplate::new("hyprctl dispatch workspace"),
            Err(TemplateError::MissingPlaceholder(
                "hyprctl dispatch workspace".into()
            ))
        );
    }

    #[test]
    fn custom_template_substitutes_inside_tokens() {
        let t = CommandTemplate::new("hyprctl dispatch focusworkspaceoncurrentmonitor name:{workspace}")
            .unwrap();
        assert_eq!(
            t.command_line(WorkspaceNumber(12)),
            "hyprctl dispatch focusworkspaceoncurrentmonitor name:12"
        );
    }

    #[test]
    fn template_deserializes_from_string() {
        let t: CommandTemplate = serde_json::from_str(r#""echo {workspace}""#).unwrap();
        assert_eq!(t.command_line(WorkspaceNumber(5)), "echo 5");
        assert!(serde_json::from_str::<CommandTemplate>(r#""echo""#).is_err());
    }

    #[test]
    fn missing_binary_is_swallowed() {
        let d = HyprctlDispatcher::new(
            CommandTemplate::new("hyprheader-test-no-such-binary {workspace}").unwrap(),
        );
        d.switch_to(WorkspaceNumber(1));
    }

    #[test]
    fn failing_command_is_swallowed() {
        let d = HyprctlDispatcher::new(CommandTemplate::new("false {workspace}").unwrap());
        d.switch_to(WorkspaceNumber(2));
    }
}
