//! Application configuration.
//!
//! The configuration is loaded from `$XDG_CONFIG_HOME/hyprheader/config.json`.
//! Every section is optional and falls back to its compiled-in default, so a
//! minimal `{}` file is valid.
//!
//! # Example
//!
//! ```json
//! {
//!   "workspaces": {
//!     "default": { "first": 1, "last": 10 },
//!     "overrides": { "HDMI-A-1": { "first": 11, "last": 15 } }
//!   },
//!   "dispatch": { "command": "hyprctl dispatch workspace {workspace}" },
//!   "bar": { "namespace": "header-bar", "margin_top": 8, "margin_sides": 8 }
//! }
//! ```

use crate::hyprland::dispatch::CommandTemplate;
use crate::workspace::WorkspaceAssignment;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Monitor → workspace range mapping.
    #[serde(default)]
    pub workspaces: WorkspaceAssignment,

    /// How workspace switches are issued.
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Header bar window settings.
    #[serde(default)]
    pub bar: BarConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Command run on click; must contain `{workspace}`.
    pub command: CommandTemplate,
}

/// Header bar window settings.  Margins and spacing are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Layer-shell namespace, visible to Hyprland `layerrule`s.
    pub namespace: String,
    /// Gap between the top screen edge and the bar.
    pub margin_top: i32,
    /// Gap between the left/right screen edges and the bar.
    pub margin_sides: i32,
    /// Space between workspace buttons.
    pub spacing: i32,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            namespace: "header-bar".into(),
            margin_top: 8,
            margin_sides: 8,
            spacing: 0,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::{WorkspaceNumber, WorkspaceRange};

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "workspaces": {
                "default": { "first": 1, "last": 4 },
                "overrides": {
                    "DP-1": { "first": 5, "last": 8 },
                    "DP-2": { "first": 9, "last": 9 }
                }
            },
            "dispatch": { "command": "hyprctl dispatch focusworkspaceoncurrentmonitor {workspace}" },
            "bar": { "namespace": "top", "margin_top": 0, "margin_sides": 4, "spacing": 2 }
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.workspaces.range_for("eDP-1"), WorkspaceRange::new(1, 4).unwrap());
        assert_eq!(cfg.workspaces.range_for("DP-1"), WorkspaceRange::new(5, 8).unwrap());
        assert_eq!(cfg.workspaces.range_for("DP-2"), WorkspaceRange::new(9, 9).unwrap());
        // An explicit overrides map replaces the built-in one.
        assert_eq!(cfg.workspaces.range_for("HDMI-A-1"), WorkspaceRange::new(1, 4).unwrap());
        assert_eq!(
            cfg.dispatch.command.command_line(WorkspaceNumber(2)),
            "hyprctl dispatch focusworkspaceoncurrentmonitor 2"
        );
        assert_eq!(cfg.bar.namespace, "top");
        assert_eq!(cfg.bar.margin_top, 0);
        assert_eq!(cfg.bar.margin_sides, 4);
        assert_eq!(cfg.bar.spacing, 2);
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.workspaces, WorkspaceAssignment::default());
        assert_eq!(cfg.dispatch.command, CommandTemplate::default());
        assert_eq!(cfg.bar, BarConfig::default());
    }

    #[test]
    fn deserialize_partial_bar() {
        let cfg: Config = serde_json::from_str(r#"{ "bar": { "spacing": 6 } }"#).unwrap();
        assert_eq!(cfg.bar.spacing, 6);
        assert_eq!(cfg.bar.namespace, BarConfig::default().namespace);
    }

    #[test]
    fn invalid_range_is_rejected() {
        let json = r#"{ "workspaces": { "default": { "first": 10, "last": 1 } } }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let json = r#"{ "dispatch": { "command": "hyprctl dispatch workspace" } }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "bar": {}, "future_section": { "key": 42 } }"#;
        let _cfg: Config = serde_json::from_str(json).unwrap();
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "hyprheader-missing-{}.json",
            std::process::id()
        ));
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "hyprheader-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "bar": { "namespace": "from-file" } }"#).unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.bar.namespace, "from-file");
        let _ = std::fs::remove_file(&path);
    }
}
