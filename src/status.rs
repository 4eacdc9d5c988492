//! Workspace status and the placeholder source used until a live one exists.
//!
//! The bar was meant to track Hyprland's workspace events so each button
//! could show whether its workspace is empty, occupied, or focused.  That
//! subscription was never wired up upstream, so [`UnwiredStatusSource`]
//! reports every workspace as [`WorkspaceStatus::Empty`] and never notifies.

use crate::traits::{StatusCallback, WorkspaceStatusSource};
use crate::workspace::WorkspaceNumber;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkspaceStatus {
    #[default]
    Empty,
    /// Has windows but is not focused.
    Occupied,
    Focused,
}

/// A [`WorkspaceStatusSource`] with no backing data.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnwiredStatusSource;

impl WorkspaceStatusSource for UnwiredStatusSource {
    fn status(&self, _: WorkspaceNumber) -> WorkspaceStatus {
        WorkspaceStatus::Empty
    }

    fn subscribe(&self, workspace: WorkspaceNumber, _on_change: StatusCallback) {
        debug!("status for workspace {} is not tracked", workspace);
    }
}
