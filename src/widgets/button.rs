//! A single workspace switcher button.

use crate::status::WorkspaceStatus;
use crate::traits::{WorkspaceDispatcher, WorkspaceStatusSource};
use crate::workspace::WorkspaceNumber;
use log::debug;
use std::cell::Cell;

/// Glyph shown on a button (Nerd Font symbols).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonIcon {
    /// No windows on the workspace.
    #[default]
    Empty,
    /// Windows present, not focused.
    Default,
    /// The focused workspace.
    Active,
}

impl ButtonIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ButtonIcon::Empty => "\u{eabc}",
            ButtonIcon::Default => "\u{f192}",
            ButtonIcon::Active => "\u{f111}",
        }
    }
}

impl From<WorkspaceStatus> for ButtonIcon {
    fn from(status: WorkspaceStatus) -> Self {
        match status {
            WorkspaceStatus::Empty => ButtonIcon::Empty,
            WorkspaceStatus::Occupied => ButtonIcon::Default,
            WorkspaceStatus::Focused => ButtonIcon::Active,
        }
    }
}

/// One clickable workspace slot.
///
/// The icon cell is only touched from the main thread.
#[derive(Debug)]
pub struct WorkspaceButton {
    number: WorkspaceNumber,
    icon: Cell<ButtonIcon>,
}

impl WorkspaceButton {
    /// The number is trusted as-is; the caller picks it from the monitor's
    /// assigned range.
    pub fn new(number: WorkspaceNumber, status: &dyn WorkspaceStatusSource) -> Self {
        Self {
            number,
            icon: Cell::new(status.status(number).into()),
        }
    }

    pub fn number(&self) -> WorkspaceNumber {
        self.number
    }

    pub fn icon(&self) -> ButtonIcon {
        self.icon.get()
    }

    pub fn set_icon(&self, icon: ButtonIcon) {
        self.icon.set(icon);
    }

    /// Current glyph text.
    pub fn label(&self) -> &'static str {
        self.icon.get().glyph()
    }

    /// Handle a click: ask the compositor to switch to this workspace.
    pub fn activate(&self, dispatcher: &dyn WorkspaceDispatcher) {
        debug!("workspace button {} clicked", self.number);
        dispatcher.switch_to(self.number);
    }
}
