//! The horizontal row of workspace buttons for one monitor.

use super::button::WorkspaceButton;
use crate::traits::WorkspaceStatusSource;
use crate::workspace::{WorkspaceAssignment, WorkspaceNumber};
use std::rc::Rc;

/// Buttons in ascending workspace order.  Fixed for the session.
#[derive(Debug)]
pub struct WorkspaceButtons {
    buttons: Vec<Rc<WorkspaceButton>>,
}

impl WorkspaceButtons {
    pub fn new(
        monitor: &str,
        assignment: &WorkspaceAssignment,
        status: &dyn WorkspaceStatusSource,
    ) -> Self {
        let buttons = assignment
            .workspaces_for(monitor)
            .into_iter()
            .map(|n| Rc::new(WorkspaceButton::new(n, status)))
            .collect();
        Self { buttons }
    }

    /// Buttons in layout order (left to right).
    pub fn buttons(&self) -> &[Rc<WorkspaceButton>] {
        &self.buttons
    }

    pub fn numbers(&self) -> Vec<WorkspaceNumber> {
        self.buttons.iter().map(|b| b.number()).collect()
    }

    pub fn button(&self, number: WorkspaceNumber) -> Option<&Rc<WorkspaceButton>> {
        self.buttons.iter().find(|b| b.number() == number)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}
