//! Core traits that decouple the bar from Hyprland and from GTK.
//!
//! The widget models in [`widgets`](crate::widgets) only depend on these
//! abstractions; concrete backends live in [`hyprland`](crate::hyprland)
//! and [`status`](crate::status).

use crate::status::WorkspaceStatus;
use crate::workspace::WorkspaceNumber;

/// Requests a workspace switch from the compositor.
///
/// # Contract
///
/// * Fire-and-forget: the call returns immediately and reports nothing back.
/// * Implementations must never panic.  Failures (missing binary, no running
///   compositor, non-zero exit) are logged and dropped.
pub trait WorkspaceDispatcher {
    fn switch_to(&self, workspace: WorkspaceNumber);
}

/// Enumerates connected monitors by connector name.
pub trait MonitorSource {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Connector names in the order the backend reports them.
    fn monitor_names(&self) -> Result<Vec<String>, Self::Error>;
}

/// Callback invoked when a workspace's status changes.
pub type StatusCallback = Box<dyn Fn(WorkspaceStatus)>;

/// Reports whether a workspace is empty, occupied, or focused.
///
/// Buttons read [`status`](Self::status) once when they are built and then
/// [`subscribe`](Self::subscribe) for updates.
pub trait WorkspaceStatusSource {
    fn status(&self, workspace: WorkspaceNumber) -> WorkspaceStatus;

    /// Register `on_change` to be called whenever the status of `workspace`
    /// changes.  Sources that cannot observe changes may drop the callback.
    fn subscribe(&self, workspace: WorkspaceNumber, on_change: StatusCallback);
}
