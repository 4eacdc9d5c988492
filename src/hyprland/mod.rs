//! Hyprland-specific implementations.
//!
//! This module provides concrete backends for the
//! [`WorkspaceDispatcher`](crate::traits::WorkspaceDispatcher) and
//! [`MonitorSource`](crate::traits::MonitorSource) traits.
//!
//! Nothing outside this module should reference Hyprland directly.

pub mod dispatch;
pub mod monitors;
