//! **hyprheader**: a per-monitor header bar with workspace buttons for
//! Hyprland.
//!
//! Every connected monitor gets a top-anchored, exclusive layer-shell bar
//! holding one button per workspace assigned to that monitor.  Clicking a
//! button runs `hyprctl dispatch workspace <N>` and forgets about it.
//!
//! # Architecture
//!
//! * [`workspace`]: the monitor → workspace range assignment.
//! * [`widgets`]: toolkit-independent models of the bar, its row, and its
//!   buttons.
//! * [`traits`]: the seams those models talk through:
//!   [`WorkspaceDispatcher`](traits::WorkspaceDispatcher),
//!   [`MonitorSource`](traits::MonitorSource) and
//!   [`WorkspaceStatusSource`](traits::WorkspaceStatusSource).
//! * [`hyprland`]: `hyprctl` dispatch and IPC monitor listing.
//! * [`ui`]: the GTK4 + layer-shell renderer (feature `bar-gtk`).

pub mod config;
pub mod context;
pub mod hyprland;
pub mod status;
pub mod traits;
pub mod ui;
pub mod widgets;
pub mod workspace;
