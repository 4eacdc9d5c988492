//! Toolkit-independent models of the bar's widgets.
//!
//! ```text
//! HeaderBar            (one per monitor)
//! └ WorkspaceButtons   (horizontal row)
//!     └ WorkspaceButton × N
//! ```
//!
//! The GTK front-end in [`ui`](crate::ui) renders these models one-to-one.

pub mod button;
pub mod buttons;
pub mod header_bar;

pub use button::{ButtonIcon, WorkspaceButton};
pub use buttons::WorkspaceButtons;
pub use header_bar::{plan_bars, Edge, Exclusivity, HeaderBar};
