//! Front-ends that render the widget models.
//!
//! When the `bar-gtk` feature is enabled, [`gtk::run_main_loop`] takes over
//! the main thread, opens one layer-shell window per monitor, and runs the
//! GLib main loop.

#[cfg(feature = "bar-gtk")]
pub mod gtk;
