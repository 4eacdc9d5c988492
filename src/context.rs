//! The explicit application handle passed to every bar constructor.

use crate::config::Config;
use crate::hyprland::dispatch::HyprctlDispatcher;
use crate::status::UnwiredStatusSource;
use crate::traits::{WorkspaceDispatcher, WorkspaceStatusSource};
use std::rc::Rc;

/// Loaded configuration plus the backends buttons talk to.
///
/// Lives for the whole session on the main thread.  Cloning is cheap and
/// shares the backends.
#[derive(Clone)]
pub struct BarContext {
    pub config: Rc<Config>,
    pub dispatcher: Rc<dyn WorkspaceDispatcher>,
    pub status: Rc<dyn WorkspaceStatusSource>,
}

impl BarContext {
    pub fn new(
        config: Config,
        dispatcher: Rc<dyn WorkspaceDispatcher>,
        status: Rc<dyn WorkspaceStatusSource>,
    ) -> Self {
        Self {
            config: Rc::new(config),
            dispatcher,
            status,
        }
    }

    /// Context wired to `hyprctl` using the configured command template.
    pub fn hyprland(config: Config) -> Self {
        let dispatcher = HyprctlDispatcher::new(config.dispatch.command.clone());
        Self::new(config, Rc::new(dispatcher), Rc::new(UnwiredStatusSource))
    }
}
