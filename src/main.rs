//! Entry point for the **hyprheader** bar.
//!
//! With the `bar-gtk` feature the main thread runs the GLib main loop and
//! shows one bar per GDK monitor.  Without it, monitors are listed over
//! Hyprland IPC and the planned bars are logged.
//!
//! Pass `--dry-run` to log the switch command instead of running it.

use hyprheader::config::Config;
use hyprheader::context::BarContext;
use hyprheader::status::UnwiredStatusSource;
use log::info;
use std::rc::Rc;

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprheader`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("hyprheader")
}

/// Try to load the config from `$XDG_CONFIG_HOME/hyprheader/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

/// Resolve the CSS stylesheet path.
#[cfg(feature = "bar-gtk")]
fn css_path() -> std::path::PathBuf {
    config_dir().join("style.css")
}

//  Logging dispatcher (--dry-run) 

mod logging_dispatch {
    use hyprheader::hyprland::dispatch::CommandTemplate;
    use hyprheader::traits::WorkspaceDispatcher;
    use hyprheader::workspace::WorkspaceNumber;
    use log::info;

    pub struct LoggingDispatcher(pub CommandTemplate);

    impl WorkspaceDispatcher for LoggingDispatcher {
        fn switch_to(&self, workspace: WorkspaceNumber) {
            info!("dry run: {}", self.0.command_line(workspace));
        }
    }
}

//  Main 

fn main() {
    env_logger::init();

    let dry_run = std::env::args().any(|a| a == "--dry-run");
    let config = load_config();

    let ctx = if dry_run {
        info!("dry run: workspace switches are logged, not executed");
        let dispatcher = logging_dispatch::LoggingDispatcher(config.dispatch.command.clone());
        BarContext::new(config, Rc::new(dispatcher), Rc::new(UnwiredStatusSource))
    } else {
        BarContext::hyprland(config)
    };

    run(ctx);
}

#[cfg(feature = "bar-gtk")]
fn run(ctx: BarContext) {
    if let Err(e) = hyprheader::ui::gtk::run_main_loop(ctx, Some(css_path())) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "bar-gtk"))]
fn run(ctx: BarContext) {
    use hyprheader::hyprland::monitors::HyprlandMonitors;
    use hyprheader::widgets::plan_bars;

    match plan_bars(&HyprlandMonitors::new(), &ctx) {
        Ok(bars) => {
            for bar in &bars {
                let numbers: Vec<String> =
                    bar.row().numbers().iter().map(|n| n.to_string()).collect();
                info!("{}: [{}]", bar.monitor(), numbers.join(", "));
            }
            info!("built without `bar-gtk`, nothing to show");
        }
        Err(e) => {
            log::error!("failed to query monitors: {}", e);
            std::process::exit(1);
        }
    }
}
