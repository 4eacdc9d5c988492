//! GTK4 + layer-shell front-end that runs on the **main thread**.
//!
//! # Widget tree
//!
//! ```text
//! window.header-bar                 (layer-shell, top, exclusive)
//! └ .workspace-buttons-wrapper    (horizontal GtkBox)
//!     └ button.workspace-button   (one per workspace)
//!         └ .workspace-button-icon (label with the icon glyph)
//! ```
//!
//! # CSS selectors
//!
//! | Selector                     | Targets                               |
//! |------------------------------|---------------------------------------|
//! | `window.header-bar`          | The bar window                        |
//! | `.workspace-buttons-wrapper` | The row of buttons                    |
//! | `.workspace-button`          | Every workspace button                |
//! | `.workspace-button-icon`     | The glyph inside a button             |
//! | `.rounded`                   | Window and buttons (rounded corners)  |

use crate::context::BarContext;
use crate::widgets::header_bar::{bars_for, Edge, Exclusivity, HeaderBar};
use crate::widgets::{ButtonIcon, WorkspaceButton};
use gtk4::prelude::*;
use gtk4::{gdk, glib};
use gtk4_layer_shell::LayerShell;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::rc::Rc;

//  Default CSS 

const DEFAULT_CSS: &str = r#"
window.header-bar {
    background-color: rgba(20, 20, 24, 0.85);
    color: #e6e6e6;
}

.rounded {
    border-radius: 10px;
}

.workspace-buttons-wrapper {
    margin: 0 8px;
}

.workspace-button {
    min-width: 24px;
    min-height: 24px;
    padding: 2px 6px;
    background: none;
    border: none;
    box-shadow: none;
}

.workspace-button:hover {
    background-color: rgba(255, 255, 255, 0.12);
}

.workspace-button-icon {
    font-family: "Symbols Nerd Font", monospace;
    font-size: 14px;
}
"#;

/// Error raised when the bar cannot start.
#[derive(Debug, thiserror::Error)]
pub enum BarError {
    #[error("failed to initialise GTK4: {0}")]
    Init(#[from] glib::BoolError),
    #[error("no GDK display")]
    NoDisplay,
}

//  Rendering 

fn layer_edge(edge: Edge) -> gtk4_layer_shell::Edge {
    match edge {
        Edge::Top => gtk4_layer_shell::Edge::Top,
        Edge::Bottom => gtk4_layer_shell::Edge::Bottom,
        Edge::Left => gtk4_layer_shell::Edge::Left,
        Edge::Right => gtk4_layer_shell::Edge::Right,
    }
}

fn build_button(model: Rc<WorkspaceButton>, ctx: &BarContext) -> gtk4::Button {
    let label = gtk4::Label::new(Some(model.label()));
    label.add_css_class("workspace-button-icon");

    let button = gtk4::Button::new();
    button.add_css_class("workspace-button");
    button.add_css_class("rounded");
    button.set_child(Some(&label));
    button.set_tooltip_text(Some(&model.number().to_string()));

    {
        let model = model.clone();
        let label = label.clone();
        ctx.status.subscribe(
            model.number(),
            Box::new(move |status| {
                model.set_icon(ButtonIcon::from(status));
                label.set_label(model.label());
            }),
        );
    }

    let dispatcher = ctx.dispatcher.clone();
    button.connect_clicked(move |_| model.activate(dispatcher.as_ref()));
    button
}

fn build_window(bar: &HeaderBar, monitor: &gdk::Monitor, ctx: &BarContext) -> gtk4::Window {
    let window = gtk4::Window::new();
    window.init_layer_shell();
    window.set_layer(gtk4_layer_shell::Layer::Top);
    window.set_namespace(bar.namespace());
    window.set_monitor(monitor);
    window.set_keyboard_mode(gtk4_layer_shell::KeyboardMode::None);
    window.set_decorated(false);

    for &edge in bar.anchors() {
        window.set_anchor(layer_edge(edge), true);
        window.set_margin(layer_edge(edge), bar.margin(edge));
    }
    if bar.exclusivity() == Exclusivity::Exclusive {
        window.auto_exclusive_zone_enable();
    }

    window.add_css_class("header-bar");
    window.add_css_class("rounded");

    let row = gtk4::Box::new(gtk4::Orientation::Horizontal, bar.spacing());
    row.add_css_class("workspace-buttons-wrapper");
    row.set_halign(gtk4::Align::Start);
    row.set_hexpand(true);
    for model in bar.row().buttons() {
        row.append(&build_button(model.clone(), ctx));
    }
    window.set_child(Some(&row));
    window
}

/// `gdk::Monitor`s of `display` with their connector names.
///
/// A monitor without a connector gets `""`, which maps to the default range.
fn monitors(display: &gdk::Display) -> Vec<(String, gdk::Monitor)> {
    let list = display.monitors();
    (0..list.n_items())
        .filter_map(|i| list.item(i).and_downcast::<gdk::Monitor>())
        .map(|m| {
            let name = m.connector().map(|c| c.to_string()).unwrap_or_default();
            (name, m)
        })
        .collect()
}

//  Public API 

/// Open one header bar per connected monitor and run the GLib main loop on
/// the **current** (main) thread.
pub fn run_main_loop(ctx: BarContext, css_path: Option<PathBuf>) -> Result<(), BarError> {
    gtk4::init()?;
    info!("GTK4 initialised on main thread");

    let display = gdk::Display::default().ok_or(BarError::NoDisplay)?;
    load_css(&display, &css_path);

    let monitors = monitors(&display);
    if monitors.is_empty() {
        warn!("no monitors connected");
    }

    let names: Vec<String> = monitors.iter().map(|(n, _)| n.clone()).collect();
    let bars = bars_for(&names, &ctx);

    for (bar, (_, monitor)) in bars.iter().zip(&monitors) {
        let window = build_window(bar, monitor, &ctx);
        window.present();
        debug!("presented bar on {:?}", bar.monitor());
    }
    info!("{} bar(s) shown", bars.len());

    info!("entering GLib main loop");
    let main_loop = glib::MainLoop::new(None, false);
    main_loop.run();
    info!("GLib main loop exited");
    Ok(())
}

//  CSS loading 

fn load_css(display: &gdk::Display, css_path: &Option<PathBuf>) {
    let provider = gtk4::CssProvider::new();

    let css_content = match css_path.as_ref().filter(|p| p.exists()) {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(content) => {
                info!("user CSS: {} ({} bytes)", p.display(), content.len());
                content
            }
            Err(e) => {
                warn!("CSS read failed ({}): {}, using built-in", p.display(), e);
                DEFAULT_CSS.to_string()
            }
        },
        None => {
            info!("no user CSS, using built-in default");
            DEFAULT_CSS.to_string()
        }
    };

    #[allow(deprecated)]
    provider.load_from_data(&css_content);

    gtk4::style_context_add_provider_for_display(
        display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
    info!("CSS registered on display");
}
