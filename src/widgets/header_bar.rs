//! The per-monitor header bar window.

use super::buttons::WorkspaceButtons;
use crate::context::BarContext;
use crate::traits::MonitorSource;
use crate::workspace::WorkspaceAssignment;
use log::{info, warn};

/// Screen edge a layer-shell surface can be anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Whether the compositor keeps other windows out of the bar's area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusivity {
    /// Reserve the bar's height on its edge.
    Exclusive,
    Normal,
}

/// One top-anchored bar on one monitor.
#[derive(Debug)]
pub struct HeaderBar {
    monitor: String,
    namespace: String,
    margin_top: i32,
    margin_sides: i32,
    spacing: i32,
    row: WorkspaceButtons,
}

impl HeaderBar {
    pub const ANCHORS: [Edge; 3] = [Edge::Top, Edge::Left, Edge::Right];

    pub fn new(monitor: &str, ctx: &BarContext) -> Self {
        let bar = &ctx.config.bar;
        Self {
            monitor: monitor.to_string(),
            namespace: bar.namespace.clone(),
            margin_top: bar.margin_top,
            margin_sides: bar.margin_sides,
            spacing: bar.spacing,
            row: WorkspaceButtons::new(monitor, &ctx.config.workspaces, ctx.status.as_ref()),
        }
    }

    /// Connector name of the monitor this bar sits on.
    pub fn monitor(&self) -> &str {
        &self.monitor
    }

    pub fn anchors(&self) -> &'static [Edge] {
        &Self::ANCHORS
    }

    pub fn exclusivity(&self) -> Exclusivity {
        Exclusivity::Exclusive
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Margin for `edge`, or `0` for edges the bar is not anchored to.
    pub fn margin(&self, edge: Edge) -> i32 {
        match edge {
            Edge::Top => self.margin_top,
            Edge::Left | Edge::Right => self.margin_sides,
            Edge::Bottom => 0,
        }
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn row(&self) -> &WorkspaceButtons {
        &self.row
    }
}

/// Log a warning for every pair of monitors that would share workspaces.
pub fn warn_overlaps(monitors: &[String], assignment: &WorkspaceAssignment) {
    for (a, b) in assignment.overlaps(monitors) {
        warn!(
            "monitors {} ({}) and {} ({}) share workspace numbers",
            a,
            assignment.range_for(a),
            b,
            assignment.range_for(b)
        );
    }
}

/// Build one bar per monitor name, in order.
pub fn bars_for(monitors: &[String], ctx: &BarContext) -> Vec<HeaderBar> {
    warn_overlaps(monitors, &ctx.config.workspaces);
    monitors
        .iter()
        .map(|m| {
            let bar = HeaderBar::new(m, ctx);
            info!(
                "bar on {:?}: workspaces {}",
                m,
                ctx.config.workspaces.range_for(m)
            );
            bar
        })
        .collect()
}

/// Enumerate monitors from `source` and build one bar for each.
pub fn plan_bars<M: MonitorSource>(source: &M, ctx: &BarContext) -> Result<Vec<HeaderBar>, M::Error> {
    let monitors = source.monitor_names()?;
    info!("found {} monitor(s)", monitors.len());
    Ok(bars_for(&monitors, ctx))
}
