//! [`MonitorSource`] implementation backed by Hyprland IPC.
//!
//! Talks to Hyprland through its Unix socket at
//! `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`.
//! Used when the bar runs without GTK and has no `gdk::Display` to ask.

use crate::traits::MonitorSource;
use serde::Deserialize;
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

/// Lists monitors via Hyprland's `j/monitors` query.
#[derive(Debug, Default, Clone, Copy)]
pub struct HyprlandMonitors;

/// Errors that can occur when talking to Hyprland.
#[derive(Debug, thiserror::Error)]
#[error("hyprland IPC error: {0}")]
pub struct HyprlandIpcError(String);

impl HyprlandMonitors {
    pub fn new() -> Self {
        Self
    }
}

/// Resolve the Hyprland command socket path.
fn socket_path() -> Result<PathBuf, HyprlandIpcError> {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
        .map_err(|_| HyprlandIpcError("XDG_RUNTIME_DIR not set".into()))?;
    let his = std::env::var("HYPRLAND_INSTANCE_SIGNATURE")
        .map_err(|_| HyprlandIpcError("HYPRLAND_INSTANCE_SIGNATURE not set".into()))?;
    Ok(PathBuf::from(runtime_dir)
        .join("hypr")
        .join(his)
        .join(".socket.sock"))
}

/// Send a raw request and return the whole response.
fn ipc_request(request: &str) -> Result<String, HyprlandIpcError> {
    let path = socket_path()?;
    let mut stream = UnixStream::connect(&path)
        .map_err(|e| HyprlandIpcError(format!("connect to {}: {}", path.display(), e)))?;

    stream
        .write_all(request.as_bytes())
        .map_err(|e| HyprlandIpcError(format!("write: {}", e)))?;

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .map_err(|e| HyprlandIpcError(format!("read: {}", e)))?;

    String::from_utf8(response).map_err(|e| HyprlandIpcError(format!("utf-8: {}", e)))
}

/// Subset of the JSON object returned by `j/monitors`.
#[derive(Deserialize)]
struct MonitorJson {
    name: String,
}

/// Connector names from a `j/monitors` response, in reported order.
fn parse_monitors(json: &str) -> Result<Vec<String>, HyprlandIpcError> {
    let monitors: Vec<MonitorJson> =
        serde_json::from_str(json).map_err(|e| HyprlandIpcError(format!("parse: {}", e)))?;
    Ok(monitors.into_iter().map(|m| m.name).collect())
}

impl MonitorSource for HyprlandMonitors {
    type Error = HyprlandIpcError;

    fn monitor_names(&self) -> Result<Vec<String>, Self::Error> {
        parse_monitors(&ipc_request("j/monitors")?)
    }
}
