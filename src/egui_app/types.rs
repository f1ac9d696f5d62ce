//! Shared types for the egui app: view routing, per-panel states, and
//! request payloads.

use serde::{Deserialize, Serialize};

use crate::shared::geo::GeoRecord;

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login screen (default)
    Login,
    /// Account registration screen
    Register,
    /// Geolocation dashboard; requires a session
    Home,
}

/// Registration form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Lifecycle of the own-geo panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoPanelState {
    Idle,
    Loading,
    Ready(GeoRecord),
    Failed(String),
}

/// Lifecycle of the searched-geo panel.
///
/// Invalid input and lookup failure are distinct variants, so the panel
/// can never claim both at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPanelState {
    Idle,
    Loading,
    Ready(GeoRecord),
    InvalidIp,
    LookupFailed(String),
}
