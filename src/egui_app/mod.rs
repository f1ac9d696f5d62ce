//! egui Native Desktop App Module
//!
//! This module provides the native desktop client built with egui/eframe.
//! It talks to two fixed third-party endpoints (own-IP discovery and
//! IP-to-geolocation resolution) and to the first-party REST service for
//! registration, logout, and the persisted search history.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports
//! ├── main.rs         - Main application entry point (binary)
//! ├── config.rs       - Configuration and session token
//! ├── validator.rs    - IP address classification
//! ├── types.rs        - Views, panel states, request payloads
//! ├── auth.rs         - Register/logout API client functions
//! ├── geo_api.rs      - Third-party discovery and geolocation client
//! ├── history_api.rs  - First-party search-history client
//! ├── state/          - Central app state and frame-level polling
//! ├── views/          - Login, register, and home views
//! └── theme/          - Color constants
//! ```

pub mod auth;
pub mod config;
pub mod geo_api;
pub mod history_api;
pub mod state;
pub mod theme;
pub mod types;
pub mod validator;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use types::{AppView, GeoPanelState, SearchPanelState};
pub use validator::{classify_ip, is_valid_ip, IpKind};
