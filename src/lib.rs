//! IPGeo - Main Library
//!
//! IPGeo is a native desktop client for an IP-geolocation lookup service:
//! register an account, hold a bearer-token session, look up the geolocation
//! of your own public IP or of any searched IP, and browse the search history
//! the service keeps for your account.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared with the first-party service
//!   - The geolocation record and wire payloads
//!   - Configuration types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Login/register/home views
//!   - IP validation
//!   - HTTP clients for the discovery, geolocation, history, and auth
//!     endpoints
//!
//! # Thread Safety
//!
//! The GUI is single-threaded immediate mode; network calls run on worker
//! threads and report back over `mpsc` channels polled once per frame.

/// Types shared with the first-party service
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
