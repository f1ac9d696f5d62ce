//! Shared Types Module
//!
//! Types exchanged with the first-party service and configuration shared
//! across the app.

pub mod config;
pub mod geo;

pub use geo::{GeoRecord, IpResponse};
