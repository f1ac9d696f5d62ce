//! Color Constants for the IPGeo Theme
//!
//! A cool slate scheme: dark chrome around light record cards.

use eframe::egui::Color32;

/// Main background - Dark slate
pub const BG_DARK: Color32 = Color32::from_rgb(0x1B, 0x20, 0x28);

/// Top bar background - Near black
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x12, 0x16, 0x1C);

/// Record card background - Raised slate
pub const CARD_BG: Color32 = Color32::from_rgb(0x25, 0x2C, 0x37);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xEC, 0xF1);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x98, 0xA4, 0xB3);

/// Accent color for primary actions
pub const ACCENT: Color32 = Color32::from_rgb(0x2F, 0x6F, 0xB5);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);
