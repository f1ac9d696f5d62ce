//! Visual theme for the app.

pub mod colors;
