//! Renderers for confdiff reports.
//!
//! Two output shapes over a [`confdiff_core::DiffReport`]: colored text for
//! terminals ([`render_text`]) and pretty-printed JSON for machine
//! consumption ([`render_json`]).

pub mod error;
pub mod json;
pub mod text;

pub use error::RenderError;
pub use json::render_json;
pub use text::{record_line, render_text};
