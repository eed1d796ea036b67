//! TUI View Components
//!
//! Ratatui Widget implementations for the fill screens. Each component is a
//! thin wrapper around a ViewModel that implements the Widget trait.
//!
//! ## Design Principles:
//! - Views take a reference to ViewModel (no ownership)
//! - NO validation or navigation logic, only layout and styling
//! - Color mapping from StatusLevel to Ratatui colors happens here

pub mod header;
pub mod login;
pub mod message;
pub mod progress;
pub mod section;
pub mod status_bar;
pub mod submitted;

pub use header::HeaderView;
pub use login::LoginView;
pub use message::MessageView;
pub use progress::ProgressView;
pub use section::SectionView;
pub use status_bar::StatusBarView;
pub use submitted::SubmittedView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
