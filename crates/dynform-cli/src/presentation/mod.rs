//! # Presentation Layer
//!
//! Everything between the engine and the terminal, split MVVM-style so the
//! form logic in `dynform_engine` never formats output itself.
//!
//! ```text
//! [ Handler / FillApp ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! ## Directory Guide
//!
//! * `view_models/`: serializable data contracts. `field.rs` is the field
//!   renderer: one `FieldControl` per field kind.
//! * `editing.rs`: the change handler turning key input into field values.
//! * `presenters/`: pure functions from session/schema state to ViewModels.
//! * `views/`: `fmt::Display` text views and ratatui widgets.
//! * `renderers/`: console (plain/JSON) output and the TUI event loop.
//! * `formatters/`: small string helpers shared by views and presenters.

pub mod editing;
pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
