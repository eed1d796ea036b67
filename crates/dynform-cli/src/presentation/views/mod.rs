// Views contain the formatting logic that turns ViewModels into output:
// `text` for console commands, `tui` for the interactive screens.

pub mod text;
pub mod tui;

pub use text::{CheckReportView, SchemaReportView};
