// NOTE: dynform Architecture Rationale
//
// Why a single-writer session?
// - The TUI event loop is the only code that mutates the FormSession
// - Network calls run on a tokio runtime and report back over a channel
// - Overlapping loads are rejected by the session itself (begin_load)
//
// Why interpret the schema at runtime (not generate types)?
// - Forms are issued per user by the remote service and change without notice
// - Unknown field types degrade to an "unsupported" control instead of failing
// - `dynform schema` reports those anomalies so authors can fix the document
//
// Why offline mode (--file)?
// - A saved schema can be filled or checked without the service
// - `dynform check` drives the same session logic from the command line

pub mod app;
mod args;
mod commands;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
