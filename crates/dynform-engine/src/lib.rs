// Engine module - Form interpretation (validation, navigation, submission)
// This layer sits between the schema model (types) and the CLI presentation

pub mod diagnostics;
pub mod error;
pub mod session;
pub mod validation;

pub use diagnostics::{inspect_form, AnomalyKind, SchemaAnomaly};
pub use error::{SessionError, SessionResult};
pub use session::{FormSession, Navigation, Stage, SubmitOutcome, Submission};
pub use validation::{validate_field, validate_section};
