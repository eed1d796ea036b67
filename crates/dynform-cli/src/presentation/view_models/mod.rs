pub mod common;
pub mod field;
pub mod form;
pub mod login;
pub mod report;
pub mod result;
pub mod screen;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use field::{ChoiceViewModel, FieldControl, FieldViewModel};
pub use form::{
    FormScreenViewModel, HeaderViewModel, KeyHint, NavigationViewModel, PrimaryAction,
    ProgressStepViewModel, ProgressViewModel, SectionViewModel, StatusBarViewModel, StepState,
};
pub use login::{LoginFocus, LoginResultViewModel, LoginScreenViewModel};
pub use report::{
    AnomalyEntry, CheckOutcome, CheckReportViewModel, ConfigViewModel, FieldErrorEntry,
    SchemaFieldEntry, SchemaReportViewModel, SchemaSectionEntry,
};
pub use result::CommandResultViewModel;
pub use screen::{ScreenViewModel, SubmittedEntryViewModel, SubmittedViewModel};
