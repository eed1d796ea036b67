use serde::Serialize;

use super::common::StatusLevel;
use super::field::FieldViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderViewModel {
    pub title: String,
    /// `Form ID: {id} | Version: {version}`
    pub subtitle: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressStepViewModel {
    /// Check mark for completed steps, the 1-based number otherwise
    pub marker: String,
    pub title: String,
    pub state: StepState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressViewModel {
    pub steps: Vec<ProgressStepViewModel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryAction {
    Next,
    Submit,
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::Next => "Next",
            PrimaryAction::Submit => "Submit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationViewModel {
    pub show_previous: bool,
    pub primary: PrimaryAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionViewModel {
    pub title: String,
    pub description: String,
    pub fields: Vec<FieldViewModel>,
    pub focused: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBarViewModel {
    pub level: StatusLevel,
    pub message: String,
    pub hints: Vec<KeyHint>,
}

/// Everything the form screen draws for the active section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormScreenViewModel {
    pub header: HeaderViewModel,
    /// `Logged in as: ...` once a user signed in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Absent for single-section forms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressViewModel>,
    pub section: SectionViewModel,
    pub navigation: NavigationViewModel,
    pub status_bar: StatusBarViewModel,
}
