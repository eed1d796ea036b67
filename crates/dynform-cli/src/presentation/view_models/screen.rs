use serde::Serialize;

use super::form::{FormScreenViewModel, HeaderViewModel, KeyHint};
use super::login::LoginScreenViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedEntryViewModel {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedViewModel {
    pub header: HeaderViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    pub message: String,
    pub submitted_at: String,
    pub entries: Vec<SubmittedEntryViewModel>,
}

/// One full TUI frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenViewModel {
    Login(LoginScreenViewModel),
    Loading { message: String },
    Form(Box<FormScreenViewModel>),
    Failed { message: String, hints: Vec<KeyHint> },
    Submitted(SubmittedViewModel),
}
