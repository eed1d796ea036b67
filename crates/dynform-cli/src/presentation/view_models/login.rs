use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginFocus {
    #[default]
    RollNumber,
    Name,
    Submit,
}

impl LoginFocus {
    pub fn next(self) -> Self {
        match self {
            LoginFocus::RollNumber => LoginFocus::Name,
            LoginFocus::Name => LoginFocus::Submit,
            LoginFocus::Submit => LoginFocus::RollNumber,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            LoginFocus::RollNumber => LoginFocus::Submit,
            LoginFocus::Name => LoginFocus::RollNumber,
            LoginFocus::Submit => LoginFocus::Name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginScreenViewModel {
    pub roll_number: String,
    pub name: String,
    pub focus: LoginFocus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub pending: bool,
    /// "Login", or "Logging in..." while the request is pending
    pub button_label: String,
}

/// Output of `dynform login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginResultViewModel {
    pub roll_number: String,
    pub name: String,
    pub banner: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl fmt::Display for LoginResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.banner)?;
        if !self.message.is_empty() {
            writeln!(f, "Server: {}", self.message)?;
        }
        Ok(())
    }
}
