//! Form session state machine
//!
//! A `FormSession` owns everything that changes while a user fills in a
//! form: the loaded schema, the active section, the values entered so far
//! and the current validation errors. Presentation code reads it through
//! accessors and changes it only through the operations below.
//!
//! ## Stages:
//! - `Idle`: nothing requested yet
//! - `Loading`: a schema fetch is in flight; a second load is rejected
//! - `Failed`: the fetch failed; no form is kept
//! - `Ready`: a form is loaded and section navigation is possible
//! - `Submitted`: terminal; carries the final values

use chrono::{DateTime, Utc};
use dynform_types::{FieldValue, Form, FormResponse, FormState, Section, ValidationErrors};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{SessionError, SessionResult};
use crate::validation::{validate_field, validate_section};

/// Finished form payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub form_id: String,
    pub version: String,
    pub values: FormState,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Idle,
    Loading,
    Failed(String),
    Ready,
    Submitted(Submission),
}

/// Result of a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    /// Validation failed; `errors` fields need attention
    Blocked { errors: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted(Submission),
    Blocked { errors: usize },
}

#[derive(Debug, Clone)]
pub struct FormSession {
    stage: Stage,
    form: Option<Form>,
    section_index: usize,
    values: FormState,
    errors: ValidationErrors,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            stage: Stage::Idle,
            form: None,
            section_index: 0,
            values: FormState::new(),
            errors: ValidationErrors::new(),
        }
    }

    /// Session that is immediately ready with an already fetched schema
    pub fn from_response(response: FormResponse) -> Self {
        let mut session = Self::new();
        session.stage = Stage::Loading;
        session.complete_load(Ok(response));
        session
    }

    /// Mark a schema fetch as started.
    ///
    /// Any previously loaded form, values and errors are dropped so a failed
    /// fetch can never leave a stale form next to fresh state.
    pub fn begin_load(&mut self) -> SessionResult<()> {
        if self.stage == Stage::Loading {
            warn!("rejected form load: another load is in flight");
            return Err(SessionError::LoadInProgress);
        }

        self.stage = Stage::Loading;
        self.reset_state();
        Ok(())
    }

    /// Finish a fetch started with [`FormSession::begin_load`].
    ///
    /// A response without sections counts as a failure. The response's
    /// `success` flag is not consulted; transport and status failures arrive
    /// as `Err`.
    pub fn complete_load(&mut self, result: Result<FormResponse, String>) {
        if self.stage != Stage::Loading {
            warn!("ignored form load result: no load in flight");
            return;
        }

        self.reset_state();

        match result {
            Ok(response) if response.form.sections.is_empty() => {
                self.fail(format!("Form '{}' has no sections", response.form.form_id));
            }
            Ok(response) => {
                info!(
                    form_id = %response.form.form_id,
                    sections = response.form.sections.len(),
                    "form loaded"
                );
                self.form = Some(response.form);
                self.stage = Stage::Ready;
            }
            Err(message) => self.fail(message),
        }
    }

    /// Store a value and refresh that field's error.
    ///
    /// The field definition is looked up in the active section only; a value
    /// for a field elsewhere is stored but not validated.
    pub fn set_field_value(
        &mut self,
        field_id: &str,
        value: impl Into<FieldValue>,
    ) -> SessionResult<()> {
        let section = self.ready_section()?;
        let value = value.into();
        let message = section
            .field(field_id)
            .map(|field| validate_field(field, Some(&value)));

        self.values.set(field_id, value);
        if let Some(message) = message {
            self.errors.set(field_id, message);
        }
        Ok(())
    }

    /// Validate the active section and move forward if it passes
    pub fn go_next(&mut self) -> SessionResult<Navigation> {
        if self.is_last_section() {
            self.ready_section()?;
            return Err(SessionError::NoNextSection);
        }

        if let Some(blocked) = self.check_active_section()? {
            return Ok(blocked);
        }

        let from = self.section_index;
        self.section_index += 1;
        debug!(from, to = self.section_index, "advanced section");
        Ok(Navigation::Moved {
            from,
            to: self.section_index,
        })
    }

    /// Step back one section without re-validating
    pub fn go_previous(&mut self) -> SessionResult<Navigation> {
        self.ready_section()?;

        let from = self.section_index;
        self.section_index = self.section_index.saturating_sub(1);
        Ok(Navigation::Moved {
            from,
            to: self.section_index,
        })
    }

    /// Validate the last section and finish the session if it passes
    pub fn submit(&mut self) -> SessionResult<SubmitOutcome> {
        self.ready_section()?;
        if !self.is_last_section() {
            return Err(SessionError::NotOnLastSection);
        }

        if let Some(Navigation::Blocked { errors }) = self.check_active_section()? {
            return Ok(SubmitOutcome::Blocked { errors });
        }

        let Some(form) = &self.form else {
            return Err(SessionError::NotReady);
        };
        let submission = Submission {
            form_id: form.form_id.clone(),
            version: form.version.clone(),
            values: self.values.clone(),
            submitted_at: Utc::now(),
        };
        info!(
            form_id = %submission.form_id,
            fields = submission.values.len(),
            "form submitted"
        );
        self.stage = Stage::Submitted(submission.clone());
        Ok(SubmitOutcome::Submitted(submission))
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn is_loading(&self) -> bool {
        self.stage == Stage::Loading
    }

    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }

    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn active_section(&self) -> Option<&Section> {
        self.form
            .as_ref()
            .and_then(|f| f.sections.get(self.section_index))
    }

    pub fn is_first_section(&self) -> bool {
        self.section_index == 0
    }

    pub fn is_last_section(&self) -> bool {
        self.form
            .as_ref()
            .is_some_and(|f| self.section_index + 1 >= f.sections.len())
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn value_of(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    pub fn error_for(&self, field_id: &str) -> Option<&str> {
        self.errors.get(field_id)
    }

    fn ready_section(&self) -> SessionResult<&Section> {
        if self.stage != Stage::Ready {
            return Err(SessionError::NotReady);
        }
        self.active_section().ok_or(SessionError::NotReady)
    }

    /// Replace errors with the active section's result; `Some` when blocked
    fn check_active_section(&mut self) -> SessionResult<Option<Navigation>> {
        let errors = validate_section(self.ready_section()?, &self.values);

        if errors.is_empty() {
            self.errors.clear();
            return Ok(None);
        }

        let count = errors.len();
        debug!(section = self.section_index, errors = count, "section blocked");
        self.errors = errors;
        Ok(Some(Navigation::Blocked { errors: count }))
    }

    fn reset_state(&mut self) {
        self.form = None;
        self.section_index = 0;
        self.values = FormState::new();
        self.errors = ValidationErrors::new();
    }

    fn fail(&mut self, message: String) {
        warn!(%message, "form load failed");
        self.stage = Stage::Failed(message);
    }
}
