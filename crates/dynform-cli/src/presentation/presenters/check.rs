use anyhow::Result;
use dynform_engine::{FormSession, Stage};

use crate::presentation::view_models::{CheckOutcome, CheckReportViewModel, FieldErrorEntry};

/// Summarise where a non-interactive run ended.
///
/// The session is either submitted or still ready with the blocking
/// section active; `None` for any other stage.
pub fn present_check_report(
    session: &FormSession,
    ignored_values: Vec<String>,
) -> Result<Option<CheckReportViewModel>> {
    let Some(form) = session.form() else {
        return Ok(None);
    };

    let (sections_passed, outcome) = match session.stage() {
        Stage::Submitted(submission) => (
            form.section_count(),
            CheckOutcome::Submitted {
                submission: serde_json::to_value(submission)?,
            },
        ),
        Stage::Ready => {
            let Some(section) = session.active_section() else {
                return Ok(None);
            };
            let errors = section
                .fields
                .iter()
                .filter_map(|field| {
                    let message = session.error_for(&field.field_id)?;
                    Some(FieldErrorEntry {
                        field_id: field.field_id.clone(),
                        label: field.label.clone(),
                        message: message.to_string(),
                    })
                })
                .collect();
            (
                session.section_index(),
                CheckOutcome::Blocked {
                    section_id: section.section_id.clone(),
                    section_title: section.title.clone(),
                    errors,
                },
            )
        }
        _ => return Ok(None),
    };

    Ok(Some(CheckReportViewModel {
        form_id: form.form_id.clone(),
        version: form.version.clone(),
        sections_passed,
        section_count: form.section_count(),
        outcome,
        ignored_values,
    }))
}
