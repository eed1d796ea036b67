use std::path::Path;

use anyhow::{Context, Result, bail};
use dynform_engine::{FormSession, Navigation, SubmitOutcome};
use dynform_types::FormState;
use tracing::debug;

use super::FormSource;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_check_report;
use crate::presentation::view_models::CheckOutcome;
use crate::presentation::{CommandResultViewModel, Renderer, StatusBadge};

pub fn handle(ctx: &ExecutionContext, source: &FormSource, values_path: &Path) -> Result<()> {
    let mut session = source.open_session(ctx)?;
    let values = read_values(values_path)?;
    let ignored = unknown_fields(&session, &values);

    drive(&mut session, &values)?;

    let Some(report) = present_check_report(&session, ignored)? else {
        bail!("Form session ended in an unexpected state");
    };

    let blocked = match &report.outcome {
        CheckOutcome::Blocked { errors, .. } => Some(errors.len()),
        CheckOutcome::Submitted { .. } => None,
    };
    let badge = match blocked {
        Some(count) => StatusBadge::error(format!("{} field(s) failed validation", count)),
        None => StatusBadge::success("Form is valid"),
    };
    ctx.renderer()
        .render(CommandResultViewModel::new(report).with_badge(badge))?;

    if blocked.is_some() {
        bail!("Validation failed");
    }
    Ok(())
}

fn read_values(path: &Path) -> Result<FormState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read values file {}", path.display()))?;
    let values: FormState = serde_json::from_str(&content)
        .with_context(|| format!("Values file {} is not a JSON object of strings and booleans", path.display()))?;
    Ok(values)
}

fn unknown_fields(session: &FormSession, values: &FormState) -> Vec<String> {
    let Some(form) = session.form() else {
        return Vec::new();
    };
    values
        .iter()
        .filter(|(field_id, _)| form.find_field(field_id).is_none())
        .map(|(field_id, _)| field_id.clone())
        .collect()
}

/// Fill each section with its values and move on until blocked or submitted
fn drive(session: &mut FormSession, values: &FormState) -> Result<()> {
    loop {
        let field_ids: Vec<String> = session
            .active_section()
            .map(|section| section.fields.iter().map(|f| f.field_id.clone()).collect::<Vec<_>>())
            .unwrap_or_default();

        for field_id in &field_ids {
            if let Some(value) = values.get(field_id) {
                session.set_field_value(field_id, value.clone())?;
            }
        }

        if session.is_last_section() {
            if let SubmitOutcome::Blocked { errors } = session.submit()? {
                debug!(errors, "submit blocked");
            }
            return Ok(());
        }

        match session.go_next()? {
            Navigation::Moved { to, .. } => debug!(section = to, "section passed"),
            Navigation::Blocked { errors } => {
                debug!(errors, "section blocked");
                return Ok(());
            }
        }
    }
}
