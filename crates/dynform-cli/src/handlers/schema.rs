use anyhow::Result;
use dynform_engine::inspect_form;

use super::FormSource;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_schema_report;
use crate::presentation::{CommandResultViewModel, Guidance, Renderer, StatusBadge};

pub fn handle(ctx: &ExecutionContext, source: &FormSource) -> Result<()> {
    let response = source.fetch(ctx)?;
    let anomalies = inspect_form(&response.form);
    let report = present_schema_report(&response.form, &anomalies);

    let mut result = CommandResultViewModel::new(report);
    result = if anomalies.is_empty() {
        result.with_badge(StatusBadge::success("Schema looks good"))
    } else {
        result
            .with_badge(StatusBadge::warning(format!(
                "{} schema anomal{} found",
                anomalies.len(),
                if anomalies.len() == 1 { "y" } else { "ies" }
            )))
            .with_suggestion(Guidance::new(
                "Affected fields still render, with a fallback control",
            ))
    };

    ctx.renderer().render(result)
}
