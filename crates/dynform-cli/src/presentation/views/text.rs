use std::fmt;

use crate::presentation::view_models::{
    CheckOutcome, CheckReportViewModel, ConfigViewModel, SchemaReportViewModel,
};

// --------------------------------------------------------
// Schema Report View
// --------------------------------------------------------

pub struct SchemaReportView<'a> {
    data: &'a SchemaReportViewModel,
}

impl<'a> SchemaReportView<'a> {
    pub fn new(data: &'a SchemaReportViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SchemaReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.form_title)?;
        writeln!(
            f,
            "Form ID: {} | Version: {}",
            self.data.form_id, self.data.version
        )?;

        for (index, section) in self.data.sections.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "[{}] {} ({})", index + 1, section.title, section.section_id)?;
            if !section.description.is_empty() {
                writeln!(f, "    {}", section.description)?;
            }
            if section.fields.is_empty() {
                writeln!(f, "    (no fields)")?;
            }

            for field in &section.fields {
                let marker = if field.required { "*" } else { " " };
                write!(
                    f,
                    "  {} {:<16} {:<10} {}",
                    marker, field.field_id, field.kind, field.label
                )?;
                if !field.constraints.is_empty() {
                    write!(f, "  ({})", field.constraints.join(", "))?;
                }
                if !field.options.is_empty() {
                    write!(f, "  [{}]", field.options.join(", "))?;
                }
                writeln!(f)?;
            }
        }

        writeln!(f)?;
        if self.data.anomalies.is_empty() {
            writeln!(f, "No schema anomalies found.")?;
            return Ok(());
        }

        writeln!(f, "Anomalies ({}):", self.data.anomalies.len())?;
        for anomaly in &self.data.anomalies {
            writeln!(f, "  {}: {}", anomaly.location, anomaly.message)?;
        }

        Ok(())
    }
}

impl fmt::Display for SchemaReportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        SchemaReportView::new(self).fmt(f)
    }
}

// --------------------------------------------------------
// Check Report View
// --------------------------------------------------------

pub struct CheckReportView<'a> {
    data: &'a CheckReportViewModel,
}

impl<'a> CheckReportView<'a> {
    pub fn new(data: &'a CheckReportViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CheckReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.outcome {
            CheckOutcome::Submitted { submission } => {
                writeln!(f, "All {} section(s) passed.", self.data.section_count)?;
                writeln!(f)?;
                let json = serde_json::to_string_pretty(submission).map_err(|_| fmt::Error)?;
                writeln!(f, "{}", json)?;
            }
            CheckOutcome::Blocked {
                section_id,
                section_title,
                errors,
            } => {
                writeln!(
                    f,
                    "Stopped at section {} of {}: {} ({})",
                    self.data.sections_passed + 1,
                    self.data.section_count,
                    section_title,
                    section_id
                )?;
                for error in errors {
                    writeln!(f, "  {:<16} {}", error.field_id, error.message)?;
                }
            }
        }

        if !self.data.ignored_values.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "Ignored values with no matching field: {}",
                self.data.ignored_values.join(", ")
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for CheckReportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        CheckReportView::new(self).fmt(f)
    }
}

// --------------------------------------------------------
// Config View
// --------------------------------------------------------

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = if self.exists { "" } else { " (not created, using defaults)" };
        writeln!(f, "Config file: {}{}", self.path, state)?;
        writeln!(f)?;
        writeln!(f, "[api]")?;
        writeln!(f, "base_url = \"{}\"", self.base_url)?;
        writeln!(f, "timeout_secs = {}", self.timeout_secs)?;
        Ok(())
    }
}
