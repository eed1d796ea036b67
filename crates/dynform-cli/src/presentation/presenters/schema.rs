use dynform_engine::SchemaAnomaly;
use dynform_types::{Field, Form};

use crate::presentation::view_models::{
    AnomalyEntry, SchemaFieldEntry, SchemaReportViewModel, SchemaSectionEntry,
};

pub fn present_schema_report(form: &Form, anomalies: &[SchemaAnomaly]) -> SchemaReportViewModel {
    SchemaReportViewModel {
        form_id: form.form_id.clone(),
        form_title: form.form_title.clone(),
        version: form.version.clone(),
        sections: form
            .sections
            .iter()
            .map(|section| SchemaSectionEntry {
                section_id: section.section_id.clone(),
                title: section.title.clone(),
                description: section.description.clone(),
                fields: section.fields.iter().map(present_field).collect(),
            })
            .collect(),
        anomalies: anomalies
            .iter()
            .map(|anomaly| AnomalyEntry {
                location: match &anomaly.field_id {
                    Some(field_id) => format!("{}/{}", anomaly.section_id, field_id),
                    None => anomaly.section_id.clone(),
                },
                message: anomaly.kind.to_string(),
            })
            .collect(),
    }
}

fn present_field(field: &Field) -> SchemaFieldEntry {
    let mut constraints = Vec::new();
    let min = field.min_length.filter(|n| *n > 0);
    let max = field.max_length.filter(|n| *n > 0);
    match (min, max) {
        (Some(min), Some(max)) => constraints.push(format!("{}-{} chars", min, max)),
        (Some(min), None) => constraints.push(format!(">= {} chars", min)),
        (None, Some(max)) => constraints.push(format!("<= {} chars", max)),
        (None, None) => {}
    }
    if let Some(message) = field.validation_message() {
        constraints.push(format!("message: \"{}\"", message));
    }

    SchemaFieldEntry {
        field_id: field.field_id.clone(),
        kind: field.kind.to_string(),
        label: field.label.clone(),
        required: field.required,
        constraints,
        options: field
            .options
            .iter()
            .map(|o| format!("{}={}", o.value, o.label))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynform_engine::inspect_form;
    use dynform_types::{FieldKind, FieldOption, Section};

    #[test]
    fn test_report_lists_fields_and_anomalies() {
        let form = Form::new("f1", "Survey")
            .with_version("2")
            .with_section(
                Section::new("s1", "About you")
                    .with_field(
                        Field::new("name", FieldKind::Text, "Name")
                            .required()
                            .with_length(Some(2), Some(40)),
                    )
                    .with_field(Field::new("mood", FieldKind::from("slider"), "Mood"))
                    .with_field(
                        Field::new("color", FieldKind::Radio, "Color")
                            .with_options(vec![FieldOption::new("r", "Red")]),
                    ),
            )
            .with_section(Section::new("s2", "Empty"));

        let report = present_schema_report(&form, &inspect_form(&form));

        let name = &report.sections[0].fields[0];
        assert_eq!(name.kind, "text");
        assert_eq!(name.constraints, vec!["2-40 chars".to_string()]);
        assert_eq!(report.sections[0].fields[2].options, vec!["r=Red".to_string()]);

        let locations: Vec<_> = report.anomalies.iter().map(|a| a.location.as_str()).collect();
        assert_eq!(locations, vec!["s1/mood", "s2"]);
        assert_eq!(report.anomalies[0].message, "unsupported field type 'slider'");
    }
}
