use serde::Serialize;

/// Output of `dynform schema`
#[derive(Debug, Clone, Serialize)]
pub struct SchemaReportViewModel {
    pub form_id: String,
    pub form_title: String,
    pub version: String,
    pub sections: Vec<SchemaSectionEntry>,
    pub anomalies: Vec<AnomalyEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemaSectionEntry {
    pub section_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub fields: Vec<SchemaFieldEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemaFieldEntry {
    pub field_id: String,
    pub kind: String,
    pub label: String,
    pub required: bool,
    /// Human-readable rules, e.g. "3-50 chars"
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnomalyEntry {
    pub location: String,
    pub message: String,
}

/// Output of `dynform check`
#[derive(Debug, Clone, Serialize)]
pub struct CheckReportViewModel {
    pub form_id: String,
    pub version: String,
    pub sections_passed: usize,
    pub section_count: usize,
    pub outcome: CheckOutcome,
    /// Value keys that match no field of the form
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_values: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Submitted {
        submission: serde_json::Value,
    },
    Blocked {
        section_id: String,
        section_title: String,
        errors: Vec<FieldErrorEntry>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorEntry {
    pub field_id: String,
    pub label: String,
    pub message: String,
}

/// Output of `dynform config show` / `config init`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub base_url: String,
    pub timeout_secs: u64,
}
