//! Custom assertions for dynform command output.
//!
//! Every command prints the same envelope with `--format json`:
//! `{ "badge": {...}, "content": {...}, "suggestions": [...] }`.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Assert the badge level of a command result.
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if level != expected {
        bail!("Expected badge level {}, got {}", expected, level);
    }

    Ok(())
}

/// Assert a check report stopped with errors on exactly these fields.
pub fn assert_blocked_fields(json: &Value, expected: &[&str]) -> Result<()> {
    let outcome = &json["content"]["outcome"];
    if outcome["status"] != "blocked" {
        bail!("Expected a blocked outcome, got {}", outcome["status"]);
    }

    let errors = outcome["errors"]
        .as_array()
        .context("Expected 'content.outcome.errors' array in JSON")?;
    let fields: Vec<&str> = errors
        .iter()
        .filter_map(|e| e["field_id"].as_str())
        .collect();

    if fields != expected {
        bail!("Expected errors on {:?}, got {:?}", expected, fields);
    }

    Ok(())
}

/// Assert a check report submitted `value` for `field_id`.
pub fn assert_submitted_value(json: &Value, field_id: &str, expected: &Value) -> Result<()> {
    let outcome = &json["content"]["outcome"];
    if outcome["status"] != "submitted" {
        bail!("Expected a submitted outcome, got {}", outcome["status"]);
    }

    let actual = &outcome["submission"]["values"][field_id];
    if actual != expected {
        bail!("Expected {} = {}, got {}", field_id, expected, actual);
    }

    Ok(())
}
