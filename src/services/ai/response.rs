use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::models::{Intent, UNKNOWN_EVENT};

static LINE_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)//.*$").unwrap());
static TRAILING_BRACE_COMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*\}").unwrap());
static TRAILING_BRACKET_COMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*\]").unwrap());
static OBJECT_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Fields recovered from the model's reply. Anything the model left out or
/// got wrong is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    pub intent: Option<Intent>,
    pub event: Option<String>,
    pub tickets: Option<i64>,
}

impl ModelOutput {
    pub fn fallback() -> Self {
        Self {
            intent: Some(Intent::Other),
            event: Some(UNKNOWN_EVENT.to_string()),
            tickets: Some(1),
        }
    }

    fn from_value(value: &Value) -> Self {
        Self {
            intent: value["intent"].as_str().and_then(Intent::from_label),
            event: value["event"]
                .as_str()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            tickets: ticket_value(&value["tickets"]),
        }
    }
}

fn ticket_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Drops `//` line comments and trailing commas, then trims.
pub fn clean_model_text(raw: &str) -> String {
    let text = LINE_COMMENT_RE.replace_all(raw, "");
    let text = TRAILING_BRACE_COMMA_RE.replace_all(&text, "}");
    let text = TRAILING_BRACKET_COMMA_RE.replace_all(&text, "]");
    text.trim().to_string()
}

/// Extracts the widest `{...}` span from the model output and reads it
/// leniently. Never fails: unusable output yields [`ModelOutput::fallback`].
pub fn normalize_response(raw: &str) -> ModelOutput {
    let cleaned = clean_model_text(raw);

    let Some(span) = OBJECT_SPAN_RE.find(&cleaned) else {
        tracing::warn!(cleaned = %cleaned, "no JSON found in LLM output, using fallback");
        return ModelOutput::fallback();
    };

    match serde_json::from_str::<Value>(span.as_str()) {
        Ok(value) if value.is_object() => ModelOutput::from_value(&value),
        Ok(_) => {
            tracing::warn!(cleaned = %cleaned, "LLM output JSON is not an object, using fallback");
            ModelOutput::fallback()
        }
        Err(e) => {
            tracing::warn!(error = %e, cleaned = %cleaned, "JSON parse failed, using fallback");
            ModelOutput::fallback()
        }
    }
}
