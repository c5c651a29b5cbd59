//! Response envelope decoding
//!
//! The gateway wraps conversation lists in one of several envelope shapes
//! depending on endpoint and API version. Extraction is modeled as a
//! priority-ordered list of rules rather than inline fallbacks so the
//! order is a named, testable constant.

use serde_json::Value;

use crate::error::{DeskboardError, Result};

/// One way a conversation list may be located inside a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionRule {
    /// The list lives at `data.payload`
    DataPayload,
    /// The list lives at `data`
    Data,
    /// The list lives at `payload`
    Payload,
}

/// Envelope extraction rules in priority order
///
/// The first rule whose path exists (and is non-null) wins; later rules
/// are never consulted. When no rule matches, the body carries no list and
/// the result is empty.
pub const EXTRACTION_RULES: [ExtractionRule; 3] = [
    ExtractionRule::DataPayload,
    ExtractionRule::Data,
    ExtractionRule::Payload,
];

impl ExtractionRule {
    /// Resolve this rule's path inside `body`
    ///
    /// JSON `null` at the target path counts as absent, matching the
    /// falsy-fallback behavior of the upstream web client.
    fn extract<'a>(&self, body: &'a Value) -> Option<&'a Value> {
        let found = match self {
            ExtractionRule::DataPayload => body.get("data")?.get("payload"),
            ExtractionRule::Data => body.get("data"),
            ExtractionRule::Payload => body.get("payload"),
        };
        found.filter(|value| !value.is_null())
    }
}

impl std::fmt::Display for ExtractionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = match self {
            ExtractionRule::DataPayload => "data.payload",
            ExtractionRule::Data => "data",
            ExtractionRule::Payload => "payload",
        };
        write!(f, "{}", path)
    }
}

/// Extract the conversation list from a response body
///
/// Applies [`EXTRACTION_RULES`] in order. A matched value that is not a
/// JSON array is a load error; a body matching no rule yields the empty
/// list.
///
/// # Errors
///
/// Returns [`DeskboardError::Load`] when the matched envelope value is not
/// a list.
pub fn extract_conversation_list(body: &Value) -> Result<Vec<Value>> {
    for rule in &EXTRACTION_RULES {
        if let Some(value) = rule.extract(body) {
            let list = value.as_array().ok_or_else(|| {
                DeskboardError::Load(format!("envelope field '{}' is not a list", rule))
            })?;
            return Ok(list.clone());
        }
    }
    Ok(Vec::new())
}
