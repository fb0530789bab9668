use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The invocable half of a leaf item. Only `method` participates in
/// ordering; headers, url and body stay opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(flatten)]
    pub rest: IndexMap<String, Value>,
}
