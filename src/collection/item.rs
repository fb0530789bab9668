use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collection::Request;

/// One entry in a collection: a leaf carrying a [`Request`], or a folder
/// carrying child items. Fields we do not act on (`response`, descriptions,
/// auth, ...) pass through the flattened remainder untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<Item>>,
    #[serde(flatten)]
    pub rest: IndexMap<String, Value>,
}

impl Item {
    /// The leaf's HTTP method, or empty text for folders and method-less
    /// requests.
    pub fn method(&self) -> &str {
        self.request
            .as_ref()
            .and_then(|r| r.method.as_deref())
            .unwrap_or("")
    }
}
