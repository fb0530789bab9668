mod item;
mod request;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SortError;
pub use item::*;
pub use request::*;

/// Root document of a Postman collection. `item` holds the top-level
/// entries; `info` and any other root fields are opaque and round-trip
/// verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
    pub item: Vec<Item>,
    #[serde(flatten)]
    pub rest: IndexMap<String, Value>,
}

/// Parse a raw JSON document into a [`Collection`], after the minimal shape
/// check: the document must be present and its top-level `item` must be an
/// array. Anything deeper is taken on faith.
pub fn read_collection(raw: &str) -> Result<Collection, SortError> {
    let doc: Value = serde_json::from_str(raw)?;
    if !doc.get("item").map_or(false, Value::is_array) {
        return Err(SortError::InvalidFormat);
    }
    Ok(serde_json::from_value(doc)?)
}
