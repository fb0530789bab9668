use std::fs;

use tracing::debug;

use crate::collection::read_collection;
use crate::error::SortError;
use crate::sort::sort_collection;

/// The packaged collection this binary reorders, embedded at compile time.
const COLLECTION_JSON: &str = include_str!("../asset/postman-collection.json");

#[derive(Debug)]
pub struct Format {
    /// Defaults to `formatted-collection.json` in the current working
    /// directory.
    pub output: Option<String>,
}

impl Format {
    pub fn run(self) -> Result<(), SortError> {
        println!("Starting Postman collection sorter...");

        let mut collection = read_collection(COLLECTION_JSON)?;
        debug!(n = collection.item.len(), "Read collection items");

        let items = std::mem::take(&mut collection.item);
        collection.item = sort_collection(items);

        let s = serde_json::to_string_pretty(&collection)?;
        let path = self
            .output
            .as_deref()
            .unwrap_or("formatted-collection.json");
        fs::write(path, &s)?;
        println!("{}: Wrote file.", path);
        Ok(())
    }
}
