use std::cmp::Ordering;

use itertools::Itertools;

use crate::collection::Item;

/// Rank for methods outside the priority table, including empty/absent ones.
/// Strictly greater than every listed rank, so they sort last.
const UNRANKED: u32 = 999;

fn method_priority(method: &str) -> u32 {
    match method.to_uppercase().as_str() {
        "GET" => 1,
        "POST" => 2,
        "PUT" => 3,
        "PATCH" => 4,
        "DELETE" => 5,
        _ => UNRANKED,
    }
}

/// Name ordering. Compares lowercased character sequences first, so that
/// `alpha` sorts before `Beta`, then falls back to code points so distinct
/// names never compare equal. Deterministic on every platform; no locale
/// data involved.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Ordering for items inside a folder: method priority first, name as the
/// tie-break. Folders and unknown methods share the trailing rank bucket and
/// order by name among themselves.
pub fn compare_items(a: &Item, b: &Item) -> Ordering {
    method_priority(a.method())
        .cmp(&method_priority(b.method()))
        .then_with(|| collate(&a.name, &b.name))
}

/// Reorder the collection tree: top-level entries by name only, then each
/// entry's children by [`compare_items`]. Entries without children come back
/// with an empty child list, so every top-level entry carries an `item`
/// array in the output. Grandchildren keep their input order.
pub fn sort_collection(items: Vec<Item>) -> Vec<Item> {
    items
        .into_iter()
        .sorted_by(|a, b| collate(&a.name, &b.name))
        .map(|mut entry| {
            let mut children = entry.item.take().unwrap_or_default();
            children.sort_by(compare_items);
            entry.item = Some(children);
            entry
        })
        .collect()
}
