//! Item search.
//!
//! Matching is a substring test on [`normalize_text`] output, so case and
//! diacritics are ignored on both sides.

use crate::item::ItemId;
use crate::state::AppState;
use crate::text::normalize_text;

/// Ids of every item whose name matches `query`, in item order.
/// An empty query highlights nothing.
pub fn matching_items(state: &AppState, query: &str) -> Vec<ItemId> {
    let query = normalize_text(query);
    if query.is_empty() {
        return Vec::new();
    }
    state
        .items()
        .values()
        .filter(|item| normalize_text(&item.name).contains(&query))
        .map(|item| item.id.clone())
        .collect()
}

/// Pool ids, in pool order, whose item name matches `query`.
/// An empty query returns the whole pool.
pub fn filter_pool(state: &AppState, query: &str) -> Vec<ItemId> {
    let query = normalize_text(query);
    state
        .pool()
        .iter()
        .filter(|id| {
            if query.is_empty() {
                return true;
            }
            let name = state.item(id).map_or(id.as_str(), |item| item.name.as_str());
            normalize_text(name).contains(&query)
        })
        .cloned()
        .collect()
}
