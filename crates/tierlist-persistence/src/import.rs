//! Whole-board file import.
//!
//! Accepted shapes: an array of names, an array of `{name, image?, id?}`
//! records, or a board object (run through [`migrate`]). Anything else is an
//! invalid file and leaves the caller's board alone.

use std::path::Path;

use serde_json::Value;
use tierlist_core::{TierlistError, TierlistResult};
use tierlist_domain::{AppState, IdSource, ItemEntry};

use crate::migration::migrator::text;
use crate::migration::migrate;
use crate::store::AtomicWriter;

/// Builds a board from the text of an imported file.
pub fn import_from_json(content: &str, ids: &mut dyn IdSource) -> TierlistResult<AppState> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| TierlistError::InvalidFile(format!("not valid JSON: {}", e)))?;

    match &value {
        Value::Array(values) if is_record_list(values) => {
            let entries: Vec<ItemEntry> = values.iter().map(entry_from_value).collect();
            Ok(AppState::from_entries(&entries, ids))
        }
        Value::Array(values) => {
            let names: Vec<String> = values.iter().map(text).collect();
            Ok(AppState::from_names(&names, ids))
        }
        Value::Object(_) => migrate(&value)
            .ok_or_else(|| TierlistError::InvalidFile("unreadable board".to_string())),
        _ => Err(TierlistError::InvalidFile(
            "expected a list of names, a list of items or a board".to_string(),
        )),
    }
}

/// Reads `path` and imports it with [`import_from_json`].
pub async fn import_from_file(path: &Path, ids: &mut dyn IdSource) -> TierlistResult<AppState> {
    let content = AtomicWriter::read_text(path).await?;
    let state = import_from_json(&content, ids)?;
    tracing::info!(
        "Imported {} items from {}",
        state.items().len(),
        path.display()
    );
    Ok(state)
}

/// A list counts as records when its first element is an object with a
/// non-empty name.
fn is_record_list(values: &[Value]) -> bool {
    values
        .first()
        .and_then(|first| first.get("name"))
        .is_some_and(|name| match name {
            Value::Null | Value::Bool(false) => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        })
}

fn entry_from_value(value: &Value) -> ItemEntry {
    let Some(fields) = value.as_object() else {
        return ItemEntry::named(text(value));
    };
    let optional = |key: &str| {
        fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    ItemEntry {
        name: fields.get("name").map(text).unwrap_or_default(),
        image: optional("image"),
        id: optional("id"),
    }
}
