use indexmap::IndexMap;
use serde_json::{Map, Value};
use tierlist_domain::state::{
    clamp_col_width, clamp_tile_size, Containers, DEFAULT_COL_WIDTH, DEFAULT_TILE_SIZE,
};
use tierlist_domain::{parse_cell_key, AppState, Axis, AxisEntry, Item, ItemId, StateParts, POOL_ID};

/// Turns loosely shaped board JSON (old exports, share links, hand-written
/// files) into a canonical [`AppState`].
pub struct Migrator;

impl Migrator {
    /// Returns `None` when `raw` is not a JSON object. Every missing or
    /// malformed field falls back to its default.
    pub fn migrate(raw: &Value) -> Option<AppState> {
        let Some(obj) = raw.as_object() else {
            tracing::debug!("Cannot migrate a non-object board");
            return None;
        };

        let rows = Self::axis(obj.get("rows"), Axis::Row);
        let cols = Self::axis(obj.get("cols"), Axis::Col);
        let col_widths = Self::col_widths(obj.get("colWidths"), cols.len());

        Some(AppState::assemble(StateParts {
            col_widths,
            containers: obj.get("containers").and_then(Self::containers),
            items: obj.get("items").map(Self::items).unwrap_or_default(),
            pool_id: Self::pool_id(obj.get("poolId")),
            tile_size: obj
                .get("tileSize")
                .and_then(Value::as_f64)
                .map_or(DEFAULT_TILE_SIZE, clamp_tile_size),
            rows,
            cols,
        }))
    }

    fn axis(raw: Option<&Value>, axis: Axis) -> Vec<AxisEntry> {
        let Some(entries) = raw.and_then(Value::as_array) else {
            return axis.default_entries();
        };
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let default_color = axis.default_color(i);
                match entry {
                    Value::Object(fields) => AxisEntry::new(
                        fields.get("label").map(text).unwrap_or_default(),
                        fields
                            .get("color")
                            .and_then(Value::as_str)
                            .unwrap_or(default_color),
                    ),
                    other => AxisEntry::new(text(other), default_color),
                }
            })
            .collect()
    }

    fn col_widths(raw: Option<&Value>, col_count: usize) -> Vec<u32> {
        match raw.and_then(Value::as_array) {
            Some(widths) if widths.len() == col_count => widths
                .iter()
                .map(|w| w.as_f64().map_or(DEFAULT_COL_WIDTH, clamp_col_width))
                .collect(),
            _ => vec![DEFAULT_COL_WIDTH; col_count],
        }
    }

    fn containers(raw: &Value) -> Option<Containers> {
        let obj = raw.as_object()?;
        Some(
            obj.iter()
                .map(|(key, ids)| {
                    let ids: Vec<ItemId> = ids
                        .as_array()
                        .map(|ids| {
                            ids.iter()
                                .filter_map(Value::as_str)
                                .map(str::to_string)
                                .collect()
                        })
                        .unwrap_or_default();
                    (key.clone(), ids)
                })
                .collect(),
        )
    }

    fn items(raw: &Value) -> IndexMap<ItemId, Item> {
        let Some(obj) = raw.as_object() else {
            return IndexMap::new();
        };
        obj.iter()
            .filter_map(|(id, record)| {
                let record: &Map<String, Value> = record.as_object()?;
                let name = record.get("name").map(text).unwrap_or_default();
                let image = record
                    .get("image")
                    .and_then(Value::as_str)
                    .filter(|image| !image.is_empty())
                    .map(str::to_string);
                Some((id.clone(), Item::new(id.clone(), name, image)))
            })
            .collect()
    }

    fn pool_id(raw: Option<&Value>) -> String {
        match raw.and_then(Value::as_str) {
            Some(id) if !id.is_empty() && parse_cell_key(id).is_none() => id.to_string(),
            _ => POOL_ID.to_string(),
        }
    }
}

/// Shorthand for [`Migrator::migrate`].
pub fn migrate(raw: &Value) -> Option<AppState> {
    Migrator::migrate(raw)
}

/// Display text of a loose JSON value: strings verbatim, null empty, anything
/// else in its JSON form.
pub(crate) fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
