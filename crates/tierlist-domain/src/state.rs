use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::axis::{Axis, AxisEntry};
use crate::container::{cell_key, POOL_ID};
use crate::ids::{allocate_item_id, IdSource};
use crate::item::{Item, ItemEntry, ItemId};

pub const DEFAULT_TILE_SIZE: u32 = 96;
pub const MIN_TILE_SIZE: u32 = 60;
pub const MAX_TILE_SIZE: u32 = 200;

pub const DEFAULT_COL_WIDTH: u32 = 220;
pub const MIN_COL_WIDTH: u32 = 140;
pub const MAX_COL_WIDTH: u32 = 560;

pub type Containers = IndexMap<String, Vec<ItemId>>;

/// The whole board: axes, containers, items and display settings.
///
/// Fields are read through accessors; every mutation goes through the
/// methods in this crate so the container invariants hold after each call:
/// every in-bounds cell and the pool exist, `col_widths` matches `cols`, and
/// every item sits in exactly one container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub(crate) rows: Vec<AxisEntry>,
    pub(crate) cols: Vec<AxisEntry>,
    pub(crate) col_widths: Vec<u32>,
    pub(crate) containers: Containers,
    pub(crate) items: IndexMap<ItemId, Item>,
    pub(crate) pool_id: String,
    pub(crate) tile_size: u32,
    pub(crate) force_dark: bool,
}

/// Loosely validated pieces of a board, as recovered from an external blob.
///
/// [`AppState::assemble`] turns them into a canonical state.
#[derive(Debug, Clone)]
pub struct StateParts {
    pub rows: Vec<AxisEntry>,
    pub cols: Vec<AxisEntry>,
    pub col_widths: Vec<u32>,
    pub containers: Option<Containers>,
    pub items: IndexMap<ItemId, Item>,
    pub pool_id: String,
    pub tile_size: u32,
}

/// Builds one empty container per cell plus the pool.
pub fn empty_grid(row_count: usize, col_count: usize, pool_id: &str) -> Containers {
    let mut containers = IndexMap::with_capacity(row_count * col_count + 1);
    for r in 0..row_count {
        for c in 0..col_count {
            containers.insert(cell_key(r, c), Vec::new());
        }
    }
    containers.insert(pool_id.to_string(), Vec::new());
    containers
}

pub fn clamp_tile_size(px: f64) -> u32 {
    clamp_px(px, MIN_TILE_SIZE, MAX_TILE_SIZE, DEFAULT_TILE_SIZE)
}

pub fn clamp_col_width(px: f64) -> u32 {
    clamp_px(px, MIN_COL_WIDTH, MAX_COL_WIDTH, DEFAULT_COL_WIDTH)
}

fn clamp_px(px: f64, min: u32, max: u32, fallback: u32) -> u32 {
    if !px.is_finite() {
        return fallback;
    }
    px.round().clamp(f64::from(min), f64::from(max)) as u32
}

impl Default for AppState {
    fn default() -> Self {
        Self::blank()
    }
}

impl AppState {
    /// Default axes and settings with an empty grid and pool.
    fn blank() -> Self {
        let rows = Axis::Row.default_entries();
        let cols = Axis::Col.default_entries();
        Self {
            containers: empty_grid(rows.len(), cols.len(), POOL_ID),
            col_widths: vec![DEFAULT_COL_WIDTH; cols.len()],
            rows,
            cols,
            items: IndexMap::new(),
            pool_id: POOL_ID.to_string(),
            tile_size: DEFAULT_TILE_SIZE,
            force_dark: true,
        }
    }

    /// Fresh board whose pool holds one item per name, in input order.
    pub fn from_names<S: AsRef<str>>(names: &[S], ids: &mut dyn IdSource) -> Self {
        let entries: Vec<ItemEntry> = names
            .iter()
            .map(|name| ItemEntry::named(name.as_ref()))
            .collect();
        Self::from_entries(&entries, ids)
    }

    /// Fresh board whose pool holds one item per entry, in input order.
    pub fn from_entries(entries: &[ItemEntry], ids: &mut dyn IdSource) -> Self {
        let mut state = Self::blank();
        state.append_to_pool(entries, ids);
        state
    }

    /// Builds a canonical state out of loosely validated parts.
    ///
    /// Duplicate references are dropped, referenced ids without a record get
    /// one named after the id, unplaced items are appended to the pool and the grid topology is reconciled. Parts that
    /// already describe a canonical state come out unchanged.
    pub fn assemble(parts: StateParts) -> Self {
        let StateParts {
            rows,
            cols,
            col_widths,
            containers,
            mut items,
            pool_id,
            tile_size,
        } = parts;

        for (key, item) in items.iter_mut() {
            if item.id != *key {
                item.id = key.clone();
            }
        }

        let mut containers =
            containers.unwrap_or_else(|| empty_grid(rows.len(), cols.len(), &pool_id));
        let mut placed: IndexSet<ItemId> = IndexSet::new();
        for ids in containers.values_mut() {
            ids.retain(|id| !id.is_empty() && placed.insert(id.clone()));
        }
        for id in &placed {
            if !items.contains_key(id) {
                tracing::debug!("Creating a record for unknown item {}", id);
                items.insert(id.clone(), Item::new(id.clone(), id.clone(), None));
            }
        }

        let unplaced: Vec<ItemId> = items
            .keys()
            .filter(|id| !placed.contains(*id))
            .cloned()
            .collect();
        if !unplaced.is_empty() {
            tracing::debug!("Returning {} unplaced items to the pool", unplaced.len());
            containers
                .entry(pool_id.clone())
                .or_default()
                .extend(unplaced);
        }

        let mut state = Self {
            rows,
            cols,
            col_widths: col_widths.into_iter().map(|w| clamp_col_width(f64::from(w))).collect(),
            containers,
            items,
            pool_id,
            tile_size: clamp_tile_size(f64::from(tile_size)),
            force_dark: true,
        };
        state.reconcile_topology();
        state
    }

    /// Adds entries as new items at the end of the pool; returns their ids.
    pub fn append_to_pool(&mut self, entries: &[ItemEntry], ids: &mut dyn IdSource) -> Vec<ItemId> {
        let mut added = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = allocate_item_id(entry.id_seed(), &self.items, ids);
            self.items.insert(
                id.clone(),
                Item::new(id.clone(), entry.name.clone(), entry.image.clone()),
            );
            added.push(id);
        }
        self.containers
            .entry(self.pool_id.clone())
            .or_default()
            .extend(added.iter().cloned());
        added
    }

    pub fn rows(&self) -> &[AxisEntry] {
        &self.rows
    }

    pub fn cols(&self) -> &[AxisEntry] {
        &self.cols
    }

    pub fn axis(&self, axis: Axis) -> &[AxisEntry] {
        match axis {
            Axis::Row => &self.rows,
            Axis::Col => &self.cols,
        }
    }

    pub fn col_widths(&self) -> &[u32] {
        &self.col_widths
    }

    pub fn containers(&self) -> &Containers {
        &self.containers
    }

    pub fn container(&self, id: &str) -> Option<&[ItemId]> {
        self.containers.get(id).map(Vec::as_slice)
    }

    pub fn items(&self) -> &IndexMap<ItemId, Item> {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn pool_id(&self) -> &str {
        &self.pool_id
    }

    pub fn pool(&self) -> &[ItemId] {
        self.container(&self.pool_id).unwrap_or_default()
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn force_dark(&self) -> bool {
        self.force_dark
    }

    /// True when `id` is a cell within the current bounds or the pool.
    pub fn is_valid_container(&self, id: &str) -> bool {
        id == self.pool_id
            || crate::container::parse_cell_key(id)
                .is_some_and(|(r, c)| r < self.rows.len() && c < self.cols.len())
    }

    pub fn set_tile_size(&mut self, px: f64) {
        self.tile_size = clamp_tile_size(px);
    }

    /// Sets one column width; out-of-range indices are ignored.
    pub fn set_col_width(&mut self, index: usize, px: f64) -> bool {
        match self.col_widths.get_mut(index) {
            Some(width) => {
                *width = clamp_col_width(px);
                true
            }
            None => false,
        }
    }

    pub fn apply_col_width_all(&mut self, px: f64) {
        let width = clamp_col_width(px);
        self.col_widths = vec![width; self.cols.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    #[test]
    fn test_empty_grid() {
        let grid = empty_grid(2, 3, POOL_ID);
        assert_eq!(grid.len(), 7);
        assert!(grid.contains_key("r1-c2"));
        assert!(grid.contains_key(POOL_ID));
        assert!(grid.values().all(Vec::is_empty));
    }

    #[test]
    fn test_from_names_defaults() {
        let state = AppState::from_names(&["Drake", "PNL"], &mut SequentialIds::new());
        assert_eq!(state.rows().len(), 4);
        assert_eq!(state.cols().len(), 3);
        assert_eq!(state.col_widths(), &[220, 220, 220]);
        assert_eq!(state.tile_size(), 96);
        assert!(state.force_dark());
        assert_eq!(state.pool(), &["drake".to_string(), "pnl".to_string()]);
        assert_eq!(state.containers().len(), 13);
    }

    #[test]
    fn test_from_names_disambiguates() {
        let state = AppState::from_names(&["Drake", "drake", "DRAKE!"], &mut SequentialIds::new());
        assert_eq!(state.pool(), &["drake", "drake-1", "drake-2"]);
        assert_eq!(state.item("drake-1").unwrap().name, "drake");
    }

    #[test]
    fn test_from_entries_prefers_explicit_id() {
        let entries = vec![
            ItemEntry {
                name: "Alpha".into(),
                image: Some("http://x/a.jpg".into()),
                id: Some("first".into()),
            },
            ItemEntry::named("Beta"),
        ];
        let state = AppState::from_entries(&entries, &mut SequentialIds::new());
        assert_eq!(state.pool(), &["first", "beta"]);
        assert_eq!(state.item("first").unwrap().image.as_deref(), Some("http://x/a.jpg"));
    }

    #[test]
    fn test_clamping() {
        let mut state = AppState::default();
        state.set_tile_size(10.0);
        assert_eq!(state.tile_size(), MIN_TILE_SIZE);
        state.set_tile_size(123.6);
        assert_eq!(state.tile_size(), 124);

        assert!(state.set_col_width(1, 9000.0));
        assert_eq!(state.col_widths(), &[220, 560, 220]);
        assert!(!state.set_col_width(7, 300.0));

        state.apply_col_width_all(f64::NAN);
        assert_eq!(state.col_widths(), &[220, 220, 220]);
        state.apply_col_width_all(100.0);
        assert_eq!(state.col_widths(), &[140, 140, 140]);
    }

    #[test]
    fn test_assemble_repairs_references() {
        let mut items = IndexMap::new();
        items.insert("a".to_string(), Item::new("a".into(), "A".into(), None));
        items.insert("b".to_string(), Item::new("wrong".into(), "B".into(), None));
        items.insert("c".to_string(), Item::new("c".into(), "C".into(), None));

        let mut containers = empty_grid(1, 1, POOL_ID);
        containers.insert("r0-c0".into(), vec!["a".into(), "ghost".into(), "b".into()]);
        containers.insert(POOL_ID.into(), vec!["a".into()]);

        let state = AppState::assemble(StateParts {
            rows: vec![AxisEntry::new("R", "#fff")],
            cols: vec![AxisEntry::new("C", "#000")],
            col_widths: vec![220],
            containers: Some(containers),
            items,
            pool_id: POOL_ID.into(),
            tile_size: 96,
        });

        assert_eq!(state.container("r0-c0").unwrap(), &["a", "ghost", "b"]);
        assert_eq!(state.pool(), &["c"]);
        assert_eq!(state.item("b").unwrap().id, "b");
        assert_eq!(state.item("ghost").unwrap().name, "ghost");
    }
}
