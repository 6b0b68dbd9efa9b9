//! Placement engine: moving, reordering and removing items.

use crate::item::ItemId;
use crate::state::{empty_grid, AppState};

impl AppState {
    /// Container currently holding `item_id`, found by linear scan.
    pub fn locate_container(&self, item_id: &str) -> Option<&str> {
        self.containers
            .iter()
            .find(|(_, ids)| ids.iter().any(|id| id == item_id))
            .map(|(key, _)| key.as_str())
    }

    /// Moves an item to the end of `target`.
    ///
    /// No-op when the item is not placed, when `target` is not a cell within
    /// bounds or the pool, or when the item already sits in `target`.
    pub fn move_to_container(&mut self, item_id: &str, target: &str) -> bool {
        let Some(from) = self.locate_container(item_id).map(str::to_string) else {
            return false;
        };
        if from == target {
            return false;
        }
        if !self.is_valid_container(target) {
            tracing::debug!("Ignoring move of {} to unknown container {}", item_id, target);
            return false;
        }

        let Some(source) = self.containers.get_mut(&from) else {
            return false;
        };
        let Some(index) = source.iter().position(|id| id == item_id) else {
            return false;
        };
        let id = source.remove(index);
        self.containers.entry(target.to_string()).or_default().push(id);
        true
    }

    /// Moves an item to `to_index` inside its own container (clamped to the end).
    pub fn reorder_within(&mut self, container: &str, item_id: &str, to_index: usize) -> bool {
        let Some(ids) = self.containers.get_mut(container) else {
            return false;
        };
        let Some(from_index) = ids.iter().position(|id| id == item_id) else {
            return false;
        };
        let to_index = to_index.min(ids.len() - 1);
        if from_index == to_index {
            return false;
        }
        let id = ids.remove(from_index);
        ids.insert(to_index, id);
        true
    }

    /// Removes an item from every container and deletes its record.
    pub fn delete_item(&mut self, item_id: &str) -> bool {
        let mut removed = self.items.shift_remove(item_id).is_some();
        for ids in self.containers.values_mut() {
            let before = ids.len();
            ids.retain(|id| id != item_id);
            removed |= ids.len() != before;
        }
        removed
    }

    /// Deletes every pooled item; returns the deleted ids.
    pub fn clear_pool(&mut self) -> Vec<ItemId> {
        let pooled = self
            .containers
            .get_mut(&self.pool_id)
            .map(std::mem::take)
            .unwrap_or_default();
        for id in &pooled {
            self.items.shift_remove(id);
        }
        pooled
    }

    /// Empties the grid, moving every item (cells and pool alike, in
    /// container order) into the pool. Items are kept.
    pub fn clear_grid_keep_items(&mut self) {
        let mut containers = empty_grid(self.rows.len(), self.cols.len(), &self.pool_id);
        let all: Vec<ItemId> = self.containers.values().flatten().cloned().collect();
        containers.insert(self.pool_id.clone(), all);
        self.containers = containers;
    }
}
