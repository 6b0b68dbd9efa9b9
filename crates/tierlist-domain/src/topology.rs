//! Grid topology: keeping container keys in step with the axes.

use indexmap::IndexMap;

use crate::axis::{Axis, AxisEntry, NEW_ENTRY_COLOR};
use crate::container::{cell_key, parse_cell_key};
use crate::item::ItemId;
use crate::state::{AppState, DEFAULT_COL_WIDTH};

impl AppState {
    /// Repairs container keys and column widths after an axis changed size.
    ///
    /// Containers outside the current bounds are emptied into the pool (pool
    /// items first, then reclaimed items in container order) and dropped;
    /// missing cells are created empty; `col_widths` is truncated or padded
    /// with its last width. Running it twice changes nothing the second time.
    pub fn reconcile_topology(&mut self) {
        let stale: Vec<String> = self
            .containers
            .keys()
            .filter(|key| !self.is_valid_container(key))
            .cloned()
            .collect();

        let mut reclaimed: Vec<ItemId> = Vec::new();
        for key in &stale {
            if let Some(ids) = self.containers.shift_remove(key) {
                reclaimed.extend(ids);
            }
        }
        if !stale.is_empty() {
            tracing::debug!(
                "Dropped {} stale containers, reclaimed {} items into the pool",
                stale.len(),
                reclaimed.len()
            );
        }

        self.containers
            .entry(self.pool_id.clone())
            .or_default()
            .extend(reclaimed);

        for r in 0..self.rows.len() {
            for c in 0..self.cols.len() {
                self.containers.entry(cell_key(r, c)).or_default();
            }
        }

        let col_count = self.cols.len();
        if self.col_widths.len() > col_count {
            self.col_widths.truncate(col_count);
        } else if self.col_widths.len() < col_count {
            let pad = self.col_widths.last().copied().unwrap_or(DEFAULT_COL_WIDTH);
            self.col_widths.resize(col_count, pad);
        }
    }

    /// Appends a row or column with a numbered label; returns its index.
    pub fn add_axis_entry(&mut self, axis: Axis) -> usize {
        let index = self.axis(axis).len();
        let entry = AxisEntry::new(axis.new_entry_label(index), NEW_ENTRY_COLOR);
        match axis {
            Axis::Row => self.rows.push(entry),
            Axis::Col => self.cols.push(entry),
        }
        self.reconcile_topology();
        index
    }

    /// Removes the row or column at `index`.
    ///
    /// Items in the removed cells go to the end of the pool; the following
    /// rows or columns shift down by one index together with their cells.
    /// Returns false when `index` is out of bounds.
    pub fn remove_axis_entry(&mut self, axis: Axis, index: usize) -> bool {
        if index >= self.axis(axis).len() {
            return false;
        }

        let shifted = |(r, c): (usize, usize)| -> Option<(usize, usize)> {
            let (along, other) = match axis {
                Axis::Row => (r, c),
                Axis::Col => (c, r),
            };
            let along = match along.cmp(&index) {
                std::cmp::Ordering::Less => along,
                std::cmp::Ordering::Equal => return None,
                std::cmp::Ordering::Greater => along - 1,
            };
            Some(match axis {
                Axis::Row => (along, other),
                Axis::Col => (other, along),
            })
        };

        let previous = std::mem::take(&mut self.containers);
        let mut containers = IndexMap::with_capacity(previous.len());
        let mut reclaimed: Vec<ItemId> = Vec::new();
        for (key, ids) in previous {
            let cell = if key == self.pool_id {
                None
            } else {
                parse_cell_key(&key)
            };
            match cell {
                Some(position) => match shifted(position) {
                    Some((r, c)) => {
                        containers.insert(cell_key(r, c), ids);
                    }
                    None => reclaimed.extend(ids),
                },
                None => {
                    containers.insert(key, ids);
                }
            }
        }
        containers
            .entry(self.pool_id.clone())
            .or_default()
            .extend(reclaimed);
        self.containers = containers;

        match axis {
            Axis::Row => {
                self.rows.remove(index);
            }
            Axis::Col => {
                self.cols.remove(index);
                if index < self.col_widths.len() {
                    self.col_widths.remove(index);
                }
            }
        }
        self.reconcile_topology();
        true
    }

    pub fn rename_axis_entry(&mut self, axis: Axis, index: usize, label: String) -> bool {
        match self.axis_entry_mut(axis, index) {
            Some(entry) => {
                entry.label = label;
                true
            }
            None => false,
        }
    }

    pub fn recolor_axis_entry(&mut self, axis: Axis, index: usize, color: String) -> bool {
        match self.axis_entry_mut(axis, index) {
            Some(entry) => {
                entry.color = color;
                true
            }
            None => false,
        }
    }

    fn axis_entry_mut(&mut self, axis: Axis, index: usize) -> Option<&mut AxisEntry> {
        match axis {
            Axis::Row => self.rows.get_mut(index),
            Axis::Col => self.cols.get_mut(index),
        }
    }
}
