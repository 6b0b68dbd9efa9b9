//! Board session: the single owner of the board state.
//!
//! Front ends hand user intents (clicks, drags, key presses, imports) to a
//! [`BoardSession`] and read the state back for rendering. Each call reports a
//! [`ChangeKind`] so the caller knows whether to persist.

use serde::Serialize;
use tierlist_core::{SelectionState, TierlistResult};

use crate::commands::{
    ClearGridKeepItems, ClearPool, Command, CommandContext, DeleteItem, MoveItem,
};
use crate::drag::{resolve_drag, PlacementCommand};
use crate::ids::{IdSource, RandomIds};
use crate::item::ItemId;
use crate::state::AppState;

/// What an intent did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Nothing changed.
    Unchanged,
    /// Live feedback during a drag; not to be persisted.
    Provisional,
    /// A committed change; persist it.
    Committed,
}

impl ChangeKind {
    pub fn is_committed(self) -> bool {
        self == ChangeKind::Committed
    }
}

/// Keys the board reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Other,
}

/// Where keyboard focus is when a key is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Board,
    TextField,
}

struct ActiveDrag {
    item_id: ItemId,
    origin: AppState,
}

pub struct BoardSession {
    state: AppState,
    selection: SelectionState<ItemId>,
    drag: Option<ActiveDrag>,
    ids: Box<dyn IdSource>,
}

impl BoardSession {
    pub fn new(state: AppState) -> Self {
        Self::with_id_source(state, Box::new(RandomIds))
    }

    /// Session with a substitute id source (e.g. [`crate::SequentialIds`] in tests).
    pub fn with_id_source(state: AppState, ids: Box<dyn IdSource>) -> Self {
        Self {
            state,
            selection: SelectionState::new(),
            drag: None,
            ids,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.get().map(String::as_str)
    }

    /// Id source used for items created through this session.
    pub fn ids_mut(&mut self) -> &mut dyn IdSource {
        self.ids.as_mut()
    }

    pub fn dragging(&self) -> Option<&str> {
        self.drag.as_ref().map(|drag| drag.item_id.as_str())
    }

    /// Runs a command, reporting whether it changed the board.
    pub fn execute(&mut self, command: &dyn Command) -> TierlistResult<ChangeKind> {
        let before = self.state.clone();
        let mut context = CommandContext {
            state: &mut self.state,
            ids: self.ids.as_mut(),
        };
        command.execute(&mut context)?;
        tracing::debug!("Executed: {}", command.description());

        if let Some(selected) = self.selection.get() {
            if self.state.item(selected).is_none() {
                self.selection.clear();
            }
        }

        Ok(if self.state == before {
            ChangeKind::Unchanged
        } else {
            ChangeKind::Committed
        })
    }

    /// Swaps in a whole new board (file import, reset). Pending selection
    /// and drag are dropped.
    pub fn replace_state(&mut self, state: AppState) -> ChangeKind {
        self.selection.clear();
        self.drag = None;
        if self.state == state {
            return ChangeKind::Unchanged;
        }
        self.state = state;
        ChangeKind::Committed
    }

    /// Replaces the board with an empty default one.
    pub fn reset(&mut self) -> ChangeKind {
        let empty = AppState::from_names::<&str>(&[], self.ids.as_mut());
        self.replace_state(empty)
    }

    // Click-to-place

    /// Marks an item as pending placement. Unknown ids are ignored.
    pub fn select_item(&mut self, item_id: &str) -> bool {
        if self.state.item(item_id).is_none() {
            return false;
        }
        self.selection.select(item_id.to_string());
        true
    }

    pub fn cancel_selection(&mut self) {
        self.selection.clear();
    }

    /// Places the pending item into `container` and clears the selection.
    pub fn click_container(&mut self, container: &str) -> TierlistResult<ChangeKind> {
        let Some(item_id) = self.selection.take() else {
            return Ok(ChangeKind::Unchanged);
        };
        self.execute(&MoveItem {
            item_id,
            container: container.to_string(),
        })
    }

    /// Delete/Backspace outside a text field deletes the selected item.
    pub fn handle_key(&mut self, key: Key, focus: Focus) -> TierlistResult<ChangeKind> {
        if focus == Focus::TextField || !matches!(key, Key::Delete | Key::Backspace) {
            return Ok(ChangeKind::Unchanged);
        }
        match self.selection.get().cloned() {
            Some(item_id) => self.delete_item(&item_id),
            None => Ok(ChangeKind::Unchanged),
        }
    }

    // Drag and drop

    pub fn drag_start(&mut self, item_id: &str) {
        self.drag = Some(ActiveDrag {
            item_id: item_id.to_string(),
            origin: self.state.clone(),
        });
    }

    /// Applies cross-container moves live. Same-container reorders wait for
    /// the drop.
    pub fn drag_over(&mut self, over: Option<&str>) -> TierlistResult<ChangeKind> {
        let Some(item_id) = self.dragging().map(str::to_string) else {
            return Ok(ChangeKind::Unchanged);
        };
        let command = resolve_drag(&self.state, &item_id, over);
        if !matches!(command, PlacementCommand::Move { .. }) {
            return Ok(ChangeKind::Unchanged);
        }
        Ok(match self.execute(&command)? {
            ChangeKind::Unchanged => ChangeKind::Unchanged,
            _ => ChangeKind::Provisional,
        })
    }

    /// Commits the drop. Dropping on nothing behaves like [`Self::drag_cancel`].
    pub fn drag_end(&mut self, over: Option<&str>) -> TierlistResult<ChangeKind> {
        if over.is_none() {
            return Ok(self.drag_cancel());
        }
        let Some(drag) = self.drag.take() else {
            return Ok(ChangeKind::Unchanged);
        };
        let command = resolve_drag(&self.state, &drag.item_id, over);
        self.execute(&command)?;
        Ok(if self.state == drag.origin {
            ChangeKind::Unchanged
        } else {
            ChangeKind::Committed
        })
    }

    /// Abandons the drag, undoing any live moves made while dragging.
    pub fn drag_cancel(&mut self) -> ChangeKind {
        match self.drag.take() {
            Some(drag) if drag.origin != self.state => {
                self.state = drag.origin;
                ChangeKind::Provisional
            }
            _ => ChangeKind::Unchanged,
        }
    }

    // Direct operations

    pub fn move_to_container(&mut self, item_id: &str, container: &str) -> TierlistResult<ChangeKind> {
        self.execute(&MoveItem {
            item_id: item_id.to_string(),
            container: container.to_string(),
        })
    }

    pub fn delete_item(&mut self, item_id: &str) -> TierlistResult<ChangeKind> {
        self.execute(&DeleteItem {
            item_id: item_id.to_string(),
        })
    }

    pub fn clear_pool(&mut self) -> TierlistResult<ChangeKind> {
        self.execute(&ClearPool)
    }

    pub fn clear_grid_keep_items(&mut self) -> TierlistResult<ChangeKind> {
        self.execute(&ClearGridKeepItems)
    }
}
