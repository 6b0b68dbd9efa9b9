//! Drag intent resolution.
//!
//! Gesture libraries report a dragged item id and whatever is under the
//! pointer: a container or another item. These helpers turn that pair into a
//! [`PlacementCommand`] so the placement engine never sees library events.

use serde::Serialize;

use crate::item::ItemId;
use crate::state::AppState;

/// Outcome of resolving a drag event against the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlacementCommand {
    /// Append the item to the end of another container.
    Move {
        item_id: ItemId,
        source: String,
        dest: String,
    },
    /// Reposition the item inside its own container.
    Reorder {
        item_id: ItemId,
        container: String,
        dest_index: usize,
    },
    /// Nothing to do: no drop target, or an unplaced item/target.
    Cancel,
}

/// Resolves a drop target to a container: containers resolve to themselves,
/// anything else is looked up as an item.
pub fn resolve_drop_target(state: &AppState, target: &str) -> Option<String> {
    if state.containers().contains_key(target) {
        Some(target.to_string())
    } else {
        state.locate_container(target).map(str::to_string)
    }
}

/// Resolves a dragged item and the id under the pointer into a command.
///
/// Same-container drops reorder to the target item's index (keeping the
/// original index when the target is the container itself). Cross-container
/// drops append to the destination.
pub fn resolve_drag(state: &AppState, item_id: &str, over: Option<&str>) -> PlacementCommand {
    let Some(over) = over else {
        return PlacementCommand::Cancel;
    };
    let Some(source) = state.locate_container(item_id) else {
        return PlacementCommand::Cancel;
    };
    let Some(dest) = resolve_drop_target(state, over) else {
        return PlacementCommand::Cancel;
    };

    if source != dest {
        return PlacementCommand::Move {
            item_id: item_id.to_string(),
            source: source.to_string(),
            dest,
        };
    }

    let ids = state.container(source).unwrap_or_default();
    let from_index = ids.iter().position(|id| id == item_id).unwrap_or_default();
    let dest_index = ids.iter().position(|id| id == over).unwrap_or(from_index);
    PlacementCommand::Reorder {
        item_id: item_id.to_string(),
        container: dest,
        dest_index,
    }
}
