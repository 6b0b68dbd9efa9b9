use super::{Command, CommandContext};
use crate::drag::PlacementCommand;
use crate::item::{ItemEntry, ItemId};
use tierlist_core::TierlistResult;

/// Move an item to the end of a container
pub struct MoveItem {
    pub item_id: ItemId,
    pub container: String,
}

impl Command for MoveItem {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        context.state.move_to_container(&self.item_id, &self.container);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Move item {} to {}", self.item_id, self.container)
    }
}

/// Reposition an item inside its container
pub struct ReorderItem {
    pub item_id: ItemId,
    pub container: String,
    pub to_index: usize,
}

impl Command for ReorderItem {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        context
            .state
            .reorder_within(&self.container, &self.item_id, self.to_index);
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "Reorder item {} to position {} in {}",
            self.item_id, self.to_index, self.container
        )
    }
}

impl Command for PlacementCommand {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        match self {
            PlacementCommand::Move { item_id, dest, .. } => {
                context.state.move_to_container(item_id, dest);
            }
            PlacementCommand::Reorder {
                item_id,
                container,
                dest_index,
            } => {
                context.state.reorder_within(container, item_id, *dest_index);
            }
            PlacementCommand::Cancel => {}
        }
        Ok(())
    }

    fn description(&self) -> String {
        match self {
            PlacementCommand::Move {
                item_id,
                source,
                dest,
            } => format!("Drag item {} from {} to {}", item_id, source, dest),
            PlacementCommand::Reorder {
                item_id,
                container,
                dest_index,
            } => format!("Drag item {} to position {} in {}", item_id, dest_index, container),
            PlacementCommand::Cancel => "Cancel drag".to_string(),
        }
    }
}

/// Delete an item record and its placement
pub struct DeleteItem {
    pub item_id: ItemId,
}

impl Command for DeleteItem {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        context.state.delete_item(&self.item_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete item {}", self.item_id)
    }
}

/// Delete every item in the pool
pub struct ClearPool;

impl Command for ClearPool {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        let removed = context.state.clear_pool();
        tracing::debug!("Cleared {} items from the pool", removed.len());
        Ok(())
    }

    fn description(&self) -> String {
        "Clear pool".to_string()
    }
}

/// Send every item back to the pool
pub struct ClearGridKeepItems;

impl Command for ClearGridKeepItems {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        context.state.clear_grid_keep_items();
        Ok(())
    }

    fn description(&self) -> String {
        "Clear grid".to_string()
    }
}

/// Add imported entries at the end of the pool
pub struct AppendEntries {
    pub entries: Vec<ItemEntry>,
}

impl Command for AppendEntries {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        context.state.append_to_pool(&self.entries, context.ids);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add {} items to the pool", self.entries.len())
    }
}
