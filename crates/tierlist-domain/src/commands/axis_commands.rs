use super::{Command, CommandContext};
use crate::axis::Axis;
use tierlist_core::{TierlistError, TierlistResult};

fn out_of_bounds(axis: Axis, index: usize) -> TierlistError {
    let name = match axis {
        Axis::Row => "Row",
        Axis::Col => "Column",
    };
    TierlistError::NotFound(format!("{} {}", name, index))
}

/// Append a row or column
pub struct AddAxisEntry {
    pub axis: Axis,
}

impl Command for AddAxisEntry {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        context.state.add_axis_entry(self.axis);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add {:?}", self.axis)
    }
}

/// Remove a row or column, sending its items to the pool
pub struct RemoveAxisEntry {
    pub axis: Axis,
    pub index: usize,
}

impl Command for RemoveAxisEntry {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        if !context.state.remove_axis_entry(self.axis, self.index) {
            return Err(out_of_bounds(self.axis, self.index));
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove {:?} {}", self.axis, self.index)
    }
}

/// Rename a row or column
pub struct RenameAxisEntry {
    pub axis: Axis,
    pub index: usize,
    pub label: String,
}

impl Command for RenameAxisEntry {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        if !context
            .state
            .rename_axis_entry(self.axis, self.index, self.label.clone())
        {
            return Err(out_of_bounds(self.axis, self.index));
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Rename {:?} {}: '{}'", self.axis, self.index, self.label)
    }
}

/// Recolor a row or column
pub struct RecolorAxisEntry {
    pub axis: Axis,
    pub index: usize,
    pub color: String,
}

impl Command for RecolorAxisEntry {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        if !context
            .state
            .recolor_axis_entry(self.axis, self.index, self.color.clone())
        {
            return Err(out_of_bounds(self.axis, self.index));
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Recolor {:?} {} to {}", self.axis, self.index, self.color)
    }
}

/// Set one column width (clamped)
pub struct SetColumnWidth {
    pub index: usize,
    pub px: f64,
}

impl Command for SetColumnWidth {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        if !context.state.set_col_width(self.index, self.px) {
            return Err(out_of_bounds(Axis::Col, self.index));
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set column {} width to {}px", self.index, self.px)
    }
}

/// Set every column to the same width (clamped)
pub struct ApplyColumnWidthToAll {
    pub px: f64,
}

impl Command for ApplyColumnWidthToAll {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        context.state.apply_col_width_all(self.px);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set all column widths to {}px", self.px)
    }
}

/// Set the tile size (clamped)
pub struct SetTileSize {
    pub px: f64,
}

impl Command for SetTileSize {
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()> {
        context.state.set_tile_size(self.px);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set tile size to {}px", self.px)
    }
}
