use tierlist_core::TierlistResult;

pub mod axis_commands;
pub mod placement_commands;

pub use axis_commands::*;
pub use placement_commands::*;

use crate::ids::IdSource;
use crate::state::AppState;

/// Trait for commands that mutate the board.
/// Commands represent intent; the session executes them and decides what to persist.
pub trait Command: Send + Sync {
    /// Execute this command against the board.
    fn execute(&self, context: &mut CommandContext) -> TierlistResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub state: &'a mut AppState,
    pub ids: &'a mut dyn IdSource,
}
