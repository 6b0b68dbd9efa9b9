pub mod axis;
pub mod commands;
pub mod container;
pub mod drag;
pub mod ids;
pub mod import;
pub mod item;
pub mod placement;
pub mod search;
pub mod session;
pub mod state;
pub mod text;
pub mod topology;

pub use axis::{Axis, AxisEntry, DEFAULT_COLS, DEFAULT_ROWS};
pub use container::{cell_key, parse_cell_key, POOL_ID};
pub use drag::{resolve_drag, resolve_drop_target, PlacementCommand};
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use import::{parse_pairs, split_import};
pub use item::{Item, ItemEntry, ItemId};
pub use search::{filter_pool, matching_items};
pub use session::{BoardSession, ChangeKind, Focus, Key};
pub use state::{AppState, StateParts};
pub use text::{contrast_text_color, normalize_text, slug};
