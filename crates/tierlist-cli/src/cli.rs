use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tierlist")]
#[command(about = "A two-axis tier list board", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")"))]
pub struct Cli {
    /// Directory holding the saved board (or set TIERLIST_STORE env var)
    #[arg(long, value_name = "DIR", env = "TIERLIST_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Start from a share link (or bare fragment) instead of the saved board
    #[arg(long, value_name = "SHARE_URL", global = true)]
    pub url: Option<String>,

    /// Refresh the stored share fragment after every change
    #[arg(long, global = true)]
    pub auto_sync: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the whole board
    Show,
    /// Find items by name, ignoring case and accents
    Search {
        query: String,
        /// Filter the pool instead of searching every item
        #[arg(long)]
        pool: bool,
    },
    /// Add items or load a whole board
    Import(ImportCommand),
    /// Write the board as pretty-printed JSON
    Export(ExportArgs),
    /// Build a share link for the board
    Share(ShareArgs),
    /// Place an item into a cell (r{row}-c{col}) or the pool
    Place { item: String, container: String },
    /// Drag an item: hover over targets, then drop or cancel
    Drag(DragArgs),
    /// Delete an item
    Delete { item: String },
    /// Delete every item in the pool
    ClearPool,
    /// Send every placed item back to the pool
    ClearGrid,
    /// Replace the board with an empty one
    Reset,
    /// Row operations
    Row(RowCommand),
    /// Column operations
    Col(ColCommand),
    /// Set the tile size in pixels
    TileSize { px: f64 },
    /// Text color that stays readable on a background color
    Contrast { color: String },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Import commands
#[derive(Args)]
pub struct ImportCommand {
    #[command(subcommand)]
    pub action: ImportAction,
}

#[derive(Subcommand)]
pub enum ImportAction {
    /// Add names separated by newlines, commas, semicolons or tabs
    Names {
        #[arg(required = true)]
        text: Vec<String>,
        /// Start a fresh board instead of appending to the pool
        #[arg(long)]
        replace: bool,
    },
    /// Add "name url" lines; the first http(s) URL on a line is its image
    Pairs { text: String },
    /// Replace the board with a JSON file (names, items or a board)
    File { path: PathBuf },
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file; prints to stdout when omitted
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShareArgs {
    /// Do not copy the link to the clipboard
    #[arg(long)]
    pub no_copy: bool,
    /// Also store the fragment so the next start loads this board from it
    #[arg(long)]
    pub write: bool,
}

#[derive(Args)]
pub struct DragArgs {
    pub item: String,
    /// Item or container the pointer passes over, in order
    #[arg(long)]
    pub over: Vec<String>,
    /// Item or container to drop on
    #[arg(long, conflicts_with = "cancel")]
    pub drop: Option<String>,
    /// Abandon the drag, undoing moves made while hovering
    #[arg(long)]
    pub cancel: bool,
}

// Axis commands
#[derive(Args)]
pub struct RowCommand {
    #[command(subcommand)]
    pub action: AxisAction,
}

#[derive(Args)]
pub struct ColCommand {
    #[command(subcommand)]
    pub action: ColAction,
}

#[derive(Subcommand)]
pub enum AxisAction {
    /// Append a new entry
    Add,
    /// Remove an entry; its items go back to the pool
    Remove { index: usize },
    /// Change an entry's label
    Rename { index: usize, label: String },
    /// Change an entry's color
    Recolor { index: usize, color: String },
}

#[derive(Subcommand)]
pub enum ColAction {
    #[command(flatten)]
    Edit(AxisAction),
    /// Set one column's width in pixels
    Width { index: usize, px: f64 },
    /// Set every column's width in pixels
    WidthAll { px: f64 },
}
