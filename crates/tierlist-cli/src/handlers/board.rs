use crate::context::CliContext;
use crate::handlers::{axis_view, item_view, AxisEntryView, ItemView};
use crate::output;
use serde::Serialize;
use tierlist_domain::commands::SetTileSize;
use tierlist_domain::{contrast_text_color, filter_pool, matching_items, parse_cell_key, Axis, ItemId};
use tierlist_persistence::StateSource;

#[derive(Serialize)]
struct CellView<'a> {
    key: &'a str,
    row: usize,
    col: usize,
    items: &'a [ItemId],
}

#[derive(Serialize)]
struct BoardView<'a> {
    source: StateSource,
    tile_size: u32,
    rows: Vec<AxisEntryView<'a>>,
    cols: Vec<AxisEntryView<'a>>,
    cells: Vec<CellView<'a>>,
    pool_id: &'a str,
    pool: &'a [ItemId],
    items: Vec<ItemView<'a>>,
}

pub fn handle_show(ctx: &CliContext) {
    let state = ctx.state();
    let cells = state
        .containers()
        .iter()
        .filter(|(key, _)| key.as_str() != state.pool_id())
        .filter_map(|(key, items)| {
            let (row, col) = parse_cell_key(key)?;
            Some(CellView {
                key,
                row,
                col,
                items,
            })
        })
        .collect();

    output::output_success(BoardView {
        source: ctx.source,
        tile_size: state.tile_size(),
        rows: axis_view(state, Axis::Row),
        cols: axis_view(state, Axis::Col),
        cells,
        pool_id: state.pool_id(),
        pool: state.pool(),
        items: state
            .items()
            .values()
            .map(|item| item_view(state, item))
            .collect(),
    });
}

pub fn handle_search(ctx: &CliContext, query: &str, pool_only: bool) {
    let state = ctx.state();
    let ids = if pool_only {
        filter_pool(state, query)
    } else {
        matching_items(state, query)
    };
    let views = ids
        .iter()
        .filter_map(|id| state.item(id))
        .map(|item| item_view(state, item))
        .collect();
    output::output_list::<ItemView>(views);
}

pub async fn handle_tile_size(ctx: &mut CliContext, px: f64) -> anyhow::Result<()> {
    let change = ctx.execute(&SetTileSize { px }).await?;
    output::output_success(serde_json::json!({
        "tile_size": ctx.state().tile_size(),
        "change": change,
    }));
    Ok(())
}

pub fn handle_contrast(color: &str) {
    output::output_success(serde_json::json!({
        "color": color,
        "text_color": contrast_text_color(color),
    }));
}
