use crate::cli::{DragArgs, ImportAction};
use crate::context::CliContext;
use crate::handlers::{container_arg, item_view};
use crate::output;
use tierlist_domain::commands::AppendEntries;
use tierlist_domain::{parse_pairs, split_import, AppState, ChangeKind, ItemEntry};
use tierlist_persistence::import_from_file;

pub async fn handle_import(ctx: &mut CliContext, action: ImportAction) -> anyhow::Result<()> {
    match action {
        ImportAction::Names { text, replace } => {
            let names: Vec<String> = text.iter().flat_map(|t| split_import(t)).collect();
            let imported = names.len();
            let change = if replace {
                let state = AppState::from_names(&names, ctx.session.ids_mut());
                let change = ctx.session.replace_state(state);
                ctx.commit(change).await;
                change
            } else {
                append(ctx, names.into_iter().map(ItemEntry::named).collect()).await?
            };
            output::output_success(serde_json::json!({
                "imported": imported,
                "items": ctx.state().items().len(),
                "change": change,
            }));
        }
        ImportAction::Pairs { text } => {
            let entries = parse_pairs(&text);
            let imported = entries.len();
            let change = append(ctx, entries).await?;
            output::output_success(serde_json::json!({
                "imported": imported,
                "items": ctx.state().items().len(),
                "change": change,
            }));
        }
        ImportAction::File { path } => {
            let state = match import_from_file(&path, ctx.session.ids_mut()).await {
                Ok(state) => state,
                Err(e) => output::output_error(&format!(
                    "Invalid file {}: {}",
                    path.display(),
                    e
                )),
            };
            let change = ctx.session.replace_state(state);
            ctx.commit(change).await;
            output::output_success(serde_json::json!({
                "items": ctx.state().items().len(),
                "rows": ctx.state().rows().len(),
                "cols": ctx.state().cols().len(),
                "change": change,
            }));
        }
    }
    Ok(())
}

async fn append(ctx: &mut CliContext, entries: Vec<ItemEntry>) -> anyhow::Result<ChangeKind> {
    if entries.is_empty() {
        return Ok(ChangeKind::Unchanged);
    }
    Ok(ctx.execute(&AppendEntries { entries }).await?)
}

fn require_item(ctx: &CliContext, item: &str) {
    if ctx.state().item(item).is_none() {
        output::output_error(&format!("Item not found: {}", item));
    }
}

pub async fn handle_place(ctx: &mut CliContext, item: &str, container: &str) -> anyhow::Result<()> {
    require_item(ctx, item);
    let container = container_arg(ctx.state(), container).to_string();
    if !ctx.state().is_valid_container(&container) {
        output::output_error(&format!("Container not found: {}", container));
    }

    ctx.session.select_item(item);
    let change = ctx.session.click_container(&container)?;
    ctx.commit(change).await;
    print_item(ctx, item, change);
    Ok(())
}

pub async fn handle_drag(ctx: &mut CliContext, args: DragArgs) -> anyhow::Result<()> {
    require_item(ctx, &args.item);

    ctx.session.drag_start(&args.item);
    for over in &args.over {
        ctx.session.drag_over(Some(over.as_str()))?;
    }
    let change = match args.drop.as_deref() {
        Some(target) if !args.cancel => ctx.session.drag_end(Some(target))?,
        _ => ctx.session.drag_cancel(),
    };
    ctx.commit(change).await;
    print_item(ctx, &args.item, change);
    Ok(())
}

fn print_item(ctx: &CliContext, item: &str, change: ChangeKind) {
    let state = ctx.state();
    let Some(record) = state.item(item) else {
        output::output_error(&format!("Item not found: {}", item));
    };
    let container = state.locate_container(item).unwrap_or_default();
    let position = state
        .container(container)
        .and_then(|ids| ids.iter().position(|id| id == item));
    output::output_success(serde_json::json!({
        "item": item_view(state, record),
        "position": position,
        "change": change,
    }));
}

pub async fn handle_delete(ctx: &mut CliContext, item: &str) -> anyhow::Result<()> {
    require_item(ctx, item);
    let change = ctx.session.delete_item(item)?;
    ctx.commit(change).await;
    output::output_success(serde_json::json!({ "deleted": item, "change": change }));
    Ok(())
}

pub async fn handle_clear_pool(ctx: &mut CliContext) -> anyhow::Result<()> {
    let removed = ctx.state().pool().len();
    let change = ctx.session.clear_pool()?;
    ctx.commit(change).await;
    output::output_success(serde_json::json!({ "deleted": removed, "change": change }));
    Ok(())
}

pub async fn handle_clear_grid(ctx: &mut CliContext) -> anyhow::Result<()> {
    let change = ctx.session.clear_grid_keep_items()?;
    ctx.commit(change).await;
    output::output_success(serde_json::json!({
        "pool": ctx.state().pool(),
        "change": change,
    }));
    Ok(())
}

pub async fn handle_reset(ctx: &mut CliContext) -> anyhow::Result<()> {
    let change = ctx.session.reset();
    ctx.commit(change).await;
    if let Err(e) = ctx.bridge().clear_fragment().await {
        tracing::warn!("Failed to clear share fragment: {}", e);
    }
    output::output_success(serde_json::json!({ "change": change }));
    Ok(())
}
