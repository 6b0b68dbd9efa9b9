use crate::cli::{AxisAction, ColAction};
use crate::context::CliContext;
use crate::handlers::axis_view;
use crate::output;
use tierlist_domain::commands::{
    AddAxisEntry, ApplyColumnWidthToAll, Command, RecolorAxisEntry, RemoveAxisEntry,
    RenameAxisEntry, SetColumnWidth,
};
use tierlist_domain::Axis;

fn edit_command(axis: Axis, action: AxisAction) -> Box<dyn Command> {
    match action {
        AxisAction::Add => Box::new(AddAxisEntry { axis }),
        AxisAction::Remove { index } => Box::new(RemoveAxisEntry { axis, index }),
        AxisAction::Rename { index, label } => Box::new(RenameAxisEntry { axis, index, label }),
        AxisAction::Recolor { index, color } => Box::new(RecolorAxisEntry { axis, index, color }),
    }
}

pub async fn handle_row(ctx: &mut CliContext, action: AxisAction) -> anyhow::Result<()> {
    run(ctx, Axis::Row, edit_command(Axis::Row, action)).await
}

pub async fn handle_col(ctx: &mut CliContext, action: ColAction) -> anyhow::Result<()> {
    let command: Box<dyn Command> = match action {
        ColAction::Edit(action) => edit_command(Axis::Col, action),
        ColAction::Width { index, px } => Box::new(SetColumnWidth { index, px }),
        ColAction::WidthAll { px } => Box::new(ApplyColumnWidthToAll { px }),
    };
    run(ctx, Axis::Col, command).await
}

async fn run(ctx: &mut CliContext, axis: Axis, command: Box<dyn Command>) -> anyhow::Result<()> {
    let change = ctx.execute(command.as_ref()).await?;
    let entries = axis_view(ctx.state(), axis);
    output::output_success(serde_json::json!({
        "axis": axis,
        "entries": entries,
        "pool": ctx.state().pool(),
        "change": change,
    }));
    Ok(())
}
