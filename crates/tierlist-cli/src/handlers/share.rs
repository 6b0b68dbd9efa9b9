use crate::cli::{ExportArgs, ShareArgs};
use crate::clipboard::copy_to_clipboard;
use crate::context::CliContext;
use crate::output;
use tierlist_persistence::{export_to_file, to_pretty_json};

pub async fn handle_export(ctx: &CliContext, args: ExportArgs) -> anyhow::Result<()> {
    match args.output {
        Some(path) => {
            if let Err(e) = export_to_file(ctx.state(), &path).await {
                output::output_error(&format!("Export failed: {}", e));
            }
            output::output_success(serde_json::json!({
                "exported": path.display().to_string(),
                "items": ctx.state().items().len(),
            }));
        }
        None => println!("{}", to_pretty_json(ctx.state())?),
    }
    Ok(())
}

pub async fn handle_share(ctx: &CliContext, args: ShareArgs) -> anyhow::Result<()> {
    let Some(url) = ctx.bridge().share_url(ctx.state()) else {
        output::output_error("The board could not be encoded");
    };
    let copied = !args.no_copy && copy_to_clipboard(&url);
    if args.write {
        ctx.bridge().write_fragment(ctx.state()).await?;
    }
    output::output_success(serde_json::json!({
        "url": url,
        "copied": copied,
        "written": args.write,
    }));
    Ok(())
}
