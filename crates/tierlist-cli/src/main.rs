mod cli;
mod clipboard;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use tierlist_core::AppConfig;

fn init_logging() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TIERLIST_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        output::output_error(&e.to_string());
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "tierlist", &mut std::io::stdout());
        return Ok(());
    }
    if let Commands::Contrast { ref color } = cli.command {
        handlers::board::handle_contrast(color);
        return Ok(());
    }

    let config = AppConfig::load();
    let mut ctx = CliContext::load(&cli, &config).await?;

    match cli.command {
        Commands::Show => handlers::board::handle_show(&ctx),
        Commands::Search { query, pool } => handlers::board::handle_search(&ctx, &query, pool),
        Commands::Import(import_cmd) => {
            handlers::items::handle_import(&mut ctx, import_cmd.action).await?;
        }
        Commands::Export(args) => handlers::share::handle_export(&ctx, args).await?,
        Commands::Share(args) => handlers::share::handle_share(&ctx, args).await?,
        Commands::Place { item, container } => {
            handlers::items::handle_place(&mut ctx, &item, &container).await?;
        }
        Commands::Drag(args) => handlers::items::handle_drag(&mut ctx, args).await?,
        Commands::Delete { item } => handlers::items::handle_delete(&mut ctx, &item).await?,
        Commands::ClearPool => handlers::items::handle_clear_pool(&mut ctx).await?,
        Commands::ClearGrid => handlers::items::handle_clear_grid(&mut ctx).await?,
        Commands::Reset => handlers::items::handle_reset(&mut ctx).await?,
        Commands::Row(row_cmd) => handlers::axis::handle_row(&mut ctx, row_cmd.action).await?,
        Commands::Col(col_cmd) => handlers::axis::handle_col(&mut ctx, col_cmd.action).await?,
        Commands::TileSize { px } => handlers::board::handle_tile_size(&mut ctx, px).await?,
        Commands::Contrast { .. } | Commands::Completions { .. } => {}
    }

    Ok(())
}
