use anyhow::{Context, Result};
use clap::Parser;

use empdesk::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_serve,
};
use empdesk::cli::{Cli, Commands};
use empdesk::config::AppConfig;

fn main() -> Result<()> {
    // A missing .env is fine; variables may come from the real environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    if let Commands::Init { force } = cli.command {
        return handle_init(&cwd, force);
    }

    let mut config =
        AppConfig::load(cli.config.as_deref(), &cwd).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    empdesk::logging::init(cli.verbose, config.logging.file.as_deref())
        .context("Failed to initialize logging")?;
    tracing::debug!(backend = ?config.database.backend, "Configuration loaded");

    let ctx = CommandContext::new(config);
    match cli.command {
        Commands::Serve { .. } => handle_serve(ctx),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Init { .. } => Ok(()),
    }
}
