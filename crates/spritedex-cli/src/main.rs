//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging, bootstraps the engine and routes to a
//! handler. Errors carrying a `CliError` pick the process exit code.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use spritedex_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Logs go to stderr so stdout stays clean for command output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig {
        data_dir: cli.data_dir,
        concurrency: cli.concurrency,
        manifest: cli.manifest,
    };

    match command {
        Commands::Paths => handlers::paths::execute(&config)?,
        Commands::Fetch { collections, all } => {
            let ctx = bootstrap(config)?;
            handlers::fetch::execute(&ctx, &collections, all).await?;
        }
        Commands::Get {
            collection,
            name,
            output,
            refresh,
        } => {
            let ctx = bootstrap(config)?;
            handlers::get::execute(&ctx, &collection, &name, output.as_deref(), refresh).await?;
        }
        Commands::Delete { collection } => {
            let ctx = bootstrap(config)?;
            handlers::delete::execute(&ctx, &collection).await?;
        }
        Commands::Cleanup {
            keep,
            ignore_manifest,
        } => {
            let ctx = bootstrap(config)?;
            handlers::cleanup::execute(&ctx, keep, ignore_manifest).await?;
        }
        Commands::List => {
            let ctx = bootstrap(config)?;
            handlers::list::execute(&ctx).await?;
        }
    }

    Ok(())
}
