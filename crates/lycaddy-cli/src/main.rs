//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers, which delegate to the panel backend
//! built by `bootstrap`.

use clap::{CommandFactory, Parser};

use lycaddy_cli::{
    Cli, CliConfig, CliError, Commands, ConfigCommand, FilesCommand, bootstrap, console, handlers,
    logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables first so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let result = run(command, CliConfig::with_defaults(cli.caddy_dir)).await;

    match result {
        Ok(()) => Ok(()),
        Err(e) => match e.downcast_ref::<CliError>() {
            Some(cli_err) => {
                eprintln!("Error: {cli_err}");
                std::process::exit(cli_err.exit_code());
            }
            None => Err(e),
        },
    }
}

async fn run(command: Commands, config: Result<CliConfig, CliError>) -> anyhow::Result<()> {
    let ctx = bootstrap(config?);

    match command {
        Commands::Paths => handlers::paths::execute(&ctx.config),
        Commands::Config { command } => match command {
            ConfigCommand::Show { json } => handlers::config::show(&ctx, json).await?,
            ConfigCommand::Set { root, port } => handlers::config::set(&ctx, root, port).await?,
            ConfigCommand::Pick => handlers::config::pick(&ctx).await?,
        },
        Commands::Files { command } => match command {
            FilesCommand::List { dir, json } => handlers::files::list(dir, json).await?,
            FilesCommand::Upload { dir, files } => handlers::files::upload(dir, &files).await?,
        },
        Commands::Serve => handlers::serve::execute(&ctx).await?,
        Commands::Console => console::run(&ctx).await?,
    }

    Ok(())
}
