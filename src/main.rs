use anyhow::Context;
use clap::{Parser, Subcommand};

use movie_catalog_lib::shared::utils::init_logger;
use movie_catalog_lib::shared::Config;

#[derive(Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Movie, actor and rating catalog service", long_about = None)]
struct Cli {
    /// Host to bind to (overrides HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run migrations and serve the HTTP API (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
    /// Insert the demonstration catalog
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let config = Config::from_env()
        .context("failed to load configuration")?
        .with_overrides(cli.host, cli.port);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => movie_catalog_lib::serve(config)
            .await
            .context("server failed")?,
        Command::Migrate => {
            movie_catalog_lib::migrate(&config).context("migration failed")?;
        }
        Command::Seed => {
            movie_catalog_lib::seed(&config)
                .await
                .context("seeding failed")?;
        }
    }

    Ok(())
}
