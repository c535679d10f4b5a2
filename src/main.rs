use anyhow::Result;
use clap::{Parser, Subcommand};

/// zagros - restaurant website
#[derive(Parser)]
#[command(name = "zagros")]
#[command(about = "Zagros restaurant website server", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate the catalog document and exit
    CheckCatalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = zagros::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    zagros::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => zagros::server::serve(config, host, port).await,
        Commands::CheckCatalog => check_catalog(&config),
    }
}

fn check_catalog(config: &zagros::config::Config) -> Result<()> {
    let catalog = zagros::catalog::load(&config.menu.catalog_path)?;
    tracing::info!(
        items = catalog.items.len(),
        categories = catalog.categories.len(),
        "Catalog is valid"
    );
    Ok(())
}
