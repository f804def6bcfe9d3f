use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// foodgram - recipes and shopping lists
#[derive(Parser)]
#[command(name = "foodgram")]
#[command(about = "Recipe backend with a shopping cart", long_about = None)]
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
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage the ingredient catalogue
    Ingredients {
        #[command(subcommand)]
        command: IngredientCommands,
    },
    /// Manage recipe tags
    Tags {
        #[command(subcommand)]
        command: TagCommands,
    },
}

#[derive(Subcommand)]
enum IngredientCommands {
    /// Import ingredients from a JSON file
    Import {
        /// JSON array of {"name", "measurement_unit"}
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum TagCommands {
    /// Import tags from a JSON file
    Import {
        /// JSON array of {"name", "slug"}
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = foodgram::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    foodgram::observability::init_observability(
        "foodgram",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => foodgram::cli::serve(config, host, port).await,
        Commands::Migrate => foodgram::cli::migrate(&config).await,
        Commands::Reset => foodgram::cli::reset(&config).await,
        Commands::Ingredients {
            command: IngredientCommands::Import { file },
        } => foodgram::cli::import_ingredients(&config, &file).await,
        Commands::Tags {
            command: TagCommands::Import { file },
        } => foodgram::cli::import_tags(&config, &file).await,
    }
}
