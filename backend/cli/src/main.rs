mod fixture;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use verseforge_config::VerseforgeConfig;
use verseforge_resolver::Resolver;
use verseforge_services::{BookmarkService, ResponseCache};
use verseforge_store::SqliteEntityStore;

use fixture::Fixture;

#[derive(Parser)]
#[command(name = "verseforge")]
#[command(about = "Verseforge — bookmark resolution backend")]
#[command(version)]
struct Cli {
    /// Path to a config file (defaults to ~/.verseforge/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the SQLite database (overrides the config)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a user's bookmarks and print them as JSON
    Resolve {
        /// User id to resolve bookmarks for
        #[arg(short, long)]
        user: String,
        /// Emit the detailed (flattened) variant instead of the full one
        #[arg(long)]
        detailed: bool,
    },
    /// Load a JSON fixture of entities and bookmarks into the database
    Seed {
        /// Fixture file path
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Show row counts per table
    Status,
}

fn open_store(cli_db: Option<&PathBuf>, config: &VerseforgeConfig) -> Result<SqliteEntityStore> {
    let path = cli_db
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(&config.database.path));
    Ok(SqliteEntityStore::open(path)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = verseforge_config::load_or_default(cli.config.as_deref()).await?;
    verseforge_logging::init(&config.logging.dir, &config.logging.level);

    match &cli.command {
        Commands::Resolve { user, detailed } => {
            let store = Arc::new(open_store(cli.db.as_ref(), &config)?);
            let service = BookmarkService::new(
                store.clone(),
                Resolver::new(store),
                ResponseCache::new(Duration::from_secs(config.cache.ttl_seconds)),
            );
            let payload = service.formatted_for_user(user, *detailed).await?;
            println!("{payload}");
        }
        Commands::Seed { file } => {
            let store = open_store(cli.db.as_ref(), &config)?;
            let fixture = Fixture::load(file).await?;
            fixture.apply(&store).await?;
            println!("seeded from {}", file.display());
        }
        Commands::Status => {
            let store = open_store(cli.db.as_ref(), &config)?;
            for (table, count) in store.table_counts().await? {
                println!("{table:>16}  {count}");
            }
        }
    }

    Ok(())
}
