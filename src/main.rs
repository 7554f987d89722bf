use anyhow::Context;
use clap::{Parser, Subcommand};
use migemo_core::config::Config;
use migemo_core::encoder::encode_words;
use migemo_core::provider::MIGEMO_PROVIDER_ID;
use migemo_core::{Catalog, LiteralProvider, StaticCatalog, Transliterator};
use migemo_engine::ProcessTransliterator;
use migemo_search::{MigemoExtension, ProviderResults, SearchSystem};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "migemo-search", about = "Romanized application search via cmigemo")]
struct Cli {
    /// Log at debug level to stderr (RUST_LOG still wins when set).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of ~/.config/migemo-search/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Engine executable, overriding the config file.
    #[arg(long, global = true)]
    executable: Option<PathBuf>,

    /// Engine dictionary, overriding the config file.
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the engine's pattern for the given terms.
    Query {
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Search a catalog once and print what the migemo provider adds.
    Search {
        /// Catalog file: one `id<TAB>name` or bare name per line.
        #[arg(long)]
        catalog: PathBuf,
        /// Print every provider's results as JSON.
        #[arg(long)]
        json: bool,
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Read one search string per stdin line and replay them as keystrokes.
    Interactive {
        #[arg(long)]
        catalog: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to built-in config");
            Config::defaults()
        }),
    };
    if let Some(executable) = cli.executable {
        config.engine.executable = executable;
    }
    if let Some(dictionary) = cli.dictionary {
        config.engine.dictionary = dictionary;
    }

    match cli.command {
        Commands::Query { terms } => {
            let mut engine = ProcessTransliterator::start(&config.engine)?;
            let line = encode_words(terms.iter().map(String::as_str));
            let pattern = engine.query(&line, &CancellationToken::new()).await;
            engine.stop().await;
            println!("{}", pattern?);
        }
        Commands::Search {
            catalog,
            json,
            terms,
        } => {
            let (mut system, mut extension) = build_system(&config, &catalog)?;
            let results = system.update_search(&terms.join(" ")).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if let Some(own) = results.iter().find(|r| r.provider == MIGEMO_PROVIDER_ID) {
                for candidate in &own.results {
                    println!("{}", candidate.name);
                }
            }
            extension.disable(&mut system).await;
        }
        Commands::Interactive { catalog } => {
            let (mut system, mut extension) = build_system(&config, &catalog)?;
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let results = system.update_search(&line).await;
                print_round(&line, &results);
            }
            extension.disable(&mut system).await;
        }
    }

    Ok(())
}

/// A search system with the literal provider built in and migemo enabled on
/// top of it, the way the desktop shell hosts the extension.
fn build_system(
    config: &Config,
    catalog_path: &std::path::Path,
) -> anyhow::Result<(SearchSystem, MigemoExtension)> {
    let catalog: Arc<dyn Catalog> = Arc::new(StaticCatalog::load(catalog_path)?);
    let mut system = SearchSystem::new();
    system.add_provider(Box::new(LiteralProvider::new(catalog.clone())));

    let mut extension = MigemoExtension::new(config.engine.clone());
    extension
        .enable(&mut system, catalog)
        .context("enabling migemo search")?;
    Ok((system, extension))
}

fn print_round(input: &str, results: &[ProviderResults]) {
    println!("> {input}");
    for r in results {
        let names = if r.results.pending {
            "(waiting for more input)".to_string()
        } else {
            r.results.names().join(", ")
        };
        println!("  {:<8} {}", r.provider, names);
    }
}
