use anyhow::Result;
use ayahsearch_common::{logger, AppConfig};
use ayahsearch_embedding::{EmbeddingClient, OllamaClient};
use ayahsearch_search::SearchEngine;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "ayahsearch")]
#[command(about = "AyahSearch - semantic Quran verse search with conversational browsing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "5000")]
        port: u16,

        /// Path to the verse corpus JSON file
        #[arg(long)]
        corpus: Option<String>,
    },
}

/// Build the engine and run the server until shutdown
async fn run(config: AppConfig) -> Result<()> {
    let client = OllamaClient::new(
        config.ollama_base_url.as_str(),
        config.embedding_model.as_str(),
    )?;

    if !client.test_connection().await.unwrap_or(false) {
        tracing::warn!(
            "Embedding service at {} is not reachable; startup embedding may fail",
            config.ollama_base_url
        );
    }

    let client: Arc<dyn EmbeddingClient> = Arc::new(client);
    let engine = Arc::new(SearchEngine::build(&config, client).await?);

    let stats = engine.stats();
    tracing::info!(
        "Ready: {} verses indexed, model {}, dimension {}",
        stats.verses,
        stats.embedding_model,
        stats.dimension
    );

    println!("Server listening on http://{}", config.server_bind_address());

    ayahsearch_server::start_server(config, engine).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    // Note: AppConfig::from_env() also loads .env, but we do it here early
    // to ensure any CLI argument overrides work correctly
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port, corpus }) => {
            // Override with CLI arguments
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("PORT", port.to_string());
            if let Some(corpus) = &corpus {
                std::env::set_var("CORPUS_PATH", corpus);
            }

            // Load config with updated env vars
            let config = AppConfig::from_env()?;

            // Setup logging
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("AyahSearch starting...");
            tracing::info!("  Host: {}", config.server_host);
            tracing::info!("  Port: {}", config.server_port);
            tracing::info!("  Corpus: {}", config.corpus_path.display());

            run(config).await?;
        }
        None => {
            // Default: start server with default config
            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("AyahSearch starting with default configuration...");

            run(config).await?;
        }
    }

    Ok(())
}
