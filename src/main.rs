//! Wordle Server - CLI
//!
//! Serves the guessing game over HTTP, or plays it in the terminal.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_server::{api, commands::run_play, dictionary::Dictionary, engine::GameEngine};

#[derive(Parser)]
#[command(
    name = "wordle_server",
    about = "Word-guessing game server with per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, built-in list) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, env = "WORDLIST", default_value = "embedded")]
    wordlist: String,

    /// Interface to bind when serving
    #[arg(long, global = true, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on when serving
    #[arg(short, long, global = true, env = "PORT", default_value = "4242")]
    port: u16,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the game over HTTP (default)
    Serve,

    /// Play a game in the terminal
    Play,
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(Dictionary::embedded()),
        path => Dictionary::load(path).with_context(|| format!("loading word list {path}")),
    }
}

fn main() -> Result<()> {
    load_dotenv();
    let cli = Cli::parse();

    // Default to Serve mode if no command given
    let command = cli.command.unwrap_or(Commands::Serve);

    match command {
        Commands::Serve => {
            init_tracing();
            // Serving must not start without a dictionary
            let dictionary = load_dictionary(&cli.wordlist)?;
            tracing::info!(words = dictionary.len(), source = %cli.wordlist, "Loaded dictionary");
            serve(dictionary, &cli.host, cli.port)
        }
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let engine = GameEngine::new(Arc::new(dictionary));
            let stdin = std::io::stdin();
            run_play(&engine, stdin.lock(), std::io::stdout())?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn serve(dictionary: Dictionary, host: &str, port: u16) -> Result<()> {
    let engine = Arc::new(GameEngine::new(Arc::new(dictionary)));

    let router = api::routes()
        .with_state(engine)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordle_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_dotenv() {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let _ = dotenvy::from_filename(filename);
    }
}
