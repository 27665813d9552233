//! addressbook server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, optionally imports seed data, and serves the JSON
//! API over HTTP.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use addressbook_core::AddressBookService;
use addressbook_server::{ServerConfig, seed};
use addressbook_store_sqlite::SqliteStore;
use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Address book HTTP server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Import this JSON seed file into an empty store; overrides `seed_path`.
  #[arg(long)]
  seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ADDRESSBOOK"))
    .build()
    .context("failed to read config file")?;

  let mut server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;
  if cli.seed.is_some() {
    server_cfg.seed_path = cli.seed;
  }

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  let service = AddressBookService::new(Arc::new(store));

  if let Some(seed_path) = &server_cfg.seed_path {
    let seed_path = expand_tilde(seed_path);
    let books = seed::load(&seed_path)
      .with_context(|| format!("failed to load seed file {seed_path:?}"))?;
    seed::import(&service, books)
      .await
      .with_context(|| format!("failed to import seed file {seed_path:?}"))?;
  }

  let app = addressbook_server::router(service, &server_cfg);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}{}", server_cfg.api_prefix);
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
