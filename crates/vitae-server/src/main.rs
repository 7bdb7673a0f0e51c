//! vitae server binary.
//!
//! Loads `config.toml` (or whatever `--config` points at), opens the
//! SQLite store, and serves the profile API under `/api` with uploaded
//! media (profile pictures, resume files) under `/media`.
//!
//! Every configuration key can also be supplied from the environment with
//! a `VITAE_` prefix, e.g. `VITAE_PORT=8080`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use clap::Parser;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use vitae_store_sqlite::SqliteStore;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Everything the server needs to come up, from file and environment.
#[derive(Deserialize, Clone)]
struct ServerConfig {
  host:       String,
  port:       u16,
  store_path: PathBuf,
  /// Directory whose contents are served under `/media`.
  media_dir:  PathBuf,
}

#[derive(Parser)]
#[command(author, version, about = "vitae profile server")]
struct Cli {
  /// Configuration file to read.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // A missing config file is fine as long as the environment fills the gaps.
  let cfg: ServerConfig = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("VITAE"))
    .build()
    .context("cannot read configuration")?
    .try_deserialize()
    .context("incomplete server configuration")?;

  let store_path = expand_tilde(&cfg.store_path);
  let media_dir = expand_tilde(&cfg.media_dir);

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("cannot open store at {store_path:?}"))?;

  let app = Router::new()
    .nest("/api", vitae_api::api_router(Arc::new(store)))
    .nest_service("/media", ServeDir::new(&media_dir))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", cfg.host, cfg.port);
  tracing::info!("listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("cannot bind {address}"))?;

  axum::serve(listener, app).await.context("server exited")?;

  Ok(())
}

/// Expand a leading `~` to `$HOME`.
fn expand_tilde(path: &Path) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) = text.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
