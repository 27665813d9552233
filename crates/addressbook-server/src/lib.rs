//! HTTP server wiring for the address book service.
//!
//! Mounts the [`addressbook_api`] router under a configurable prefix, adds
//! request tracing, and optionally imports seed data at startup.

pub mod error;
pub mod seed;

pub use error::{Error, Result};

use std::path::PathBuf;

use addressbook_core::{AddressBookService, store::AddressBookStore};
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ADDRESSBOOK_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Path prefix the API is nested under; empty or `/` mounts it at the root.
  pub api_prefix: String,
  /// JSON seed file imported into an empty store at startup.
  pub seed_path:  Option<PathBuf>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       8080,
      store_path: PathBuf::from("addressbook.db"),
      api_prefix: "/api".to_string(),
      seed_path:  None,
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the top-level axum [`Router`].
pub fn router<S>(service: AddressBookService<S>, config: &ServerConfig) -> Router
where
  S: AddressBookStore + 'static,
{
  let api = addressbook_api::api_router(service);
  let prefix = config.api_prefix.trim_matches('/');

  let app = if prefix.is_empty() {
    api
  } else {
    Router::new().nest(&format!("/{prefix}"), api)
  };

  app.layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
