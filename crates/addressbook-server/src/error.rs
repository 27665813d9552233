//! Error type for the server crate.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed seed file: {0}")]
  Json(#[from] serde_json::Error),

  #[error("seed rejected: {0}")]
  Service(#[from] addressbook_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
