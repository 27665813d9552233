//! Error types for `addressbook-core`.

use thiserror::Error;

/// An error raised by the [`AddressBookService`](crate::AddressBookService)
/// or the contact validation rule.
#[derive(Debug, Error)]
pub enum Error {
  /// The referenced address book or contact does not exist, or a contact has
  /// no owning address book.
  #[error("{0}")]
  NotFound(String),

  /// The submitted contact fails a content or uniqueness rule.
  #[error("{0}")]
  Invalid(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
