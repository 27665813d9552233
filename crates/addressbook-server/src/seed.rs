//! Initial data import.
//!
//! A seed file is a JSON array of address books, each with an optional list
//! of contacts in the same shape the API accepts:
//!
//! ```json
//! [{ "name": "Friends", "contacts": [{ "firstName": "Ann", "email": "ann@example.com" }] }]
//! ```
//!
//! Everything goes through [`AddressBookService`], so contacts are validated
//! exactly as they would be over HTTP.

use std::path::Path;

use addressbook_core::{
  AddressBookService,
  model::{AddressBookInput, ContactDetails, ContactDraft},
  store::AddressBookStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct SeedAddressBook {
  pub name:     Option<String>,
  #[serde(default)]
  pub contacts: Vec<ContactDetails>,
}

/// Read and parse a seed file.
pub fn load(path: &Path) -> Result<Vec<SeedAddressBook>> {
  let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(serde_json::from_str(&raw)?)
}

/// Create every seeded address book and contact, unless the store already
/// holds address books. Returns the number of address books created.
///
/// A rejected contact removes every address book this call created, so a
/// failed import leaves the store empty and the next start retries it.
pub async fn import<S>(
  service: &AddressBookService<S>,
  books:   Vec<SeedAddressBook>,
) -> Result<usize>
where
  S: AddressBookStore,
{
  if !service.list_address_books().await?.is_empty() {
    tracing::info!("store is not empty; skipping seed import");
    return Ok(0);
  }

  let mut created = Vec::with_capacity(books.len());
  if let Err(err) = import_all(service, books, &mut created).await {
    tracing::warn!(error = %err, "seed import failed; rolling back");
    for id in created {
      service.delete_address_book(id).await?;
    }
    return Err(err);
  }

  tracing::info!(address_books = created.len(), "seed import complete");
  Ok(created.len())
}

async fn import_all<S>(
  service: &AddressBookService<S>,
  books:   Vec<SeedAddressBook>,
  created: &mut Vec<Uuid>,
) -> Result<()>
where
  S: AddressBookStore,
{
  for seed in books {
    let book = service
      .create_address_book(AddressBookInput { name: seed.name })
      .await?;
    created.push(book.id);
    for details in seed.contacts {
      service
        .create_contact(ContactDraft::new(book.id, details))
        .await?;
    }
  }
  Ok(())
}
