//! [`AddressBookService`] — the public operations on address books and
//! contacts.
//!
//! Reads return `Option` and never fail on a missing id. Writes that need
//! their target to exist fail with [`Error::NotFound`]. Contact writes run
//! [`validate_contact`] before anything is persisted.

use std::{collections::HashSet, sync::Arc};

use tracing::debug;
use uuid::Uuid;

use crate::{
  Error, Result,
  model::{AddressBook, AddressBookInput, Contact, ContactDraft},
  store::AddressBookStore,
  validate::validate_contact,
};

/// Orchestrates store calls and validation.
///
/// Cloning is cheap — the store is reference-counted.
pub struct AddressBookService<S> {
  store: Arc<S>,
}

impl<S> Clone for AddressBookService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: AddressBookStore> AddressBookService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub fn store(&self) -> &Arc<S> { &self.store }

  // ── Address books ─────────────────────────────────────────────────────

  pub async fn get_address_book(&self, id: Uuid) -> Result<Option<AddressBook>> {
    self.store.get_address_book(id).await.map_err(Error::store)
  }

  pub async fn list_address_books(&self) -> Result<Vec<AddressBook>> {
    self.store.list_address_books().await.map_err(Error::store)
  }

  /// Persist a new address book; the returned value carries the assigned id.
  pub async fn create_address_book(&self, input: AddressBookInput) -> Result<AddressBook> {
    let book = self
      .store
      .create_address_book(input)
      .await
      .map_err(Error::store)?;
    debug!(id = %book.id, "created address book");
    Ok(book)
  }

  /// Overwrite the mutable fields of an existing address book.
  ///
  /// The id and the contact collection are never touched.
  pub async fn update_address_book(
    &self,
    id:    Uuid,
    input: AddressBookInput,
  ) -> Result<AddressBook> {
    let mut book = self
      .get_address_book(id)
      .await?
      .ok_or_else(|| Error::NotFound(format!("address book {id} not found")))?;

    book.apply(input);
    let book = self.store.save_address_book(book).await.map_err(Error::store)?;
    debug!(%id, "updated address book");
    Ok(book)
  }

  /// Delete an address book and all of its contacts. Absent ids are ignored.
  pub async fn delete_address_book(&self, id: Uuid) -> Result<()> {
    if self.get_address_book(id).await?.is_some() {
      self.store.delete_address_book(id).await.map_err(Error::store)?;
      debug!(%id, "deleted address book");
    }
    Ok(())
  }

  // ── Contacts ──────────────────────────────────────────────────────────

  pub async fn get_contact(&self, id: Uuid) -> Result<Option<Contact>> {
    self.store.get_contact(id).await.map_err(Error::store)
  }

  /// The contacts owned by one address book.
  pub async fn contacts_in(&self, address_book_id: Uuid) -> Result<Vec<Contact>> {
    if self.get_address_book(address_book_id).await?.is_none() {
      return Err(Error::NotFound(format!(
        "address book {address_book_id} not found"
      )));
    }
    self
      .store
      .list_contacts_in(address_book_id)
      .await
      .map_err(Error::store)
  }

  /// Every contact across every address book, at most one per email.
  ///
  /// When several contacts share an email the first one returned by the
  /// store is kept.
  pub async fn all_unique_contacts(&self) -> Result<Vec<Contact>> {
    let mut contacts = self.store.list_contacts().await.map_err(Error::store)?;
    let mut seen = HashSet::new();
    contacts.retain(|c| seen.insert(c.details.email.clone()));
    Ok(contacts)
  }

  /// Validate and persist a new contact.
  pub async fn create_contact(&self, draft: ContactDraft) -> Result<Contact> {
    let address_book_id = self.validated_owner(&draft, None).await?;
    let contact = self
      .store
      .create_contact(address_book_id, draft.details)
      .await
      .map_err(Error::store)?;
    debug!(id = %contact.id, %address_book_id, "created contact");
    Ok(contact)
  }

  /// Validate `draft`, then overwrite the stored contact at `id` with it.
  ///
  /// The owning address book is copied too, so this can move a contact
  /// between books. The contact at `id` is left out of the duplicate-email
  /// check, so saving a contact with its current email is allowed.
  pub async fn update_contact(&self, id: Uuid, draft: ContactDraft) -> Result<Contact> {
    let address_book_id = self.validated_owner(&draft, Some(id)).await?;

    let mut contact = self
      .get_contact(id)
      .await?
      .ok_or_else(|| Error::NotFound(format!("contact {id} not found")))?;

    contact.apply(address_book_id, draft.details);
    let contact = self.store.save_contact(contact).await.map_err(Error::store)?;
    debug!(%id, %address_book_id, "updated contact");
    Ok(contact)
  }

  /// Delete a contact. Absent ids are ignored.
  pub async fn delete_contact(&self, id: Uuid) -> Result<()> {
    if self.get_contact(id).await?.is_some() {
      self.store.delete_contact(id).await.map_err(Error::store)?;
      debug!(%id, "deleted contact");
    }
    Ok(())
  }

  /// Resolve the draft's owning address book and run the validation rule
  /// against its current contacts. Returns the owner's id.
  async fn validated_owner(
    &self,
    draft:     &ContactDraft,
    replacing: Option<Uuid>,
  ) -> Result<Uuid> {
    let owner = match draft.address_book_id {
      Some(id) => self.get_address_book(id).await?,
      None => None,
    };

    let siblings = match &owner {
      Some(book) => Some(
        self
          .store
          .list_contacts_in(book.id)
          .await
          .map_err(Error::store)?,
      ),
      None => None,
    };

    validate_contact(&draft.details, siblings.as_deref(), replacing)?;

    owner
      .map(|book| book.id)
      .ok_or_else(|| Error::NotFound("contact doesn't belong to any address book".into()))
  }
}
