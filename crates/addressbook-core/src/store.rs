//! The `AddressBookStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `addressbook-store-sqlite`). The service depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::model::{AddressBook, AddressBookInput, Contact, ContactDetails};

/// Durable keyed storage for address books and contacts.
///
/// Lookups return `None` for a missing id rather than an error. `save_*`
/// methods have upsert semantics; `create_*` methods assign a fresh id.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait AddressBookStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Address books ─────────────────────────────────────────────────────

  /// Retrieve an address book by id. Returns `None` if not found.
  fn get_address_book(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<AddressBook>, Self::Error>> + Send + '_;

  /// List every address book, in no particular order.
  fn list_address_books(
    &self,
  ) -> impl Future<Output = Result<Vec<AddressBook>, Self::Error>> + Send + '_;

  /// Persist a new address book under a freshly generated id.
  fn create_address_book(
    &self,
    input: AddressBookInput,
  ) -> impl Future<Output = Result<AddressBook, Self::Error>> + Send + '_;

  /// Insert `book`, or overwrite the stored record with the same id.
  fn save_address_book(
    &self,
    book: AddressBook,
  ) -> impl Future<Output = Result<AddressBook, Self::Error>> + Send + '_;

  /// Remove an address book together with every contact it owns.
  ///
  /// Deleting an unknown id is not an error.
  fn delete_address_book(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Contacts ──────────────────────────────────────────────────────────

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// List every contact across every address book.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// List the contacts owned by one address book.
  fn list_contacts_in(
    &self,
    address_book_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Persist a new contact under a freshly generated id.
  ///
  /// The owning address book must exist.
  fn create_contact(
    &self,
    address_book_id: Uuid,
    details: ContactDetails,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Insert `contact`, or overwrite the stored record with the same id.
  fn save_contact(
    &self,
    contact: Contact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Remove a contact. Deleting an unknown id is not an error.
  fn delete_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
