//! Address books and contacts.
//!
//! A contact refers to its owning address book by id; the address book does
//! not embed its contacts. The collection of a book is whatever the store
//! returns for that book id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Address book ────────────────────────────────────────────────────────────

/// A named collection of contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
  pub id:   Uuid,
  pub name: Option<String>,
}

/// The writable fields of an [`AddressBook`]; also the JSON request body.
///
/// Any `id` or `contacts` member in an inbound body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookInput {
  pub name: Option<String>,
}

impl AddressBookInput {
  pub fn named(name: impl Into<String>) -> Self {
    Self { name: Some(name.into()) }
  }
}

impl AddressBook {
  /// Copy the mutable fields of `input` onto this book. The id is kept.
  pub fn apply(&mut self, input: AddressBookInput) {
    let AddressBookInput { name } = input;
    self.name = name;
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// Free-text attributes of a contact; also the JSON request body.
///
/// Only `first_name` and `email` are required, and only when the contact is
/// validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
  pub first_name:   Option<String>,
  pub middle_name:  Option<String>,
  pub sur_name:     Option<String>,
  pub phone_number: Option<String>,
  pub email:        Option<String>,
  pub state:        Option<String>,
  pub country:      Option<String>,
}

impl ContactDetails {
  /// Shorthand for the two required fields.
  pub fn new(first_name: impl Into<String>, email: impl Into<String>) -> Self {
    Self {
      first_name: Some(first_name.into()),
      email: Some(email.into()),
      ..Self::default()
    }
  }
}

/// A stored contact.
///
/// The owning address book is never part of the wire representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:              Uuid,
  #[serde(skip)]
  pub address_book_id: Uuid,
  #[serde(flatten)]
  pub details:         ContactDetails,
}

impl Contact {
  /// The key used for duplicate detection.
  pub fn email(&self) -> Option<&str> { self.details.email.as_deref() }

  /// Copy every mutable field onto this contact, including the owner. The id
  /// is kept.
  pub fn apply(&mut self, address_book_id: Uuid, details: ContactDetails) {
    self.address_book_id = address_book_id;
    self.details = details;
  }
}

/// A contact submitted for creation or update, before it has an id.
///
/// `address_book_id` is `None` when the caller did not attach the contact to
/// any address book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
  pub address_book_id: Option<Uuid>,
  pub details:         ContactDetails,
}

impl ContactDraft {
  pub fn new(address_book_id: Uuid, details: ContactDetails) -> Self {
    Self { address_book_id: Some(address_book_id), details }
  }

  pub fn unowned(details: ContactDetails) -> Self {
    Self { address_book_id: None, details }
  }
}
