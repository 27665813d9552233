//! Encoding and decoding helpers between domain types and SQLite rows.
//!
//! UUIDs are stored as hyphenated lowercase strings. Rows are first read into
//! `Raw*` structs inside the connection closure and decoded afterwards, so
//! UUID parse errors surface as [`Error::Uuid`](crate::Error::Uuid).

use addressbook_core::model::{AddressBook, Contact, ContactDetails};
use uuid::Uuid;

use crate::Result;

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Address books ───────────────────────────────────────────────────────────

pub const ADDRESS_BOOK_COLUMNS: &str = "id, name";

pub struct RawAddressBook {
  pub id:   String,
  pub name: Option<String>,
}

impl RawAddressBook {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { id: row.get(0)?, name: row.get(1)? })
  }

  pub fn into_address_book(self) -> Result<AddressBook> {
    Ok(AddressBook { id: decode_uuid(&self.id)?, name: self.name })
  }
}

// ─── Contacts ────────────────────────────────────────────────────────────────

pub const CONTACT_COLUMNS: &str = "id, address_book_id, first_name, middle_name, \
                                   sur_name, phone_number, email, state, country";

pub struct RawContact {
  pub id:              String,
  pub address_book_id: String,
  pub details:         ContactDetails,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:              row.get(0)?,
      address_book_id: row.get(1)?,
      details:         ContactDetails {
        first_name:   row.get(2)?,
        middle_name:  row.get(3)?,
        sur_name:     row.get(4)?,
        phone_number: row.get(5)?,
        email:        row.get(6)?,
        state:        row.get(7)?,
        country:      row.get(8)?,
      },
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:              decode_uuid(&self.id)?,
      address_book_id: decode_uuid(&self.address_book_id)?,
      details:         self.details,
    })
  }
}
