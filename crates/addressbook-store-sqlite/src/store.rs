//! [`SqliteStore`] — the SQLite implementation of [`AddressBookStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use addressbook_core::{
  model::{AddressBook, AddressBookInput, Contact, ContactDetails},
  store::AddressBookStore,
};

use crate::{
  Result,
  encode::{
    ADDRESS_BOOK_COLUMNS, CONTACT_COLUMNS, RawAddressBook, RawContact, encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An address book store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Upsert a full contact row.
  async fn write_contact(&self, contact: &Contact) -> Result<()> {
    let id_str   = encode_uuid(contact.id);
    let book_str = encode_uuid(contact.address_book_id);
    let d        = contact.details.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (
             id, address_book_id, first_name, middle_name, sur_name,
             phone_number, email, state, country
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
           ON CONFLICT(id) DO UPDATE SET
             address_book_id = excluded.address_book_id,
             first_name      = excluded.first_name,
             middle_name     = excluded.middle_name,
             sur_name        = excluded.sur_name,
             phone_number    = excluded.phone_number,
             email           = excluded.email,
             state           = excluded.state,
             country         = excluded.country",
          rusqlite::params![
            id_str,
            book_str,
            d.first_name,
            d.middle_name,
            d.sur_name,
            d.phone_number,
            d.email,
            d.state,
            d.country,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn query_contacts(&self, book: Option<Uuid>) -> Result<Vec<Contact>> {
    let book_str = book.map(encode_uuid);

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let rows = if let Some(b) = book_str {
          let mut stmt = conn.prepare(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE address_book_id = ?1"
          ))?;
          stmt
            .query_map(rusqlite::params![b], RawContact::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt =
            conn.prepare(&format!("SELECT {CONTACT_COLUMNS} FROM contacts"))?;
          stmt
            .query_map([], RawContact::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }
}

// ─── AddressBookStore impl ───────────────────────────────────────────────────

impl AddressBookStore for SqliteStore {
  type Error = crate::Error;

  // ── Address books ─────────────────────────────────────────────────────────

  async fn get_address_book(&self, id: Uuid) -> Result<Option<AddressBook>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawAddressBook> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {ADDRESS_BOOK_COLUMNS} FROM address_books WHERE id = ?1"),
            rusqlite::params![id_str],
            RawAddressBook::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawAddressBook::into_address_book).transpose()
  }

  async fn list_address_books(&self) -> Result<Vec<AddressBook>> {
    let raws: Vec<RawAddressBook> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {ADDRESS_BOOK_COLUMNS} FROM address_books"))?;
        let rows = stmt
          .query_map([], RawAddressBook::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAddressBook::into_address_book).collect()
  }

  async fn create_address_book(&self, input: AddressBookInput) -> Result<AddressBook> {
    let book = AddressBook { id: Uuid::new_v4(), name: input.name };
    self.save_address_book(book).await
  }

  async fn save_address_book(&self, book: AddressBook) -> Result<AddressBook> {
    let id_str = encode_uuid(book.id);
    let name   = book.name.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO address_books (id, name) VALUES (?1, ?2)
           ON CONFLICT(id) DO UPDATE SET name = excluded.name",
          rusqlite::params![id_str, name],
        )?;
        Ok(())
      })
      .await?;

    Ok(book)
  }

  async fn delete_address_book(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    // Contacts follow via ON DELETE CASCADE.
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM address_books WHERE id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Contacts ──────────────────────────────────────────────────────────────

  async fn get_contact(&self, id: Uuid) -> Result<Option<Contact>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
            rusqlite::params![id_str],
            RawContact::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn list_contacts(&self) -> Result<Vec<Contact>> {
    self.query_contacts(None).await
  }

  async fn list_contacts_in(&self, address_book_id: Uuid) -> Result<Vec<Contact>> {
    self.query_contacts(Some(address_book_id)).await
  }

  async fn create_contact(
    &self,
    address_book_id: Uuid,
    details:         ContactDetails,
  ) -> Result<Contact> {
    let contact = Contact { id: Uuid::new_v4(), address_book_id, details };
    self.write_contact(&contact).await?;
    Ok(contact)
  }

  async fn save_contact(&self, contact: Contact) -> Result<Contact> {
    self.write_contact(&contact).await?;
    Ok(contact)
  }

  async fn delete_contact(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM contacts WHERE id = ?1", rusqlite::params![id_str])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
