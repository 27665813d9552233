//! Handlers for contact endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/addressbook/contact` | One contact per distinct email |
//! | `GET`    | `/addressbook/contact/:contact_id` | 404 if not found |
//! | `DELETE` | `/addressbook/contact/:contact_id` | 200 even if absent |
//! | `GET`    | `/addressbook/:id/contact` | 404 if the address book is absent |
//! | `POST`   | `/addressbook/:id/contact` | Body: [`ContactDetails`]; returns the new id |
//! | `PUT`    | `/addressbook/:id/contact/:contact_id` | Moves the contact into `:id` |
//!
//! The owning address book always comes from the path, never from the body.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use addressbook_core::{
  AddressBookService,
  model::{Contact, ContactDetails, ContactDraft},
  store::AddressBookStore,
};
use uuid::Uuid;

use crate::error::ApiError;

/// Fail with 404 unless the address book at `id` exists.
async fn require_address_book<S>(
  service: &AddressBookService<S>,
  id:      Uuid,
) -> Result<(), ApiError>
where
  S: AddressBookStore + 'static,
{
  service
    .get_address_book(id)
    .await?
    .map(|_| ())
    .ok_or_else(|| ApiError::NotFound(format!("cannot find address book with id [{id}]")))
}

// ─── Reads ────────────────────────────────────────────────────────────────────

/// `GET /addressbook/contact`
pub async fn unique<S>(
  State(service): State<AddressBookService<S>>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: AddressBookStore + 'static,
{
  Ok(Json(service.all_unique_contacts().await?))
}

/// `GET /addressbook/contact/:contact_id`
pub async fn get_one<S>(
  State(service): State<AddressBookService<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Contact>, ApiError>
where
  S: AddressBookStore + 'static,
{
  let contact = service
    .get_contact(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;
  Ok(Json(contact))
}

/// `GET /addressbook/:id/contact`
pub async fn list_in<S>(
  State(service): State<AddressBookService<S>>,
  Path(address_book_id): Path<Uuid>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: AddressBookStore + 'static,
{
  Ok(Json(service.contacts_in(address_book_id).await?))
}

// ─── Writes ───────────────────────────────────────────────────────────────────

/// `POST /addressbook/:id/contact` — returns the id of the new contact.
pub async fn create<S>(
  State(service): State<AddressBookService<S>>,
  Path(address_book_id): Path<Uuid>,
  Json(body): Json<ContactDetails>,
) -> Result<Json<Uuid>, ApiError>
where
  S: AddressBookStore + 'static,
{
  require_address_book(&service, address_book_id).await?;
  let contact = service
    .create_contact(ContactDraft::new(address_book_id, body))
    .await?;
  Ok(Json(contact.id))
}

/// `PUT /addressbook/:id/contact/:contact_id` — returns the contact id.
pub async fn update<S>(
  State(service): State<AddressBookService<S>>,
  Path((address_book_id, id)): Path<(Uuid, Uuid)>,
  Json(body): Json<ContactDetails>,
) -> Result<Json<Uuid>, ApiError>
where
  S: AddressBookStore + 'static,
{
  require_address_book(&service, address_book_id).await?;
  let contact = service
    .update_contact(id, ContactDraft::new(address_book_id, body))
    .await?;
  Ok(Json(contact.id))
}

/// `DELETE /addressbook/contact/:contact_id`
pub async fn delete_one<S>(
  State(service): State<AddressBookService<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: AddressBookStore + 'static,
{
  service.delete_contact(id).await?;
  Ok(StatusCode::OK)
}
