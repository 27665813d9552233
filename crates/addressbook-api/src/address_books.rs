//! Handlers for `/addressbook` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/addressbook` | Every address book |
//! | `POST`   | `/addressbook` | Body: [`AddressBookInput`]; returns the new id |
//! | `GET`    | `/addressbook/:id` | 404 if not found |
//! | `PUT`    | `/addressbook/:id` | Body: [`AddressBookInput`]; 404 if not found |
//! | `DELETE` | `/addressbook/:id` | 200 even if absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use addressbook_core::{
  AddressBookService,
  model::{AddressBook, AddressBookInput},
  store::AddressBookStore,
};
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /addressbook`
pub async fn list<S>(
  State(service): State<AddressBookService<S>>,
) -> Result<Json<Vec<AddressBook>>, ApiError>
where
  S: AddressBookStore + 'static,
{
  Ok(Json(service.list_address_books().await?))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /addressbook/:id`
pub async fn get_one<S>(
  State(service): State<AddressBookService<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<AddressBook>, ApiError>
where
  S: AddressBookStore + 'static,
{
  let book = service
    .get_address_book(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("address book {id} not found")))?;
  Ok(Json(book))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /addressbook` — returns the id assigned to the new address book.
pub async fn create<S>(
  State(service): State<AddressBookService<S>>,
  Json(body): Json<AddressBookInput>,
) -> Result<Json<Uuid>, ApiError>
where
  S: AddressBookStore + 'static,
{
  let book = service.create_address_book(body).await?;
  Ok(Json(book.id))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /addressbook/:id` — overwrites the name only.
pub async fn update<S>(
  State(service): State<AddressBookService<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<AddressBookInput>,
) -> Result<StatusCode, ApiError>
where
  S: AddressBookStore + 'static,
{
  service.update_address_book(id, body).await?;
  Ok(StatusCode::OK)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /addressbook/:id` — also removes every contact in the book.
pub async fn delete_one<S>(
  State(service): State<AddressBookService<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: AddressBookStore + 'static,
{
  service.delete_address_book(id).await?;
  Ok(StatusCode::OK)
}
