//! JSON REST API for the address book service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`addressbook_core::store::AddressBookStore`]. TLS and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", addressbook_api::api_router(service.clone()))
//! ```

pub mod address_books;
pub mod contacts;
pub mod error;

use addressbook_core::{AddressBookService, store::AddressBookStore};
use axum::{
  Router,
  routing::{get, put},
};

pub use error::ApiError;

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: AddressBookService<S>) -> Router<()>
where
  S: AddressBookStore + 'static,
{
  Router::new()
    // Address books
    .route(
      "/addressbook",
      get(address_books::list::<S>).post(address_books::create::<S>),
    )
    .route(
      "/addressbook/{id}",
      get(address_books::get_one::<S>)
        .put(address_books::update::<S>)
        .delete(address_books::delete_one::<S>),
    )
    // Contacts across all address books
    .route("/addressbook/contact", get(contacts::unique::<S>))
    .route(
      "/addressbook/contact/{contact_id}",
      get(contacts::get_one::<S>).delete(contacts::delete_one::<S>),
    )
    // Contacts within one address book
    .route(
      "/addressbook/{id}/contact",
      get(contacts::list_in::<S>).post(contacts::create::<S>),
    )
    .route("/addressbook/{id}/contact/{contact_id}", put(contacts::update::<S>))
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use addressbook_core::model::{AddressBookInput, ContactDetails, ContactDraft};
  use addressbook_store_sqlite::SqliteStore;
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use serde_json::{Value, json};
  use tower::ServiceExt as _;
  use uuid::Uuid;

  use super::*;

  /// Two address books and four contacts; `shared@test.com` is in both books.
  struct Fixture {
    service: AddressBookService<SqliteStore>,
    test1:   Uuid,
    test2:   Uuid,
    john:    Uuid,
  }

  async fn fixture() -> Fixture {
    let store   = SqliteStore::open_in_memory().await.unwrap();
    let service = AddressBookService::new(Arc::new(store));

    let test1 = service
      .create_address_book(AddressBookInput::named("Test1"))
      .await
      .unwrap()
      .id;
    let test2 = service
      .create_address_book(AddressBookInput::named("Test2"))
      .await
      .unwrap()
      .id;

    let mut john = Uuid::nil();
    for (book, first, email) in [
      (test1, "John", "john@test.com"),
      (test1, "Jane", "shared@test.com"),
      (test2, "Jane", "shared@test.com"),
      (test2, "Jim", "jim@test.com"),
    ] {
      let contact = service
        .create_contact(ContactDraft::new(book, ContactDetails::new(first, email)))
        .await
        .unwrap();
      if first == "John" {
        john = contact.id;
      }
    }

    Fixture { service, test1, test2, john }
  }

  async fn send(
    service: &AddressBookService<SqliteStore>,
    method:  &str,
    uri:     &str,
    body:    Option<Value>,
  ) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
      Some(json) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };
    api_router(service.clone()).oneshot(req).await.unwrap()
  }

  async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  fn contact_body(first: &str, email: &str) -> Value {
    json!({
      "firstName":   first,
      "surName":     "TestGo",
      "email":       email,
      "phoneNumber": "12345667",
      "state":       "VIC",
      "country":     "Australia",
    })
  }

  // ── Address books ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_address_books_returns_all() {
    let f = fixture().await;
    let resp = send(&f.service, "GET", "/addressbook", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(ct.contains("application/json"), "Content-Type: {ct}");
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn get_address_book_by_id() {
    let f = fixture().await;
    let resp = send(&f.service, "GET", &format!("/addressbook/{}", f.test1), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Test1");
    assert_eq!(body["id"], f.test1.to_string());
    assert!(body.get("contacts").is_none());
  }

  #[tokio::test]
  async fn get_missing_address_book_returns_404() {
    let f = fixture().await;
    let resp = send(&f.service, "GET", &format!("/addressbook/{}", Uuid::new_v4()), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn create_address_book_then_get() {
    let f = fixture().await;
    let resp = send(
      &f.service,
      "POST",
      "/addressbook",
      Some(json!({ "name": "testAddressBookCreation" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let id: Uuid = serde_json::from_value(json_body(resp).await).unwrap();

    let resp = send(&f.service, "GET", &format!("/addressbook/{id}"), None).await;
    assert_eq!(json_body(resp).await["name"], "testAddressBookCreation");
  }

  #[tokio::test]
  async fn update_address_book_changes_name_only() {
    let f = fixture().await;
    let resp = send(
      &f.service,
      "PUT",
      &format!("/addressbook/{}", f.test2),
      Some(json!({ "name": "testAddressBookUpdate", "id": Uuid::new_v4(), "contacts": [] })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&f.service, "GET", &format!("/addressbook/{}", f.test2), None).await;
    let body = json_body(resp).await;
    assert_eq!(body["name"], "testAddressBookUpdate");
    assert_eq!(body["id"], f.test2.to_string());

    let resp = send(&f.service, "GET", &format!("/addressbook/{}/contact", f.test2), None).await;
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn update_missing_address_book_returns_404() {
    let f = fixture().await;
    let resp = send(
      &f.service,
      "PUT",
      &format!("/addressbook/{}", Uuid::new_v4()),
      Some(json!({ "name": "x" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(json_body(resp).await["error"].is_string());
  }

  #[tokio::test]
  async fn delete_address_book_removes_its_contacts() {
    let f = fixture().await;
    let resp = send(&f.service, "DELETE", &format!("/addressbook/{}", f.test1), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&f.service, "GET", &format!("/addressbook/{}", f.test1), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&f.service, "GET", &format!("/addressbook/contact/{}", f.john), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn delete_absent_ids_return_200() {
    let f = fixture().await;
    let resp = send(&f.service, "DELETE", &format!("/addressbook/{}", Uuid::new_v4()), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = send(
      &f.service,
      "DELETE",
      &format!("/addressbook/contact/{}", Uuid::new_v4()),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  // ── Contacts ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_contact_by_id() {
    let f = fixture().await;
    let resp = send(&f.service, "GET", &format!("/addressbook/contact/{}", f.john), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["firstName"], "John");
    assert!(body.get("addressBook").is_none());
  }

  #[tokio::test]
  async fn unique_contacts_collapse_shared_email() {
    let f = fixture().await;
    let resp = send(&f.service, "GET", "/addressbook/contact", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 3);
  }

  #[tokio::test]
  async fn list_contacts_in_address_book() {
    let f = fixture().await;
    let resp = send(&f.service, "GET", &format!("/addressbook/{}/contact", f.test1), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 2);

    let resp = send(
      &f.service,
      "GET",
      &format!("/addressbook/{}/contact", Uuid::new_v4()),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn create_contact_then_get() {
    let f = fixture().await;
    let resp = send(
      &f.service,
      "POST",
      &format!("/addressbook/{}/contact", f.test1),
      Some(contact_body("TestMe", "tst3@test.com")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let id: Uuid = serde_json::from_value(json_body(resp).await).unwrap();

    let resp = send(&f.service, "GET", &format!("/addressbook/contact/{id}"), None).await;
    let body = json_body(resp).await;
    assert_eq!(body["firstName"], "TestMe");
    assert_eq!(body["country"], "Australia");
  }

  #[tokio::test]
  async fn create_contact_rejections() {
    let f = fixture().await;

    // Unknown address book.
    let resp = send(
      &f.service,
      "POST",
      &format!("/addressbook/{}/contact", Uuid::new_v4()),
      Some(contact_body("TestMe", "new@test.com")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Duplicate email within the book.
    let resp = send(
      &f.service,
      "POST",
      &format!("/addressbook/{}/contact", f.test1),
      Some(contact_body("J", "john@test.com")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Missing first name.
    let resp = send(
      &f.service,
      "POST",
      &format!("/addressbook/{}/contact", f.test1),
      Some(json!({ "email": "nofirst@test.com" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Missing email.
    let resp = send(
      &f.service,
      "POST",
      &format!("/addressbook/{}/contact", f.test1),
      Some(json!({ "firstName": "NoEmail" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn update_contact_moves_it_to_the_path_book() {
    let f = fixture().await;
    let resp = send(
      &f.service,
      "PUT",
      &format!("/addressbook/{}/contact/{}", f.test2, f.john),
      Some(contact_body("TestMe", "tst5@test.com")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let id: Uuid = serde_json::from_value(json_body(resp).await).unwrap();
    assert_eq!(id, f.john);

    let resp = send(&f.service, "GET", &format!("/addressbook/{}/contact", f.test2), None).await;
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 3);
    let resp = send(&f.service, "GET", &format!("/addressbook/{}/contact", f.test1), None).await;
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 1);

    let resp = send(&f.service, "GET", &format!("/addressbook/contact/{}", f.john), None).await;
    assert_eq!(json_body(resp).await["firstName"], "TestMe");
  }

  #[tokio::test]
  async fn update_contact_failures() {
    let f = fixture().await;

    let resp = send(
      &f.service,
      "PUT",
      &format!("/addressbook/{}/contact/{}", Uuid::new_v4(), f.john),
      Some(contact_body("TestMe", "tst5@test.com")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(
      &f.service,
      "PUT",
      &format!("/addressbook/{}/contact/{}", f.test1, Uuid::new_v4()),
      Some(contact_body("TestMe", "tst5@test.com")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // jim@test.com already lives in Test2.
    let resp = send(
      &f.service,
      "PUT",
      &format!("/addressbook/{}/contact/{}", f.test2, f.john),
      Some(contact_body("John", "jim@test.com")),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn delete_contact_then_get_returns_404() {
    let f = fixture().await;
    let resp = send(&f.service, "DELETE", &format!("/addressbook/contact/{}", f.john), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&f.service, "GET", &format!("/addressbook/contact/{}", f.john), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&f.service, "GET", &format!("/addressbook/{}/contact", f.test1), None).await;
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn malformed_id_is_rejected() {
    let f = fixture().await;
    let resp = send(&f.service, "GET", "/addressbook/not-a-uuid", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn service_writes_are_visible_over_http() {
    let f = fixture().await;
    f.service
      .update_address_book(f.test1, AddressBookInput::named("Renamed"))
      .await
      .unwrap();
    let resp = send(&f.service, "GET", &format!("/addressbook/{}", f.test1), None).await;
    assert_eq!(json_body(resp).await["name"], "Renamed");
  }
}
