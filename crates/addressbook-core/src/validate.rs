//! The contact validation rule.
//!
//! Checks run in a fixed order and the first failure is returned. Emails are
//! compared as exact strings; no trimming or case folding is applied.

use uuid::Uuid;

use crate::{Error, Result, model::{Contact, ContactDetails}};

/// Validate a candidate contact against its owning address book.
///
/// `owner` is the current contact collection of the owning book, or `None` if
/// the candidate does not belong to an existing address book. `replacing`
/// names the stored contact the candidate will overwrite, if any; that
/// contact is not counted as a duplicate of its own replacement.
pub fn validate_contact(
  candidate: &ContactDetails,
  owner:     Option<&[Contact]>,
  replacing: Option<Uuid>,
) -> Result<()> {
  let Some(siblings) = owner else {
    return Err(Error::NotFound(
      "contact doesn't belong to any address book".into(),
    ));
  };

  if candidate.first_name.is_none() {
    return Err(Error::Invalid("contact must contain first name".into()));
  }

  let Some(email) = candidate.email.as_deref() else {
    return Err(Error::Invalid("contact must contain email address".into()));
  };

  let duplicate = siblings
    .iter()
    .filter(|c| Some(c.id) != replacing)
    .any(|c| c.email() == Some(email));
  if duplicate {
    return Err(Error::Invalid(format!(
      "contact {email} already exists in the address book"
    )));
  }

  Ok(())
}
