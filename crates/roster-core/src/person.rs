//! Person — the stored entity.

use chrono::NaiveDate;

/// Store-assigned numeric identifier.
pub type PersonId = i64;

/// A person record as held by a [`PersonStore`](crate::store::PersonStore).
///
/// `id` is `None` until the store assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
  pub id:         Option<PersonId>,
  pub first_name: String,
  pub last_name:  String,
  pub address:    String,
  pub gender:     String,
  /// Only exposed through the V2 view.
  pub birth_day:  Option<NaiveDate>,
}
