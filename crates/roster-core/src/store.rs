//! The `PersonStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! [`PersonService`](crate::service::PersonService) depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::person::{Person, PersonId};

/// Abstraction over a Roster person store backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve a person by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// List every stored person, ordered by id.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Insert-or-update.
  ///
  /// A person without an id is inserted and returned with the id the store
  /// assigned. A person with an id overwrites that row; backends return an
  /// error if the row does not exist.
  fn save(
    &self,
    person: Person,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Remove the person with the given id.
  fn delete(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
