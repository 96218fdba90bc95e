//! Error type for `roster-store-sqlite`.

use roster_core::person::PersonId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  /// An update or delete addressed a row that does not exist.
  #[error("person not found: {0}")]
  PersonNotFound(PersonId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
