//! Error types for `roster-core`.

use thiserror::Error;

use crate::person::PersonId;

#[derive(Debug, Error)]
pub enum Error {
  /// The caller supplied no input, or input that cannot be acted upon.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("no records found for id {0}")]
  NotFound(PersonId),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// The error returned when create or update receives no object.
  pub fn null_object() -> Self {
    Self::InvalidArgument("it is not allowed to persist a null object".into())
  }

  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
