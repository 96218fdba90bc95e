//! Self links attached to every returned view.

use serde::{Deserialize, Serialize};

use crate::person::PersonId;

/// Path under which a single V1 person resource is addressable.
pub const PERSON_V1_PATH: &str = "/api/person/v1";

/// A hypermedia link carried by a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
  pub rel:  String,
  pub href: String,
}

/// Builds links relative to the server's public base URL.
///
/// An empty base yields bare paths such as `/api/person/v1/7`.
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
  base_url: String,
}

impl LinkBuilder {
  pub fn new(base_url: impl Into<String>) -> Self {
    let mut base_url = base_url.into();
    while base_url.ends_with('/') {
      base_url.pop();
    }
    Self { base_url }
  }

  /// The `self` link pointing at the V1 find-by-id resource for `id`.
  pub fn self_link(&self, id: PersonId) -> Link {
    Link {
      rel:  "self".to_owned(),
      href: format!("{}{PERSON_V1_PATH}/{id}", self.base_url),
    }
  }
}
