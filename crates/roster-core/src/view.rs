//! Externally visible shapes of person data, one per API version.
//!
//! Views are never stored. They are built fresh for every response and carry
//! a `self` link added by the service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{link::Link, person::PersonId};

/// The V1 view: identity plus the four mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonView {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:         Option<PersonId>,
  pub first_name: String,
  pub last_name:  String,
  pub address:    String,
  pub gender:     String,
  /// Ignored on input.
  #[serde(default)]
  pub links:      Vec<Link>,
}

/// The V2 view, which adds the birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonViewV2 {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:         Option<PersonId>,
  pub first_name: String,
  pub last_name:  String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub birth_day:  Option<NaiveDate>,
  pub address:    String,
  pub gender:     String,
  #[serde(default)]
  pub links:      Vec<Link>,
}
