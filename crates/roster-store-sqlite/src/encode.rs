//! Encoding and decoding helpers between [`Person`] and its SQLite row.
//!
//! Birth dates are stored as `YYYY-MM-DD` text.

use chrono::NaiveDate;
use roster_core::person::{Person, PersonId};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

/// Column list shared by every `SELECT`, in [`RawPerson::from_row`] order.
pub const PERSON_COLUMNS: &str = "id, first_name, last_name, address, gender, birth_day";

/// A `person` row as read from SQLite, before date decoding.
pub struct RawPerson {
  pub id:         PersonId,
  pub first_name: String,
  pub last_name:  String,
  pub address:    String,
  pub gender:     String,
  pub birth_day:  Option<String>,
}

impl RawPerson {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawPerson {
      id:         row.get(0)?,
      first_name: row.get(1)?,
      last_name:  row.get(2)?,
      address:    row.get(3)?,
      gender:     row.get(4)?,
      birth_day:  row.get(5)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:         Some(self.id),
      first_name: self.first_name,
      last_name:  self.last_name,
      address:    self.address,
      gender:     self.gender,
      birth_day:  self.birth_day.as_deref().map(decode_date).transpose()?,
    })
  }
}
