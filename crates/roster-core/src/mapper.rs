//! Conversions between the stored [`Person`] and its views.
//!
//! Mapping copies fields only; links are the service's concern.

use crate::{
  person::Person,
  view::{PersonView, PersonViewV2},
};

impl From<&Person> for PersonView {
  fn from(p: &Person) -> Self {
    PersonView {
      id:         p.id,
      first_name: p.first_name.clone(),
      last_name:  p.last_name.clone(),
      address:    p.address.clone(),
      gender:     p.gender.clone(),
      links:      Vec::new(),
    }
  }
}

impl PersonView {
  /// Convert into an entity. V1 carries no birth date.
  pub fn into_entity(self) -> Person {
    Person {
      id:         self.id,
      first_name: self.first_name,
      last_name:  self.last_name,
      address:    self.address,
      gender:     self.gender,
      birth_day:  None,
    }
  }
}

impl From<&Person> for PersonViewV2 {
  fn from(p: &Person) -> Self {
    PersonViewV2 {
      id:         p.id,
      first_name: p.first_name.clone(),
      last_name:  p.last_name.clone(),
      birth_day:  p.birth_day,
      address:    p.address.clone(),
      gender:     p.gender.clone(),
      links:      Vec::new(),
    }
  }
}

impl PersonViewV2 {
  pub fn into_entity(self) -> Person {
    Person {
      id:         self.id,
      first_name: self.first_name,
      last_name:  self.last_name,
      address:    self.address,
      gender:     self.gender,
      birth_day:  self.birth_day,
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn entity() -> Person {
    Person {
      id:         Some(4),
      first_name: "Mary".into(),
      last_name:  "Somerville".into(),
      address:    "Jedburgh".into(),
      gender:     "F".into(),
      birth_day:  NaiveDate::from_ymd_opt(1780, 12, 26),
    }
  }

  #[test]
  fn v1_drops_birth_day() {
    let view = PersonView::from(&entity());
    assert_eq!(view.id, Some(4));
    assert_eq!(view.first_name, "Mary");
    assert!(view.links.is_empty());

    let back = view.into_entity();
    assert_eq!(back.birth_day, None);
    assert_eq!(back.last_name, "Somerville");
  }

  #[test]
  fn v2_keeps_every_field() {
    let original = entity();
    let back = PersonViewV2::from(&original).into_entity();
    assert_eq!(back, original);
  }
}
