//! [`PersonService`]: validation, lookup and mapping around a [`PersonStore`].

use tracing::info;

use crate::{
  error::{Error, Result},
  link::{Link, LinkBuilder},
  person::PersonId,
  store::PersonStore,
  view::{PersonView, PersonViewV2},
};

/// Orchestrates store access and view mapping for each API operation.
///
/// Collaborators are passed in explicitly; the service holds no other state.
pub struct PersonService<S> {
  store: S,
  links: LinkBuilder,
}

impl<S: PersonStore> PersonService<S> {
  pub fn new(store: S, links: LinkBuilder) -> Self { Self { store, links } }

  #[cfg(test)]
  fn store(&self) -> &S { &self.store }

  pub async fn find_all(&self) -> Result<Vec<PersonView>> {
    info!("finding all people");

    let people = self.store.find_all().await.map_err(Error::store)?;
    Ok(people.iter().map(|p| self.linked_v1(PersonView::from(p))).collect())
  }

  pub async fn find_by_id(&self, id: PersonId) -> Result<PersonView> {
    info!(id, "finding one person");

    let entity = self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))?;
    Ok(self.linked_v1(PersonView::from(&entity)))
  }

  /// Persist a new person. Any id supplied by the caller is ignored.
  pub async fn create(&self, person: Option<PersonView>) -> Result<PersonView> {
    let person = person.ok_or_else(Error::null_object)?;

    info!("creating one person");

    let mut entity = person.into_entity();
    entity.id = None;
    let saved = self.store.save(entity).await.map_err(Error::store)?;
    Ok(self.linked_v1(PersonView::from(&saved)))
  }

  pub async fn create_v2(&self, person: Option<PersonViewV2>) -> Result<PersonViewV2> {
    let person = person.ok_or_else(Error::null_object)?;

    info!("creating one person with v2");

    let mut entity = person.into_entity();
    entity.id = None;
    let saved = self.store.save(entity).await.map_err(Error::store)?;
    Ok(self.linked_v2(PersonViewV2::from(&saved)))
  }

  /// Overwrite the mutable fields of an existing person.
  ///
  /// The id and the birth date are never changed by a V1 update.
  pub async fn update(&self, person: Option<PersonView>) -> Result<PersonView> {
    let person = person.ok_or_else(Error::null_object)?;
    let id = person
      .id
      .ok_or_else(|| Error::InvalidArgument("an id is required to update a person".into()))?;

    info!(id, "updating one person");

    let mut entity = self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))?;

    entity.first_name = person.first_name;
    entity.last_name = person.last_name;
    entity.address = person.address;
    entity.gender = person.gender;

    let saved = self.store.save(entity).await.map_err(Error::store)?;
    Ok(self.linked_v1(PersonView::from(&saved)))
  }

  pub async fn delete(&self, id: PersonId) -> Result<()> {
    info!(id, "deleting one person");

    self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))?;

    self.store.delete(id).await.map_err(Error::store)
  }

  fn linked_v1(&self, mut view: PersonView) -> PersonView {
    self.attach_self_link(view.id, &mut view.links);
    view
  }

  fn linked_v2(&self, mut view: PersonViewV2) -> PersonViewV2 {
    self.attach_self_link(view.id, &mut view.links);
    view
  }

  fn attach_self_link(&self, id: Option<PersonId>, links: &mut Vec<Link>) {
    if let Some(id) = id {
      links.push(self.links.self_link(id));
    }
  }
}
