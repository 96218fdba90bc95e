//! [`SqliteStore`]: the SQLite implementation of [`PersonStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::debug;

use roster_core::{
  person::{Person, PersonId},
  store::PersonStore,
};

use crate::{
  encode::{encode_date, RawPerson, PERSON_COLUMNS},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster person store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the connection, waiting for pending calls to finish.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn insert(&self, person: Person) -> Result<Person> {
    let first_name = person.first_name.clone();
    let last_name  = person.last_name.clone();
    let address    = person.address.clone();
    let gender     = person.gender.clone();
    let birth_day  = person.birth_day.map(encode_date);

    let id: PersonId = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO person (first_name, last_name, address, gender, birth_day)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![first_name, last_name, address, gender, birth_day],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    debug!(id, "inserted person");
    Ok(Person { id: Some(id), ..person })
  }

  async fn update(&self, id: PersonId, person: Person) -> Result<Person> {
    let first_name = person.first_name.clone();
    let last_name  = person.last_name.clone();
    let address    = person.address.clone();
    let gender     = person.gender.clone();
    let birth_day  = person.birth_day.map(encode_date);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE person
           SET first_name = ?2, last_name = ?3, address = ?4, gender = ?5, birth_day = ?6
           WHERE id = ?1",
          rusqlite::params![id, first_name, last_name, address, gender, birth_day],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::PersonNotFound(id));
    }
    debug!(id, "updated person");
    Ok(person)
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>> {
    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {PERSON_COLUMNS} FROM person WHERE id = ?1"),
            rusqlite::params![id],
            RawPerson::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn find_all(&self) -> Result<Vec<Person>> {
    let raws: Vec<RawPerson> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT {PERSON_COLUMNS} FROM person ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawPerson::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn save(&self, person: Person) -> Result<Person> {
    match person.id {
      Some(id) => self.update(id, person).await,
      None => self.insert(person).await,
    }
  }

  async fn delete(&self, id: PersonId) -> Result<()> {
    let changed = self
      .conn
      .call(move |conn| Ok(conn.execute("DELETE FROM person WHERE id = ?1", rusqlite::params![id])?))
      .await?;

    if changed == 0 {
      return Err(Error::PersonNotFound(id));
    }
    debug!(id, "deleted person");
    Ok(())
  }
}
