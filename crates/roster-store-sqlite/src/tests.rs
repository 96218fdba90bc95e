//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use roster_core::{person::Person, store::PersonStore};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn person(first: &str, last: &str) -> Person {
  Person {
    id:         None,
    first_name: first.into(),
    last_name:  last.into(),
    address:    "London".into(),
    gender:     "F".into(),
    birth_day:  None,
  }
}

// ─── Insert / read ───────────────────────────────────────────────────────────

#[tokio::test]
async fn save_without_id_assigns_one() {
  let s = store().await;

  let saved = s.save(person("Ada", "Lovelace")).await.unwrap();
  let id = saved.id.expect("assigned id");

  let fetched = s.find_by_id(id).await.unwrap().unwrap();
  assert_eq!(fetched, saved);
}

#[tokio::test]
async fn ids_are_distinct_and_increasing() {
  let s = store().await;
  let a = s.save(person("Ada", "Lovelace")).await.unwrap().id.unwrap();
  let b = s.save(person("Mary", "Shelley")).await.unwrap().id.unwrap();
  assert!(b > a);
}

#[tokio::test]
async fn find_by_id_missing_returns_none() {
  let s = store().await;
  assert!(s.find_by_id(12345).await.unwrap().is_none());
}

#[tokio::test]
async fn find_all_is_ordered_by_id() {
  let s = store().await;
  assert!(s.find_all().await.unwrap().is_empty());

  s.save(person("Ada", "Lovelace")).await.unwrap();
  s.save(person("Mary", "Shelley")).await.unwrap();
  s.save(person("Emmy", "Noether")).await.unwrap();

  let all = s.find_all().await.unwrap();
  let names: Vec<_> = all.iter().map(|p| p.first_name.as_str()).collect();
  assert_eq!(names, ["Ada", "Mary", "Emmy"]);
}

#[tokio::test]
async fn birth_day_roundtrip() {
  let s = store().await;
  let mut input = person("Ada", "Lovelace");
  input.birth_day = NaiveDate::from_ymd_opt(1815, 12, 10);

  let id = s.save(input).await.unwrap().id.unwrap();
  let fetched = s.find_by_id(id).await.unwrap().unwrap();
  assert_eq!(fetched.birth_day, NaiveDate::from_ymd_opt(1815, 12, 10));
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_with_id_overwrites_row() {
  let s = store().await;
  let mut saved = s.save(person("Ada", "Lovelace")).await.unwrap();

  saved.last_name = "King".into();
  saved.address = "Marylebone".into();
  let updated = s.save(saved.clone()).await.unwrap();
  assert_eq!(updated, saved);

  let fetched = s.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
  assert_eq!(fetched.last_name, "King");
  assert_eq!(fetched.address, "Marylebone");
  assert_eq!(s.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn save_with_unknown_id_fails() {
  let s = store().await;
  let mut ghost = person("Nobody", "Here");
  ghost.id = Some(77);

  let err = s.save(ghost).await.unwrap_err();
  assert!(matches!(err, Error::PersonNotFound(77)), "{err}");
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_row() {
  let s = store().await;
  let id = s.save(person("Ada", "Lovelace")).await.unwrap().id.unwrap();

  s.delete(id).await.unwrap();
  assert!(s.find_by_id(id).await.unwrap().is_none());
  assert!(s.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_unknown_id_fails() {
  let s = store().await;
  assert!(matches!(s.delete(5).await, Err(Error::PersonNotFound(5))));
}

/// Remove a database file and the WAL sidecars SQLite leaves beside it.
fn remove_db_files(path: &std::path::Path) {
  for suffix in ["", "-wal", "-shm"] {
    let mut file = path.as_os_str().to_owned();
    file.push(suffix);
    let _ = std::fs::remove_file(&file);
  }
}

#[tokio::test]
async fn open_on_disk_persists_across_reopen() {
  let path = std::env::temp_dir().join(format!("roster-store-{}.db", std::process::id()));
  remove_db_files(&path);

  let id = {
    let s = SqliteStore::open(&path).await.unwrap();
    let id = s.save(person("Ada", "Lovelace")).await.unwrap().id.unwrap();
    s.close().await.unwrap();
    id
  };

  let s = SqliteStore::open(&path).await.unwrap();
  let fetched = s.find_by_id(id).await.unwrap().unwrap();
  assert_eq!(fetched.first_name, "Ada");

  s.close().await.unwrap();
  remove_db_files(&path);
  for suffix in ["", "-wal", "-shm"] {
    let mut file = path.as_os_str().to_owned();
    file.push(suffix);
    assert!(!std::path::Path::new(&file).exists(), "{file:?} left behind");
  }
}
