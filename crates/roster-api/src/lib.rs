//! Versioned REST API for Roster person records.
//!
//! Exposes an axum [`Router`] backed by a [`PersonService`] over any
//! [`roster_core::store::PersonStore`]. Transport and TLS concerns are the
//! caller's responsibility.

pub mod config;
pub mod error;
pub mod negotiate;
pub mod person;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use roster_core::{service::PersonService, store::PersonStore};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;

/// Build the API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: Arc<PersonService<S>>) -> Router<()>
where
  S: PersonStore + 'static,
{
  Router::new()
    .route(
      "/api/person/v1",
      get(person::find_all::<S>)
        .post(person::create::<S>)
        .put(person::update::<S>),
    )
    .route(
      "/api/person/v1/{id}",
      get(person::find_by_id::<S>).delete(person::delete::<S>),
    )
    .route("/api/person/v2", post(person::create_v2::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────
