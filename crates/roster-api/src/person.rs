//! Handlers for the versioned `/api/person` endpoints.
//!
//! | Method   | Path                  | Notes |
//! |----------|-----------------------|-------|
//! | `GET`    | `/api/person/v1`      | All people |
//! | `GET`    | `/api/person/v1/{id}` | 404 if not found |
//! | `POST`   | `/api/person/v1`      | Body: [`PersonView`]; 400 if absent |
//! | `PUT`    | `/api/person/v1`      | Body: [`PersonView`] with `id`; 400 / 404 |
//! | `DELETE` | `/api/person/v1/{id}` | 204; 404 if not found |
//! | `POST`   | `/api/person/v2`      | Body: [`PersonViewV2`]; 400 if absent |
//!
//! Bodies may be JSON, XML or YAML; see [`crate::negotiate`].

use std::sync::Arc;

use axum::{
  extract::{Path, State},
  http::{HeaderMap, StatusCode},
  response::{IntoResponse, Response},
};
use bytes::Bytes;
use roster_core::{
  person::PersonId,
  service::PersonService,
  store::PersonStore,
  view::{PersonView, PersonViewV2},
};

use crate::{error::ApiError, negotiate::MediaType};

// ─── V1 ───────────────────────────────────────────────────────────────────────

/// `GET /api/person/v1`
pub async fn find_all<S>(
  State(service): State<Arc<PersonService<S>>>,
  headers: HeaderMap,
) -> Result<Response, ApiError>
where
  S: PersonStore,
{
  let format = MediaType::for_response(&headers)?;
  let people = service.find_all().await?;
  Ok(format.respond(StatusCode::OK, format.encode_list(&people)?))
}

/// `GET /api/person/v1/{id}`
pub async fn find_by_id<S>(
  State(service): State<Arc<PersonService<S>>>,
  Path(id): Path<PersonId>,
  headers: HeaderMap,
) -> Result<Response, ApiError>
where
  S: PersonStore,
{
  let format = MediaType::for_response(&headers)?;
  let person = service.find_by_id(id).await?;
  Ok(format.respond(StatusCode::OK, format.encode(&person)?))
}

/// `POST /api/person/v1`
pub async fn create<S>(
  State(service): State<Arc<PersonService<S>>>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Response, ApiError>
where
  S: PersonStore,
{
  let format = MediaType::for_response(&headers)?;
  let input: Option<PersonView> = MediaType::of_request(&headers)?.decode(&body)?;
  let person = service.create(input).await?;
  Ok(format.respond(StatusCode::OK, format.encode(&person)?))
}

/// `PUT /api/person/v1`
pub async fn update<S>(
  State(service): State<Arc<PersonService<S>>>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Response, ApiError>
where
  S: PersonStore,
{
  let format = MediaType::for_response(&headers)?;
  let input: Option<PersonView> = MediaType::of_request(&headers)?.decode(&body)?;
  let person = service.update(input).await?;
  Ok(format.respond(StatusCode::OK, format.encode(&person)?))
}

/// `DELETE /api/person/v1/{id}` — 204 on success.
pub async fn delete<S>(
  State(service): State<Arc<PersonService<S>>>,
  Path(id): Path<PersonId>,
) -> Result<Response, ApiError>
where
  S: PersonStore,
{
  service.delete(id).await?;
  Ok(StatusCode::NO_CONTENT.into_response())
}

// ─── V2 ───────────────────────────────────────────────────────────────────────

/// `POST /api/person/v2`
pub async fn create_v2<S>(
  State(service): State<Arc<PersonService<S>>>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Response, ApiError>
where
  S: PersonStore,
{
  let format = MediaType::for_response(&headers)?;
  let input: Option<PersonViewV2> = MediaType::of_request(&headers)?.decode(&body)?;
  let person = service.create_v2(input).await?;
  Ok(format.respond(StatusCode::OK, format.encode(&person)?))
}
