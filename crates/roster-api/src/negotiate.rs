//! JSON / XML / YAML content negotiation.
//!
//! The request format comes from `Content-Type`, the response format from
//! `Accept`. Both default to JSON when the header is missing.

use axum::{
  body::Body,
  http::{HeaderMap, HeaderValue, StatusCode, header},
  response::Response,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::ApiError;

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_XML: &str = "application/xml";
pub const APPLICATION_YAML: &str = "application/x-yaml";

/// A wire format supported for request and response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
  Json,
  Xml,
  Yaml,
}

impl MediaType {
  /// The canonical MIME string sent back in `Content-Type`.
  pub fn mime(self) -> &'static str {
    match self {
      MediaType::Json => APPLICATION_JSON,
      MediaType::Xml => APPLICATION_XML,
      MediaType::Yaml => APPLICATION_YAML,
    }
  }

  /// Match a bare MIME string (parameters already stripped).
  fn from_mime(mime: &str) -> Option<Self> {
    match mime.to_ascii_lowercase().as_str() {
      "application/json" => Some(MediaType::Json),
      "application/xml" | "text/xml" => Some(MediaType::Xml),
      "application/x-yaml" | "application/yaml" | "text/yaml" => Some(MediaType::Yaml),
      _ => None,
    }
  }

  /// Format of the request body, from `Content-Type`.
  pub fn of_request(headers: &HeaderMap) -> Result<Self, ApiError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
      return Ok(MediaType::Json);
    };
    let raw = value
      .to_str()
      .map_err(|_| ApiError::UnsupportedMediaType("non-ASCII content type".into()))?;
    Self::from_mime(strip_params(raw)).ok_or_else(|| ApiError::UnsupportedMediaType(raw.to_owned()))
  }

  /// Format of the response body, from `Accept`.
  ///
  /// Entries are ranked by `q` (default 1), then by specificity: an exact
  /// type beats `type/*`, which beats `*/*`. Ties keep header order. Entries
  /// with `q=0` are refused.
  pub fn for_response(headers: &HeaderMap) -> Result<Self, ApiError> {
    let accept = headers
      .get_all(header::ACCEPT)
      .iter()
      .filter_map(|v| v.to_str().ok())
      .collect::<Vec<_>>()
      .join(",");

    let entries: Vec<AcceptEntry> = accept.split(',').filter_map(AcceptEntry::parse).collect();
    if entries.is_empty() {
      return Ok(MediaType::Json);
    }

    let mut candidates: Vec<&AcceptEntry> =
      entries.iter().filter(|e| e.quality > 0.0 && e.media.is_some()).collect();
    // Stable sort: equal ranks keep header order.
    candidates.sort_by(|a, b| {
      b.quality
        .total_cmp(&a.quality)
        .then(b.specificity.cmp(&a.specificity))
    });

    candidates
      .first()
      .and_then(|e| e.media)
      .ok_or(ApiError::NotAcceptable(accept))
  }

  /// Decode a request body. An empty body or a literal `null` is `None`.
  pub fn decode<T: DeserializeOwned>(self, body: &[u8]) -> Result<Option<T>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
      return Ok(None);
    }
    let bad = |e: String| ApiError::BadRequest(e);
    match self {
      MediaType::Json => serde_json::from_slice(body).map_err(|e| bad(e.to_string())),
      MediaType::Yaml => serde_yaml::from_slice(body).map_err(|e| bad(e.to_string())),
      MediaType::Xml => {
        let text = std::str::from_utf8(body).map_err(|e| bad(e.to_string()))?;
        quick_xml::de::from_str(text).map(Some).map_err(|e| bad(e.to_string()))
      }
    }
  }

  /// Encode a single value. XML uses the type name as the root element.
  pub fn encode<T: Serialize>(self, value: &T) -> Result<Vec<u8>, ApiError> {
    let encoded = match self {
      MediaType::Json => serde_json::to_vec(value).map_err(|e| e.to_string()),
      MediaType::Yaml => serde_yaml::to_string(value).map(String::into_bytes).map_err(|e| e.to_string()),
      MediaType::Xml => quick_xml::se::to_string(value).map(String::into_bytes).map_err(|e| e.to_string()),
    };
    encoded.map_err(ApiError::Encode)
  }

  /// Encode a list. XML wraps the items as `<List><item>…</item></List>`.
  pub fn encode_list<T: Serialize>(self, items: &[T]) -> Result<Vec<u8>, ApiError> {
    match self {
      MediaType::Xml => self.encode(&XmlList { item: items }),
      _ => self.encode(&items),
    }
  }

  /// Build a response with `body` and the matching `Content-Type`.
  pub fn respond(self, status: StatusCode, body: Vec<u8>) -> Response {
    let mut res = Response::new(Body::from(body));
    *res.status_mut() = status;
    res
      .headers_mut()
      .insert(header::CONTENT_TYPE, HeaderValue::from_static(self.mime()));
    res
  }
}

#[derive(Serialize)]
#[serde(rename = "List")]
struct XmlList<'a, T> {
  item: &'a [T],
}

/// One media range of an `Accept` header.
struct AcceptEntry {
  media:       Option<MediaType>,
  quality:     f32,
  /// 2 = exact type, 1 = `type/*`, 0 = `*/*`.
  specificity: u8,
}

impl AcceptEntry {
  fn parse(raw: &str) -> Option<Self> {
    let mut parts = raw.split(';');
    let range = parts.next()?.trim();
    if range.is_empty() {
      return None;
    }

    let quality = parts
      .filter_map(|p| p.split_once('='))
      .find(|(k, _)| k.trim().eq_ignore_ascii_case("q"))
      .and_then(|(_, v)| v.trim().parse::<f32>().ok())
      .map_or(1.0, |q| q.clamp(0.0, 1.0));

    let lower = range.to_ascii_lowercase();
    let (media, specificity) = match lower.as_str() {
      "*/*" | "application/*" => (Some(MediaType::Json), if lower == "*/*" { 0 } else { 1 }),
      "text/*" => (Some(MediaType::Xml), 1),
      other => (MediaType::from_mime(other), 2),
    };

    Some(AcceptEntry { media, quality, specificity })
  }
}

fn strip_params(s: &str) -> &str { s.split(';').next().unwrap_or_default().trim() }
