//! Runtime server configuration, deserialised from `config.toml` and
//! `ROSTER_*` environment variables.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  /// Prefix for generated self links, e.g. `https://people.example.com`.
  /// Empty means links are bare paths.
  #[serde(default)]
  pub base_url:   String,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       default_host(),
      port:       default_port(),
      base_url:   String::new(),
      store_path: default_store_path(),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 8080 }

fn default_store_path() -> PathBuf { PathBuf::from("roster.db") }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_source_uses_defaults() {
    let cfg: ServerConfig = config::Config::builder()
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg.address(), "127.0.0.1:8080");
    assert_eq!(cfg.base_url, "");
    assert_eq!(cfg.store_path, PathBuf::from("roster.db"));
  }

  #[test]
  fn toml_overrides_defaults() {
    let cfg: ServerConfig = config::Config::builder()
      .add_source(config::File::from_str(
        "port = 9000\nbase_url = \"http://people.local\"",
        config::FileFormat::Toml,
      ))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.base_url, "http://people.local");
  }
}
