//! Core types and trait definitions for the Roster person registry.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::PersonStore`]; the HTTP layer drives
//! [`service::PersonService`].

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod link;
pub mod mapper;
pub mod person;
pub mod service;
pub mod store;
pub mod view;

pub use error::{Error, Result};
