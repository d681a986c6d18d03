//! Core pieces of the Telegram Bot API client.
//!
//! This crate is transport-agnostic: the operation schema, request field
//! model, status table, response envelope and inbound payload live here, the
//! HTTP exchange lives in `tba-client`.

pub mod config;
pub mod domain;
pub mod envelope;
pub mod errors;
pub mod fields;
pub mod inbound;
pub mod logging;
pub mod schema;
pub mod status;
pub mod types;

pub use errors::{Error, Result};
