//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies their failures, and
//! `types` defines the JSON request/response bodies.

pub mod api;
pub mod error;
pub mod types;
