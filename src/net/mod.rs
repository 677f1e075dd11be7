//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves JSON over HTTP, `api` maps each backend operation onto
//! it, and `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;
