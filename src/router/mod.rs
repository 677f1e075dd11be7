//! Client-side route table and navigation guard.
//!
//! ARCHITECTURE
//! ============
//! `routes` is static configuration; `guard` is a pure decision over a
//! route's metadata and the session token. The reactive side effect that acts
//! on a decision lives in `util::auth`.

pub mod guard;
pub mod routes;
