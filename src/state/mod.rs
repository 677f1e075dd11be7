//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the persisted token; `storage` abstracts where it is
//! persisted; `user` caches the profile fetched from the server.

pub mod session;
pub mod storage;
pub mod user;
