//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: guard installation, API calls,
//! and session updates.

pub mod home;
pub mod login;
pub mod not_found;
