//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `overlay`, `loading`) so the landing
//! page and its forms can depend on small focused models.

pub mod auth;
pub mod loading;
pub mod overlay;
