//! Browser session credential handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` abstracts the key-value storage holding the bearer credential, and
//! `validator` decides on page mount whether that credential is still live.

pub mod store;
pub mod validator;
