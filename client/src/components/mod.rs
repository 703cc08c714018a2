//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the overlays, forms, and banners the landing page
//! composes, reading shared state from props or Leptos context.

pub mod flash_banner;
pub mod loading_screen;
pub mod login_form;
pub mod modal;
pub mod register_form;
