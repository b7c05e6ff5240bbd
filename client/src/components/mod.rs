//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections and read/write the shared state the
//! page provides through Leptos context.

pub mod carousel;
pub mod company_table;
pub mod registration_form;
pub mod view_toggle;
