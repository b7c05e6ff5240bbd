//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`carousel`, `companies`, `ui`) so each
//! component depends on a small focused model that can be tested without a
//! browser.

pub mod carousel;
pub mod companies;
pub mod ui;
