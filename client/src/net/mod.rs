//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single outbound read of the company list and `types`
//! defines its wire schema.

pub mod api;
pub mod types;
