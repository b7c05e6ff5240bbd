//! Wire types for the company list endpoint.
//!
//! The payload is not schema-checked. Only `id` is required; every other
//! field keeps the raw JSON value it arrived with, whatever its type, and
//! the table decides at render time whether to show it or fall back.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::Value;

/// One company record as served by the listing endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Company {
    pub id: i64,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub industry: Option<Value>,
    #[serde(default)]
    pub founded_year: Option<Value>,
    #[serde(default)]
    pub headquarters_city: Option<Value>,
}
