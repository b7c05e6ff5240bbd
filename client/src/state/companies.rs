//! Company list load state.
//!
//! DESIGN
//! ======
//! The page owns this state rather than the table subtree, so remounting the
//! table on a view switch never issues a second request. Both transitions
//! are one-shot: `begin_fetch` succeeds once per page lifetime and `resolve`
//! only applies while still `Loading`.

#[cfg(test)]
#[path = "companies_test.rs"]
mod companies_test;

use crate::net::api::FetchError;
use crate::net::types::Company;
use crate::util::fallback::display_or_fallback;

/// What the company table renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<Company>),
}

/// Shared company list state, provided via context by the page.
#[derive(Clone, Debug, Default)]
pub struct CompaniesState {
    pub load: LoadState,
    pub fetch_count: u32,
}

impl CompaniesState {
    /// Claim the page's one fetch. Returns `false` if it was already issued.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_count > 0 {
            return false;
        }
        self.fetch_count += 1;
        true
    }

    /// Record the fetch outcome. Ignored once the state has left `Loading`.
    pub fn resolve(&mut self, result: Result<Vec<Company>, FetchError>) -> bool {
        if !matches!(self.load, LoadState::Loading) {
            return false;
        }
        self.load = match result {
            Ok(list) => LoadState::Loaded(list),
            Err(e) => LoadState::Error(e.to_string()),
        };
        true
    }
}

/// One table row with fallback text already applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyRow {
    pub id: i64,
    pub name: String,
    pub industry: String,
    pub founded_year: String,
    pub headquarters: String,
}

impl From<&Company> for CompanyRow {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id,
            name: display_or_fallback(company.name.as_ref()),
            industry: display_or_fallback(company.industry.as_ref()),
            founded_year: display_or_fallback(company.founded_year.as_ref()),
            headquarters: display_or_fallback(company.headquarters_city.as_ref()),
        }
    }
}
