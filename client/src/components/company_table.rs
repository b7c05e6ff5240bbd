//! Company list table.
//!
//! Pure rendering of the page-owned `CompaniesState`: a loading line, an
//! error line, or one row per company. The fetch itself is driven by the
//! page so remounting this component never requests again.

#[cfg(test)]
#[path = "company_table_test.rs"]
mod company_table_test;

use leptos::prelude::*;

use crate::state::companies::{CompaniesState, CompanyRow, LoadState};

pub const LOADING_TEXT: &str = "Loading companies...";

pub const COLUMNS: [&str; 4] = ["Name", "Industry", "Founded Year", "Headquarters"];

/// Line shown in place of the table when the fetch failed.
pub fn error_banner(message: &str) -> String {
    format!("Error: {message}")
}

/// Company table driven by the `CompaniesState` context.
#[component]
pub fn CompanyTable() -> impl IntoView {
    let companies = expect_context::<RwSignal<CompaniesState>>();

    move || match companies.with(|s| s.load.clone()) {
        LoadState::Loading => view! { <p class="company-table__status">{LOADING_TEXT}</p> }.into_any(),
        LoadState::Error(message) => view! {
            <p class="company-table__status company-table__status--error">{error_banner(&message)}</p>
        }
        .into_any(),
        LoadState::Loaded(list) => {
            let rows = list.iter().map(CompanyRow::from).collect::<Vec<_>>();
            view! {
                <div class="panel">
                    <h2 class="panel__title">"Company List"</h2>
                    <div class="company-table__scroll">
                        <table class="company-table">
                            <thead>
                                <tr>
                                    {COLUMNS
                                        .iter()
                                        .map(|col| view! { <th>{*col}</th> })
                                        .collect::<Vec<_>>()}
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || rows.clone()
                                    key=|row: &CompanyRow| row.id
                                    children=|row| {
                                        view! {
                                            <tr class="company-table__row">
                                                <td class="company-table__name">{row.name}</td>
                                                <td>{row.industry}</td>
                                                <td class="company-table__year">{row.founded_year}</td>
                                                <td>{row.headquarters}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
