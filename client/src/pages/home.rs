//! Company portal landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page shell is the only stateful coordinator: it owns the view
//! selector, the hydration gate for the carousel, and the company list load
//! state. It starts the single company fetch the first time the table view
//! is active and cancels it if the page is torn down first.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::company_table::CompanyTable;
use crate::components::registration_form::RegistrationForm;
use crate::components::view_toggle::ViewToggle;
use crate::state::companies::CompaniesState;
use crate::state::ui::{ActiveView, UiState};
use crate::util::cancel::CancelToken;

/// Claim the page's company fetch if `view` needs it.
///
/// Returns `true` exactly once per page lifetime, the first time the table
/// view is active.
pub(crate) fn claim_company_fetch(view: ActiveView, companies: &mut CompaniesState) -> bool {
    view == ActiveView::Table && companies.begin_fetch()
}

/// Landing page: carousel beside a toggle between company list and form.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    let companies = RwSignal::new(CompaniesState::default());
    provide_context(ui);
    provide_context(companies);

    // Effects only run in the browser, so this flips after hydration and the
    // carousel never appears in server-rendered markup.
    Effect::new(move || {
        ui.update(|u| {
            u.mark_client_ready();
        });
    });

    let active_view = Memo::new(move |_| ui.with(|u| u.active_view));
    let client_ready = Memo::new(move |_| ui.with(|u| u.client_ready));

    let loader = CancelToken::new();
    {
        let loader = loader.clone();
        Effect::new(move || {
            let view = active_view.get();
            let claimed = companies
                .try_update(|s| claim_company_fetch(view, s))
                .unwrap_or(false);
            if claimed {
                load_companies(companies, loader.clone());
            }
        });
    }
    let loader_guard = loader.guard();
    on_cleanup(move || drop(loader_guard));

    view! {
        <div class="home-page">
            <div class="home-page__media">
                <Show when=move || client_ready.get()>
                    <Carousel/>
                </Show>
            </div>
            <div class="home-page__main">
                <div class="home-page__content">
                    <h1 class="home-page__title">"Company Registration"</h1>

                    <div class="home-page__media-mobile">
                        <Show when=move || client_ready.get()>
                            <Carousel/>
                        </Show>
                    </div>

                    <ViewToggle/>

                    <div class="home-page__view">
                        <ActiveViewContent/>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Table or form, whichever the `UiState` context selects.
///
/// Keyed on the active view alone: each switch drops the old subtree and
/// builds the new one, so form input never survives a round trip.
#[component]
pub(crate) fn ActiveViewContent() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active_view = Memo::new(move |_| ui.with(|u| u.active_view));

    move || match active_view.get() {
        ActiveView::Table => view! {
            <div class="animate-fade-in">
                <CompanyTable/>
            </div>
        }
        .into_any(),
        ActiveView::Form => view! {
            <div class="animate-fade-in">
                <RegistrationForm/>
            </div>
        }
        .into_any(),
    }
}

/// Run the company fetch and commit its outcome unless `token` fired first.
fn load_companies(companies: RwSignal<CompaniesState>, token: CancelToken) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::{COMPANIES_URL, fetch_companies};

        log::debug!("fetching companies from {COMPANIES_URL}");
        leptos::task::spawn_local(async move {
            let result = fetch_companies().await;
            match &result {
                Ok(list) => log::info!("loaded {} companies", list.len()),
                Err(e) => log::warn!("company fetch failed: {e}"),
            }
            let committed = token.commit(result, |result| {
                companies.update(|s| {
                    s.resolve(result);
                });
            });
            if !committed {
                log::debug!("company fetch resolved after teardown; result dropped");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (companies, token);
    }
}
