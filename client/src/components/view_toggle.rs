//! Buttons switching the page between the company table and the form.

#[cfg(test)]
#[path = "view_toggle_test.rs"]
mod view_toggle_test;

use leptos::prelude::*;

use crate::state::ui::{ActiveView, UiState};

/// Class for a toggle button; the active one gets the highlighted style.
pub fn toggle_button_class(active: bool) -> &'static str {
    if active {
        "view-toggle__button view-toggle__button--active"
    } else {
        "view-toggle__button"
    }
}

/// Switch the page to `target`; the toggle buttons' click action.
pub fn select_view(ui: RwSignal<UiState>, target: ActiveView) {
    ui.update(|u| u.active_view = target);
}

/// One button per `ActiveView`, writing the `UiState` context.
#[component]
pub fn ViewToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="view-toggle">
            {ActiveView::ALL
                .into_iter()
                .map(|target| {
                    let is_active = move || ui.with(|u| u.active_view == target);
                    view! {
                        <button
                            type="button"
                            class=move || toggle_button_class(is_active())
                            aria-pressed=move || is_active().to_string()
                            on:click=move |_| select_view(ui, target)
                        >
                            {target.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
