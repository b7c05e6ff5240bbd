use super::*;

/// Replays a sequence of view selections the way the page effect sees them.
fn replay(views: &[ActiveView]) -> CompaniesState {
    let mut companies = CompaniesState::default();
    for &view in views {
        claim_company_fetch(view, &mut companies);
    }
    companies
}

#[test]
fn default_table_view_claims_the_fetch() {
    let mut companies = CompaniesState::default();
    assert!(claim_company_fetch(UiState::default().active_view, &mut companies));
    assert_eq!(companies.fetch_count, 1);
}

#[test]
fn form_view_does_not_fetch() {
    let companies = replay(&[ActiveView::Form, ActiveView::Form]);
    assert_eq!(companies.fetch_count, 0);
}

#[test]
fn toggling_views_keeps_fetch_count_at_one() {
    let mut views = Vec::new();
    for _ in 0..10 {
        views.push(ActiveView::Table);
        views.push(ActiveView::Form);
    }
    let companies = replay(&views);
    assert_eq!(companies.fetch_count, 1);
}

#[test]
fn first_table_activation_after_form_fetches_once() {
    let companies = replay(&[ActiveView::Form, ActiveView::Table, ActiveView::Form, ActiveView::Table]);
    assert_eq!(companies.fetch_count, 1);
}

#[cfg(feature = "ssr")]
mod ssr {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    use super::super::{ActiveViewContent, HomePage};
    use crate::components::view_toggle::{ViewToggle, select_view};
    use crate::state::companies::CompaniesState;
    use crate::state::ui::{ActiveView, UiState};

    fn render_home() -> String {
        let owner = Owner::new();
        owner.with(|| view! { <HomePage/> }.to_html())
    }

    #[test]
    fn server_render_omits_carousel() {
        let html = render_home();
        assert!(!html.contains("carousel"));
    }

    #[test]
    fn server_render_shows_table_loading_state() {
        let html = render_home();
        assert!(html.contains("Loading companies..."));
        assert!(!html.contains("Company Registration</h2>"));
    }

    #[test]
    fn server_render_marks_company_list_active() {
        let html = render_home();
        assert!(html.contains("view-toggle__button view-toggle__button--active"));
        assert!(html.contains("Register Company"));
    }

    /// The single highlighted toggle button's markup.
    fn active_button_label(html: &str) -> &str {
        let active: Vec<&str> = html
            .split("<button")
            .filter(|chunk| chunk.contains("view-toggle__button--active"))
            .collect();
        assert_eq!(active.len(), 1);
        active[0]
    }

    fn render_switch_sequence() -> (String, String, String) {
        let owner = Owner::new();
        owner.with(|| {
            let ui = RwSignal::new(UiState::default());
            provide_context(ui);
            provide_context(RwSignal::new(CompaniesState::default()));
            let render = || view! { <ViewToggle/><ActiveViewContent/> }.to_html();

            let initial = render();
            select_view(ui, ActiveView::Form);
            let form = render();
            select_view(ui, ActiveView::Table);
            let back = render();
            (initial, form, back)
        })
    }

    #[test]
    fn register_company_switches_to_form() {
        let (initial, form, _) = render_switch_sequence();
        assert!(initial.contains("Loading companies..."));
        assert!(!initial.contains("registration-form"));

        assert!(form.contains("registration-form"));
        assert!(form.contains("Company Registration</h2>"));
        assert!(!form.contains("Loading companies..."));
        assert!(active_button_label(&form).contains("Register Company"));
    }

    #[test]
    fn company_list_switches_back_to_table() {
        let (_, _, back) = render_switch_sequence();
        assert!(back.contains("Loading companies..."));
        assert!(!back.contains("registration-form"));
        assert!(active_button_label(&back).contains("Company List"));
    }
}
