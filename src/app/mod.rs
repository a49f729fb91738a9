use crate::pages::{
    EditorPage, LoginPage, NotFoundPage, ProjectListPage, RootPage, SettingsPage, TemplatePage,
    TrashPage,
};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let app_state = AppState::new();
    provide_context(AppContext(app_state));

    // Unsafe methods need the X-CSRFToken header; prime the token before the
    // first mutation. Login reloads the page, which runs this again and picks
    // up the rotated token.
    spawn_local(async move {
        let client = app_state.api_client.get_untracked();
        if let Ok(token) = client.fetch_csrf_token().await {
            app_state.api_client.update(|c| c.set_csrf_token(token));
        }
    });

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("login") view=LoginPage />
                <Route path=path!("project") view=ProjectListPage />
                <Route path=path!("project/:id/editor") view=EditorPage />
                <Route path=path!("trash") view=TrashPage />
                <Route path=path!("template") view=TemplatePage />
                <Route path=path!("settings") view=SettingsPage />
                <Route path=path!("") view=RootPage />
            </Routes>
        </Router>
    }
}
