use crate::api::ApiClient;
use crate::models::{Project, UserAccount, ViewMode};
use crate::storage::{clear_session_storage, load_user_from_storage, load_view_mode};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    /// Session identity. Seeded from localStorage for an instant shell
    /// render; the authed layout re-validates against `/api/auth/user/`.
    pub current_user: RwSignal<Option<UserAccount>>,

    /// Active (non-trashed) projects, loaded from backend.
    pub projects: RwSignal<Vec<Project>>,
    pub projects_loading: RwSignal<bool>,
    pub projects_error: RwSignal<Option<String>>,

    /// Project load guard (avoid duplicate loads + ignore stale responses).
    pub projects_request_id: RwSignal<u64>,

    /// Project list rendering preference (grid or list), persisted.
    pub view_mode: RwSignal<ViewMode>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::from_env()),
            current_user: RwSignal::new(load_user_from_storage()),
            projects: RwSignal::new(vec![]),
            projects_loading: RwSignal::new(false),
            projects_error: RwSignal::new(None),
            projects_request_id: RwSignal::new(0),
            view_mode: RwSignal::new(load_view_mode()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.get_untracked().is_some()
    }

    /// Local session teardown: drop the cached user and the CSRF token the
    /// client was carrying. The backend logout call is the caller's job.
    pub fn clear_session(&self) {
        self.current_user.set(None);
        self.projects.set(vec![]);
        self.projects_error.set(None);
        self.api_client.update(|c| c.csrf_token = None);
        clear_session_storage();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provided once at app mount; pages reach it with `expect_context`.
#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
