use crate::models::{UserAccount, ViewMode};
use serde::{Deserialize, Serialize};

pub(crate) const USER_KEY: &str = "mathocr_user";
pub(crate) const VIEW_MODE_KEY: &str = "mathocr_project_view_mode";

pub(crate) fn save_user_to_storage(user: &UserAccount) {
    save_json_to_storage(USER_KEY, user);
}

pub(crate) fn load_user_from_storage() -> Option<UserAccount> {
    load_json_from_storage(USER_KEY)
}

/// Session teardown. The view-mode preference is a UI setting and survives
/// logout.
pub(crate) fn clear_session_storage() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(USER_KEY);
    }
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    let json = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, &json);
        }
    }
}

pub(crate) fn load_view_mode() -> ViewMode {
    load_json_from_storage::<ViewMode>(VIEW_MODE_KEY).unwrap_or(ViewMode::Grid)
}

pub(crate) fn save_view_mode(mode: ViewMode) {
    save_json_to_storage(VIEW_MODE_KEY, &mode);
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_user_storage_roundtrip() {
        clear_session_storage();
        assert!(load_user_from_storage().is_none());

        let user = UserAccount {
            id: 1,
            username: "u".to_string(),
            email: "u@example.com".to_string(),
        };
        save_user_to_storage(&user);

        let loaded = load_user_from_storage().expect("should load user from localStorage");
        assert_eq!(loaded.username, "u");

        clear_session_storage();
        assert!(load_user_from_storage().is_none());
    }

    #[wasm_bindgen_test]
    fn test_view_mode_roundtrip_and_default() {
        save_view_mode(ViewMode::List);
        assert_eq!(load_view_mode(), ViewMode::List);

        save_view_mode(ViewMode::Grid);
        assert_eq!(load_view_mode(), ViewMode::Grid);
    }
}
