//! Thin wrappers over the window and document APIs used by the session flow.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, Window};

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))
}

/// Cookie string that expires `name` immediately on path `/`
pub fn expired_cookie(name: &str) -> String {
    format!("{}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:01 GMT;", name)
}

pub fn clear_cookie(name: &str) -> Result<(), JsValue> {
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))?
        .dyn_into::<HtmlDocument>()?;
    document.set_cookie(&expired_cookie(name))
}

/// Navigate, keeping the current page in history
pub fn navigate_to(path: &str) -> Result<(), JsValue> {
    window()?.location().set_href(path)
}

/// Navigate, replacing the current history entry
pub fn replace_location(path: &str) -> Result<(), JsValue> {
    window()?.location().replace(path)
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname())
        .unwrap_or_else(|_| "/".to_string())
}

pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search())
        .unwrap_or_default()
}

/// Blocking alert dialog
pub fn alert(message: &str) -> Result<(), JsValue> {
    window()?.alert_with_message(message)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn cookies() -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn test_clear_cookie_removes_session() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .unwrap();
        document.set_cookie("session_id=abc123; Path=/").unwrap();
        assert!(cookies().contains("session_id=abc123"));

        clear_cookie("session_id").unwrap();

        assert!(!cookies().contains("session_id=abc123"));
    }

    #[wasm_bindgen_test]
    fn test_current_path_is_absolute() {
        assert!(current_path().starts_with('/'));
    }
}
