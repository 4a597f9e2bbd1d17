//! Page Routing
//!
//! Maps browser paths to pages and keeps the history stack in sync.

use percent_encoding::percent_decode_str;

use crate::api::encode_segment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Main,
    /// Detail view of one task list
    TaskList(String),
}

impl Page {
    /// Unknown paths fall back to the homepage. Page names match without
    /// regard to case; a list name keeps its case.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        let lower = path.to_ascii_lowercase();
        match lower.as_str() {
            "" | "/index.html" => Page::Home,
            "/login" => Page::Login,
            "/register" => Page::Register,
            "/main" => Page::Main,
            _ => match strip_prefix_ignore_case(path, "/main/") {
                Some(name) if !name.is_empty() && !name.contains('/') => {
                    let name = percent_decode_str(name).decode_utf8_lossy().into_owned();
                    Page::TaskList(name)
                }
                _ => Page::Home,
            },
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Login => "/Login".to_string(),
            Page::Register => "/Register".to_string(),
            Page::Main => "/Main".to_string(),
            Page::TaskList(name) => format!("/Main/{}", encode_segment(name)),
        }
    }

    /// Pages that need a stored credential
    pub fn requires_session(&self) -> bool {
        matches!(self, Page::Main | Page::TaskList(_))
    }

    /// Where to go once a failed task-list load has been shown for a while.
    /// Only the main view redirects; the user may have moved on meanwhile.
    pub fn after_failed_load(&self) -> Option<Page> {
        (*self == Page::Main).then_some(Page::Home)
    }
}

fn strip_prefix_ignore_case<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let head = path.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &path[prefix.len()..])
}

/// Page for the current `window.location`
pub fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| Page::from_path(&p))
        .unwrap_or(Page::Home)
}

/// Push `page` onto the browser history without reloading
pub fn push_history(page: &Page) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let path = page.to_path();
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path)) {
        log::warn!("[ROUTE] pushState {} failed: {:?}", path, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/Login"), Page::Login);
        assert_eq!(Page::from_path("/Register/"), Page::Register);
        assert_eq!(Page::from_path("/Main"), Page::Main);
    }

    #[test]
    fn test_page_names_ignore_case() {
        assert_eq!(Page::from_path("/login"), Page::Login);
        assert_eq!(Page::from_path("/REGISTER"), Page::Register);
        assert_eq!(Page::from_path("/main/"), Page::Main);
        assert_eq!(Page::from_path("/main/Groceries"), Page::TaskList("Groceries".into()));
        assert_eq!(Page::from_path("/Main/a%5Cb"), Page::TaskList("a\\b".into()));
    }

    #[test]
    fn test_unknown_paths_render_homepage() {
        assert_eq!(Page::from_path("/logins"), Page::Home);
        assert_eq!(Page::from_path("/Main/a/b"), Page::Home);
        assert_eq!(Page::from_path("/nowhere"), Page::Home);
    }

    #[test]
    fn test_task_list_path_round_trip() {
        let page = Page::TaskList("Weekend chores".into());
        assert_eq!(page.to_path(), "/Main/Weekend%20chores");
        assert_eq!(Page::from_path(&page.to_path()), page);
    }

    #[test]
    fn test_requires_session() {
        assert!(Page::Main.requires_session());
        assert!(Page::TaskList("x".into()).requires_session());
        assert!(!Page::Login.requires_session());
    }

    #[test]
    fn test_failed_load_redirects_only_from_main() {
        assert_eq!(Page::Main.after_failed_load(), Some(Page::Home));
        assert_eq!(Page::Login.after_failed_load(), None);
        assert_eq!(Page::TaskList("x".into()).after_failed_load(), None);
        assert_eq!(Page::Home.after_failed_load(), None);
    }
}
