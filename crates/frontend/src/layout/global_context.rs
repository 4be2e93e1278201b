use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

use super::tabs::tab_label_for_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// `?active=<tab key>`, the only query parameter the shell understands.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ShellQuery {
    active: Option<String>,
}

/// Pushes `key` unless it is already open. Returns whether a tab was added.
fn push_tab(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tabs.iter().any(|t| t.key == key) {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

/// Tab that becomes active after `closed` is removed from `tabs`.
/// `None` when the closed tab was not the active one.
fn next_active_after_close(
    tabs: &[Tab],
    active: Option<&str>,
    closed: &str,
) -> Option<Option<String>> {
    (active == Some(closed)).then(|| tabs.last().map(|t| t.key.clone()))
}

/// Open tabs plus shell visibility flags. Provided once by `App`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named by `?active=` and keeps the query string in
    /// sync with the active tab afterwards.
    pub fn init_router_integration(&self) {
        let query: ShellQuery = current_search()
            .and_then(|s| serde_qs::from_str(s.trim_start_matches('?')).ok())
            .unwrap_or_default();
        if let Some(key) = query.active {
            match tab_label_for_key(&key) {
                "" => log::warn!("ignoring unknown tab key in url: '{}'", key),
                label => self.open_tab(&key, label),
            }
        }

        let active = self.active;
        Effect::new(move |_| {
            let Some(key) = active.get() else {
                return;
            };
            let query = ShellQuery { active: Some(key) };
            let Ok(qs) = serde_qs::to_string(&query) else {
                return;
            };
            let new_search = format!("?{}", qs);
            if current_search().as_deref() != Some(new_search.as_str()) {
                replace_search(&new_search);
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let added = self
            .opened
            .try_update(|tabs| push_tab(tabs, key, title))
            .unwrap_or(false);
        if added {
            log::debug!("tab opened: {}", key);
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Closing a tab drops its page, which aborts the page's pending requests.
    pub fn close_tab(&self, key: &str) {
        self.opened.update(|tabs| tabs.retain(|t| t.key != key));
        let next = self.opened.with_untracked(|tabs| {
            self.active
                .with_untracked(|active| next_active_after_close(tabs, active.as_deref(), key))
        });
        if let Some(next) = next {
            log::debug!("tab closed: {}, next active: {:?}", key, next);
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_search() -> Option<String> {
    window().and_then(|w| w.location().search().ok())
}

fn replace_search(search: &str) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(search))
    {
        log::warn!("failed to update url: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_uppercase(),
            })
            .collect()
    }

    #[test]
    fn test_push_tab_skips_duplicates() {
        let mut list = tabs(&["a001_pedido"]);
        assert!(!push_tab(&mut list, "a001_pedido", "Pedidos"));
        assert!(push_tab(&mut list, "a002_inventario_carga", "Carga"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].title, "Carga");
    }

    #[test]
    fn test_closing_active_tab_activates_last() {
        let remaining = tabs(&["a", "b"]);
        assert_eq!(
            next_active_after_close(&remaining, Some("c"), "c"),
            Some(Some("b".to_string()))
        );
    }

    #[test]
    fn test_closing_last_tab_clears_active() {
        assert_eq!(next_active_after_close(&[], Some("a"), "a"), Some(None));
    }

    #[test]
    fn test_closing_inactive_tab_keeps_active() {
        let remaining = tabs(&["a"]);
        assert_eq!(next_active_after_close(&remaining, Some("a"), "b"), None);
    }

    #[test]
    fn test_shell_query_parses_active() {
        let q: ShellQuery = serde_qs::from_str("active=a001_pedido").unwrap();
        assert_eq!(q.active.as_deref(), Some("a001_pedido"));
        assert_eq!(serde_qs::to_string(&q).unwrap(), "active=a001_pedido");
    }
}
