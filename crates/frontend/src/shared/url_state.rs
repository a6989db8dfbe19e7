//! Синхронизация строки поиска с `?q=` в адресной строке

use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub q: String,
}

impl SearchParams {
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    /// `?q=...` или пустая строка, если поиск пуст
    pub fn to_search(&self) -> String {
        let query_string = serde_qs::to_string(self).unwrap_or_default();
        if query_string.is_empty() {
            String::new()
        } else {
            format!("?{}", query_string)
        }
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn read_search_text() -> String {
    SearchParams::parse(&current_search()).q
}

/// Replace `?q=` without adding a history entry
pub fn write_search_text(text: &str) {
    let params = SearchParams {
        q: text.trim().to_string(),
    };
    let new_search = params.to_search();

    // Only update URL if it actually changed
    if current_search() == new_search {
        return;
    }
    if let Some(w) = window() {
        let path = w.location().pathname().unwrap_or_else(|_| "/".to_string());
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&format!("{}{}", path, new_search)),
            );
        }
    }
}
