use contracts::shared::filters::{FilterState, FILTERS_STORAGE_KEY};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn write(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to write '{}' to local storage: {:?}", key, e);
            }
        }
        None => log::warn!("Local storage is unavailable, '{}' not saved", key),
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Сохранённое состояние панели фильтров или состояние по умолчанию
pub fn load_filters() -> FilterState {
    read(FILTERS_STORAGE_KEY)
        .map(|json| FilterState::from_storage_json(&json))
        .unwrap_or_default()
}

pub fn save_filters(state: &FilterState) {
    match state.to_storage_json() {
        Ok(json) => write(FILTERS_STORAGE_KEY, &json),
        Err(e) => log::warn!("Failed to serialize filters: {}", e),
    }
}
