use contracts::system::auth::Session;

use crate::shared::storage;

const SESSION_KEY: &str = "os_auth_session";

/// Save session to localStorage
pub fn save_session(session: &Session) {
    match serde_json::to_string(session) {
        Ok(json) => storage::write(SESSION_KEY, &json),
        Err(e) => log::warn!("Failed to serialize session: {}", e),
    }
}

/// Get session from localStorage
pub fn load_session() -> Option<Session> {
    let raw = storage::read(SESSION_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Dropping malformed stored session: {}", e);
            clear_session();
            None
        }
    }
}

pub fn clear_session() {
    storage::remove(SESSION_KEY);
}
