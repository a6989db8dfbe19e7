use chrono::Utc;
use contracts::system::auth::{Session, SessionUser};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

use super::{api, storage};

/// Состояние входа, общее для всего приложения
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    /// true, пока сессия восстанавливается при старте
    pub restoring: RwSignal<bool>,
    pub modal_open: RwSignal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            restoring: RwSignal::new(true),
            modal_open: RwSignal::new(false),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session.with(|s| s.as_ref().and_then(|s| s.user.clone()))
    }

    pub fn bearer_untracked(&self) -> Option<String> {
        self.session.with_untracked(|s| s.as_ref().map(Session::bearer))
    }

    pub fn open_modal(&self) {
        self.modal_open.set(true);
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
    }

    pub fn sign_out(&self) {
        let this = *self;
        let access_token = this
            .session
            .with_untracked(|s| s.as_ref().map(|s| s.access_token.clone()));
        storage::clear_session();
        this.session.set(None);

        if let Some(token) = access_token {
            spawn_local(async move {
                if let Err(e) = api::logout(&token).await {
                    log::warn!("{}", e);
                }
            });
        }
    }
}

/// Session from `#access_token=...` after the magic link redirect.
/// The fragment is removed from the address bar once read.
fn take_session_from_url() -> Option<Session> {
    let w = window()?;
    let hash = w.location().hash().ok()?;
    let session = Session::from_url_fragment(&hash)?;

    let location = w.location();
    let clean_url = format!(
        "{}{}",
        location.pathname().unwrap_or_else(|_| "/".to_string()),
        location.search().unwrap_or_default()
    );
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&clean_url));
    }
    Some(session)
}

/// Проверить сессию: продлить истёкшую и подтянуть пользователя
async fn establish(session: Session) -> Option<Session> {
    let now = Utc::now();
    let mut session = session.with_expiry_from(now);

    if session.is_expired(now) {
        let refresh_token = session.refresh_token.clone()?;
        session = match api::refresh_session(refresh_token).await {
            Ok(fresh) => fresh.with_expiry_from(Utc::now()),
            Err(e) => {
                log::info!("Stored session expired: {}", e);
                return None;
            }
        };
    }

    if session.user.is_none() {
        match api::get_user(&session.access_token).await {
            Ok(user) => session.user = Some(user),
            Err(e) => {
                log::warn!("{}", e);
                return None;
            }
        }
    }
    Some(session)
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);

    // Try to restore session from the redirect or localStorage on mount
    let from_url = take_session_from_url();
    let candidate = from_url.or_else(storage::load_session);
    spawn_local(async move {
        match candidate {
            Some(session) => match establish(session).await {
                Some(session) => {
                    storage::save_session(&session);
                    auth.session.set(Some(session.clone()));
                    api::sync_profile(&session).await;
                }
                None => storage::clear_session(),
            },
            None => log::debug!("No stored session"),
        }
        auth.restoring.set(false);
    });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
