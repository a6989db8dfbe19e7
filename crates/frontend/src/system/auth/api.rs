use contracts::system::auth::{
    AuthErrorBody, MagicLinkRequest, ProfileSyncRequest, RefreshRequest, Session, SessionUser,
};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::{api_url, auth_url};
use crate::shared::config::config;

async fn error_text(response: Response) -> String {
    let status = response.status();
    let raw = response.text().await.unwrap_or_default();
    AuthErrorBody::message_or(&raw, status)
}

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Send a magic link to the email; the link redirects back to this origin
pub async fn send_magic_link(email: &str) -> Result<(), String> {
    let request = MagicLinkRequest::new(email);
    let url = auth_url(&format!(
        "/auth/v1/otp?redirect_to={}",
        urlencoding::encode(&origin())
    ));

    let response = Request::post(&url)
        .header("apikey", &config().auth.supabase_anon_key)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_text(response).await);
    }
    Ok(())
}

/// Exchange a refresh token for a new session
pub async fn refresh_session(refresh_token: String) -> Result<Session, String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&auth_url("/auth/v1/token?grant_type=refresh_token"))
        .header("apikey", &config().auth.supabase_anon_key)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Refresh failed: {}", error_text(response).await));
    }

    response
        .json::<Session>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Get the user behind an access token
pub async fn get_user(access_token: &str) -> Result<SessionUser, String> {
    let response = Request::get(&auth_url("/auth/v1/user"))
        .header("apikey", &config().auth.supabase_anon_key)
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<SessionUser>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Logout (revoke the session on the auth service)
pub async fn logout(access_token: &str) -> Result<(), String> {
    let response = Request::post(&auth_url("/auth/v1/logout"))
        .header("apikey", &config().auth.supabase_anon_key)
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }
    Ok(())
}

/// `POST /api/v1/profiles/sync`, failures are only logged
pub async fn sync_profile(session: &Session) {
    let Some(user) = session.user.as_ref() else {
        return;
    };
    let body = ProfileSyncRequest::from(user);
    let result = crate::shared::http::post_json_authorized(
        &api_url("/api/v1/profiles/sync"),
        &session.bearer(),
        &body,
    )
    .await;
    if let Err(e) = result {
        log::warn!("Profile sync failed: {}", e);
    }
}
