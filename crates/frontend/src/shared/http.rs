//! Thin wrappers over gloo-net used by every API module

use contracts::usecases::u501_resolve_category::FetchFailure;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchFailure> {
    if !response.ok() {
        return Err(FetchFailure::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| FetchFailure::Malformed(e.to_string()))
}

/// GET JSON, keeping transport errors, non-2xx and bad payloads apart
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchFailure> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchFailure::Transport(e.to_string()))?;
    decode(response).await
}

/// GET JSON with a bearer token
pub async fn get_json_authorized<T: DeserializeOwned>(
    url: &str,
    bearer: &str,
) -> Result<T, FetchFailure> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .header("Authorization", bearer)
        .send()
        .await
        .map_err(|e| FetchFailure::Transport(e.to_string()))?;
    decode(response).await
}

/// POST a JSON body with a bearer token; the response body is ignored
pub async fn post_json_authorized<B: serde::Serialize>(
    url: &str,
    bearer: &str,
    body: &B,
) -> Result<(), FetchFailure> {
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .header("Authorization", bearer)
        .json(body)
        .map_err(|e| FetchFailure::Malformed(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| FetchFailure::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchFailure::Status(response.status()));
    }
    Ok(())
}
