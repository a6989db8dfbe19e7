//! URL builders for the catalog API and the auth service.
//! Both bases come from [`config`](super::config::config), never from literals.

use super::config::config;

/// Catalog API base without trailing slash, like "https://olympsearch-api.onrender.com"
pub fn api_base() -> &'static str {
    &config().api.base_url
}

/// `api_url("/api/v1/categories")` -> "<api base>/api/v1/categories"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL on the authentication service, e.g. `auth_url("/auth/v1/user")`
pub fn auth_url(path: &str) -> String {
    format!("{}{}", config().auth.supabase_url, path)
}
