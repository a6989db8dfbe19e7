use contracts::system::favorites::{Favorite, FavoriteRequest, FavoritesError};

use crate::shared::api_utils::api_url;
use crate::shared::http::{get_json_authorized, post_json_authorized};

/// `GET /api/v1/favorites`
pub async fn fetch_favorites(bearer: &str) -> Result<Vec<Favorite>, FavoritesError> {
    get_json_authorized::<Vec<Favorite>>(&api_url("/api/v1/favorites"), bearer)
        .await
        .map_err(FavoritesError::from)
}

pub async fn add_favorite(bearer: &str, olympiad_id: i64) -> Result<(), FavoritesError> {
    post_json_authorized(
        &api_url("/api/v1/favorites/add"),
        bearer,
        &FavoriteRequest { olympiad_id },
    )
    .await
    .map_err(FavoritesError::from)
}

pub async fn remove_favorite(bearer: &str, olympiad_id: i64) -> Result<(), FavoritesError> {
    post_json_authorized(
        &api_url("/api/v1/favorites/remove"),
        bearer,
        &FavoriteRequest { olympiad_id },
    )
    .await
    .map_err(FavoritesError::from)
}
