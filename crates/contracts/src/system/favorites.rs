use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::a002_olympiad::Olympiad;
use crate::usecases::u501_resolve_category::FetchFailure;

/// Тело запросов `favorites/add` и `favorites/remove`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRequest {
    pub olympiad_id: i64,
}

/// Запись избранного пользователя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    #[serde(default)]
    pub id: Option<i64>,
    pub olympiad_id: i64,
    #[serde(default)]
    pub olympiad: Option<Olympiad>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Ошибка запросов избранного. 401 означает "не вошёл", а не сбой.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FavoritesError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("favorites request failed: {0}")]
    Request(String),
}

impl From<FetchFailure> for FavoritesError {
    fn from(failure: FetchFailure) -> Self {
        match failure {
            FetchFailure::Status(401) => FavoritesError::NotAuthenticated,
            other => FavoritesError::Request(other.to_string()),
        }
    }
}

/// Идентификаторы мероприятий в избранном
pub fn favorite_ids(favorites: &[Favorite]) -> BTreeSet<i64> {
    favorites.iter().map(|f| f.olympiad_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_is_not_an_error_banner() {
        assert_eq!(
            FavoritesError::from(FetchFailure::Status(401)),
            FavoritesError::NotAuthenticated
        );
        assert_eq!(
            FavoritesError::from(FetchFailure::Status(500)),
            FavoritesError::Request("HTTP 500".to_string())
        );
    }

    #[test]
    fn test_favorites_payload() {
        let json = r#"[
            {"id": 1, "olympiad_id": 5},
            {"olympiad_id": 7, "olympiad": {"id": 7, "title": "Hack"}}
        ]"#;
        let favorites: Vec<Favorite> = serde_json::from_str(json).unwrap();
        assert_eq!(favorite_ids(&favorites), BTreeSet::from([5, 7]));
        assert_eq!(favorites[1].olympiad.as_ref().map(|o| o.title.as_str()), Some("Hack"));
    }
}
