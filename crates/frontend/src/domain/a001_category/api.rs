use contracts::domain::a001_category::Category;
use contracts::domain::common::CatalogEntity;

use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;

/// `GET /api/v1/categories`
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    get_json::<Vec<Category>>(&api_url(&Category::api_path()))
        .await
        .map_err(|e| format!("Failed to fetch categories: {}", e))
}
