use async_trait::async_trait;
use contracts::domain::a002_olympiad::{Olympiad, OlympiadQuery};
use contracts::domain::common::CatalogEntity;
use contracts::usecases::u501_resolve_category::{
    CategoryParam, FetchFailure, FetchOutcome, OlympiadSource,
};

use crate::shared::api_utils::api_url;
use crate::shared::http::get_json;

/// Верхняя граница выборки полного списка
pub const ALL_EVENTS_LIMIT: u32 = 1000;

fn filter_url(query_string: &str) -> String {
    let path = format!("{}/filter", Olympiad::api_path());
    if query_string.is_empty() {
        api_url(&path)
    } else {
        api_url(&format!("{}?{}", path, query_string))
    }
}

/// Источник мероприятий поверх REST API
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOlympiadSource;

#[async_trait(?Send)]
impl OlympiadSource for HttpOlympiadSource {
    async fn filter_by_category(&self, param: &CategoryParam) -> FetchOutcome<Olympiad> {
        get_json::<Vec<Olympiad>>(&filter_url(&param.to_query_pair()))
            .await
            .into()
    }

    async fn fetch_all(&self) -> FetchOutcome<Olympiad> {
        let url = api_url(&format!("{}/?limit={}", Olympiad::api_path(), ALL_EVENTS_LIMIT));
        get_json::<Vec<Olympiad>>(&url).await.into()
    }
}

/// Листинг с фильтрами панели и строкой поиска
pub async fn fetch_filtered(query: &OlympiadQuery) -> Result<Vec<Olympiad>, FetchFailure> {
    get_json::<Vec<Olympiad>>(&filter_url(&query.to_query_string())).await
}

/// `GET /api/v1/olympiads/subjects`
pub async fn fetch_subjects() -> Result<Vec<String>, String> {
    let url = api_url(&format!("{}/subjects", Olympiad::api_path()));
    get_json::<Vec<String>>(&url)
        .await
        .map_err(|e| format!("Failed to fetch subjects: {}", e))
}
