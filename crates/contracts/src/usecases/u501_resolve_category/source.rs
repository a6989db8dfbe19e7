use async_trait::async_trait;

use crate::domain::a002_olympiad::Olympiad;

/// Причина неудачи одного запроса
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Итог запроса: успешный ответ (возможно пустой) отличается от неудачи
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(Vec<T>),
    Failed(FetchFailure),
}

impl<T> FetchOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    pub fn into_items(self) -> Option<Vec<T>> {
        match self {
            FetchOutcome::Success(items) => Some(items),
            FetchOutcome::Failed(_) => None,
        }
    }
}

impl<T> From<Result<Vec<T>, FetchFailure>> for FetchOutcome<T> {
    fn from(result: Result<Vec<T>, FetchFailure>) -> Self {
        match result {
            Ok(items) => FetchOutcome::Success(items),
            Err(failure) => FetchOutcome::Failed(failure),
        }
    }
}

/// Вариант параметра категории для серверного фильтра.
/// Какое имя параметра принимает бэкенд, заранее неизвестно.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParam {
    /// `category=<slug>`
    Slug(String),
    /// `category=<id>`
    Id(i64),
    /// `category_id=<id>`
    CategoryId(i64),
}

impl CategoryParam {
    pub fn to_query_pair(&self) -> String {
        match self {
            CategoryParam::Slug(slug) => format!("category={}", urlencoding::encode(slug)),
            CategoryParam::Id(id) => format!("category={}", id),
            CategoryParam::CategoryId(id) => format!("category_id={}", id),
        }
    }
}

/// Источник мероприятий для цепочки разрешения категории
#[async_trait(?Send)]
pub trait OlympiadSource {
    /// `GET /api/v1/olympiads/filter?<param>`
    async fn filter_by_category(&self, param: &CategoryParam) -> FetchOutcome<Olympiad>;

    /// `GET /api/v1/olympiads/` без фильтра
    async fn fetch_all(&self) -> FetchOutcome<Olympiad>;
}
