use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a002_olympiad::Olympiad;
use crate::domain::common::CatalogEntity;

/// Подпись для мероприятий, чья категория не найдена в списке
pub const OTHER_CATEGORY_TITLE: &str = "Другое";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория мероприятий (олимпиады, хакатоны, конкурсы...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Category {
    pub fn new(id: i64, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
            icon: None,
            description: None,
            sort_order: 0,
            is_active: true,
        }
    }

    /// Сравнение slug без учёта регистра и процентного кодирования
    pub fn slug_matches(&self, slug: &str) -> bool {
        normalize_slug(&self.slug) == normalize_slug(slug)
    }

    /// Первая буква названия, для плейсхолдера иконки
    pub fn initial(&self) -> String {
        self.title.chars().next().map(String::from).unwrap_or_default()
    }

    /// Активные категории в порядке отображения
    pub fn visible_sorted(categories: &[Category]) -> Vec<Category> {
        let mut visible: Vec<Category> =
            categories.iter().filter(|c| c.is_active).cloned().collect();
        visible.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.title.cmp(&b.title))
        });
        visible
    }
}

impl CatalogEntity for Category {
    fn id(&self) -> i64 {
        self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Категория"
    }

    fn list_name() -> &'static str {
        "Категории"
    }
}

/// Приводит slug к виду для сравнения: декодирует и переводит в нижний регистр
pub fn normalize_slug(slug: &str) -> String {
    urlencoding::decode(slug.trim())
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| slug.trim().to_string())
        .to_lowercase()
}

/// Количество мероприятий по названию категории
pub fn count_by_category(events: &[Olympiad], categories: &[Category]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for event in events {
        let title = event
            .category_id
            .and_then(|id| categories.iter().find(|c| c.id == id))
            .map(|c| c.title.clone())
            .unwrap_or_else(|| OTHER_CATEGORY_TITLE.to_string());
        *counts.entry(title).or_insert(0) += 1;
    }
    counts
}
