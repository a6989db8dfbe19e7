//! Состояние панели фильтров каталога
//!
//! Хранится в localStorage под ключом [`FILTERS_STORAGE_KEY`] в виде
//! `{subjects, hasPrize, deadlineSoon, sort}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::a002_olympiad::OlympiadQuery;

pub const FILTERS_STORAGE_KEY: &str = "os_filters_v1";

/// Горизонт фильтра "скоро дедлайн", в днях
pub const DEADLINE_SOON_DAYS: u32 = 14;

/// Порядок сортировки списка мероприятий
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SortOrder {
    #[default]
    DeadlineAsc,
    DeadlineDesc,
    Title,
    New,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DeadlineAsc => "deadline_asc",
            SortOrder::DeadlineDesc => "deadline_desc",
            SortOrder::Title => "title",
            SortOrder::New => "new",
        }
    }

    /// Неизвестные значения дают сортировку по умолчанию
    pub fn from_str(s: &str) -> Self {
        match s {
            "deadline_desc" => SortOrder::DeadlineDesc,
            "title" => SortOrder::Title,
            "new" => SortOrder::New,
            _ => SortOrder::DeadlineAsc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::DeadlineAsc => "Ближайшие дедлайны",
            SortOrder::DeadlineDesc => "Дальние дедлайны",
            SortOrder::Title => "По алфавиту",
            SortOrder::New => "Сначала новые",
        }
    }

    pub fn all() -> [SortOrder; 4] {
        [
            SortOrder::DeadlineAsc,
            SortOrder::DeadlineDesc,
            SortOrder::Title,
            SortOrder::New,
        ]
    }
}

impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        SortOrder::from_str(&value)
    }
}

impl From<SortOrder> for &'static str {
    fn from(value: SortOrder) -> Self {
        value.as_str()
    }
}

/// Выбор пользователя в панели фильтров
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub subjects: BTreeSet<String>,
    pub has_prize: bool,
    pub deadline_soon: bool,
    pub sort: SortOrder,
}

impl FilterState {
    /// Разбор сохранённого JSON; повреждённые данные дают состояние по умолчанию
    pub fn from_storage_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed stored filters: {}", e);
            Self::default()
        })
    }

    pub fn to_storage_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn toggle_subject(&mut self, subject: &str) {
        if !self.subjects.remove(subject) {
            self.subjects.insert(subject.to_string());
        }
    }

    /// Число активных фильтров для бейджа (сортировка не считается)
    pub fn active_count(&self) -> usize {
        self.subjects.len() + usize::from(self.has_prize) + usize::from(self.deadline_soon)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Запрос к серверному фильтру с учётом строки поиска
    pub fn to_query(&self, search: &str) -> OlympiadQuery {
        let search = search.trim();
        OlympiadQuery {
            search: (!search.is_empty()).then(|| search.to_string()),
            subjects: self.subjects.iter().cloned().collect(),
            has_prize: self.has_prize,
            deadline_days: self.deadline_soon.then_some(DEADLINE_SOON_DAYS),
            sort: Some(self.sort),
            ..Default::default()
        }
    }
}

/// Сужает список предметов по строке поиска (без учёта регистра)
pub fn filter_subjects(available: &[String], query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return available.to_vec();
    }
    available
        .iter()
        .filter(|s| s.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
