use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::common::CatalogEntity;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Мероприятие каталога (олимпиада, хакатон, конкурс)
///
/// `category_id` может прийти из источника с другой нумерацией категорий,
/// поэтому сравнение по нему не всегда надёжно. Старые записи вместо него
/// несут строковое поле `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Olympiad {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,

    // Связи
    #[serde(default)]
    pub organizer_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Устаревшее строковое поле категории (slug или название)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub is_team: Option<bool>,

    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub registration_deadline: Option<String>,

    #[serde(default)]
    pub prize: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub content_hash: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub parsed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

/// `null` в списке трактуется как пустой список
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Сколько предметов показывать на карточке
pub const CARD_SUBJECTS_LIMIT: usize = 4;

impl Olympiad {
    /// Минимальная запись; остальные поля пустые
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            slug: String::new(),
            description: None,
            organizer_id: None,
            category_id: None,
            category: None,
            level: None,
            subjects: Vec::new(),
            is_team: None,
            start_date: None,
            end_date: None,
            registration_deadline: None,
            prize: None,
            source_url: None,
            content_hash: None,
            is_active: true,
            logo_url: None,
            parsed_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn has_prize(&self) -> bool {
        self.prize.as_deref().is_some_and(|p| !p.trim().is_empty())
    }

    /// Дедлайн регистрации как дата (принимает "YYYY-MM-DD" и ISO datetime)
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        self.registration_deadline.as_deref().and_then(parse_date)
    }

    /// Предметы для карточки и количество скрытых
    pub fn subjects_preview(&self) -> (&[String], usize) {
        let shown = self.subjects.len().min(CARD_SUBJECTS_LIMIT);
        (&self.subjects[..shown], self.subjects.len() - shown)
    }

    /// Название содержит текст без учёта регистра
    pub fn title_contains(&self, text: &str) -> bool {
        self.title.to_lowercase().contains(&text.to_lowercase())
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d").ok()
}

impl CatalogEntity for Olympiad {
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
        "a002"
    }

    fn collection_name() -> &'static str {
        "olympiads"
    }

    fn element_name() -> &'static str {
        "Мероприятие"
    }

    fn list_name() -> &'static str {
        "Мероприятия"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": 5,
            "title": "Test A",
            "slug": "test-a",
            "description": null,
            "organizer_id": 3,
            "category_id": 1,
            "level": null,
            "subjects": ["Математика", "Физика"],
            "is_team": null,
            "start_date": "2025-02-01",
            "end_date": null,
            "registration_deadline": "2025-01-20T00:00:00",
            "prize": "БВИ",
            "source_url": "https://example.org",
            "content_hash": null,
            "is_active": true,
            "parsed_at": "2025-01-01T10:00:00",
            "created_at": "2025-01-01T10:00:00",
            "updated_at": "2025-01-01T10:00:00",
            "logo_url": null
        }"#;

        let o: Olympiad = serde_json::from_str(json).unwrap();
        assert_eq!(o.category_id, Some(1));
        assert_eq!(o.category, None);
        assert!(o.has_prize());
        assert_eq!(o.deadline_date(), NaiveDate::from_ymd_opt(2025, 1, 20));
    }

    #[test]
    fn test_null_subjects_become_empty() {
        let with_null: Olympiad =
            serde_json::from_str(r#"{"id": 9, "title": "No subjects", "subjects": null}"#).unwrap();
        assert!(with_null.subjects.is_empty());

        let missing: Olympiad = serde_json::from_str(r#"{"id": 10, "title": "Missing"}"#).unwrap();
        assert!(missing.subjects.is_empty());
    }

    #[test]
    fn test_subjects_preview_counts_hidden() {
        let mut o = Olympiad::new(1, "Many");
        o.subjects = (1..=6).map(|i| format!("s{}", i)).collect();
        let (shown, hidden) = o.subjects_preview();
        assert_eq!(shown.len(), 4);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn test_title_contains_is_case_insensitive() {
        let o = Olympiad::new(1, "Всероссийская Олимпиада");
        assert!(o.title_contains("олимпиада"));
        assert!(!o.title_contains("хакатон"));
    }

    #[test]
    fn test_blank_prize_is_not_prize() {
        let mut o = Olympiad::new(1, "No prize");
        o.prize = Some("  ".into());
        assert!(!o.has_prize());
    }
}
