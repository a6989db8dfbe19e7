use crate::shared::filters::SortOrder;

/// Параметры запроса `GET /api/v1/olympiads/filter`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OlympiadQuery {
    pub search: Option<String>,
    pub subjects: Vec<String>,
    pub level: Option<String>,
    pub prize_min: Option<u32>,
    pub is_team: Option<bool>,
    pub has_prize: bool,
    pub deadline_days: Option<u32>,
    pub sort: Option<SortOrder>,
    pub category: Option<String>,
}

impl OlympiadQuery {
    /// Пары ключ-значение в порядке, который ожидает бэкенд.
    /// Пустые значения пропускаются.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(q) = self.search.as_deref().filter(|q| !q.is_empty()) {
            pairs.push(("q", q.to_string()));
        }
        for subject in &self.subjects {
            pairs.push(("subjects", subject.clone()));
        }
        if let Some(level) = self.level.as_deref().filter(|l| !l.is_empty()) {
            pairs.push(("level", level.to_string()));
        }
        if let Some(prize_min) = self.prize_min.filter(|p| *p > 0) {
            pairs.push(("prize_min", prize_min.to_string()));
        }
        if let Some(is_team) = self.is_team {
            pairs.push(("is_team", is_team.to_string()));
        }
        if self.has_prize {
            pairs.push(("has_prize", "true".to_string()));
        }
        if let Some(days) = self.deadline_days.filter(|d| *d > 0) {
            pairs.push(("deadline_days", days.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category.to_string()));
        }

        pairs
    }

    /// Строка запроса без ведущего `?`
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
