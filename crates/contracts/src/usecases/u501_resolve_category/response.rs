use crate::domain::a002_olympiad::Olympiad;

/// Шаг цепочки, давший итоговый результат
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStep {
    /// Серверный фильтр по slug вернул мероприятия
    ServerBySlug,
    /// Серверный фильтр по числовому id вернул мероприятия
    ServerById,
    /// Серверный фильтр ответил успешно, но пусто; локальный вывод не применялся
    ServerEmpty,
    /// Мероприятия отобраны на клиенте из полного списка
    LocalReconciliation,
    /// Категория найдена, но ни один источник не ответил
    Unavailable,
    /// Slug не соответствует ни одной категории
    Unresolved,
}

impl ResolutionStep {
    pub fn is_authoritative(&self) -> bool {
        matches!(
            self,
            ResolutionStep::ServerBySlug | ResolutionStep::ServerById | ResolutionStep::ServerEmpty
        )
    }
}

/// Результат разрешения категории
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResolution {
    pub display_title: String,
    pub category_id: Option<i64>,
    pub matched_events: Vec<Olympiad>,
    pub step: ResolutionStep,
}
