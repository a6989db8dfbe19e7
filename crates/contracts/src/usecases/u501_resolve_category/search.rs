//! Поиск по названию поверх уже отобранных мероприятий категории.
//! Не влияет на `display_title` и `category_id`.

use crate::domain::a001_category::aggregate::normalize_slug;
use crate::domain::a002_olympiad::Olympiad;

/// Мероприятия, в названии которых встречается текст (без учёта регистра)
pub fn search_within(events: &[Olympiad], text: &str) -> Vec<Olympiad> {
    if text.is_empty() {
        return events.to_vec();
    }
    events
        .iter()
        .filter(|o| o.title_contains(text))
        .cloned()
        .collect()
}

/// Единственное совпадение непустого поиска, для перехода сразу на страницу мероприятия
pub fn single_search_hit<'a>(events: &'a [Olympiad], text: &str) -> Option<&'a Olympiad> {
    if text.is_empty() {
        return None;
    }
    let mut hits = events.iter().filter(|o| o.title_contains(text));
    match (hits.next(), hits.next()) {
        (Some(hit), None) => Some(hit),
        _ => None,
    }
}

/// Мероприятие по slug из адреса; обе стороны нормализуются, включая кириллицу
pub fn find_by_slug(events: Vec<Olympiad>, slug: &str) -> Option<Olympiad> {
    let wanted = normalize_slug(slug);
    if wanted.is_empty() {
        return None;
    }
    events.into_iter().find(|o| normalize_slug(&o.slug) == wanted)
}
