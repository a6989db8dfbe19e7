//! Статическая таблица категорий
//!
//! Используется, когда список категорий из API пуст или недоступен.
//! Идентификаторы здесь из собственной нумерации и не совпадают с id бэкенда.

use once_cell::sync::Lazy;

use super::aggregate::Category;

pub static SEED_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    [
        (101, "olimpiady", "Олимпиады", "olympiads.png"),
        (102, "hakatony", "Хакатоны", "hackathons.png"),
        (103, "konkursy", "Конкурсы", "contests.png"),
        (104, "konferentsii", "Конференции", "conferences.png"),
        (105, "stazhirovki", "Стажировки", "internships.png"),
    ]
    .into_iter()
    .enumerate()
    .map(|(pos, (id, slug, title, icon))| {
        let mut category = Category::new(id, slug, title);
        category.icon = Some(icon.to_string());
        category.sort_order = pos as i32 + 1;
        category
    })
    .collect()
});
