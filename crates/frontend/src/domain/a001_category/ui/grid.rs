use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use std::collections::BTreeMap;

use crate::shared::catalog_context::use_catalog;

/// Сетка категорий главной страницы со счётчиками мероприятий
#[component]
#[allow(non_snake_case)]
pub fn CategoryGrid(
    /// Число мероприятий по названию категории; `None`, пока список не загружен
    #[prop(into)]
    counts: Signal<Option<BTreeMap<String, usize>>>,
) -> impl IntoView {
    let catalog = use_catalog();
    let visible = Memo::new(move |_| catalog.categories.with(|list| Category::visible_sorted(list)));

    view! {
        <section class="categories">
            <h2 class="section-title">"Категории"</h2>
            <Show
                when=move || !catalog.categories_loading.get()
                fallback=|| view! { <div class="categories__loading">"Загружаем категории..."</div> }
            >
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=|| view! { <div class="empty-state">"Категории пока недоступны"</div> }
                >
                    <div class="categories__grid">
                        <For
                            each=move || visible.get()
                            key=|c| c.id
                            children=move |category| {
                                let href = format!("/category/{}", category.slug);
                                let title = category.title.clone();
                                let count = move || {
                                    counts.with(|c| {
                                        c.as_ref().map(|map| map.get(&title).copied().unwrap_or(0))
                                    })
                                };
                                let icon = category.icon.clone().unwrap_or_else(|| category.initial());
                                view! {
                                    <a class="category-card" href=href>
                                        <span class="category-card__icon">{icon}</span>
                                        <span class="category-card__title">{category.title.clone()}</span>
                                        {category.description.clone().map(|d| view! {
                                            <span class="category-card__description">{d}</span>
                                        })}
                                        <span class="category-card__count">
                                            {move || match count() {
                                                Some(n) => format!("Всего: {}", n),
                                                None => "Всего: …".to_string(),
                                            }}
                                        </span>
                                    </a>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
