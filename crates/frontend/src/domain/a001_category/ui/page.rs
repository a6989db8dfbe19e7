use contracts::domain::a001_category::SEED_CATEGORIES;
use contracts::domain::a002_olympiad::Olympiad;
use contracts::shared::cache::SystemClock;
use contracts::shared::cancellation::CancellationSource;
use contracts::usecases::u501_resolve_category::{
    display_title_from_slug, search_within, single_search_hit, CategoryResolver, CategorySources,
};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::domain::a002_olympiad::api::HttpOlympiadSource;
use crate::domain::a002_olympiad::ui::card::OlympiadCard;
use crate::shared::catalog_context::use_catalog;
use crate::shared::icons::icon;

const LOADING_PLACEHOLDERS: usize = 6;

/// Страница категории `/category/:slug`
#[component]
#[allow(non_snake_case)]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let catalog = use_catalog();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let events = RwSignal::new(Vec::<Olympiad>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());

    let cancellation = CancellationSource::new();
    {
        let cancellation = cancellation.clone();
        on_cleanup(move || cancellation.cancel_all());
    }

    // Повторный запуск на смену slug и после загрузки списка категорий
    Effect::new(move |_| {
        let slug = params.read().get("slug").unwrap_or_default();
        title.set(display_title_from_slug(&slug));
        loading.set(true);
        search.set(String::new());
        if catalog.categories_loading.get() {
            return;
        }

        let live = catalog.categories.get();
        let cache = catalog.cache();
        let token = cancellation.issue();
        wasm_bindgen_futures::spawn_local(async move {
            let sources = CategorySources::new(&live, SEED_CATEGORIES.as_slice());
            let resolver = CategoryResolver::new(&HttpOlympiadSource, cache.as_ref(), &SystemClock);
            match resolver.resolve(&slug, &sources, &token).await {
                Ok(resolution) => {
                    log::info!(
                        "Category '{}' resolved via {:?}: {} events",
                        slug,
                        resolution.step,
                        resolution.matched_events.len()
                    );
                    title.set(resolution.display_title);
                    events.set(resolution.matched_events);
                    loading.set(false);
                }
                Err(_) => log::debug!("Resolution of '{}' superseded", slug),
            }
        });
    });

    let query = Memo::new(move |_| search.get().trim().to_string());
    let visible = Memo::new(move |_| events.with(|list| search_within(list, &query.get())));

    // Точное совпадение единственного результата открывает страницу мероприятия
    Effect::new(move |_| {
        let text = query.get();
        let target = events.with(|list| {
            single_search_hit(list, &text)
                .filter(|hit| hit.title.to_lowercase() == text.to_lowercase())
                .map(|hit| hit.slug.clone())
        });
        if let Some(slug) = target.filter(|s| !s.is_empty()) {
            navigate(&format!("/olympiad/{}", slug), Default::default());
        }
    });

    view! {
        <div class="page category-page">
            <a class="back-link" href="/">{icon("chevron-left")}"Все категории"</a>
            <h1 class="page__title">{move || title.get()}</h1>

            <div class="category-page__search">
                {icon("search")}
                <Input value=search placeholder="Поиск по названию..." />
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="olympiad-grid olympiad-grid--loading">
                            {(0..LOADING_PLACEHOLDERS).map(|_| view! {
                                <div class="olympiad-card olympiad-card--skeleton"></div>
                            }).collect_view()}
                        </div>
                    }.into_any()
                } else if visible.with(Vec::is_empty) {
                    view! {
                        <div class="empty-state">"В этой категории пока нет мероприятий"</div>
                    }.into_any()
                } else {
                    view! {
                        <div class="olympiad-grid">
                            <For
                                each=move || visible.get()
                                key=|o| o.id
                                children=|olympiad| view! { <OlympiadCard olympiad=olympiad /> }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
