use contracts::domain::a001_category::count_by_category;
use contracts::domain::a002_olympiad::Olympiad;
use contracts::shared::cancellation::CancellationSource;
use contracts::shared::filters::FilterState;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::ui::grid::CategoryGrid;
use crate::domain::a002_olympiad::api::fetch_filtered;
use crate::domain::a002_olympiad::ui::card::OlympiadCard;
use crate::domain::a002_olympiad::ui::filters_panel::FiltersPanel;
use crate::shared::catalog_context::use_catalog;
use crate::shared::icons::icon;
use crate::shared::{storage, url_state};

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Clone, PartialEq)]
enum Results {
    Idle,
    Loading,
    Loaded(Vec<Olympiad>),
    Failed,
}

/// Главная: поиск, фильтры и сетка категорий
#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    let catalog = use_catalog();

    let search = RwSignal::new(url_state::read_search_text());
    let committed_search = RwSignal::new(search.get_untracked().trim().to_string());
    let filters = RwSignal::new(storage::load_filters());
    let results = RwSignal::new(Results::Idle);
    let all_events = RwSignal::new(None::<Vec<Olympiad>>);

    let debounce = CancellationSource::new();
    let requests = CancellationSource::new();
    {
        let (debounce, requests) = (debounce.clone(), requests.clone());
        on_cleanup(move || {
            debounce.cancel_all();
            requests.cancel_all();
        });
    }

    spawn_local(async move {
        all_events.set(Some(catalog.all_events().await.unwrap_or_default()));
    });

    let counts = Signal::derive(move || {
        all_events.with(|events| {
            events
                .as_ref()
                .map(|events| catalog.categories.with(|c| count_by_category(events, c)))
        })
    });

    // Строка поиска попадает в адрес и в запрос с задержкой
    Effect::new(move |_| {
        let text = search.get().trim().to_string();
        let token = debounce.issue();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if token.is_cancelled() {
                return;
            }
            url_state::write_search_text(&text);
            committed_search.set(text);
        });
    });

    Effect::new(move |_| {
        filters.with(storage::save_filters);
    });

    Effect::new(move |_| {
        let text = committed_search.get();
        let state = filters.get();
        let token = requests.issue();
        if text.is_empty() && state.is_default() {
            results.set(Results::Idle);
            return;
        }

        results.set(Results::Loading);
        let query = state.to_query(&text);
        spawn_local(async move {
            let outcome = fetch_filtered(&query).await;
            if token.is_cancelled() {
                return;
            }
            match outcome {
                Ok(list) => results.set(Results::Loaded(list)),
                Err(e) => {
                    log::warn!("Filtered listing failed: {}", e);
                    results.set(Results::Failed);
                }
            }
        });
    });

    let reset_all = move |_| {
        search.set(String::new());
        filters.update(FilterState::reset);
    };

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero__title">"Олимпиады, хакатоны и конкурсы в одном месте"</h1>
                <p class="hero__subtitle">"Находите мероприятия по интересам и не пропускайте дедлайны регистрации."</p>
                <div class="hero__search">
                    {icon("search")}
                    <Input value=search placeholder="Название мероприятия..." />
                    <FiltersPanel filters=filters />
                </div>
            </section>

            {move || match results.get() {
                Results::Idle => view! { <CategoryGrid counts=counts /> }.into_any(),
                Results::Loading => view! { <Spinner label="Ищем мероприятия..." /> }.into_any(),
                Results::Failed => view! {
                    <div class="empty-state">"Не удалось загрузить мероприятия. Попробуйте позже."</div>
                }.into_any(),
                Results::Loaded(list) if list.is_empty() => view! {
                    <div class="empty-state">
                        <p>"Ничего не найдено"</p>
                        <Button appearance=ButtonAppearance::Secondary on_click=reset_all>
                            "Сбросить поиск и фильтры"
                        </Button>
                    </div>
                }.into_any(),
                Results::Loaded(list) => view! {
                    <section class="results">
                        <div class="results__count">{format!("Найдено: {}", list.len())}</div>
                        <div class="olympiad-grid">
                            {list.into_iter().map(|olympiad| view! {
                                <OlympiadCard olympiad=olympiad />
                            }).collect_view()}
                        </div>
                    </section>
                }.into_any(),
            }}
        </div>
    }
}
