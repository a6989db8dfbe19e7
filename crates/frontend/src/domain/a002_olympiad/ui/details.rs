use contracts::domain::a002_olympiad::Olympiad;
use contracts::shared::cancellation::CancellationSource;
use contracts::usecases::u501_resolve_category::find_by_slug;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::shared::catalog_context::use_catalog;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;

#[derive(Clone, PartialEq)]
enum DetailsState {
    Loading,
    Found(Olympiad),
    NotFound,
}

#[component]
#[allow(non_snake_case)]
pub fn OlympiadDetails() -> impl IntoView {
    let params = use_params_map();
    let catalog = use_catalog();
    let state = RwSignal::new(DetailsState::Loading);

    let cancellation = CancellationSource::new();
    {
        let cancellation = cancellation.clone();
        on_cleanup(move || cancellation.cancel_all());
    }

    Effect::new(move |_| {
        let slug = params.read().get("slug").unwrap_or_default();
        state.set(DetailsState::Loading);
        let token = cancellation.issue();
        wasm_bindgen_futures::spawn_local(async move {
            let events = catalog.all_events().await.unwrap_or_default();
            if token.is_cancelled() {
                return;
            }
            let found = find_by_slug(events, &slug);
            state.set(match found {
                Some(olympiad) => DetailsState::Found(olympiad),
                None => DetailsState::NotFound,
            });
        });
    });

    view! {
        <div class="page olympiad-details">
            <a class="back-link" href="/">{icon("chevron-left")}"На главную"</a>
            {move || match state.get() {
                DetailsState::Loading => view! { <Spinner label="Загрузка..." /> }.into_any(),
                DetailsState::NotFound => view! {
                    <div class="empty-state">"Мероприятие не найдено"</div>
                }.into_any(),
                DetailsState::Found(o) => details_view(o).into_any(),
            }}
        </div>
    }
}

fn details_view(o: Olympiad) -> impl IntoView {
    let row = |label: &'static str, value: String| {
        view! {
            <div class="details-row">
                <span class="details-row__label">{label}</span>
                <span class="details-row__value">{value}</span>
            </div>
        }
    };
    let team = match o.is_team {
        Some(true) => "Командное",
        Some(false) => "Индивидуальное",
        None => "—",
    };

    view! {
        <h1 class="olympiad-details__title">{o.title.clone()}</h1>
        {o.description.clone().map(|d| view! { <p class="olympiad-details__description">{d}</p> })}
        <div class="olympiad-details__grid">
            {row("Уровень", o.level.clone().unwrap_or_else(|| "—".to_string()))}
            {row("Предметы", if o.subjects.is_empty() { "—".to_string() } else { o.subjects.join(", ") })}
            {row("Формат", team.to_string())}
            {row("Начало", format_optional_date(o.start_date.as_deref()))}
            {row("Окончание", format_optional_date(o.end_date.as_deref()))}
            {row("Регистрация до", format_optional_date(o.registration_deadline.as_deref()))}
            {row("Призы", o.prize.clone().unwrap_or_else(|| "—".to_string()))}
        </div>
        {o.source_url.clone().map(|url| view! {
            <a class="button button--primary" href=url target="_blank" rel="noopener noreferrer">
                {icon("link")}
                "Сайт мероприятия"
            </a>
        })}
    }
}
