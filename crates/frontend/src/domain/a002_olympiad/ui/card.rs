use chrono::Utc;
use contracts::domain::a002_olympiad::Olympiad;
use leptos::prelude::*;

use crate::shared::date_utils::deadline_label;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::favorites::context::use_favorites;

/// Карточка мероприятия в сетке
#[component]
#[allow(non_snake_case)]
pub fn OlympiadCard(olympiad: Olympiad) -> impl IntoView {
    let (subjects, rest) = olympiad.subjects_preview();
    let subjects = subjects.to_vec();
    let deadline = olympiad
        .deadline_date()
        .map(|date| deadline_label(date, Utc::now()));
    let initial = olympiad
        .title
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let details_href = format!("/olympiad/{}", olympiad.slug);

    view! {
        <article class="olympiad-card">
            <div class="olympiad-card__header">
                {match olympiad.logo_url.clone() {
                    Some(src) => view! {
                        <img class="olympiad-card__logo" src=src alt=olympiad.title.clone() />
                    }.into_any(),
                    None => view! {
                        <div class="olympiad-card__logo olympiad-card__logo--placeholder">{initial}</div>
                    }.into_any(),
                }}
                <FavoriteToggle olympiad_id=olympiad.id />
            </div>

            <a class="olympiad-card__title" href=details_href>{olympiad.title.clone()}</a>

            <div class="olympiad-card__subjects">
                {subjects.into_iter().map(|s| view! {
                    <span class="chip">{s}</span>
                }).collect_view()}
                {(rest > 0).then(|| view! {
                    <span class="chip chip--muted">{format!("+{}", rest)}</span>
                })}
            </div>

            {olympiad.prize.clone().filter(|p| !p.trim().is_empty()).map(|prize| view! {
                <div class="olympiad-card__prize">
                    {icon("trophy")}
                    <span>{prize}</span>
                </div>
            })}

            {deadline.map(|label| view! {
                <div class="olympiad-card__deadline">{label}</div>
            })}

            {olympiad.source_url.clone().map(|url| view! {
                <a class="olympiad-card__link" href=url target="_blank" rel="noopener noreferrer">
                    {icon("link")}
                    "Перейти на сайт"
                </a>
            })}
        </article>
    }
}

/// Звёздочка избранного; видна только после входа
#[component]
#[allow(non_snake_case)]
fn FavoriteToggle(olympiad_id: i64) -> impl IntoView {
    let auth = use_auth();
    let favorites = use_favorites();
    let is_favorite = move || favorites.ids.with(|ids| ids.contains(&olympiad_id));

    view! {
        <Show when=move || auth.is_signed_in()>
            <button
                class=move || {
                    if is_favorite() {
                        "olympiad-card__favorite olympiad-card__favorite--active"
                    } else {
                        "olympiad-card__favorite"
                    }
                }
                title=move || if is_favorite() { "Убрать из избранного" } else { "В избранное" }
                on:click=move |_| favorites.toggle(olympiad_id)
            >
                {move || if is_favorite() { icon("star-filled") } else { icon("star") }}
            </button>
        </Show>
    }
}
