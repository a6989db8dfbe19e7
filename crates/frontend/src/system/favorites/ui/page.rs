use leptos::prelude::*;
use thaw::*;

use contracts::domain::a002_olympiad::Olympiad;

use crate::domain::a002_olympiad::ui::card::OlympiadCard;
use crate::shared::catalog_context::use_catalog;
use crate::system::auth::guard::RequireAuth;
use crate::system::favorites::context::use_favorites;

#[component]
#[allow(non_snake_case)]
pub fn FavoritesPage() -> impl IntoView {
    view! {
        <div class="page favorites-page">
            <h1 class="page__title">"Избранное"</h1>
            <RequireAuth>
                <FavoritesList />
            </RequireAuth>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn FavoritesList() -> impl IntoView {
    let favorites = use_favorites();
    let catalog = use_catalog();

    // Записи без вложенного мероприятия дополняются из общего списка
    let all_events = RwSignal::new(Vec::<Olympiad>::new());
    leptos::task::spawn_local(async move {
        if let Some(list) = catalog.all_events().await {
            all_events.set(list);
        }
    });

    let events = Memo::new(move |_| {
        favorites.items.with(|items| {
            items
                .iter()
                .filter_map(|f| {
                    f.olympiad.clone().or_else(|| {
                        all_events.with(|all| all.iter().find(|o| o.id == f.olympiad_id).cloned())
                    })
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        {move || favorites.error.get().map(|e| view! {
            <div class="warning-box">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}
        {move || {
            if favorites.loading.get() && events.with(Vec::is_empty) {
                view! { <Spinner label="Загрузка..." /> }.into_any()
            } else if events.with(Vec::is_empty) {
                view! {
                    <div class="empty-state">
                        "Здесь пока пусто. Отмечайте мероприятия звёздочкой, чтобы вернуться к ним позже."
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="olympiad-grid">
                        <For
                            each=move || events.get()
                            key=|o| o.id
                            children=|olympiad| view! { <OlympiadCard olympiad=olympiad /> }
                        />
                    </div>
                }.into_any()
            }
        }}
    }
}
