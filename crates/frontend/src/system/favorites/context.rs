use contracts::system::favorites::{favorite_ids, Favorite, FavoritesError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;

use super::api;
use crate::system::auth::context::{use_auth, AuthContext};

/// Избранное текущего пользователя
#[derive(Clone, Copy)]
pub struct FavoritesContext {
    pub items: RwSignal<Vec<Favorite>>,
    pub ids: RwSignal<BTreeSet<i64>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    auth: AuthContext,
}

impl FavoritesContext {
    fn clear(&self) {
        self.items.set(Vec::new());
        self.ids.set(BTreeSet::new());
        self.error.set(None);
    }

    fn handle_error(&self, error: FavoritesError) {
        match error {
            FavoritesError::NotAuthenticated => {
                log::info!("Favorites request unauthorized, signing out");
                self.clear();
                self.auth.sign_out();
            }
            FavoritesError::Request(message) => {
                log::warn!("{}", message);
                self.error.set(Some(message));
            }
        }
    }

    pub fn refresh(&self) {
        let this = *self;
        let Some(bearer) = this.auth.bearer_untracked() else {
            this.clear();
            return;
        };
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_favorites(&bearer).await {
                Ok(list) => {
                    this.ids.set(favorite_ids(&list));
                    this.items.set(list);
                    this.error.set(None);
                }
                Err(e) => this.handle_error(e),
            }
            this.loading.set(false);
        });
    }

    /// Добавить или убрать мероприятие; отметка меняется сразу и
    /// откатывается, если запрос не прошёл
    pub fn toggle(&self, olympiad_id: i64) {
        let this = *self;
        let Some(bearer) = this.auth.bearer_untracked() else {
            this.auth.open_modal();
            return;
        };
        let was_favorite = this.ids.with_untracked(|ids| ids.contains(&olympiad_id));
        this.ids.update(|ids| {
            if was_favorite {
                ids.remove(&olympiad_id);
            } else {
                ids.insert(olympiad_id);
            }
        });

        spawn_local(async move {
            let result = if was_favorite {
                api::remove_favorite(&bearer, olympiad_id).await
            } else {
                api::add_favorite(&bearer, olympiad_id).await
            };
            match result {
                Ok(()) => this.refresh(),
                Err(e) => {
                    this.ids.update(|ids| {
                        if was_favorite {
                            ids.insert(olympiad_id);
                        } else {
                            ids.remove(&olympiad_id);
                        }
                    });
                    this.handle_error(e);
                }
            }
        });
    }
}

#[component]
pub fn FavoritesProvider(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let favorites = FavoritesContext {
        items: RwSignal::new(Vec::new()),
        ids: RwSignal::new(BTreeSet::new()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
        auth,
    };
    provide_context(favorites);

    // Перезагрузка при входе и выходе
    Effect::new(move |_| {
        let signed_in = auth.is_signed_in();
        if signed_in {
            favorites.refresh();
        } else {
            favorites.clear();
        }
    });

    children()
}

pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>().expect("FavoritesProvider not found in component tree")
}
