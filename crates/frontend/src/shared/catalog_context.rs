use contracts::domain::a001_category::Category;
use contracts::domain::a002_olympiad::Olympiad;
use contracts::shared::cache::SystemClock;
use contracts::usecases::u501_resolve_category::{load_all_events, AllEventsCache};
use leptos::prelude::*;
use std::sync::Arc;

use crate::domain::a001_category::api::fetch_categories;
use crate::domain::a002_olympiad::api::HttpOlympiadSource;

/// Общие данные каталога: список категорий и кэш полного списка мероприятий
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub categories: RwSignal<Vec<Category>>,
    /// true, пока список категорий не загружен (успешно или нет)
    pub categories_loading: RwSignal<bool>,
    /// Ответил ли API на последний запрос категорий; `None` до первого ответа
    pub api_online: RwSignal<Option<bool>>,
    cache: StoredValue<Arc<AllEventsCache>>,
}

impl CatalogContext {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(Vec::new()),
            categories_loading: RwSignal::new(true),
            api_online: RwSignal::new(None),
            cache: StoredValue::new(Arc::new(AllEventsCache::for_all_events())),
        }
    }

    pub fn cache(&self) -> Arc<AllEventsCache> {
        self.cache.get_value()
    }

    pub fn load_categories(&self) {
        let this = *self;
        this.categories_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_categories().await {
                Ok(list) => {
                    log::debug!("Loaded {} categories", list.len());
                    this.categories.set(list);
                    this.api_online.set(Some(true));
                }
                Err(e) => {
                    log::warn!("Categories unavailable: {}", e);
                    this.categories.set(Vec::new());
                    this.api_online.set(Some(false));
                }
            }
            this.categories_loading.set(false);
        });
    }

    /// Полный список мероприятий по общему с резолвером кэшу
    pub async fn all_events(&self) -> Option<Vec<Olympiad>> {
        let cache = self.cache();
        load_all_events(&HttpOlympiadSource, cache.as_ref(), &SystemClock).await
    }
}

impl Default for CatalogContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext not found")
}
