use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::shared::catalog_context::use_catalog;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ApiStatus {
    Online,
    Offline,
    Checking,
}

impl ApiStatus {
    fn from_probe(probe: Option<bool>) -> Self {
        match probe {
            Some(true) => ApiStatus::Online,
            Some(false) => ApiStatus::Offline,
            None => ApiStatus::Checking,
        }
    }

    fn display_text(&self) -> &'static str {
        match self {
            ApiStatus::Online => "API: онлайн",
            ApiStatus::Offline => "API: недоступен",
            ApiStatus::Checking => "API: проверка...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ApiStatus::Online => "status-online",
            ApiStatus::Offline => "status-offline",
            ApiStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let catalog = use_catalog();
    let status = move || ApiStatus::from_probe(catalog.api_online.get());
    let year = Utc::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__about">
                <span class="footer__brand">"OlympSearch"</span>
                <p>"Каталог олимпиад, хакатонов, конкурсов и стажировок для школьников и студентов."</p>
            </div>
            <nav class="footer__links">
                <a href="/documents">"Документы"</a>
                <a href="/feedback">"Обратная связь"</a>
            </nav>
            <div class="footer__bottom">
                <span>{format!("© {} OlympSearch", year)}</span>
                <span class=move || status().css_class()>
                    {move || status().display_text()}
                </span>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_probe() {
        assert_eq!(ApiStatus::from_probe(None), ApiStatus::Checking);
        assert_eq!(ApiStatus::from_probe(Some(true)), ApiStatus::Online);
        assert_eq!(ApiStatus::from_probe(Some(false)).css_class(), "status-offline");
    }
}
