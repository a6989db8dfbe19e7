use leptos::prelude::*;

use crate::system::auth::ui::auth_button::AuthButton;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a class="header__title" href="/">"OlympSearch"</a>
            </div>
            <div class="header__actions">
                <AuthButton />
            </div>
        </header>
    }
}
