use leptos::prelude::*;

use super::auth_modal::AuthModal;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Кнопка входа в шапке или аватар с меню после входа
#[component]
#[allow(non_snake_case)]
pub fn AuthButton() -> impl IntoView {
    let auth = use_auth();
    let menu_open = RwSignal::new(false);

    let initials = move || auth.user().map(|u| u.initials()).unwrap_or_default();
    let display_name = move || auth.user().map(|u| u.display_name()).unwrap_or_default();

    view! {
        <div class="auth-button">
            <Show
                when=move || auth.is_signed_in()
                fallback=move || view! {
                    <button
                        class="button button--primary"
                        disabled=move || auth.restoring.get()
                        on:click=move |_| auth.open_modal()
                    >
                        {icon("user")}
                        "Войти"
                    </button>
                }
            >
                <button
                    class="auth-button__avatar"
                    title=display_name
                    on:click=move |_| menu_open.update(|o| *o = !*o)
                >
                    {initials}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="auth-button__menu">
                        <div class="auth-button__name">{display_name}</div>
                        <a href="/favorites" on:click=move |_| menu_open.set(false)>
                            {icon("star")}
                            "Избранное"
                        </a>
                        <button
                            class="button button--ghost"
                            on:click=move |_| {
                                menu_open.set(false);
                                auth.sign_out();
                            }
                        >
                            "Выйти"
                        </button>
                    </div>
                </Show>
            </Show>

            <Show when=move || auth.modal_open.get()>
                <AuthModal />
            </Show>
        </div>
    }
}
