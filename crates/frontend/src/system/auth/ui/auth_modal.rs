use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::auth::api;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
enum SendStatus {
    Idle,
    Sending,
    Sent,
    Error(String),
}

/// Окно входа по ссылке из письма
#[component]
#[allow(non_snake_case)]
pub fn AuthModal() -> impl IntoView {
    let auth = use_auth();
    let email = RwSignal::new(String::new());
    let status = RwSignal::new(SendStatus::Idle);
    let sending = Signal::derive(move || status.get() == SendStatus::Sending);

    let submit = move |_| {
        let value = email.get_untracked().trim().to_string();
        if value.is_empty() || !value.contains('@') {
            status.set(SendStatus::Error("Введите корректный email".to_string()));
            return;
        }
        status.set(SendStatus::Sending);
        leptos::task::spawn_local(async move {
            match api::send_magic_link(&value).await {
                Ok(()) => status.set(SendStatus::Sent),
                Err(e) => {
                    log::warn!("Magic link request failed: {}", e);
                    status.set(SendStatus::Error(e));
                }
            }
        });
    };

    let close = move |_| {
        status.set(SendStatus::Idle);
        auth.close_modal();
    };

    view! {
        <div class="modal-overlay">
            <div class="modal auth-modal" role="dialog" aria-modal="true">
                <div class="modal__header">
                    <h2 class="modal__title">"Вход"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=close>
                        {icon("close")}
                    </Button>
                </div>

                {move || match status.get() {
                    SendStatus::Sent => view! {
                        <div class="auth-modal__sent">
                            {icon("mail")}
                            <p>{format!("Ссылка для входа отправлена на {}. Откройте письмо и перейдите по ссылке.", email.get_untracked())}</p>
                        </div>
                    }.into_any(),
                    other => view! {
                        <div class="auth-modal__form">
                            <p>"Укажите email, и мы пришлём ссылку для входа. Пароль не нужен."</p>
                            <Input
                                value=email
                                input_type=InputType::Email
                                placeholder="you@example.com"
                                disabled=sending
                            />
                            {match other {
                                SendStatus::Error(message) => Some(view! {
                                    <div class="auth-modal__error">{message}</div>
                                }),
                                _ => None,
                            }}
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=submit
                                disabled=sending
                            >
                                {move || if sending.get() { "Отправляем..." } else { "Получить ссылку" }}
                            </Button>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
