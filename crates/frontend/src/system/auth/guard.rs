use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires authentication
/// Shows a sign-in prompt if not authenticated
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_signed_in()
            fallback=move || {
                if auth.restoring.get() {
                    view! { <div class="empty-state">"Проверяем вход..."</div> }.into_any()
                } else {
                    view! {
                        <div class="empty-state">
                            <p>"Войдите, чтобы увидеть этот раздел."</p>
                            <button class="button button--primary" on:click=move |_| auth.open_modal()>
                                "Войти"
                            </button>
                        </div>
                    }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}
