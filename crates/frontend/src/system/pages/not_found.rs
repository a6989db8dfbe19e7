use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1 class="page__title">"404"</h1>
            <p>"Такой страницы нет."</p>
            <a class="button button--primary" href="/">"На главную"</a>
        </div>
    }
}
