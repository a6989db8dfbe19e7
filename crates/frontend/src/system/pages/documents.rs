use leptos::prelude::*;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    view! {
        <div class="page documents-page">
            <h1 class="page__title">"Документы"</h1>
            <section>
                <h2>"Пользовательское соглашение"</h2>
                <p>
                    "OlympSearch собирает открытые сведения о мероприятиях с сайтов организаторов. "
                    "Актуальные условия участия и сроки всегда уточняйте на официальном сайте мероприятия."
                </p>
            </section>
            <section>
                <h2>"Персональные данные"</h2>
                <p>
                    "Для входа мы храним только ваш email. Он используется для отправки ссылки "
                    "на вход и для сохранения списка избранного."
                </p>
            </section>
        </div>
    }
}
