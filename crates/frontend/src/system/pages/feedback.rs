use leptos::prelude::*;
use thaw::*;

/// Форма обратной связи. Сообщение никуда не отправляется, только подтверждается.
#[component]
#[allow(non_snake_case)]
pub fn FeedbackPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let can_send = Signal::derive(move || !message.get().trim().is_empty());
    let submit = move |_| {
        if !can_send.get_untracked() {
            return;
        }
        log::info!("Feedback submitted ({} chars)", message.get_untracked().len());
        sent.set(true);
    };
    let write_again = move |_| {
        message.set(String::new());
        sent.set(false);
    };

    view! {
        <div class="page feedback-page">
            <h1 class="page__title">"Обратная связь"</h1>
            <Show
                when=move || sent.get()
                fallback=move || view! {
                    <div class="form">
                        <div class="form__group">
                            <Label>"Email для ответа"</Label>
                            <Input value=email input_type=InputType::Email placeholder="you@example.com" />
                        </div>
                        <div class="form__group">
                            <Label>"Сообщение"</Label>
                            <Textarea value=message placeholder="Расскажите, что можно улучшить..." attr:rows=6 />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=Signal::derive(move || !can_send.get())
                        >
                            "Отправить"
                        </Button>
                    </div>
                }
            >
                <div class="feedback-page__sent">
                    <p>"Спасибо! Мы получили ваше сообщение."</p>
                    <Button appearance=ButtonAppearance::Secondary on_click=write_again>
                        "Написать ещё"
                    </Button>
                </div>
            </Show>
        </div>
    }
}
