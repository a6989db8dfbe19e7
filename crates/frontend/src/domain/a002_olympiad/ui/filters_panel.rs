use contracts::shared::filters::{filter_subjects, FilterState, SortOrder};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_olympiad::api::fetch_subjects;
use crate::shared::icons::icon;

/// Кнопка фильтров с выпадающей панелью.
///
/// Правки копятся в черновике и попадают в `filters` только по "Применить".
/// "Сбросить" очищает и черновик, и применённые фильтры, затем закрывает панель.
#[component]
#[allow(non_snake_case)]
pub fn FiltersPanel(filters: RwSignal<FilterState>) -> impl IntoView {
    let open = RwSignal::new(false);
    let draft = RwSignal::new(filters.get_untracked());
    let subjects = RwSignal::new(Vec::<String>::new());
    let subjects_error = RwSignal::new(None::<String>);
    let subject_search = RwSignal::new(String::new());

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_subjects().await {
            Ok(list) => subjects.set(list),
            Err(e) => {
                log::warn!("{}", e);
                subjects_error.set(Some(e));
            }
        }
    });

    let toggle_open = move |_| {
        if !open.get_untracked() {
            draft.set(filters.get_untracked());
            subject_search.set(String::new());
        }
        open.update(|o| *o = !*o);
    };
    let apply = move |_| {
        filters.set(draft.get_untracked());
        open.set(false);
    };
    let reset = move |_| {
        draft.update(FilterState::reset);
        filters.update(FilterState::reset);
        open.set(false);
    };
    let cancel = move |_| open.set(false);

    let visible_subjects =
        Memo::new(move |_| subjects.with(|all| filter_subjects(all, &subject_search.get())));

    view! {
        <div class="filters">
            <button class="filters__toggle" on:click=toggle_open>
                {icon("filter")}
                "Фильтры"
                {move || {
                    let count = filters.with(FilterState::active_count);
                    (count > 0).then(|| view! { <span class="filters__badge">{count}</span> })
                }}
            </button>

            <Show when=move || open.get()>
                <div class="filters__panel">
                    <div class="filters__section">
                        <div class="filters__title">"Предметы"</div>
                        <Input value=subject_search placeholder="Найти предмет..." />
                        {move || subjects_error.get().map(|_| view! {
                            <div class="filters__hint">"Список предметов недоступен"</div>
                        })}
                        <div class="filters__subjects">
                            <For
                                each=move || visible_subjects.get()
                                key=|s| s.clone()
                                children=move |subject| {
                                    let name = subject.clone();
                                    let checked = {
                                        let name = name.clone();
                                        move || draft.with(|d| d.subjects.contains(&name))
                                    };
                                    view! {
                                        <label class="filters__option">
                                            <input
                                                type="checkbox"
                                                prop:checked=checked
                                                on:change=move |_| draft.update(|d| d.toggle_subject(&name))
                                            />
                                            <span>{subject}</span>
                                        </label>
                                    }
                                }
                            />
                        </div>
                    </div>

                    <div class="filters__section">
                        <label class="filters__option">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.with(|d| d.has_prize)
                                on:change=move |_| draft.update(|d| d.has_prize = !d.has_prize)
                            />
                            <span>"Есть призы"</span>
                        </label>
                        <label class="filters__option">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.with(|d| d.deadline_soon)
                                on:change=move |_| draft.update(|d| d.deadline_soon = !d.deadline_soon)
                            />
                            <span>"Дедлайн в ближайшие 2 недели"</span>
                        </label>
                    </div>

                    <div class="filters__section">
                        <div class="filters__title">"Сортировка"</div>
                        <select
                            class="filters__select"
                            prop:value=move || draft.with(|d| d.sort.as_str())
                            on:change=move |ev| {
                                let sort = SortOrder::from_str(&event_target_value(&ev));
                                draft.update(|d| d.sort = sort);
                            }
                        >
                            {SortOrder::all().into_iter().map(|s| view! {
                                <option value=s.as_str()>{s.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="filters__actions">
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=reset
                            disabled=Signal::derive(move || draft.with(FilterState::is_default))
                        >
                            "Сбросить"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=cancel>
                            "Отмена"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=apply>
                            "Применить"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
