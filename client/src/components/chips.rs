//! Filter chip row shared by the gallery, vendors, and blog pages.

use leptos::prelude::*;

/// A single-select row of filter chips. The owning page holds the selected
/// value and hears changes through `on_select`.
#[component]
pub fn FilterChips(
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="chip-row" role="group">
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let is_active = {
                            let option = option.clone();
                            move || selected.get() == option
                        };
                        let choose = {
                            let option = option.clone();
                            move |_| on_select.run(option.clone())
                        };
                        view! {
                            <button
                                class="chip"
                                class:chip--active=is_active
                                on:click=choose
                            >
                                {option}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
