//! Accordion list of question/answer pairs.

use leptos::prelude::*;

use catalog::Faq;

#[cfg(test)]
#[path = "faq_list_test.rs"]
mod faq_list_test;

/// Next open entry after clicking `index`: clicking the open entry closes
/// it, clicking any other entry moves the open slot there.
fn toggle_open(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) { None } else { Some(index) }
}

/// Single-open accordion. At most one answer is expanded at a time.
#[component]
pub fn FaqList(#[prop(into)] faqs: Signal<Vec<Faq>>) -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <div class="faq-list">
            {move || {
                faqs.get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, faq)| {
                        let is_open = move || open.get() == Some(index);
                        let toggle = move |_| open.update(|o| *o = toggle_open(*o, index));
                        view! {
                            <div class="faq-item" class:faq-item--open=is_open>
                                <button class="faq-item__question" on:click=toggle>
                                    <span>{faq.question}</span>
                                    <span class="faq-item__marker" aria-hidden="true">
                                        {move || if is_open() { "−" } else { "+" }}
                                    </span>
                                </button>
                                <Show when=is_open>
                                    <p class="faq-item__answer">{faq.answer.clone()}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
