//! Corner toast overlay for form confirmations.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// How long a toast stays up without interaction.
#[cfg(feature = "hydrate")]
const TOAST_SECONDS: u64 = 5;

/// Renders the active toast, if any, and schedules its auto-dismiss.
///
/// Each shown toast bumps `toast_seq`; the sleep task captures that value
/// and only dismisses if its toast is still the one on screen.
#[component]
pub fn Toast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let last_scheduled = RwSignal::new(0_u64);
        Effect::new(move || {
            let (seq, visible) = ui.with(|state| (state.toast_seq, state.toast.is_some()));
            if !visible || last_scheduled.get_untracked() == seq {
                return;
            }
            last_scheduled.set(seq);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_SECONDS)).await;
                ui.update(|state| state.dismiss_toast_if_current(seq));
            });
        });
    }

    view! {
        <Show when=move || ui.get().toast.is_some()>
            <div class="toast" role="status">
                <div class="toast__text">
                    <span class="toast__title">
                        {move || ui.get().toast.map(|t| t.title).unwrap_or_default()}
                    </span>
                    <span class="toast__body">
                        {move || ui.get().toast.map(|t| t.body).unwrap_or_default()}
                    </span>
                </div>
                <button
                    class="toast__close"
                    aria-label="Dismiss notification"
                    on:click=move |_| ui.update(UiState::dismiss_toast)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
