//! Contact page: consultation request form, contact sidebar, and the
//! consultation-style section.
//!
//! DESIGN
//! ======
//! The form edits one `InquiryDraft` signal field by field. Submission
//! validates locally first, posts to the server, and on success resets the
//! draft and raises the confirmation toast. Server rejections (validation,
//! rate limit) surface inline above the submit button.

use leptos::prelude::*;

use catalog::{InquiryDraft, inquiry};

use crate::components::faq_list::FaqList;
use crate::state::{content::ContentState, ui::UiState};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Toast shown after a successful submission.
const SUBMITTED_TITLE: &str = "Consultation Request Submitted!";
const SUBMITTED_BODY: &str =
    "We'll get back to you within 24 hours to schedule your consultation.";

/// Apply a checkbox change to the draft's service list, keeping it
/// duplicate-free and in tick order.
fn toggle_service(services: &mut Vec<String>, service: &str, checked: bool) {
    if checked {
        if !services.iter().any(|s| s == service) {
            services.push(service.to_owned());
        }
    } else {
        services.retain(|s| s != service);
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let draft = RwSignal::new(InquiryDraft::default());
    let busy = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let site = move || {
        content.with(|c| c.content.as_ref().map(|c| c.site.clone()).unwrap_or_default())
    };
    let quick_faqs = Signal::derive(move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| c.faqs.contact.iter().take(3).cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        if let Err(error) = inquiry::validate(&current) {
            form_error.set(Some(error.to_string()));
            return;
        }
        form_error.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_inquiry(&current).await {
                Ok(()) => {
                    draft.set(InquiryDraft::default());
                    ui.update(|state| state.show_toast(SUBMITTED_TITLE, SUBMITTED_BODY));
                }
                Err(message) => form_error.set(Some(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ui;
            busy.set(false);
        }
    };

    view! {
        <div class="page contact-page">
            <section class="page-hero">
                <h1 class="page-hero__title">"Let's Plan Your Dream Wedding"</h1>
                <p class="page-hero__lead">
                    "Ready to start planning your perfect day? We'd love to hear about your vision and how we can bring it to life."
                </p>
            </section>

            <div class="contact-page__layout">
                <form class="inquiry-form" on:submit=submit>
                    <h2 class="inquiry-form__title">"Schedule Your Consultation"</h2>
                    <p class="inquiry-form__lead">
                        "Tell us about your dream wedding and we'll create a custom plan just for you."
                    </p>

                    <div class="inquiry-form__row">
                        <label class="form-field">
                            <span class="form-field__label">"Name *"</span>
                            <input
                                class="text-input"
                                type="text"
                                placeholder="Your full name"
                                prop:value=move || draft.get().name
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Email *"</span>
                            <input
                                class="text-input"
                                type="email"
                                placeholder="your@email.com"
                                prop:value=move || draft.get().email
                                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="inquiry-form__row">
                        <label class="form-field">
                            <span class="form-field__label">"Phone"</span>
                            <input
                                class="text-input"
                                type="tel"
                                placeholder="(555) 123-4567"
                                prop:value=move || draft.get().phone
                                on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Wedding Date"</span>
                            <input
                                class="text-input"
                                type="date"
                                prop:value=move || draft.get().wedding_date
                                on:input=move |ev| draft.update(|d| d.wedding_date = event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="inquiry-form__row">
                        <label class="form-field">
                            <span class="form-field__label">"Venue (if selected)"</span>
                            <input
                                class="text-input"
                                type="text"
                                placeholder="Venue name or location"
                                prop:value=move || draft.get().venue
                                on:input=move |ev| draft.update(|d| d.venue = event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-field__label">"Budget Range"</span>
                            <select
                                class="select-input"
                                prop:value=move || draft.get().budget
                                on:change=move |ev| draft.update(|d| d.budget = event_target_value(&ev))
                            >
                                <option value="">"Select budget range"</option>
                                {move || {
                                    site()
                                        .budget_ranges
                                        .into_iter()
                                        .map(|range| view! { <option value=range.clone()>{range.clone()}</option> })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>
                    </div>

                    <fieldset class="form-field form-field--group">
                        <legend class="form-field__label">"Services Interested In"</legend>
                        <div class="inquiry-form__services">
                            {move || {
                                site()
                                    .service_options
                                    .into_iter()
                                    .map(|service| {
                                        let checked = {
                                            let service = service.clone();
                                            move || draft.get().services.contains(&service)
                                        };
                                        let change = {
                                            let service = service.clone();
                                            move |ev: leptos::ev::Event| {
                                                let on = event_target_checked(&ev);
                                                draft.update(|d| toggle_service(&mut d.services, &service, on));
                                            }
                                        };
                                        view! {
                                            <label class="checkbox-field">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=checked
                                                    on:change=change
                                                />
                                                <span>{service}</span>
                                            </label>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </fieldset>

                    <label class="form-field">
                        <span class="form-field__label">"Cultural/Religious Considerations"</span>
                        <textarea
                            class="text-input"
                            rows="3"
                            placeholder="Tell us about any cultural traditions or religious ceremonies you'd like to incorporate"
                            prop:value=move || draft.get().cultural_notes
                            on:input=move |ev| draft.update(|d| d.cultural_notes = event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="form-field">
                        <span class="form-field__label">"How did you hear about us?"</span>
                        <select
                            class="select-input"
                            prop:value=move || draft.get().referral_source
                            on:change=move |ev| draft.update(|d| d.referral_source = event_target_value(&ev))
                        >
                            <option value="">"Select source"</option>
                            {move || {
                                site()
                                    .referral_sources
                                    .into_iter()
                                    .map(|source| view! { <option value=source.clone()>{source.clone()}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>

                    <label class="form-field">
                        <span class="form-field__label">"Tell us about your dream wedding"</span>
                        <textarea
                            class="text-input"
                            rows="5"
                            placeholder="Share your vision, style preferences, must-haves, and any questions you have..."
                            prop:value=move || draft.get().message
                            on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                        ></textarea>
                    </label>

                    <Show when=move || form_error.get().is_some()>
                        <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>

                    <button class="btn btn--primary inquiry-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Schedule Free Consultation" }}
                    </button>
                </form>

                <aside class="contact-page__sidebar">
                    <div class="sidebar-card">
                        <h3 class="sidebar-card__title">"Contact Information"</h3>
                        <dl class="contact-details">
                            <dt>"Phone"</dt>
                            <dd>{move || site().contact.phone}</dd>
                            <dt>"Email"</dt>
                            <dd>{move || site().contact.email}</dd>
                            <dt>"Office"</dt>
                            <dd>{move || site().contact.address}</dd>
                            <dt>"Business Hours"</dt>
                            <dd>
                                {move || {
                                    site()
                                        .contact
                                        .hours
                                        .into_iter()
                                        .map(|line| view! { <span class="contact-details__line">{line}</span> })
                                        .collect::<Vec<_>>()
                                }}
                            </dd>
                        </dl>
                    </div>

                    <div class="sidebar-card">
                        <h3 class="sidebar-card__title">"Quick FAQ"</h3>
                        <FaqList faqs=quick_faqs/>
                    </div>
                </aside>
            </div>

            <section class="contact-page__consultations">
                <h2 class="section-title">"Choose Your Consultation Style"</h2>
                <p class="section-lead">
                    "We offer flexible consultation options to fit your schedule and preference"
                </p>
                <div class="card-grid card-grid--consultations">
                    <div class="consultation-card">
                        <h3 class="consultation-card__title">"Virtual Consultation"</h3>
                        <p class="consultation-card__blurb">
                            "Connect with us from the comfort of your home via video call. Perfect for initial discussions and planning sessions."
                        </p>
                        <ul class="consultation-card__points">
                            <li>"45-60 minute session"</li>
                            <li>"Screen sharing capabilities"</li>
                            <li>"Digital planning materials"</li>
                        </ul>
                    </div>
                    <div class="consultation-card">
                        <h3 class="consultation-card__title">"In-Person Meeting"</h3>
                        <p class="consultation-card__blurb">
                            "Visit our beautiful office or we can meet at your chosen venue. Ideal for detailed planning and material reviews."
                        </p>
                        <ul class="consultation-card__points">
                            <li>"60-90 minute session"</li>
                            <li>"Physical inspiration boards"</li>
                            <li>"Venue visit available"</li>
                        </ul>
                    </div>
                </div>
            </section>
        </div>
    }
}
