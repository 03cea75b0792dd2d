//! Services page: planning packages, cultural specialties, and the FAQ.

use leptos::prelude::*;

use crate::components::faq_list::FaqList;
use crate::state::content::ContentState;
use crate::util::assets::image_url;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    let packages = move || {
        content.with(|c| c.content.as_ref().map(|c| c.services.clone()).unwrap_or_default())
    };
    let specialties = move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| c.site.cultural_specialties.clone())
                .unwrap_or_default()
        })
    };
    let faqs = Signal::derive(move || {
        content.with(|c| c.content.as_ref().map(|c| c.faqs.services.clone()).unwrap_or_default())
    });

    view! {
        <div class="page services-page">
            <section class="page-hero">
                <h1 class="page-hero__title">"Our Wedding Planning Services"</h1>
                <p class="page-hero__lead">
                    "From intimate ceremonies to grand celebrations, we create unforgettable moments that honor your love story and cultural heritage."
                </p>
            </section>

            <section class="services-page__packages">
                <Show
                    when=move || !content.get().loading
                    fallback=|| view! { <p class="page-loading">"Loading packages..."</p> }
                >
                    <div class="card-grid card-grid--packages">
                        {move || {
                            packages()
                                .into_iter()
                                .map(|package| {
                                    let src = image_url(&package.image);
                                    view! {
                                        <article class="package-card">
                                            <img
                                                class="package-card__image"
                                                src=src
                                                alt=package.title.clone()
                                                loading="lazy"
                                            />
                                            <h3 class="package-card__title">{package.title}</h3>
                                            <p class="package-card__price">{package.price}</p>
                                            <p class="package-card__description">{package.description}</p>
                                            <ul class="package-card__features">
                                                {package
                                                    .features
                                                    .into_iter()
                                                    .map(|feature| view! { <li>{feature}</li> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                            <a class="btn btn--primary" href="/contact">"Book Consultation"</a>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>

            <section class="services-page__specialties">
                <h2 class="section-title">"Cultural Wedding Specialties"</h2>
                <p class="section-lead">
                    "We honor and celebrate diverse cultural traditions, ensuring every ceremony reflects your heritage with authenticity and respect."
                </p>
                <div class="card-grid card-grid--specialties">
                    {move || {
                        specialties()
                            .into_iter()
                            .map(|specialty| {
                                view! {
                                    <div class="specialty-card">
                                        <h3 class="specialty-card__name">{specialty.name}</h3>
                                        <p class="specialty-card__description">{specialty.description}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="services-page__faq">
                <h2 class="section-title">"Frequently Asked Questions"</h2>
                <FaqList faqs=faqs/>
            </section>

            <section class="page-cta">
                <h2 class="page-cta__title">"Ready to Start Planning Your Dream Wedding?"</h2>
                <p class="page-cta__lead">
                    "Let's create a celebration that perfectly reflects your love story and cultural heritage."
                </p>
                <a class="btn btn--primary" href="/contact">"Schedule Consultation"</a>
            </section>
        </div>
    }
}
