//! Home page: hero, about with statistics, featured services, testimonial
//! carousel, instagram strip, and the closing call to action.

use leptos::prelude::*;

use catalog::Photo;

use crate::components::carousel::TestimonialCarousel;
use crate::state::content::ContentState;
use crate::util::assets::image_url;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// How many recent photos the instagram strip shows.
const STRIP_SIZE: usize = 6;

/// The leading photos for the instagram strip, at most [`STRIP_SIZE`].
fn instagram_strip(photos: &[Photo]) -> Vec<Photo> {
    photos.iter().take(STRIP_SIZE).cloned().collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    let site = move || {
        content.with(|c| c.content.as_ref().map(|c| c.site.clone()).unwrap_or_default())
    };
    let services = move || {
        content.with(|c| c.content.as_ref().map(|c| c.services.clone()).unwrap_or_default())
    };
    let testimonials = Signal::derive(move || {
        content.with(|c| c.content.as_ref().map(|c| c.testimonials.clone()).unwrap_or_default())
    });
    let strip = move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| instagram_strip(&c.photos))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="page home-page">
            <section class="hero">
                <div class="hero__inner">
                    <h1 class="hero__title">"Creating Your Perfect Day"</h1>
                    <p class="hero__lead">"Luxury wedding planning celebrating love in all cultures"</p>
                    <div class="hero__actions">
                        <a class="btn btn--primary" href="/contact">"Start Planning"</a>
                        <a class="btn btn--outline" href="/gallery">"View Gallery"</a>
                    </div>
                </div>
            </section>

            <section class="home-page__about">
                <h2 class="section-title">"Celebrating Love Across All Cultures"</h2>
                <p class="section-lead">
                    "At Eternal Moments, we believe every love story is unique and deserves to be celebrated with honor, authenticity, and elegance. Our expertise spans across cultural traditions, bringing together the best of your heritage with modern sophistication."
                </p>
                <div class="stat-grid">
                    {move || {
                        site()
                            .statistics
                            .into_iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat-card">
                                        <span class="stat-card__number">{stat.number}</span>
                                        <span class="stat-card__label">{stat.label}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="home-page__services">
                <h2 class="section-title">"Our Wedding Planning Services"</h2>
                <p class="section-lead">
                    "From intimate ceremonies to grand celebrations, we create unforgettable experiences that honor your love story."
                </p>
                <div class="card-grid card-grid--services">
                    {move || {
                        services()
                            .into_iter()
                            .map(|package| {
                                let src = image_url(&package.image);
                                view! {
                                    <div class="service-teaser">
                                        <img
                                            class="service-teaser__image"
                                            src=src
                                            alt=package.title.clone()
                                            loading="lazy"
                                        />
                                        <h3 class="service-teaser__title">{package.title}</h3>
                                        <p class="service-teaser__description">{package.description}</p>
                                        <a class="btn btn--outline" href="/services">"Learn More"</a>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="home-page__testimonials">
                <h2 class="section-title">"What Our Couples Say"</h2>
                <p class="section-lead">
                    "Real stories from real couples who trusted us with their special day"
                </p>
                <TestimonialCarousel testimonials=testimonials/>
            </section>

            <section class="home-page__instagram">
                <h2 class="section-title">"Follow Our Journey"</h2>
                <p class="section-lead">"Get inspired by recent weddings and behind-the-scenes moments"</p>
                <span class="badge badge--outline">{move || site().contact.instagram}</span>
                <div class="instagram-strip">
                    {move || {
                        strip()
                            .into_iter()
                            .map(|photo| {
                                let src = image_url(&photo.image);
                                view! {
                                    <img class="instagram-strip__photo" src=src alt=photo.alt loading="lazy"/>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="page-cta">
                <h2 class="page-cta__title">"Ready to Start Planning Your Dream Wedding?"</h2>
                <p class="page-cta__lead">
                    "Let's create a celebration that perfectly reflects your love story and cultural heritage."
                </p>
                <div class="page-cta__actions">
                    <a class="btn btn--primary" href="/contact">"Schedule Consultation"</a>
                    <a class="btn btn--outline" href="/services">"View Our Services"</a>
                </div>
            </section>
        </div>
    }
}
