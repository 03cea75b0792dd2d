//! Testimonial carousel for the home page.
//!
//! DESIGN
//! ======
//! One quote visible at a time with arrow and dot navigation. Index math is
//! kept in pure functions so wraparound stays testable without a DOM.

use leptos::prelude::*;

use catalog::Testimonial;

use crate::util::format::star_row;

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Index after advancing one slide, wrapping at the end.
fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index after going back one slide, wrapping at the start.
fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

#[component]
pub fn TestimonialCarousel(#[prop(into)] testimonials: Signal<Vec<Testimonial>>) -> impl IntoView {
    let current = RwSignal::new(0_usize);

    let count = move || testimonials.get().len();
    let active = move || {
        let list = testimonials.get();
        if list.is_empty() {
            None
        } else {
            Some(list[current.get().min(list.len() - 1)].clone())
        }
    };

    view! {
        <div class="carousel">
            <Show when=move || active().is_some()>
                <figure class="carousel__slide">
                    <span class="carousel__stars" aria-hidden="true">
                        {move || star_row(active().map(|t| t.rating).unwrap_or(0))}
                    </span>
                    <blockquote class="carousel__quote">
                        {move || active().map(|t| t.quote).unwrap_or_default()}
                    </blockquote>
                    <figcaption class="carousel__couple">
                        {move || active().map(|t| t.couple).unwrap_or_default()}
                    </figcaption>
                </figure>
            </Show>
            <button
                class="carousel__arrow carousel__arrow--prev"
                aria-label="Previous testimonial"
                on:click=move |_| current.update(|i| *i = prev_index(*i, count()))
            >
                "‹"
            </button>
            <button
                class="carousel__arrow carousel__arrow--next"
                aria-label="Next testimonial"
                on:click=move |_| current.update(|i| *i = next_index(*i, count()))
            >
                "›"
            </button>
            <div class="carousel__dots">
                {move || {
                    (0..count())
                        .map(|index| {
                            let is_active = move || current.get() == index;
                            view! {
                                <button
                                    class="carousel__dot"
                                    class:carousel__dot--active=is_active
                                    aria-label=format!("Show testimonial {}", index + 1)
                                    on:click=move |_| current.set(index)
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
