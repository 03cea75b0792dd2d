//! Vendor directory with category, culture, and free-text filters.
//!
//! DESIGN
//! ======
//! Filter state is page-local: it is created on entry and dropped on
//! navigation, so revisiting the directory always starts unfiltered. The
//! page recomputes its visible subset through the shared filter engine on
//! every keystroke or chip change.

use leptos::prelude::*;

use catalog::{FilterState, Vendor, apply_filters, chip_options};

use crate::components::chips::FilterChips;
use crate::components::vendor_card::VendorCard;
use crate::state::content::ContentState;

#[cfg(test)]
#[path = "vendors_test.rs"]
mod vendors_test;

/// Vendors visible under `state`, cloned out of the shared catalog.
fn visible_vendors(vendors: &[Vendor], state: &FilterState) -> Vec<Vendor> {
    apply_filters(vendors, state).into_iter().cloned().collect()
}

#[component]
pub fn VendorsPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    let filters = RwSignal::new(FilterState::default());

    let visible = move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| filters.with(|f| visible_vendors(&c.vendors, f)))
                .unwrap_or_default()
        })
    };
    let categories = Signal::derive(move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| chip_options(&c.site.vendor_categories))
                .unwrap_or_default()
        })
    });
    let cultures = Signal::derive(move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| chip_options(&c.site.cultures))
                .unwrap_or_default()
        })
    });

    let select_category = Callback::new(move |value: String| filters.update(|f| f.category = value));
    let select_culture = Callback::new(move |value: String| filters.update(|f| f.culture = value));

    view! {
        <div class="page vendors-page">
            <section class="page-hero">
                <h1 class="page-hero__title">"Preferred Vendors"</h1>
                <p class="page-hero__lead">
                    "Our carefully vetted network of professional vendors who understand and celebrate cultural diversity in weddings."
                </p>
                <div class="vendors-page__pitch">
                    <h3 class="vendors-page__pitch-title">"Why Choose Our Preferred Vendors?"</h3>
                    <div class="vendors-page__pitch-grid">
                        <div>
                            <h4>"Pre-Vetted Quality"</h4>
                            <p>"All vendors are thoroughly screened for quality and professionalism"</p>
                        </div>
                        <div>
                            <h4>"Cultural Expertise"</h4>
                            <p>"Experienced in diverse cultural and religious wedding traditions"</p>
                        </div>
                        <div>
                            <h4>"Seamless Coordination"</h4>
                            <p>"Established relationships ensure smooth collaboration"</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="vendors-page__filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search vendors by name or service..."
                    prop:value=move || filters.get().search
                    on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                />
                <div class="filter-group">
                    <h3 class="filter-group__label">"Filter by Category:"</h3>
                    <FilterChips
                        options=categories
                        selected=Signal::derive(move || filters.get().category)
                        on_select=select_category
                    />
                </div>
                <div class="filter-group">
                    <h3 class="filter-group__label">"Filter by Cultural Specialty:"</h3>
                    <FilterChips
                        options=cultures
                        selected=Signal::derive(move || filters.get().culture)
                        on_select=select_culture
                    />
                </div>
            </section>

            <section class="vendors-page__results">
                <Show
                    when=move || !content.get().loading
                    fallback=|| view! { <p class="page-loading">"Loading vendors..."</p> }
                >
                    <Show
                        when=move || !visible().is_empty()
                        fallback=move || {
                            view! {
                                <div class="empty-state">
                                    <p class="empty-state__message">
                                        "No vendors found matching your criteria."
                                    </p>
                                    <button
                                        class="btn btn--outline"
                                        on:click=move |_| filters.update(FilterState::clear)
                                    >
                                        "Clear Filters"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="card-grid card-grid--vendors">
                            {move || {
                                visible()
                                    .into_iter()
                                    .map(|vendor| view! { <VendorCard vendor=vendor/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>

            <section class="page-cta">
                <h2 class="page-cta__title">"Don't See What You're Looking For?"</h2>
                <p class="page-cta__lead">
                    "We're constantly expanding our vendor network. Let us help you find the perfect professionals for your special day."
                </p>
                <a class="btn btn--primary" href="/contact">"Request Vendor Recommendation"</a>
            </section>
        </div>
    }
}
