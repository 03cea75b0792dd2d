//! Card for a single vendor in the directory grid.

use leptos::prelude::*;

use catalog::Vendor;

use crate::util::format::{rating_label, review_count_label};

#[component]
pub fn VendorCard(vendor: Vendor) -> impl IntoView {
    let Vendor {
        name,
        category,
        description,
        specialties,
        contact_email,
        contact_phone,
        rating,
        review_count,
    } = vendor;
    let mailto = format!("mailto:{contact_email}");

    view! {
        <article class="vendor-card">
            <header class="vendor-card__header">
                <div class="vendor-card__title">
                    <h3 class="vendor-card__name">{name}</h3>
                    <span class="badge">{category}</span>
                </div>
                <div class="vendor-card__rating">
                    <span class="vendor-card__stars">"★ " {rating_label(rating)}</span>
                    <span class="vendor-card__reviews">{review_count_label(review_count)}</span>
                </div>
            </header>
            <p class="vendor-card__description">{description}</p>
            <div class="vendor-card__specialties">
                <h4 class="vendor-card__specialties-heading">"Cultural Specialties:"</h4>
                <div class="vendor-card__specialty-tags">
                    {specialties
                        .into_iter()
                        .map(|tag| view! { <span class="badge badge--outline">{tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="vendor-card__contact">
                <a class="vendor-card__email" href=mailto>{contact_email}</a>
                <span class="vendor-card__phone">{contact_phone}</span>
            </div>
        </article>
    }
}
