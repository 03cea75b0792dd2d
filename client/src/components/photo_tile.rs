//! Gallery tile with the hover overlay for couple, year, and category.

use leptos::prelude::*;

use catalog::Photo;

use crate::util::assets::image_url;

#[component]
pub fn PhotoTile(photo: Photo) -> impl IntoView {
    let Photo {
        id: _,
        category,
        alt,
        couple,
        year,
        image,
    } = photo;
    let src = image_url(&image);

    view! {
        <figure class="photo-tile">
            <img class="photo-tile__image" src=src alt=alt loading="lazy"/>
            <figcaption class="photo-tile__overlay">
                <span class="photo-tile__couple">{couple}</span>
                <span class="photo-tile__meta">{format!("{category} · {year}")}</span>
            </figcaption>
        </figure>
    }
}
