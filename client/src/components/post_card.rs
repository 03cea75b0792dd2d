//! Card for a blog post teaser in the article grid.

use leptos::prelude::*;

use catalog::BlogPost;

use crate::util::assets::image_url;

#[component]
pub fn PostCard(post: BlogPost) -> impl IntoView {
    let BlogPost {
        title,
        excerpt,
        author,
        date,
        category,
        read_time,
        image,
        featured: _,
    } = post;
    let src = image_url(&image);

    view! {
        <article class="post-card">
            <div class="post-card__media">
                <img class="post-card__image" src=src alt=title.clone() loading="lazy"/>
                <span class="badge post-card__category">{category}</span>
            </div>
            <div class="post-card__body">
                <div class="post-card__meta">
                    <span class="post-card__date">{date}</span>
                    <span class="post-card__read-time">{read_time}</span>
                </div>
                <h3 class="post-card__title">{title}</h3>
                <p class="post-card__excerpt">{excerpt}</p>
                <span class="post-card__author">{format!("By {author}")}</span>
            </div>
        </article>
    }
}
