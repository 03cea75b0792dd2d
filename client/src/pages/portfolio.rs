//! Portfolio page: design styles, featured case studies, and the process
//! timeline.

use leptos::prelude::*;

use crate::state::content::ContentState;
use crate::util::assets::image_url;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    let styles = move || {
        content.with(|c| c.content.as_ref().map(|c| c.site.design_styles.clone()).unwrap_or_default())
    };
    let projects = move || {
        content.with(|c| c.content.as_ref().map(|c| c.projects.clone()).unwrap_or_default())
    };
    let steps = move || {
        content.with(|c| c.content.as_ref().map(|c| c.site.process_steps.clone()).unwrap_or_default())
    };

    view! {
        <div class="page portfolio-page">
            <section class="page-hero">
                <h1 class="page-hero__title">"Transforming Venues Into Dreams"</h1>
                <p class="page-hero__lead">
                    "Our design expertise creates magical spaces that reflect your unique love story and cultural heritage."
                </p>
            </section>

            <section class="portfolio-page__styles">
                <h2 class="section-title">"Design Styles We Master"</h2>
                <p class="section-lead">"Every couple has a unique vision - we bring it to life"</p>
                <div class="card-grid card-grid--styles">
                    {move || {
                        styles()
                            .into_iter()
                            .map(|style| {
                                view! {
                                    <div class="style-card">
                                        <h3 class="style-card__title">{style.title}</h3>
                                        <p class="style-card__description">{style.description}</p>
                                        <a class="btn btn--outline" href="/gallery">"View Gallery"</a>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="portfolio-page__projects">
                <h2 class="section-title">"Featured Wedding Projects"</h2>
                <p class="section-lead">
                    "Detailed case studies showcasing our planning and design expertise"
                </p>
                <div class="project-list">
                    {move || {
                        projects()
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| {
                                let src = image_url(&project.image);
                                let gallery_label =
                                    format!("View Full Gallery ({} photos)", project.photo_count);
                                view! {
                                    <article
                                        class="project-case"
                                        class:project-case--reversed=index % 2 == 1
                                    >
                                        <img
                                            class="project-case__image"
                                            src=src
                                            alt=project.title.clone()
                                            loading="lazy"
                                        />
                                        <div class="project-case__body">
                                            <h3 class="project-case__title">{project.title}</h3>
                                            <div class="project-case__study">
                                                <h4>"Challenge:"</h4>
                                                <p>{project.challenge}</p>
                                                <h4>"Solution:"</h4>
                                                <p>{project.solution}</p>
                                                <h4>"Result:"</h4>
                                                <p>{project.result}</p>
                                            </div>
                                            <div class="project-case__details">
                                                {project
                                                    .details
                                                    .into_iter()
                                                    .map(|detail| {
                                                        view! { <span class="badge badge--soft">{detail}</span> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                            <a class="btn btn--primary" href="/gallery">{gallery_label}</a>
                                        </div>
                                    </article>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="portfolio-page__process">
                <h2 class="section-title">"Our Design Process"</h2>
                <p class="section-lead">"From concept to reality - how we bring your vision to life"</p>
                <ol class="process-timeline">
                    {move || {
                        steps()
                            .into_iter()
                            .map(|step| {
                                view! {
                                    <li class="process-step">
                                        <span class="process-step__number">{step.step}</span>
                                        <div class="process-step__body">
                                            <h3 class="process-step__title">{step.title}</h3>
                                            <p class="process-step__description">{step.description}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ol>
            </section>

            <section class="page-cta">
                <h2 class="page-cta__title">"Ready to Transform Your Vision Into Reality?"</h2>
                <p class="page-cta__lead">
                    "Let's create a wedding design that perfectly captures your love story and style."
                </p>
                <a class="btn btn--primary" href="/contact">"Schedule Consultation"</a>
            </section>
        </div>
    }
}
