//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::{SiteFooter, SiteHeader};
use crate::components::toast::Toast;
use crate::pages::{
    blog::BlogPage, contact::ContactPage, gallery::GalleryPage, home::HomePage,
    portfolio::PortfolioPage, services::ServicesPage, vendors::VendorsPage,
};
use crate::state::{content::ContentState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared content and UI contexts, kicks off the one-time
/// catalog fetch, and sets up client-side routing. Page chrome (header,
/// footer, toast) lives outside `Routes` so it survives navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = RwSignal::new(ContentState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(content);
    provide_context(ui);

    // Pages render a loading shell until the catalog arrives.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_site_content().await;
        content.update(|state| state.resolve(result));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/eternal-moments.css"/>
        <Title text="Eternal Moments | Luxury Wedding Planning"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("gallery") view=GalleryPage/>
                    <Route path=StaticSegment("portfolio") view=PortfolioPage/>
                    <Route path=StaticSegment("vendors") view=VendorsPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <SiteFooter/>
            <Toast/>
        </Router>
    }
}
