//! Site chrome: fixed header with navigation and the multi-column footer.
//!
//! DESIGN
//! ======
//! The header and footer mount once, outside the route outlet, so their
//! state (mobile menu, scroll shadow) survives navigation. Both fall back
//! to the brand literals until the catalog arrives, keeping the chrome
//! stable during the loading shell.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::{content::ContentState, ui::UiState};

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Route table for the main navigation, in display order.
const NAV_LINKS: [(&str, &str); 7] = [
    ("Home", "/"),
    ("Services", "/services"),
    ("Gallery", "/gallery"),
    ("Portfolio", "/portfolio"),
    ("Vendors", "/vendors"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

/// Footer "quick links" are the first four navigation entries.
fn quick_links() -> &'static [(&'static str, &'static str)] {
    &NAV_LINKS[..4]
}

/// Whether `href` is the current route, tolerating a trailing slash.
fn is_active(pathname: &str, href: &str) -> bool {
    let path = if pathname.len() > 1 {
        pathname.trim_end_matches('/')
    } else {
        pathname
    };
    path == href
}

/// Fixed site header with brand, navigation, and the mobile menu.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let brand = move || {
        content
            .with(|c| c.content.as_ref().map(|c| (c.site.name.clone(), c.site.tagline.clone())))
            .unwrap_or_else(|| ("Eternal Moments".to_owned(), "Luxury Wedding Planning".to_owned()))
    };

    // Scroll shadow once the page moves past the hero edge.
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut()>::new(move || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let scrolled = window.scroll_y().unwrap_or(0.0) > 50.0;
                if ui.get_untracked().header_scrolled != scrolled {
                    ui.update(|state| state.header_scrolled = scrolled);
                }
            });
            let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            // The header lives for the whole app lifetime.
            closure.forget();
        }
    }

    let pathname = location.pathname;
    let nav_items = move || {
        let pathname = pathname.get();
        NAV_LINKS
            .iter()
            .map(|(label, href)| {
                let active = is_active(&pathname, href);
                view! {
                    <a
                        class="site-nav__link"
                        class:site-nav__link--active=active
                        href=*href
                        on:click=move |_| ui.update(UiState::close_menu)
                    >
                        {*label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="site-header" class:site-header--scrolled=move || ui.get().header_scrolled>
            <div class="site-header__inner">
                <a class="site-header__brand" href="/">
                    <span class="site-header__name">{move || brand().0}</span>
                    <span class="site-header__tagline">{move || brand().1}</span>
                </a>
                <nav class="site-nav site-nav--desktop" aria-label="Main">
                    {nav_items}
                </nav>
                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| ui.update(|state| state.mobile_menu_open = !state.mobile_menu_open)
                >
                    {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || ui.get().mobile_menu_open>
                <nav class="site-nav site-nav--mobile" aria-label="Main">
                    {nav_items}
                </nav>
            </Show>
        </header>
    }
}

/// Multi-column footer with quick links, services, and contact details.
#[component]
pub fn SiteFooter() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    let site = move || content.with(|c| c.content.as_ref().map(|c| c.site.clone()).unwrap_or_default());
    let service_titles = move || {
        content.with(|c| {
            c.content
                .as_ref()
                .map(|c| c.services.iter().map(|s| s.title.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div class="site-footer__column site-footer__column--brand">
                    <span class="site-footer__name">{move || site().name}</span>
                    <span class="site-footer__tagline">{move || site().tagline}</span>
                    <span class="site-footer__instagram">{move || site().contact.instagram}</span>
                </div>
                <div class="site-footer__column">
                    <h4 class="site-footer__heading">"Quick Links"</h4>
                    <ul class="site-footer__list">
                        {quick_links()
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <li>
                                        <a class="site-footer__link" href=*href>{*label}</a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="site-footer__column">
                    <h4 class="site-footer__heading">"Services"</h4>
                    <ul class="site-footer__list">
                        {move || {
                            service_titles()
                                .into_iter()
                                .map(|title| view! { <li class="site-footer__service">{title}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
                <div class="site-footer__column">
                    <h4 class="site-footer__heading">"Contact"</h4>
                    <ul class="site-footer__list">
                        <li class="site-footer__contact">{move || site().contact.email}</li>
                        <li class="site-footer__contact">{move || site().contact.phone}</li>
                        <li class="site-footer__contact">{move || site().contact.address}</li>
                    </ul>
                </div>
            </div>
            <div class="site-footer__bottom">
                <span>{move || format!("© {}. All rights reserved.", site().name)}</span>
            </div>
        </footer>
    }
}
