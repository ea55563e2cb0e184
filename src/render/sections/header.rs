use leptos::prelude::*;

use crate::content::LOGO_SRC;
use crate::models::navigation::{CONTACT_SECTION, HOME_SECTION};
use crate::models::{Navigation, SECTIONS};

#[component]
pub fn Header(navigation: Navigation) -> impl IntoView {
    let expanded = if navigation.menu_open { "true" } else { "false" };
    let menu_hidden = !navigation.menu_open;
    let menu_class = if navigation.menu_open { "mobile-menu open" } else { "mobile-menu" };

    view! {
        <header class="site-header">
            <a href="#home" class="brand" data-scroll-to=HOME_SECTION>
                <img src=LOGO_SRC alt="Wildrose Painters Logo" width="64" height="64" class="brand-logo" />
                <span class="brand-name">"WILDROSE PAINTERS"</span>
            </a>

            <nav class="desktop-nav" aria-label="Primary">
                {SECTIONS.into_iter().map(|section| view! {
                    <a href=format!("#{}", section.id) class="nav-link" data-scroll-to=section.id>
                        {section.name}
                    </a>
                }).collect::<Vec<_>>()}
                <button type="button" class="button button-primary" data-scroll-to=CONTACT_SECTION>
                    "Get Free Quote"
                </button>
            </nav>

            <a
                href=navigation.toggle_href()
                class="menu-toggle"
                data-menu-toggle=""
                aria-controls="mobile-menu"
                aria-expanded=expanded
            >
                <span aria-hidden="true">"☰"</span>
                <span class="sr-only">"Toggle navigation menu"</span>
            </a>

            // Links carry the page path so that, without script, following one
            // reloads with the menu closed and the anchor targeted.
            <div id="mobile-menu" class=menu_class hidden=menu_hidden>
                <nav class="mobile-nav" aria-label="Mobile">
                    {SECTIONS.into_iter().map(|section| view! {
                        <a
                            href=format!("/#{}", section.id)
                            class="mobile-link"
                            data-scroll-to=section.id
                            data-closes-menu=""
                        >
                            {section.name}
                        </a>
                    }).collect::<Vec<_>>()}
                </nav>
            </div>
        </header>
    }
}
