//! Server-side rendering of the landing page.
//!
//! Each page section is a Leptos component under [`sections`]; the document
//! is rendered to a plain HTML string with no hydration. Client behavior
//! (smooth scrolling, the mobile menu, entrance animations, shared form
//! state) lives in the embedded `site.js`, which reads the `data-*` hooks the
//! components emit.

pub mod sections;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::content::{BUSINESS_NAME, TAGLINE};
use crate::models::Navigation;
use sections::{About, Contact, Footer, Header, Hero, Services, Standout};

pub const STYLESHEET_HREF: &str = "/assets/site.css";
pub const SCRIPT_SRC: &str = "/assets/site.js";

/// Per-request inputs to the page.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub navigation: Navigation,
    /// Year printed in the footer copyright line.
    pub year: i32,
    /// Whether the script also posts submitted quotes to the intake endpoint.
    pub forward_quotes: bool,
}

pub fn render_page(options: &PageOptions) -> String {
    let doc = view! {
        <Document options=*options />
    };

    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[component]
fn Document(options: PageOptions) -> impl IntoView {
    let title = format!("{BUSINESS_NAME} | {TAGLINE}");
    let forward = if options.forward_quotes { "true" } else { "false" };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="Professional fence, deck, and interior painting in the Greater Edmonton Area." />
                <title>{title}</title>
                <link rel="stylesheet" href=STYLESHEET_HREF />
                <noscript>
                    <style>".reveal { opacity: 1; transform: none; }"</style>
                </noscript>
            </head>
            <body data-quote-forward=forward>
                <div class="page">
                    <Header navigation=options.navigation />
                    <main class="main">
                        <Hero />
                        <Services />
                        <About />
                        <Standout />
                        <Contact />
                    </main>
                    <Footer year=options.year />
                </div>
                <script src=SCRIPT_SRC></script>
            </body>
        </html>
    }
}
