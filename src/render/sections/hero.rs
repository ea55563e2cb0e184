use leptos::prelude::*;

use super::{QuoteForm, RevealSection};
use crate::content::{Icon, LOGO_SRC, PHONE_DISPLAY, PHONE_HREF};
use crate::models::navigation::{CONTACT_SECTION, HOME_SECTION};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <RevealSection anchor=HOME_SECTION variant="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <img src=LOGO_SRC alt="Wildrose Painters Logo" width="400" height="400" class="hero-logo" />
                    <h1 class="hero-title">"Quality & Budget-Friendly Painting"</h1>
                    <p class="hero-lead">
                        "Professional fence, deck, and interior painting services. Summer specials available! \
                         Competitive pricing with exceptional quality."
                    </p>
                    <div class="hero-actions">
                        <a href=PHONE_HREF class="button button-primary button-large">
                            <span class="icon" aria-hidden="true">{Icon::Phone.glyph()}</span>
                            {format!("Call {PHONE_DISPLAY}")}
                        </a>
                        <button type="button" class="button button-outline button-large" data-scroll-to=CONTACT_SECTION>
                            "Get Free Quote"
                        </button>
                    </div>
                </div>

                <div class="card hero-card">
                    <img src=LOGO_SRC alt="Wildrose Painters" width="140" height="140" class="card-logo" />
                    <h2 class="card-title">"Get Your Free Quote"</h2>
                    <p class="card-subtitle">"Fill out the form and we'll get back to you within 24 hours"</p>
                    <QuoteForm
                        id_prefix=""
                        name_placeholder="John Smith"
                        email_placeholder="john@example.com"
                        message_placeholder="Tell us about your project..."
                        submit_label="Request Your Free Quote"
                    />
                </div>
            </div>
        </RevealSection>
    }
}
