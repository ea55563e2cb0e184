use leptos::prelude::*;

use super::{QuoteForm, RevealSection};
use crate::content::{
    Icon, LOGO_SRC, PHONE_DISPLAY, PHONE_HREF, SERVICE_AREA, WEBSITE_DISPLAY, WEBSITE_URL,
};
use crate::models::navigation::CONTACT_SECTION;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <RevealSection anchor=CONTACT_SECTION variant="contact">
            <div class="container">
                <div class="section-heading">
                    <h2>"Ready to Get Started?"</h2>
                    <p>"Contact us today for your free quote and competitive pricing"</p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info">
                        <img src=LOGO_SRC alt="Wildrose Painters" width="200" height="200" class="contact-logo" />
                        <div class="card info-card">
                            <div class="info-icon" aria-hidden="true">{Icon::Phone.glyph()}</div>
                            <div>
                                <h3>"Call or Text Us"</h3>
                                <a href=PHONE_HREF class="info-link">{PHONE_DISPLAY}</a>
                            </div>
                        </div>
                        <div class="card info-card">
                            <div class="info-icon" aria-hidden="true">{Icon::Mail.glyph()}</div>
                            <div>
                                <h3>"Visit Our Website"</h3>
                                <a href=WEBSITE_URL target="_blank" rel="noopener noreferrer" class="info-link">
                                    {WEBSITE_DISPLAY}
                                </a>
                            </div>
                        </div>
                        <div class="service-area">
                            <h3>"Service Area"</h3>
                            <p>{SERVICE_AREA}</p>
                        </div>
                    </div>

                    <div class="card contact-card">
                        <h3 class="card-title">"Request Your Free Quote"</h3>
                        <QuoteForm
                            id_prefix="contact-"
                            name_placeholder="Your name"
                            email_placeholder="your@email.com"
                            message_placeholder="Tell us about your fence, deck, or interior painting project..."
                            submit_label="Get Your Free Quote Now"
                        />
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
