use leptos::prelude::*;

use super::RevealSection;
use crate::content::DIFFERENTIATORS;
use crate::models::navigation::CONTACT_SECTION;

#[component]
pub fn Standout() -> impl IntoView {
    view! {
        <RevealSection anchor="standout" variant="standout">
            <div class="container">
                <div class="section-heading">
                    <h2>"How We Stand Out"</h2>
                    <p>"What makes Wildrose Painters the right choice for your painting project"</p>
                </div>

                <div class="card-grid three">
                    {DIFFERENTIATORS.into_iter().map(|feature| view! {
                        <div class="card feature-card">
                            <div class="feature-icon" aria-hidden="true">{feature.icon.glyph()}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="promo">
                    <h3>"Summer Special Discounts!"</h3>
                    <p>
                        "Get special summer pricing on deck and fence projects. Request your quote now \
                         for competitive rates with our signature quality focus."
                    </p>
                    <button type="button" class="button button-light button-large" data-scroll-to=CONTACT_SECTION>
                        "Claim Your Summer Discount"
                    </button>
                </div>
            </div>
        </RevealSection>
    }
}
