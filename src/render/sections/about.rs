use leptos::prelude::*;

use super::RevealSection;
use crate::content::{ABOUT_BODY, ABOUT_CLOSER, ABOUT_LEAD, LOGO_SRC};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection anchor="about" variant="about">
            <div class="container about-grid">
                <div class="about-brand">
                    <h2>"About Wildrose Painters"</h2>
                    <img src=LOGO_SRC alt="Wildrose Painters Logo" width="240" height="240" class="about-logo" />
                </div>
                <div class="about-copy">
                    <p class="lead">{ABOUT_LEAD}</p>
                    {ABOUT_BODY.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect::<Vec<_>>()}
                    <p class="closer">{ABOUT_CLOSER}</p>
                </div>
            </div>
        </RevealSection>
    }
}
