use leptos::prelude::*;

use crate::models::REVEAL_THRESHOLD;

/// A page section that starts hidden and fades in the first time enough of
/// it scrolls into view.
#[component]
pub fn RevealSection(anchor: &'static str, variant: &'static str, children: Children) -> impl IntoView {
    let class = format!("section reveal {variant}");

    view! {
        <section id=anchor class=class data-reveal=REVEAL_THRESHOLD.to_string()>
            {children()}
        </section>
    }
}
