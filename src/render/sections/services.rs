use leptos::prelude::*;

use super::RevealSection;
use crate::content::{Icon, ServiceOffering, SERVICES};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <RevealSection anchor="services" variant="services">
            <div class="container">
                <div class="section-heading">
                    <h2>"Our Painting Services"</h2>
                    <p>
                        "Wildrose Painters is up and running all summer! Get competitive pricing with \
                         exceptional quality on all services."
                    </p>
                </div>

                <div class="card-grid three">
                    {SERVICES.into_iter().map(|service| view! {
                        <ServiceCard service=service />
                    }).collect::<Vec<_>>()}
                </div>

                <div class="callout">
                    <h3>
                        <span class="icon" aria-hidden="true">{Icon::Award.glyph()}</span>
                        "Premium Paint Products"
                    </h3>
                    <p>
                        "We use only the best quality paint products from trusted brands like "
                        <strong>"Sherwin Williams"</strong>
                        " and "
                        <strong>"Dulux"</strong>
                        " to ensure lasting, beautiful results for every project."
                    </p>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn ServiceCard(service: ServiceOffering) -> impl IntoView {
    view! {
        <article class="card service-card">
            {service.badge.map(|badge| view! { <div class="badge">{badge}</div> })}
            <div class="service-image">
                <img src=service.image_src() alt=service.title loading="lazy" />
            </div>
            <div class="service-body">
                <h3>{service.title}</h3>
                <p>{service.description}</p>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PLACEHOLDER_IMAGE;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn card_without_image_uses_placeholder() {
        let service = ServiceOffering {
            image: None,
            ..SERVICES[2]
        };
        let html = view! { <ServiceCard service=service /> }.to_html();
        assert!(html.contains(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn card_badge_only_when_present() {
        let fence = SERVICES[0];
        let badged = view! { <ServiceCard service=fence /> }.to_html();
        assert!(badged.contains("Summer Special"));

        let interior = SERVICES[2];
        let plain = view! { <ServiceCard service=interior /> }.to_html();
        assert!(!plain.contains("badge"));
        assert!(plain.contains("/images/interior-painting.jpg"));
    }
}
