use leptos::prelude::*;

use crate::content::{
    BUSINESS_NAME, ESTABLISHED, LOGO_SRC, PHONE_DISPLAY, PHONE_HREF, TAGLINE, WEBSITE_DISPLAY,
    WEBSITE_URL,
};

#[component]
pub fn Footer(year: i32) -> impl IntoView {
    let copyright = format!("© {year} {BUSINESS_NAME}. All rights reserved.");

    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <img src=LOGO_SRC alt="Wildrose Painters Logo" width="56" height="56" class="footer-logo" />
                    <div>
                        <p class="footer-name">{BUSINESS_NAME}</p>
                        <p class="footer-est">{format!("Est. {ESTABLISHED}")}</p>
                    </div>
                </div>
                <p class="footer-tagline">{TAGLINE}</p>
                <div class="footer-links">
                    <a href=PHONE_HREF>{PHONE_DISPLAY}</a>
                    <a href=WEBSITE_URL target="_blank" rel="noopener noreferrer">{WEBSITE_DISPLAY}</a>
                </div>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
