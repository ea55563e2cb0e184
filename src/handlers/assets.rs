use axum::http::header;
use axum::response::{IntoResponse, Response};

static SITE_CSS: &str = include_str!("../web/site.css");
static SITE_JS: &str = include_str!("../web/site.js");
static PLACEHOLDER_SVG: &str = include_str!("../web/placeholder.svg");

fn embedded(content_type: &'static str, body: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        body,
    )
        .into_response()
}

pub async fn stylesheet() -> Response {
    embedded("text/css; charset=utf-8", SITE_CSS)
}

pub async fn script() -> Response {
    embedded("text/javascript; charset=utf-8", SITE_JS)
}

pub async fn placeholder_image() -> Response {
    embedded("image/svg+xml", PLACEHOLDER_SVG)
}
