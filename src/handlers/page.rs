use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use chrono::Datelike;
use serde::Deserialize;

use crate::models::Navigation;
use crate::render::{render_page, PageOptions};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PageQuery {
    pub menu: Option<String>,
}

// GET /
pub async fn landing_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let navigation = Navigation::with_menu_open(query.menu.as_deref() == Some("open"));

    Html(render_page(&PageOptions {
        navigation,
        year: chrono::Local::now().year(),
        forward_quotes: state.config.quote_forward,
    }))
}
