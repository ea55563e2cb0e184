use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};

use crate::errors::AppError;
use crate::models::QuoteForm;
use crate::state::AppState;

/// Native form posts land back on the contact section.
const CONTACT_ANCHOR: &str = "/#contact";

fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

// POST /api/quote
pub async fn submit_quote(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let wants_json = accepts_json(&headers);

    match intake(&state, &fields).await {
        Ok(submission_id) if wants_json => (
            StatusCode::ACCEPTED,
            Json(serde_json::json!({ "ok": true, "id": submission_id })),
        )
            .into_response(),
        Ok(_) => Redirect::to(CONTACT_ANCHOR).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "quote request rejected");
            if wants_json {
                e.into_response()
            } else {
                Redirect::to(CONTACT_ANCHOR).into_response()
            }
        }
    }
}

/// Folds the posted fields into an empty form one edit at a time, then
/// submits it the way the page does.
async fn intake(state: &AppState, fields: &[(String, String)]) -> Result<String, AppError> {
    let form = fields
        .iter()
        .try_fold(QuoteForm::default(), |form, (name, value)| {
            form.update_field(name, value)
        })?;

    let quote = form.submit()?;
    let submission_id = uuid::Uuid::new_v4().to_string();

    state.quotes.deliver(&submission_id, &quote).await?;

    Ok(submission_id)
}
