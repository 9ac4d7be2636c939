use axum::{Json, extract::State};
use strukter_inquiry::{Inquiry, Outcome};

use crate::routes::AppState;

/// POST /api/email.send
///
/// Always answers 200; delivery failures are reported in the body.
pub async fn send(State(app): State<AppState>, Json(input): Json<Inquiry>) -> Json<Outcome> {
    Json(app.command.send(input).await)
}
