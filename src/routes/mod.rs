use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::{get, post},
};

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod email;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub command: strukter_inquiry::Command,
}

pub async fn fallback(template: Template) -> Response {
    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            site: &template.site,
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/api/email.send", post(email::send))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
