use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::config::SiteConfig;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Per-request rendering context
pub struct Template {
    pub site: SiteConfig,
    /// Set when the client asked for a partial swap (`HX-Request`)
    pub fragment: bool,
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "failed to render template");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }

    /// Like [`Template::render`], with `status` applied only when rendering succeeded
    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        let mut response = self.render(template);
        if response.status().is_success() {
            *response.status_mut() = status;
        }

        response
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let fragment = parts
            .headers
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        Ok(Template {
            site: state.config.site.clone(),
            fragment,
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate<'a> {
    pub site: &'a SiteConfig,
}
