use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use strukter_inquiry::{ContactForm, ContactFormInput};

use crate::config::SiteConfig;
use crate::routes::{AppState, index::IndexTemplate};
use crate::site::feature_tabs;
use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "partials/contact.html")]
pub struct ContactTemplate<'a> {
    pub site: &'a SiteConfig,
    pub form: &'a ContactForm,
}

/// POST /contact
///
/// Runs one submission and renders the contact section in the resulting state,
/// either alone (`HX-Request`) or within the full landing page.
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ContactFormInput>,
) -> impl IntoResponse {
    let form = ContactForm::new().submit_with(input, &app.command).await;

    if template.fragment {
        return template.render(ContactTemplate {
            site: &template.site,
            form: &form,
        });
    }

    template.render(IndexTemplate {
        site: &template.site,
        tabs: feature_tabs(0),
        form: &form,
    })
}
