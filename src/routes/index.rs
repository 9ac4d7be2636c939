use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;
use strukter_inquiry::ContactForm;

use crate::config::SiteConfig;
use crate::site::{FeatureTab, feature_tabs, selected_feature};
use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub site: &'a SiteConfig,
    pub tabs: Vec<FeatureTab>,
    pub form: &'a ContactForm,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub feature: Option<String>,
}

pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let form = ContactForm::new();

    template.render(IndexTemplate {
        site: &template.site,
        tabs: feature_tabs(selected_feature(query.feature.as_deref())),
        form: &form,
    })
}
