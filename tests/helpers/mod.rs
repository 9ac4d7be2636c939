//! Shared fixtures for router-level tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use strukter::{
    AppState,
    config::{Config, LoggingConfig, ServerConfig, SiteConfig},
};
use strukter_inquiry::{Command, Notification};
use strukter_mailer::{EmailConfig, EmailError, EmailProvider, OutgoingEmail};

/// Provider stub that records every email and optionally fails
#[derive(Default)]
pub struct RecordingProvider {
    sent: Mutex<Vec<OutgoingEmail>>,
    failure: Option<String>,
}

impl RecordingProvider {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(reason: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(reason.into()),
            ..Default::default()
        })
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(email);

        match &self.failure {
            Some(reason) => Err(EmailError::Provider(reason.to_owned())),
            None => Ok(()),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        logging: LoggingConfig::default(),
        email: EmailConfig::default(),
        site: SiteConfig::default(),
    }
}

pub fn create_test_app(provider: Arc<RecordingProvider>) -> Router {
    let config = test_config();
    let command = Command::new(provider, Notification::from(&config.email));

    strukter::create_app(AppState { config, command })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

pub fn post_json(uri: &str, value: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(value.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(body.to_vec()).unwrap()
}

pub const JANE: &[(&str, &str)] = &[
    ("first-name", "Jane"),
    ("last-name", "Doe"),
    ("email", "jane@x.com"),
    ("phone-number", "555-0100"),
    ("message", "Hi"),
];
