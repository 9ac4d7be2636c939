//! Contact form lifecycle
//!
//! One [`ContactForm`] value lives for one rendering of the contact section.
//! It starts `Idle`, moves to `Submitting` once every field is present, and
//! ends `Settled` whatever the provider answered. Settled forms ignore further
//! submissions.

use serde::Deserialize;
use strum::{AsRefStr, Display};

use crate::{Command, Inquiry, Outcome};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Raw form fields, named after the input elements
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ContactFormInput {
    #[serde(rename = "first-name")]
    pub first_name: Option<String>,
    #[serde(rename = "last-name")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "phone-number")]
    pub phone_number: Option<String>,
    pub message: Option<String>,
}

impl ContactFormInput {
    /// `None` when any field is missing. Empty values are kept as-is.
    pub fn into_inquiry(self) -> Option<Inquiry> {
        Some(Inquiry {
            fname: self.first_name?,
            lname: self.last_name?,
            email: self.email?,
            phone: self.phone_number?,
            message: self.message?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactForm {
    /// `draft` holds what was last typed so a rejected form is shown filled in
    Idle {
        error: Option<&'static str>,
        draft: ContactFormInput,
    },
    Submitting(Inquiry),
    Settled(Outcome),
}

/// What the contact section shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    Form,
    Success,
    Failure,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::Idle {
            error: None,
            draft: ContactFormInput::default(),
        }
    }

    pub fn submit(self, input: ContactFormInput) -> Self {
        let Self::Idle { .. } = self else {
            return self;
        };

        match input.clone().into_inquiry() {
            Some(inquiry) => Self::Submitting(inquiry),
            None => Self::Idle {
                error: Some(MISSING_FIELDS_MESSAGE),
                draft: input,
            },
        }
    }

    pub fn settle(self, outcome: Outcome) -> Self {
        match self {
            Self::Submitting(_) => Self::Settled(outcome),
            other => other,
        }
    }

    /// Submit `input` and, when it holds every field, wait for the handler to settle
    pub async fn submit_with(self, input: ContactFormInput, command: &Command) -> Self {
        match self.submit(input) {
            Self::Submitting(inquiry) => {
                let outcome = command.send(inquiry.clone()).await;

                Self::Submitting(inquiry).settle(outcome)
            }
            other => other,
        }
    }

    pub fn view(&self) -> View {
        match self {
            Self::Idle { .. } | Self::Submitting(_) => View::Form,
            Self::Settled(Outcome::Success) => View::Success,
            Self::Settled(Outcome::Failure { .. }) => View::Failure,
        }
    }

    pub fn is_form(&self) -> bool {
        self.view() == View::Form
    }

    pub fn is_success(&self) -> bool {
        self.view() == View::Success
    }

    pub fn is_failure(&self) -> bool {
        self.view() == View::Failure
    }

    pub fn validation_message(&self) -> Option<&'static str> {
        match self {
            Self::Idle { error, .. } => *error,
            _ => None,
        }
    }

    /// Draft value of the input named `name`, empty when nothing was typed
    pub fn value(&self, name: &str) -> &str {
        let Self::Idle { draft, .. } = self else {
            return "";
        };

        let field = match name {
            "first-name" => &draft.first_name,
            "last-name" => &draft.last_name,
            "email" => &draft.email,
            "phone-number" => &draft.phone_number,
            "message" => &draft.message,
            _ => return "",
        };

        field.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> ContactFormInput {
        ContactFormInput {
            first_name: Some("Jane".to_owned()),
            last_name: Some("Doe".to_owned()),
            email: Some("jane@x.com".to_owned()),
            phone_number: Some("555-0100".to_owned()),
            message: Some("Hi".to_owned()),
        }
    }

    #[test]
    fn test_missing_field_stays_idle() {
        let input = ContactFormInput {
            phone_number: None,
            ..full_input()
        };
        let form = ContactForm::new().submit(input.clone());

        assert_eq!(
            form,
            ContactForm::Idle {
                error: Some(MISSING_FIELDS_MESSAGE),
                draft: input,
            }
        );
        assert_eq!(form.view(), View::Form);
        assert_eq!(form.validation_message(), Some(MISSING_FIELDS_MESSAGE));
    }

    #[test]
    fn test_empty_values_are_present() {
        let form = ContactForm::new().submit(ContactFormInput {
            message: Some(String::new()),
            ..full_input()
        });

        assert!(matches!(form, ContactForm::Submitting(_)));
    }

    #[test]
    fn test_rejected_form_keeps_draft_values() {
        let form = ContactForm::new().submit(ContactFormInput {
            email: None,
            ..full_input()
        });

        assert_eq!(form.value("first-name"), "Jane");
        assert_eq!(form.value("last-name"), "Doe");
        assert_eq!(form.value("phone-number"), "555-0100");
        assert_eq!(form.value("message"), "Hi");
        assert_eq!(form.value("email"), "");
        assert_eq!(form.value("unknown"), "");
    }

    #[test]
    fn test_settled_form_has_no_draft() {
        let form = ContactForm::new()
            .submit(full_input())
            .settle(Outcome::Success);

        assert_eq!(form.value("first-name"), "");
    }

    #[test]
    fn test_submit_keeps_values_unmodified() {
        let form = ContactForm::new().submit(full_input());

        assert_eq!(
            form,
            ContactForm::Submitting(Inquiry {
                fname: "Jane".to_owned(),
                lname: "Doe".to_owned(),
                email: "jane@x.com".to_owned(),
                phone: "555-0100".to_owned(),
                message: "Hi".to_owned(),
            })
        );
        assert_eq!(form.view(), View::Form);
    }

    #[test]
    fn test_settle_views() {
        let success = ContactForm::new()
            .submit(full_input())
            .settle(Outcome::Success);
        assert_eq!(success.view(), View::Success);

        let failure = ContactForm::new()
            .submit(full_input())
            .settle(Outcome::failure("quota exceeded"));
        assert_eq!(failure.view(), View::Failure);
        assert_eq!(failure.validation_message(), None);
    }

    #[test]
    fn test_settled_form_never_returns_to_form() {
        let settled = ContactForm::new()
            .submit(full_input())
            .settle(Outcome::Success);

        let resubmitted = settled.clone().submit(full_input());
        assert_eq!(resubmitted, settled);

        let resettled = resubmitted.settle(Outcome::failure("late"));
        assert_eq!(resettled.view(), View::Success);
    }

    #[test]
    fn test_idle_ignores_settle() {
        let form = ContactForm::new().settle(Outcome::Success);

        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn test_view_names() {
        assert_eq!(View::Form.to_string(), "form");
        assert_eq!(View::Failure.as_ref(), "failure");
    }
}
