use askama::Template;
use strukter_mailer::{EmailConfig, OutgoingEmail};

use crate::Inquiry;

#[derive(Template)]
#[template(path = "inquiry.html")]
pub struct InquiryHtmlTemplate<'a> {
    pub inquiry: &'a Inquiry,
}

#[derive(Template)]
#[template(path = "inquiry.txt")]
pub struct InquiryPlainTemplate<'a> {
    pub inquiry: &'a Inquiry,
}

/// Fixed envelope of the inquiry notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub from: String,
    pub to: String,
    pub subject: String,
}

impl From<&EmailConfig> for Notification {
    fn from(config: &EmailConfig) -> Self {
        Self {
            from: config.from_address.to_owned(),
            to: config.contact_address.to_owned(),
            subject: config.inquiry_subject.to_owned(),
        }
    }
}

impl Notification {
    /// Render the inquiry into the notification email.
    ///
    /// Submitter content is HTML-escaped in the html part and kept verbatim in the plain part.
    pub fn compose(&self, inquiry: &Inquiry) -> askama::Result<OutgoingEmail> {
        let html = InquiryHtmlTemplate { inquiry }.render()?;
        let plain = InquiryPlainTemplate { inquiry }.render()?;

        Ok(OutgoingEmail {
            from: self.from.to_owned(),
            to: self.to.to_owned(),
            subject: self.subject.to_owned(),
            html,
            plain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Inquiry {
        Inquiry {
            fname: "Jane".to_owned(),
            lname: "Doe".to_owned(),
            email: "jane@x.com".to_owned(),
            phone: "555-0100".to_owned(),
            message: "Hi".to_owned(),
        }
    }

    #[test]
    fn test_compose_uses_fixed_envelope() {
        let notification = Notification::from(&EmailConfig::default());
        let email = notification.compose(&jane()).unwrap();

        assert_eq!(email.from, "max@strukter.io");
        assert_eq!(email.to, "max@strukter.io");
        assert_eq!(email.subject, "Strukter Website Inquiry");
    }

    #[test]
    fn test_compose_body_layout() {
        let notification = Notification::from(&EmailConfig::default());
        let email = notification.compose(&jane()).unwrap();

        assert!(email.html.starts_with("<p>Hi\nJane Doe\njane@x.com\n555-0100</p>"));
        assert!(email.plain.starts_with("Hi\nJane Doe\njane@x.com\n555-0100"));
    }

    #[test]
    fn test_compose_escapes_html_part_only() {
        let notification = Notification::from(&EmailConfig::default());
        let inquiry = Inquiry {
            message: "<script>alert(1)</script>".to_owned(),
            ..jane()
        };
        let email = notification.compose(&inquiry).unwrap();

        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script"));
        assert!(email.plain.contains("<script>alert(1)</script>"));
    }
}
