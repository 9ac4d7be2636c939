use serde::{Deserialize, Serialize, Serializer};

/// Contact details and message collected for one submission
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Inquiry {
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Result of forwarding an inquiry to the email provider
///
/// Serialized as `{"success": true}` or `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success,
    Failure { reason: String },
}

impl Outcome {
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[derive(Serialize)]
struct OutcomeBody<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            Self::Success => OutcomeBody {
                success: true,
                error: None,
            },
            Self::Failure { reason } => OutcomeBody {
                success: false,
                error: Some(reason),
            },
        };

        body.serialize(serializer)
    }
}
