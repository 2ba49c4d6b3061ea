//! Wire format of the waitlist registration endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinWaitlistRequest {
    pub email: EmailAddress,
}

/// Body of a non-2xx response. Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl WaitlistErrorBody {
    /// The endpoint-supplied message, if it carries any text.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_single_email_field() {
        let request = JoinWaitlistRequest {
            email: EmailAddress::parse("a@b.com").expect("valid"),
        };
        assert_eq!(
            serde_json::to_value(&request).expect("json"),
            serde_json::json!({ "email": "a@b.com" })
        );
    }

    #[test]
    fn error_body_tolerates_missing_blank_and_extra_fields() {
        let empty: WaitlistErrorBody = serde_json::from_str("{}").expect("json");
        assert_eq!(empty.message(), None);

        let blank: WaitlistErrorBody =
            serde_json::from_str(r#"{"message":"  "}"#).expect("json");
        assert_eq!(blank.message(), None);

        let full: WaitlistErrorBody =
            serde_json::from_str(r#"{"message":"already registered","code":409}"#)
                .expect("json");
        assert_eq!(full.message(), Some("already registered"));
    }
}
