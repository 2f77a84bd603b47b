//! DTOs for the contact endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::ContactForm;

/// Contact form payload.
///
/// Sent by the form controller as JSON; the endpoint also accepts the same
/// fields form-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactRequest {
    /// Parses a JSON body.
    ///
    /// Returns `None` unless the body is a non-empty JSON object, in which
    /// case the caller falls back to form-encoded parsing. String and numeric
    /// values are accepted; any other value type counts as absent.
    pub fn from_json_slice(body: &[u8]) -> Option<Self> {
        let Value::Object(map) = serde_json::from_slice::<Value>(body).ok()? else {
            return None;
        };

        if map.is_empty() {
            return None;
        }

        Some(Self {
            name: scalar_field(&map, "name"),
            email: scalar_field(&map, "email"),
            subject: scalar_field(&map, "subject"),
            message: scalar_field(&map, "message"),
        })
    }
}

fn scalar_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl From<ContactRequest> for ContactForm {
    fn from(request: ContactRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        }
    }
}

/// Response body for every contact endpoint outcome.
///
/// ```json
/// { "success": true, "message": "Thank you for your message! I will get back to you soon." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
