//! Untrusted push payload model

use serde::Deserialize;

use crate::domain::error::PayloadError;

/// A push payload as delivered by the transport.
///
/// The structure is untrusted: the bytes may fail to decode entirely, and
/// `icon` and `url` are optional even in well-formed payloads. Unknown extra
/// fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PushPayload {
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
    pub url: Option<String>,
}

impl PushPayload {
    /// Parse a payload from the raw bytes delivered with a push event
    pub fn parse(bytes: &[u8]) -> Result<Self, PayloadError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let payload =
            PushPayload::parse(br#"{"title":"T","body":"B","icon":"/i.png","url":"/x"}"#).unwrap();
        assert_eq!(payload.title, "T");
        assert_eq!(payload.body, "B");
        assert_eq!(payload.icon.as_deref(), Some("/i.png"));
        assert_eq!(payload.url.as_deref(), Some("/x"));
    }

    #[test]
    fn icon_and_url_are_optional() {
        let payload = PushPayload::parse(br#"{"title":"T","body":"B"}"#).unwrap();
        assert!(payload.icon.is_none());
        assert!(payload.url.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload =
            PushPayload::parse(br#"{"title":"T","body":"B","ttl":60,"topic":"misc"}"#).unwrap();
        assert_eq!(payload.title, "T");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PushPayload::parse(b"not json").is_err());
        assert!(PushPayload::parse(b"").is_err());
        assert!(PushPayload::parse(br#"{"title":"T"}"#).is_err());
    }
}
