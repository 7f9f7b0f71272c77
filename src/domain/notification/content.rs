//! Notification content and defaulting rules

use crate::domain::push::PushPayload;

/// Agent-level defaults applied when a payload omits optional fields.
///
/// The badge is a fixed agent resource and is never taken from the payload.
#[derive(Debug, Clone)]
pub struct NotificationDefaults {
    pub icon: String,
    pub badge: String,
    pub root_url: String,
}

/// The content of a rendered notification, resolved and ready to show.
///
/// `url` is the only payload data carried forward to the click path; it is
/// resolved here so the click handler never re-parses the original payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub url: String,
}

impl NotificationContent {
    /// Build notification content from a parsed payload, filling in defaults
    pub fn from_payload(payload: PushPayload, defaults: &NotificationDefaults) -> Self {
        Self {
            title: payload.title,
            body: payload.body,
            icon: payload.icon.unwrap_or_else(|| defaults.icon.clone()),
            badge: defaults.badge.clone(),
            url: payload.url.unwrap_or_else(|| defaults.root_url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> NotificationDefaults {
        NotificationDefaults {
            icon: "default-icon".to_string(),
            badge: "badge-resource".to_string(),
            root_url: "/".to_string(),
        }
    }

    fn payload(json: &[u8]) -> PushPayload {
        PushPayload::parse(json).unwrap()
    }

    #[test]
    fn carries_payload_fields_through() {
        let content = NotificationContent::from_payload(
            payload(br#"{"title":"T","body":"B","icon":"/i.png","url":"/x"}"#),
            &defaults(),
        );
        assert_eq!(content.title, "T");
        assert_eq!(content.body, "B");
        assert_eq!(content.icon, "/i.png");
        assert_eq!(content.url, "/x");
    }

    #[test]
    fn missing_icon_falls_back_to_default() {
        let content = NotificationContent::from_payload(
            payload(br#"{"title":"T","body":"B","url":"/x"}"#),
            &defaults(),
        );
        assert_eq!(content.icon, "default-icon");
    }

    #[test]
    fn missing_url_falls_back_to_root() {
        let content =
            NotificationContent::from_payload(payload(br#"{"title":"T","body":"B"}"#), &defaults());
        assert_eq!(content.url, "/");
    }

    #[test]
    fn badge_is_never_taken_from_the_payload() {
        let content = NotificationContent::from_payload(
            payload(br#"{"title":"T","body":"B","badge":"/evil.png"}"#),
            &defaults(),
        );
        assert_eq!(content.badge, "badge-resource");
    }
}
