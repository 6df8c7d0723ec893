/// Subscription request encoding and response interpretation
use serde::Deserialize;

use crate::config::SubscribeConfig;

/// Body returned by the subscription endpoint
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SubscribeResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// How a single submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubscribeOutcome {
    Success,
    /// The server answered `ok: false`, with its message if any
    Rejected(Option<String>),
    /// Transport failure or an unexpected body
    NetworkError,
}

impl SubscribeOutcome {
    pub fn from_response(response: SubscribeResponse) -> SubscribeOutcome {
        if response.ok {
            SubscribeOutcome::Success
        } else {
            SubscribeOutcome::Rejected(response.error)
        }
    }

    /// Interpret a raw response body. Anything that is not the expected
    /// JSON shape counts as a network failure.
    pub fn from_body(body: &str) -> SubscribeOutcome {
        match serde_json::from_str::<SubscribeResponse>(body) {
            Ok(response) => SubscribeOutcome::from_response(response),
            Err(e) => {
                log::debug!("Unexpected subscribe response: {}", e);
                SubscribeOutcome::NetworkError
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubscribeOutcome::Success)
    }

    /// Button text shown until the revert timer fires
    pub fn label<'a>(&'a self, config: &'a SubscribeConfig) -> &'a str {
        match self {
            SubscribeOutcome::Success => &config.success_text,
            SubscribeOutcome::Rejected(Some(message)) if !message.trim().is_empty() => message,
            SubscribeOutcome::Rejected(_) => &config.error_text,
            SubscribeOutcome::NetworkError => &config.network_error_text,
        }
    }
}

/// Encode the submission as `application/x-www-form-urlencoded`
pub fn encode_form(config: &SubscribeConfig, email: &str, csrf_token: Option<&str>) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    serializer.append_pair(&config.email_field, email);
    if let Some(token) = csrf_token {
        serializer.append_pair(&config.csrf_field, token);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let outcome = SubscribeOutcome::from_body(r#"{"ok": true}"#);
        let config = SubscribeConfig::default();

        assert_eq!(outcome, SubscribeOutcome::Success);
        assert!(outcome.is_success());
        assert_eq!(outcome.label(&config), "Готово ✓");
    }

    #[test]
    fn test_rejected_with_message() {
        let outcome = SubscribeOutcome::from_body(r#"{"ok": false, "error": "Invalid"}"#);
        let config = SubscribeConfig::default();

        assert_eq!(outcome, SubscribeOutcome::Rejected(Some("Invalid".to_string())));
        assert!(!outcome.is_success());
        assert_eq!(outcome.label(&config), "Invalid");
    }

    #[test]
    fn test_rejected_without_message_uses_fallback() {
        let config = SubscribeConfig::default();

        assert_eq!(SubscribeOutcome::from_body(r#"{"ok": false}"#).label(&config), "Ошибка");
        assert_eq!(
            SubscribeOutcome::from_body(r#"{"ok": false, "error": null}"#).label(&config),
            "Ошибка"
        );
        assert_eq!(
            SubscribeOutcome::from_body(r#"{"ok": false, "error": " "}"#).label(&config),
            "Ошибка"
        );
    }

    #[test]
    fn test_unexpected_body_is_network_error() {
        let config = SubscribeConfig::default();

        for body in ["", "<html>502</html>", r#"{"error": "x"}"#, r#"{"ok": "yes"}"#] {
            let outcome = SubscribeOutcome::from_body(body);
            assert_eq!(outcome, SubscribeOutcome::NetworkError);
            assert_eq!(outcome.label(&config), "Ошибка сети");
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let outcome = SubscribeOutcome::from_body(r#"{"ok": true, "id": 7}"#);

        assert_eq!(outcome, SubscribeOutcome::Success);
    }

    #[test]
    fn test_encode_form_email_only() {
        let config = SubscribeConfig::default();

        assert_eq!(encode_form(&config, "a+b@example.com", None), "email=a%2Bb%40example.com");
    }

    #[test]
    fn test_encode_form_with_token() {
        let config = SubscribeConfig::default();

        assert_eq!(
            encode_form(&config, "me@example.com", Some("tok en")),
            "email=me%40example.com&csrfmiddlewaretoken=tok+en"
        );
    }
}
