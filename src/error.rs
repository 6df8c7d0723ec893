/// Crate error type
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("missing capability: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(describe_js(&value))
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Render a thrown JS value as text
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();

        assert!(err.to_string().starts_with("invalid configuration:"));
    }

    #[test]
    fn test_unsupported_message() {
        let err = Error::Unsupported("clipboard");

        assert_eq!(err.to_string(), "missing capability: clipboard");
    }
}
