use crate::error::TransportError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResponseBody {
    /// No content (e.g. `204` or a zero-length body)
    #[default]
    Empty,
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Decode the body into a typed value.
    ///
    /// An empty body decodes as JSON `null`, so `()` and `Option<T>`
    /// targets accept it.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Json` if the body does not match `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, TransportError> {
        let value = match self {
            Self::Empty => Value::Null,
            Self::Json(value) => value,
            Self::Text(text) => return Ok(serde_json::from_str(&text)?),
        };
        Ok(serde_json::from_value(value)?)
    }

    /// Body as text. JSON strings are unwrapped, other JSON is re-encoded.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) | Self::Json(Value::String(text)) => text,
            Self::Json(value) => value.to_string(),
        }
    }
}
