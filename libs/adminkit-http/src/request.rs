use crate::error::TransportError;
use serde::Serialize;
use serde_json::Value;

/// HTTP methods used by the admin REST surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_http(self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Post => http::Method::POST,
            Self::Put => http::Method::PUT,
            Self::Delete => http::Method::DELETE,
        }
    }
}

/// How the response body should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    #[default]
    Json,
    Text,
}

impl ResponseType {
    pub(crate) fn accept(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
        }
    }
}

/// Transport-independent description of one REST call.
///
/// `url` is usually a path such as `/api/saas/tenants`; executors resolve
/// it against their base URL. Query parameters are kept as ordered pairs
/// so test executors can assert on them directly.
///
/// # Example
///
/// ```ignore
/// let descriptor = RequestDescriptor::get("/api/saas/tenants")
///     .query(&GetTenantsInput { filter: Some("acme".into()), ..Default::default() })?;
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
    pub response_type: ResponseType,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: Vec::new(),
            body: None,
            response_type: ResponseType::Json,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Append the fields of `query` as request parameters.
    ///
    /// `null` fields are skipped and arrays repeat the key once per element.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Json` if `query` cannot be serialized and
    /// `TransportError::InvalidQuery` if it contains nested objects.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self, TransportError> {
        let value = serde_json::to_value(query)?;
        match value {
            Value::Null => {}
            Value::Object(map) => {
                for (key, value) in map {
                    push_param(&mut self.params, &key, value)?;
                }
            }
            _ => {
                return Err(TransportError::InvalidQuery {
                    key: String::new(),
                });
            }
        }
        Ok(self)
    }

    /// Append a single request parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Set a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Json` if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, TransportError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Interpret the response body as plain text.
    pub fn text(mut self) -> Self {
        self.response_type = ResponseType::Text;
        self
    }

    /// First value of the named parameter.
    #[must_use]
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn push_param(
    params: &mut Vec<(String, String)>,
    key: &str,
    value: Value,
) -> Result<(), TransportError> {
    match value {
        Value::Null => {}
        Value::Bool(b) => params.push((key.to_owned(), b.to_string())),
        Value::Number(n) => params.push((key.to_owned(), n.to_string())),
        Value::String(s) => params.push((key.to_owned(), s)),
        Value::Array(items) => {
            for item in items {
                push_param(params, key, item)?;
            }
        }
        Value::Object(_) => {
            return Err(TransportError::InvalidQuery {
                key: key.to_owned(),
            });
        }
    }
    Ok(())
}
