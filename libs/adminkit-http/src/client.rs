use crate::config::{HttpExecutorConfig, TlsRoots, TransportSecurity};
use crate::error::TransportError;
use crate::executor::RequestExecutor;
use crate::request::{RequestDescriptor, ResponseType};
use crate::response::ResponseBody;
use crate::secret::AccessToken;
use crate::tls::crypto_provider;
use async_trait::async_trait;
use bytes::Bytes;
use http::header::{self, HeaderValue};
use http::{Request, StatusCode};
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

type HyperClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

/// [`RequestExecutor`] backed by a pooled hyper client with rustls.
///
/// Relative request paths are resolved against `base_url`; absolute
/// `http(s)://` URLs are used as-is. Every exchange (send plus body read) is
/// bounded by `request_timeout`. Non-2xx answers become
/// [`TransportError::Status`] carrying the backend's error message.
///
/// `HttpRequestExecutor` is `Clone + Send + Sync`; clones share the pool.
///
/// # Example
///
/// ```ignore
/// let config = AdminClientConfig::load(Some(Path::new("admin.yaml")))?;
/// let executor: Arc<dyn RequestExecutor> = Arc::new(HttpRequestExecutor::new(&config.http)?);
/// ```
#[derive(Clone)]
pub struct HttpRequestExecutor {
    client: HyperClient,
    settings: Arc<Settings>,
}

struct Settings {
    base_url: Option<String>,
    timeout: Duration,
    user_agent: HeaderValue,
    accept_language: Option<HeaderValue>,
    access_token: Option<AccessToken>,
    transport: TransportSecurity,
    max_body_size: usize,
}

impl HttpRequestExecutor {
    /// Build an executor from configuration.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Tls` if root certificates cannot be loaded
    /// and `TransportError::RequestBuild` for invalid header values.
    pub fn new(config: &HttpExecutorConfig) -> Result<Self, TransportError> {
        if config.transport == TransportSecurity::AllowInsecureHttp {
            tracing::warn!(
                "insecure HTTP enabled (TransportSecurity::AllowInsecureHttp); \
                 use only against local backends"
            );
        }

        let builder = hyper_rustls::HttpsConnectorBuilder::new();
        let builder = match config.tls_roots {
            TlsRoots::WebPki => builder
                .with_provider_and_webpki_roots(crypto_provider())
                .map_err(|e| TransportError::Tls(Box::new(e)))?,
            TlsRoots::Native => builder
                .with_provider_and_native_roots(crypto_provider())
                .map_err(|e| TransportError::Tls(Box::new(e)))?,
        };
        let builder = match config.transport {
            TransportSecurity::TlsOnly => builder.https_only(),
            TransportSecurity::AllowInsecureHttp => builder.https_or_http(),
        };
        let https = builder.enable_http1().enable_http2().build();

        let client = Client::builder(TokioExecutor::new())
            .pool_timer(TokioTimer::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .build(https);

        let user_agent = HeaderValue::try_from(config.user_agent.as_str())
            .map_err(|e| TransportError::RequestBuild(e.into()))?;
        let accept_language = config
            .accept_language
            .as_deref()
            .map(HeaderValue::try_from)
            .transpose()
            .map_err(|e| TransportError::RequestBuild(e.into()))?;

        Ok(Self {
            client,
            settings: Arc::new(Settings {
                base_url: config
                    .base_url
                    .as_deref()
                    .map(|b| b.trim_end_matches('/').to_owned()),
                timeout: config.request_timeout,
                user_agent,
                accept_language,
                access_token: config.access_token.clone(),
                transport: config.transport,
                max_body_size: config.max_body_size,
            }),
        })
    }

    fn resolve_url(&self, descriptor: &RequestDescriptor) -> Result<Url, TransportError> {
        let raw = if descriptor.url.starts_with("http://") || descriptor.url.starts_with("https://")
        {
            descriptor.url.clone()
        } else {
            let base = self
                .settings
                .base_url
                .as_deref()
                .ok_or_else(|| TransportError::InvalidUrl {
                    url: descriptor.url.clone(),
                    reason: "relative path without a configured base_url".to_owned(),
                })?;
            if descriptor.url.starts_with('/') {
                format!("{base}{}", descriptor.url)
            } else {
                format!("{base}/{}", descriptor.url)
            }
        };

        let mut url = Url::parse(&raw).map_err(|e| TransportError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if url.scheme() == "http" && self.settings.transport == TransportSecurity::TlsOnly {
            return Err(TransportError::InvalidUrl {
                url: raw,
                reason: "plain http is not allowed; use https or AllowInsecureHttp".to_owned(),
            });
        }

        if !descriptor.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &descriptor.params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn build_request(
        &self,
        url: &Url,
        descriptor: &RequestDescriptor,
    ) -> Result<Request<Full<Bytes>>, TransportError> {
        let mut builder = Request::builder()
            .method(descriptor.method.as_http())
            .uri(url.as_str())
            .header(header::USER_AGENT, self.settings.user_agent.clone())
            .header(header::ACCEPT, descriptor.response_type.accept());

        if let Some(language) = &self.settings.accept_language {
            builder = builder.header(header::ACCEPT_LANGUAGE, language.clone());
        }
        if let Some(token) = &self.settings.access_token {
            let mut value = HeaderValue::try_from(format!("Bearer {}", token.expose()))
                .map_err(|e| TransportError::RequestBuild(e.into()))?;
            value.set_sensitive(true);
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let body = match &descriptor.body {
            Some(body) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Full::new(Bytes::from(serde_json::to_vec(body)?))
            }
            None => Full::new(Bytes::new()),
        };

        Ok(builder.body(body)?)
    }

    async fn exchange(
        &self,
        request: Request<Full<Bytes>>,
    ) -> Result<(StatusCode, Bytes), TransportError> {
        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| TransportError::Transport(Box::new(e)))?;
        let status = response.status();
        let limit = self.settings.max_body_size;
        let body = Limited::new(response.into_body(), limit)
            .collect()
            .await
            .map_err(|e| {
                if e.downcast_ref::<LengthLimitError>().is_some() {
                    TransportError::BodyTooLarge { limit }
                } else {
                    TransportError::Transport(e)
                }
            })?
            .to_bytes();
        Ok((status, body))
    }
}

#[async_trait]
impl RequestExecutor for HttpRequestExecutor {
    async fn request(&self, descriptor: RequestDescriptor) -> Result<ResponseBody, TransportError> {
        let url = self.resolve_url(&descriptor)?;
        let request = self.build_request(&url, &descriptor)?;
        let timeout = self.settings.timeout;
        let started = Instant::now();

        let (status, body) = tokio::time::timeout(timeout, self.exchange(request))
            .await
            .map_err(|_| TransportError::Timeout(timeout))??;

        tracing::debug!(
            method = %descriptor.method.as_http(),
            path = url.path(),
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "admin request completed"
        );

        if !status.is_success() {
            let err = TransportError::from_response(status, &body);
            tracing::warn!(
                method = %descriptor.method.as_http(),
                path = url.path(),
                status = status.as_u16(),
                error = %err,
                "admin request failed"
            );
            return Err(err);
        }

        decode_body(descriptor.response_type, &body)
    }
}

fn decode_body(response_type: ResponseType, body: &Bytes) -> Result<ResponseBody, TransportError> {
    if body.is_empty() {
        return Ok(ResponseBody::Empty);
    }
    match response_type {
        ResponseType::Json => Ok(ResponseBody::Json(serde_json::from_slice(body)?)),
        ResponseType::Text => Ok(ResponseBody::Text(
            String::from_utf8_lossy(body).into_owned(),
        )),
    }
}
