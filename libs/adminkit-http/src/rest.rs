use crate::error::TransportError;
use crate::executor::RequestExecutor;
use crate::request::RequestDescriptor;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Typed helper over a [`RequestExecutor`] rooted at one API base path.
///
/// Entity services hold a `RestClient` and translate their typed calls into
/// descriptors; no state is kept between calls. Cloning is cheap.
///
/// ```ignore
/// let rest = RestClient::new(executor, "/api/saas");
/// let tenant: TenantDto = rest.get_json(&rest.url(&["tenants", id]), None::<&()>).await?;
/// ```
#[derive(Clone)]
pub struct RestClient {
    executor: Arc<dyn RequestExecutor>,
    base_path: String,
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

impl RestClient {
    pub fn new(executor: Arc<dyn RequestExecutor>, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into().trim_end_matches('/').to_owned();
        Self {
            executor,
            base_path,
        }
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Join the base path with percent-encoded path segments.
    #[must_use]
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_path.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// Send a prepared descriptor and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`TransportError`] or a decode failure.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, TransportError> {
        self.executor.request(descriptor).await?.into_json()
    }

    /// GET `url` with optional query parameters.
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`TransportError`] or a decode failure.
    pub async fn get_json<T, Q>(&self, url: &str, query: Option<&Q>) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut descriptor = RequestDescriptor::get(url);
        if let Some(query) = query {
            descriptor = descriptor.query(query)?;
        }
        self.send_json(descriptor).await
    }

    /// GET `url` and return the body as text.
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`TransportError`].
    pub async fn get_text(&self, url: &str) -> Result<String, TransportError> {
        let body = self
            .executor
            .request(RequestDescriptor::get(url).text())
            .await?;
        Ok(body.into_text())
    }

    /// POST a JSON body.
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`TransportError`] or a codec failure.
    pub async fn post_json<T, B>(&self, url: &str, body: &B) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(RequestDescriptor::post(url).json(body)?)
            .await
    }

    /// PUT a JSON body.
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`TransportError`] or a codec failure.
    pub async fn put_json<T, B>(&self, url: &str, body: &B) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(RequestDescriptor::put(url).json(body)?).await
    }

    /// DELETE `url`, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`TransportError`].
    pub async fn delete(&self, url: &str) -> Result<(), TransportError> {
        self.executor.request(RequestDescriptor::delete(url)).await?;
        Ok(())
    }

    /// Execute a descriptor whose response body is irrelevant.
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`TransportError`].
    pub async fn execute(&self, descriptor: RequestDescriptor) -> Result<(), TransportError> {
        self.executor.request(descriptor).await?;
        Ok(())
    }
}
