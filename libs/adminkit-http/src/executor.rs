use crate::error::TransportError;
use crate::request::RequestDescriptor;
use crate::response::ResponseBody;
use async_trait::async_trait;
use std::sync::Arc;

/// Injected REST transport consumed by every entity service.
///
/// Implementations must fail with a [`TransportError`] for any non-2xx
/// response; a successful return always means the backend accepted the call.
/// Timeouts and retries, if any, belong to the implementation.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Execute one request and decode its body per `descriptor.response_type`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network failure, timeout or any
    /// non-2xx status.
    async fn request(&self, descriptor: RequestDescriptor) -> Result<ResponseBody, TransportError>;
}

#[async_trait]
impl<E: RequestExecutor + ?Sized> RequestExecutor for Arc<E> {
    async fn request(&self, descriptor: RequestDescriptor) -> Result<ResponseBody, TransportError> {
        (**self).request(descriptor).await
    }
}
