use std::sync::Arc;

use async_trait::async_trait;
use strata_errors::Error;

/// The wire boundary to a running query engine.
///
/// Implementations own the actual connection -- a spawned engine process,
/// a local socket or an HTTP endpoint -- and are responsible for parsing
/// the engine's reply envelope down to the payload destined for the
/// caller, reporting engine-side failures as
/// [`QueryError`](strata_errors::QueryError) and connection failures as
/// [`TransportError`](strata_errors::TransportError).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one compiled query document and return the reply payload.
    async fn send(&self, document: &str) -> Result<serde_json::Value, Error>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, document: &str) -> Result<serde_json::Value, Error> {
        (**self).send(document).await
    }
}
