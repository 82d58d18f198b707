use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use strata_errors::{DecodeError, Error, ErrorKind, NoConnectionError, ResultExt};
use strata_protocol::Query;

use crate::transport::Transport;

/// Strata database client.
///
/// A shallow handle around the [`Transport`] that reaches the query
/// engine; cloning it is cheap and clones share the same connection.
/// Queries are one-shot: each [`execute`](Client::execute) call compiles
/// its query, performs a single transport round-trip and decodes the
/// reply. There are no retries and no caching.
#[derive(Clone, Default)]
pub struct Client {
    transport: Option<Arc<dyn Transport>>,
}

impl Client {
    /// Create a disconnected client.
    ///
    /// Attach a transport with [`connect`](Client::connect) before
    /// executing queries.
    pub fn new() -> Client {
        Client { transport: None }
    }

    /// Create a client over an already-established transport.
    pub fn with_transport(transport: impl Transport + 'static) -> Client {
        Client {
            transport: Some(Arc::new(transport)),
        }
    }

    /// Attach the transport that reaches the query engine.
    pub fn connect(&mut self, transport: impl Transport + 'static) {
        self.transport = Some(Arc::new(transport));
    }

    /// Drop the transport; subsequent executes fail with
    /// [`NoConnectionError`].
    pub fn disconnect(&mut self) {
        self.transport = None;
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Execute a query and return the raw reply payload.
    pub async fn execute_json(&self, query: &Query) -> Result<serde_json::Value, Error> {
        let transport = self.transport.as_ref().ok_or_else(|| {
            NoConnectionError::with_message(
                "client is not connected; attach a transport before executing queries",
            )
        })?;

        let document = query.compile();
        log::debug!("executing query: `{}`", document);

        transport
            .send(&document)
            .await
            .context(format!("{}{} query failed", query.method, query.model))
    }

    /// Execute a query and decode the reply into `R`.
    ///
    /// ```rust,no_run
    /// # async fn main_(client: strata_client::Client, query: strata_client::Query)
    /// #     -> Result<(), strata_client::Error> {
    /// let titles: Vec<String> = client.execute(&query).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute<R: DeserializeOwned>(&self, query: &Query) -> Result<R, Error> {
        let payload = self.execute_json(query).await?;
        serde_json::from_value(payload).map_err(|e| {
            DecodeError::with_source(e).context(format!(
                "cannot decode {}{} reply",
                query.method, query.model
            ))
        })
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Client")
            .field("connected", &self.transport.is_some())
            .finish()
    }
}
