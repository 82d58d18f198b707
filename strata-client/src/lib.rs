/*!
Client for the Strata database query engine.

The main way to use this crate is through [`Client`]. A client wraps a
[`Transport`] -- the wire connection to a running query engine process --
and executes [`Query`] values built by generated model wrappers: the query
is compiled into a single document string, handed to the transport, and the
reply is decoded into the caller's result type.

A client is constructed disconnected and becomes usable once a transport
is attached; executing a query on a disconnected client returns
[`NoConnectionError`](strata_errors::NoConnectionError).

# Example

```rust,no_run
use serde::Deserialize;
use strata_client::{Client, Output, Query};

#[derive(Deserialize)]
struct User {
    id: String,
}

# async fn main_(transport: impl strata_client::Transport + 'static) -> Result<(), strata_client::Error> {
let mut client = Client::new();
client.connect(transport);

let query = Query {
    operation: "query".into(),
    name: "q".into(),
    method: "findUnique".into(),
    model: "User".into(),
    outputs: vec![Output::leaf("id")],
    ..Query::default()
};
let user: User = client.execute(&query).await?;
# Ok(())
# }
```
*/
mod client;
mod transport;

pub use client::Client;
pub use transport::Transport;

pub use strata_errors::Error;
pub use strata_protocol::{Field, Input, Output, Query, Value};
