/*!
# Error Handling for Strata

All errors that the Strata client produces are encapsulated into the
[`Error`] structure. The structure is a bit like `Box<dyn Error>` or
`anyhow::Error`, except it can only contain Strata error types. Or
[`UserError`] can be used to encapsulate custom errors.

Each error kind is represented as a separate type that implements the
[`ErrorKind`] trait. But error kinds are used like marker structs; you can
use [`Error::is`] for error kinds and use them to create instances of the
error:

```rust
# use std::io;
# use strata_errors::{UserError, ErrorKind};
let err = UserError::with_source(io::Error::from(io::ErrorKind::NotFound));
assert!(err.is::<UserError>());
```

Since errors are hierarchical, [`Error::is`] works with any ancestor:

```rust
# use strata_errors::*;
# let err = NoConnectionError::with_message("test error");
assert!(err.is::<NoConnectionError>());
assert!(err.is::<ClientError>());  // implied by the assertion above
```

Extra context can be stacked onto an error as it propagates via
[`Error::context`] or [`ResultExt::context`]; the outermost message is
shown by the default [`Display`](std::fmt::Display) form, the alternate
form (`{:#}`) walks the whole chain.
*/
mod error;
mod traits;

pub mod kinds;

pub use error::Error;
pub use kinds::*;
pub use traits::{ErrorKind, ResultExt};
