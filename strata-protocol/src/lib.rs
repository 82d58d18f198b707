/*!
Query document construction for the Strata database client.

This crate contains the intermediate representation for a single database
operation -- [`Field`], [`Input`], [`Output`] and [`Query`] -- and the
compiler that serializes that representation into the textual query
document understood by the query engine. Generated model wrappers populate
the representation; [`strata-client`](https://docs.rs/strata-client)
dispatches the compiled document over a transport.

Compilation is pure and synchronous: every call receives its own tree and
produces its own string, so queries can be compiled from any number of
threads without coordination.

# Example

```rust
use strata_protocol::{Field, Input, Output, Query};

let query = Query {
    operation: "mutation".into(),
    name: "m".into(),
    method: "createOne".into(),
    model: "User".into(),
    inputs: vec![Input::fields("data", vec![Field::scalar("id", "x")])],
    outputs: vec![Output::leaf("id")],
};
assert_eq!(
    query.compile(),
    r#"mutation m{createOneUser(data:{id:"x",},) {id }}"#,
);
```
*/
pub mod builder;
pub mod value;

pub use builder::{Field, Input, Output, Query};
pub use value::Value;
