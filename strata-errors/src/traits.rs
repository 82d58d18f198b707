use std::borrow::Cow;
use std::error::Error as StdError;

use crate::error::Error;

/// Trait that marks Strata error kinds.
///
/// Error kinds are marker structs; they have no fields and are only used
/// to construct [`Error`] values and to check them via [`Error::is`].
pub trait ErrorKind: Sealed {
    fn build() -> Error {
        Error::from_code(Self::CODE)
    }
    fn with_message<S: Into<Cow<'static, str>>>(message: S) -> Error {
        Error::from_code(Self::CODE).context(message)
    }
    fn with_source<E>(source: E) -> Error
    where
        E: StdError + Send + Sync + 'static,
    {
        let mut err = Error::from_code(Self::CODE);
        err.0.error = Some(Box::new(source));
        err
    }
}

pub trait Sealed {
    const CODE: u32;
    fn is_superclass_of(code: u32) -> bool;
}

/// Extension trait for adding context to `Result<_, Error>`.
pub trait ResultExt<T> {
    fn context<S: Into<Cow<'static, str>>>(self, msg: S) -> Result<T, Error>;
}

impl<T> ResultExt<T> for Result<T, Error> {
    fn context<S: Into<Cow<'static, str>>>(self, msg: S) -> Result<T, Error> {
        self.map_err(|e| e.context(msg))
    }
}
