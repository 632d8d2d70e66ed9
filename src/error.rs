//! Error handling for the assistant.
//!
//! Internally everything is an `anyhow::Error` with context attached at each fallible step. When a
//! failure needs to be presented differently to the user (a rejected date versus a corrupt file),
//! the error is tagged with an [`ErrorType`] using [`IntoResult::pub_result`]. The tag travels as
//! anyhow context, so the full chain of messages is preserved.

use std::fmt::{Display, Formatter};

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// The broad category of a failure.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorType {
    /// User input was rejected, e.g. a malformed date or a non-numeric amount.
    Validation,
    /// The requested record or file does not exist.
    NotFound,
    /// A file could not be read or written.
    Io,
    /// Persisted content could not be deserialized.
    Parse,
    /// The configuration file is missing pieces or is invalid.
    Config,
    /// A calculator expression could not be evaluated.
    Expression,
}

impl ErrorType {
    /// Whether the interactive menu can report this failure and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorType::Validation | ErrorType::NotFound | ErrorType::Expression
        )
    }
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorType::Validation => "Validation error",
            ErrorType::NotFound => "Not found",
            ErrorType::Io => "I/O error",
            ErrorType::Parse => "Parse error",
            ErrorType::Config => "Configuration error",
            ErrorType::Expression => "Calculation error",
        };
        f.write_str(s)
    }
}

/// Tags an error with an [`ErrorType`].
pub trait IntoResult<T> {
    fn pub_result(self, error_type: ErrorType) -> Result<T>;
}

impl<T, E> IntoResult<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn pub_result(self, error_type: ErrorType) -> Result<T> {
        self.map_err(|e| Into::<Error>::into(e).context(error_type))
    }
}

/// Returns the outermost [`ErrorType`] attached to `err`, if any.
pub fn error_type(err: &Error) -> Option<ErrorType> {
    err.downcast_ref::<ErrorType>().copied()
}

/// Creates an error of the given type from a message.
pub(crate) fn typed(error_type: ErrorType, message: impl Into<String>) -> Error {
    anyhow::anyhow!(message.into()).context(error_type)
}
