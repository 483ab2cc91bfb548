pub mod kind;

use boolsimp_error::ErrorKind;
use std::{fmt, ops::Range};

/// A syntax error produced while parsing an expression.
#[derive(Debug)]
pub struct Error {
    /// The 0-based position, in the whitespace-stripped input, at which the error was detected.
    pub position: usize,

    /// The underlying error, with the regions of the raw input that it points at.
    pub inner: boolsimp_error::Error,
}

impl Error {
    /// Creates a new error with the given position, spans and kind.
    pub fn new(position: usize, spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self {
            position,
            inner: boolsimp_error::Error::new(spans, kind),
        }
    }

    /// Returns the concrete error kind if it is of type `T`.
    pub fn kind<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.inner.downcast_kind::<T>()
    }

    /// Returns the regions of the raw input that this error points at.
    pub fn spans(&self) -> &[Range<usize>] {
        &self.inner.spans
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> std::io::Result<()> {
        self.inner.report_to_stderr(src_id, input)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl std::error::Error for Error {}

impl From<Error> for boolsimp_error::Error {
    fn from(err: Error) -> Self {
        err.inner
    }
}
