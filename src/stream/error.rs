//! Error management.

use derive_more::Display;

/// Raised by [`Stream::forward`](super::Stream::forward) and
/// [`Stream::backward`](super::Stream::backward) when the cursor already sits
/// on the boundary in the requested direction.
///
/// Callers are expected to check `at_end`/`at_beginning` first; this is the
/// exceptional path.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    #[display(fmt = "end of stream")]
    EndOfStream,
}

impl std::error::Error for StreamError {}

pub type Result<T> = std::result::Result<T, StreamError>;
