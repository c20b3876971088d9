use super::{error::Result, Stream, Unwrapped};

/// The elements of a bidirectional stream in reverse order.
///
/// Forward and backward, beginning and end swap meaning relative to the
/// wrapped stream. A forward-only stream reverses to an empty one.
#[derive(Debug, Clone)]
pub struct ReversedStream<S> {
    inner: S,
}

impl<S: Stream> ReversedStream<S> {
    pub fn new(inner: S) -> Self {
        let mut s = Self { inner };
        s.set_to_begin();
        s
    }

    pub fn wrapped_stream(&self) -> &S {
        &self.inner
    }

    /// Reversing twice: hands back the original stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Stream> Stream for ReversedStream<S> {
    type Item = S::Item;

    fn at_beginning(&mut self) -> bool {
        self.inner.at_end()
    }

    fn at_end(&mut self) -> bool {
        self.inner.at_beginning()
    }

    fn basic_forward(&mut self) -> Result<S::Item> {
        self.inner.basic_backward()
    }

    fn basic_backward(&mut self) -> Result<S::Item> {
        self.inner.basic_forward()
    }

    fn set_to_begin(&mut self) {
        self.inner.set_to_end()
    }

    fn set_to_end(&mut self) {
        self.inner.set_to_begin()
    }
}

impl<S: Stream + Unwrapped> Unwrapped for ReversedStream<S> {
    type Base = S::Base;

    fn unwrapped(&self) -> &S::Base {
        self.inner.unwrapped()
    }
}
