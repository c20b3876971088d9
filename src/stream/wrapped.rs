use super::{error::Result, Stream, Unwrapped};

/// A decorator that forwards every operation to the stream it wraps.
#[derive(Debug, Clone)]
pub struct WrappedStream<S> {
    inner: S,
}

impl<S> WrappedStream<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn wrapped_stream(&self) -> &S {
        &self.inner
    }

    pub fn wrapped_stream_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Stream> Stream for WrappedStream<S> {
    type Item = S::Item;

    fn at_beginning(&mut self) -> bool {
        self.inner.at_beginning()
    }

    fn at_end(&mut self) -> bool {
        self.inner.at_end()
    }

    fn basic_forward(&mut self) -> Result<S::Item> {
        self.inner.basic_forward()
    }

    fn basic_backward(&mut self) -> Result<S::Item> {
        self.inner.basic_backward()
    }

    fn set_to_begin(&mut self) {
        self.inner.set_to_begin()
    }

    fn set_to_end(&mut self) {
        self.inner.set_to_end()
    }

    fn current(&mut self) -> Result<S::Item> {
        self.inner.current()
    }

    fn peek(&mut self) -> Result<S::Item> {
        self.inner.peek()
    }
}

impl<S: Stream + Unwrapped> Unwrapped for WrappedStream<S> {
    type Base = S::Base;

    fn unwrapped(&self) -> &S::Base {
        self.inner.unwrapped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{CollectionStream, IntervalStream};

    #[test]
    fn test_delegation() {
        let mut s = WrappedStream::new(CollectionStream::new(vec![1, 2]));
        assert_eq!(s.to_vec(), [1, 2]);
        assert_eq!(s.current(), Ok(2));
        assert_eq!(s.wrapped_stream().pos(), 2);
        s.set_to_begin();
        assert_eq!(s.into_inner().pos(), 0);
    }

    #[test]
    fn test_unwrapped() {
        let mut s = WrappedStream::new(WrappedStream::new(IntervalStream::new(7)));
        assert_eq!(s.unwrapped().stop(), 7);
        s.wrapped_stream_mut().wrapped_stream_mut().increment_stop();
        assert_eq!(s.last(), Some(7));
    }
}
