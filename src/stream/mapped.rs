use super::{error::Result, Stream, Unwrapped};

/// Applies a mapping to every element the wrapped stream yields.
///
/// Boundary checks and repositioning pass through unchanged.
pub struct MappedStream<'a, S: Stream, T> {
    inner: S,
    mapping: Box<dyn FnMut(S::Item) -> T + 'a>,
}

impl<'a, S: Stream, T> MappedStream<'a, S, T> {
    pub fn new<F>(inner: S, mapping: F) -> Self
    where
        F: FnMut(S::Item) -> T + 'a,
    {
        Self {
            inner,
            mapping: Box::new(mapping),
        }
    }

    pub fn wrapped_stream(&self) -> &S {
        &self.inner
    }
}

impl<'a, S: Stream, T> Stream for MappedStream<'a, S, T> {
    type Item = T;

    fn at_beginning(&mut self) -> bool {
        self.inner.at_beginning()
    }

    fn at_end(&mut self) -> bool {
        self.inner.at_end()
    }

    fn basic_forward(&mut self) -> Result<T> {
        let element = self.inner.basic_forward()?;
        Ok((self.mapping)(element))
    }

    fn basic_backward(&mut self) -> Result<T> {
        let element = self.inner.basic_backward()?;
        Ok((self.mapping)(element))
    }

    fn set_to_begin(&mut self) {
        self.inner.set_to_begin()
    }

    fn set_to_end(&mut self) {
        self.inner.set_to_end()
    }
}

impl<'a, S: Stream + Unwrapped, T> Unwrapped for MappedStream<'a, S, T> {
    type Base = S::Base;

    fn unwrapped(&self) -> &S::Base {
        self.inner.unwrapped()
    }
}

impl<'a, S: Stream + std::fmt::Debug, T> std::fmt::Debug for MappedStream<'a, S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedStream")
            .field("inner", &self.inner)
            .finish()
    }
}
