use super::{
    error::{Result, StreamError},
    Stream, Unwrapped,
};
use std::marker::PhantomData;

/// The stream without elements. It carries no state, so every value is
/// interchangeable with [`EmptyStream::new`].
pub struct EmptyStream<T>(PhantomData<fn() -> T>);

impl<T> EmptyStream<T> {
    pub const fn new() -> Self {
        EmptyStream(PhantomData)
    }
}

impl<T> Default for EmptyStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EmptyStream<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for EmptyStream<T> {}

impl<T> std::fmt::Debug for EmptyStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EmptyStream")
    }
}

impl<T> Stream for EmptyStream<T> {
    type Item = T;

    fn at_beginning(&mut self) -> bool {
        true
    }

    fn at_end(&mut self) -> bool {
        true
    }

    fn basic_forward(&mut self) -> Result<T> {
        Err(StreamError::EndOfStream)
    }

    fn basic_backward(&mut self) -> Result<T> {
        Err(StreamError::EndOfStream)
    }

    fn set_to_begin(&mut self) {}

    fn set_to_end(&mut self) {}
}

impl<T> Unwrapped for EmptyStream<T> {
    type Base = Self;

    fn unwrapped(&self) -> &Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stream() {
        let mut s = EmptyStream::<i32>::new();
        assert!(s.is_empty());
        assert_eq!(s.forward(), Err(StreamError::EndOfStream));
        assert_eq!(s.backward(), Err(StreamError::EndOfStream));
        assert!(s.to_vec().is_empty());
        assert_eq!(s.reversed().first(), None);
    }
}
