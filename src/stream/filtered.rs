use super::{
    error::{Result, StreamError},
    IntervalStream, Stream, Unwrapped,
};

/// The elements of the wrapped stream satisfying a predicate.
///
/// `at_end` has to look ahead for the next match. The match found is kept
/// in a one-slot buffer, so the lookahead is never lost, and an
/// [`IntervalStream`] counts the matches discovered so far: its position is
/// the position of this stream, its bound grows by one per new match.
pub struct FilteredStream<'a, S: Stream> {
    inner: S,
    filter: Box<dyn FnMut(&S::Item) -> bool + 'a>,
    position: IntervalStream,
    peek: Option<S::Item>,
}

impl<'a, S: Stream> FilteredStream<'a, S> {
    pub fn new<P>(inner: S, filter: P) -> Self
    where
        P: FnMut(&S::Item) -> bool + 'a,
    {
        let mut s = Self {
            inner,
            filter: Box::new(filter),
            position: IntervalStream::new(0),
            peek: None,
        };
        s.set_to_begin();
        s
    }

    /// Number of matching elements before the cursor.
    pub fn pos(&self) -> usize {
        self.position.pos()
    }

    pub fn wrapped_stream(&self) -> &S {
        &self.inner
    }

    fn next_match(&mut self) -> Option<S::Item> {
        let filter = &mut self.filter;
        self.inner.move_forward_until(&mut |element| filter(element))
    }
}

impl<'a, S: Stream> Stream for FilteredStream<'a, S> {
    type Item = S::Item;

    fn at_beginning(&mut self) -> bool {
        self.position.at_beginning()
    }

    fn at_end(&mut self) -> bool {
        if !self.position.at_end() {
            return false;
        }
        if self.peek.is_none() {
            match self.next_match() {
                Some(element) => {
                    self.peek = Some(element);
                    self.position.increment_stop();
                }
                None => return true,
            }
        }
        false
    }

    fn basic_forward(&mut self) -> Result<S::Item> {
        let element = match self.peek.take() {
            Some(element) => element,
            None => {
                let element = self.next_match().ok_or(StreamError::EndOfStream)?;
                if self.position.at_end() {
                    self.position.increment_stop();
                }
                element
            }
        };
        self.position.basic_forward()?;
        Ok(element)
    }

    fn basic_backward(&mut self) -> Result<S::Item> {
        if self.position.at_beginning() {
            return Err(StreamError::EndOfStream);
        }
        if self.peek.take().is_some() {
            // hand the unconsumed lookahead back to the wrapped stream
            self.inner.backward()?;
        }
        self.position.basic_backward()?;
        let filter = &mut self.filter;
        self.inner
            .move_backward_until(&mut |element| filter(element))
            .ok_or(StreamError::EndOfStream)
    }

    fn set_to_begin(&mut self) {
        self.inner.set_to_begin();
        self.peek = None;
        self.position.set_to_begin();
    }
}

impl<'a, S: Stream + Unwrapped> Unwrapped for FilteredStream<'a, S> {
    type Base = S::Base;

    fn unwrapped(&self) -> &S::Base {
        self.inner.unwrapped()
    }
}

impl<'a, S: Stream + std::fmt::Debug> std::fmt::Debug for FilteredStream<'a, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredStream")
            .field("inner", &self.inner)
            .field("position", &self.position)
            .field("peek", &self.peek.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::CollectionStream;

    fn evens() -> FilteredStream<'static, CollectionStream<i32>> {
        (1..=6).collect::<CollectionStream<_>>().filtered(|x| x % 2 == 0)
    }

    #[test]
    fn test_filtered() {
        let mut s = evens();
        assert_eq!(s.to_vec(), [2, 4, 6]);
        assert_eq!(s.to_vec(), [2, 4, 6]);
        assert_eq!(s.pos(), 3);
    }

    #[test]
    fn test_lookahead_is_not_consumed() {
        let mut s = evens();
        assert!(!s.at_end());
        assert!(!s.at_end());
        assert_eq!(s.wrapped_stream().pos(), 2);
        assert_eq!(s.forward(), Ok(2));
        assert_eq!(s.forward(), Ok(4));
    }

    #[test]
    fn test_backward_returns_lookahead() {
        let mut s = evens();
        assert_eq!(s.forward(), Ok(2));
        assert!(!s.at_end());
        assert_eq!(s.wrapped_stream().pos(), 4);
        assert_eq!(s.backward(), Ok(2));
        assert!(s.at_beginning());
        assert_eq!(s.wrapped_stream().pos(), 1);
        assert_eq!(s.forward(), Ok(2));
        assert_eq!(s.forward(), Ok(4));
        assert_eq!(s.backward(), Ok(4));
        assert_eq!(s.forward(), Ok(4));
        assert_eq!(s.forward(), Ok(6));
        assert!(s.at_end());
        assert_eq!(s.forward(), Err(StreamError::EndOfStream));
    }

    #[test]
    fn test_set_to_end_and_reverse() {
        let mut s = evens();
        s.set_to_end();
        assert_eq!(s.pos(), 3);
        assert_eq!(s.backward(), Ok(6));
        assert_eq!(evens().reversed().to_vec(), [6, 4, 2]);
    }

    #[test]
    fn test_nothing_matches() {
        let mut s = CollectionStream::new(vec![1, 3, 5]).filtered(|x| *x > 10);
        assert!(s.at_end());
        assert!(s.is_empty());
        assert_eq!(s.first(), None);
    }
}
