use super::{
    error::{Result, StreamError},
    Stream,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    None,
    Forward,
    Backward,
}

/// The concatenation of the streams yielded by a stream of streams.
///
/// The active sub-stream is `None` once either end of the outer stream has
/// been reached; that state behaves like an exhausted stream. When the
/// active sub-stream runs out, the outer stream is advanced to the next
/// non-empty sub-stream. If the previous outer move went the other way, the
/// first sub-stream fetched is the one just left and is skipped.
pub struct ConcatenatedStream<S: Stream> {
    streams: S,
    current: Option<S::Item>,
    last_move: Move,
}

impl<S> ConcatenatedStream<S>
where
    S: Stream,
    S::Item: Stream,
{
    pub fn new(streams: S) -> Self {
        Self {
            streams,
            current: None,
            last_move: Move::None,
        }
    }

    pub fn streams(&self) -> &S {
        &self.streams
    }

    fn reached_boundary(&mut self) -> bool {
        self.current = None;
        self.last_move = Move::None;
        true
    }
}

impl<S> Stream for ConcatenatedStream<S>
where
    S: Stream,
    S::Item: Stream,
{
    type Item = <S::Item as Stream>::Item;

    fn at_end(&mut self) -> bool {
        if let Some(current) = self.current.as_mut() {
            if !current.at_end() {
                return false;
            }
        }
        while !self.streams.at_end() {
            let last_move = std::mem::replace(&mut self.last_move, Move::Forward);
            let mut s = match self.streams.basic_forward() {
                Ok(s) => s,
                Err(_) => break,
            };
            if last_move == Move::Backward {
                continue;
            }
            s.set_to_begin();
            if !s.at_end() {
                self.current = Some(s);
                return false;
            }
        }
        self.reached_boundary()
    }

    fn at_beginning(&mut self) -> bool {
        if let Some(current) = self.current.as_mut() {
            if !current.at_beginning() {
                return false;
            }
        }
        while !self.streams.at_beginning() {
            let last_move = std::mem::replace(&mut self.last_move, Move::Backward);
            let mut s = match self.streams.basic_backward() {
                Ok(s) => s,
                Err(_) => break,
            };
            if last_move == Move::Forward {
                continue;
            }
            s.set_to_end();
            if !s.at_beginning() {
                self.current = Some(s);
                return false;
            }
        }
        self.reached_boundary()
    }

    fn basic_forward(&mut self) -> Result<Self::Item> {
        match self.current.as_mut() {
            Some(current) => current.basic_forward(),
            None => Err(StreamError::EndOfStream),
        }
    }

    fn basic_backward(&mut self) -> Result<Self::Item> {
        match self.current.as_mut() {
            Some(current) => current.basic_backward(),
            None => Err(StreamError::EndOfStream),
        }
    }

    fn set_to_begin(&mut self) {
        self.streams.set_to_begin();
        self.reached_boundary();
    }

    fn set_to_end(&mut self) {
        self.streams.set_to_end();
        self.reached_boundary();
    }
}

impl<S> std::fmt::Debug for ConcatenatedStream<S>
where
    S: Stream + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcatenatedStream")
            .field("streams", &self.streams)
            .field("active", &self.current.is_some())
            .field("last_move", &self.last_move)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{CollectionStream, EmptyStream, IntervalStream};

    fn one_to_five() -> impl Stream<Item = i32> {
        let head: CollectionStream<_> = (1..=3).collect();
        head.concat(CollectionStream::new(vec![4, 5]))
    }

    #[test]
    fn test_concat() {
        assert_eq!(one_to_five().to_vec(), [1, 2, 3, 4, 5]);
        assert_eq!(one_to_five().reversed().to_vec(), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_bidirectional_at_boundary() {
        let mut s = one_to_five();
        for expected in 1..=4 {
            assert_eq!(s.forward(), Ok(expected));
        }
        assert_eq!(s.backward(), Ok(4));
        assert_eq!(s.backward(), Ok(3));
        assert_eq!(s.forward(), Ok(3));
        assert_eq!(s.forward(), Ok(4));
        assert_eq!(s.forward(), Ok(5));
        assert!(s.at_end());
        assert_eq!(s.backward(), Ok(5));
        s.set_to_begin();
        assert!(s.at_beginning());
        assert_eq!(s.peek(), Ok(1));
    }

    #[test]
    fn test_skips_empty_streams() {
        let streams = CollectionStream::new(vec![
            CollectionStream::new(vec![]),
            CollectionStream::new(vec!['a']),
            CollectionStream::new(vec![]),
            CollectionStream::new(vec!['b', 'c']),
            CollectionStream::new(vec![]),
        ]);
        let mut s = streams.concatenate();
        assert_eq!(s.to_vec(), ['a', 'b', 'c']);
        assert_eq!(s.streams().len(), 5);
        assert_eq!(s.streams().as_slice()[3].len(), 2);
        assert_eq!(s.reversed().to_vec(), ['c', 'b', 'a']);
    }

    #[test]
    fn test_only_empty_streams() {
        let mut s = CollectionStream::new(vec![EmptyStream::<u8>::new(); 3]).concatenate();
        assert!(s.at_end());
        assert!(s.at_beginning());
        assert_eq!(s.forward(), Err(StreamError::EndOfStream));
    }

    #[test]
    fn test_concatenate_collected() {
        let mut s = IntervalStream::new(4).concatenate_collected(IntervalStream::new);
        assert_eq!(s.to_vec(), [0, 0, 1, 0, 1, 2]);
        s.set_to_end();
        assert_eq!(s.backward(), Ok(2));
        assert_eq!(s.backward(), Ok(1));
        assert_eq!(s.backward(), Ok(0));
        assert_eq!(s.backward(), Ok(1));
    }
}
