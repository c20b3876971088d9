use super::{
    error::{Result, StreamError},
    Stream, Unwrapped,
};
use std::iter::FromIterator;

/// A stream over an owned, index-addressable sequence.
///
/// The cursor is the number of elements already crossed, so every primitive
/// and the repositioning operations run in O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStream<T> {
    seq: Vec<T>,
    pos: usize,
}

impl<T> CollectionStream<T> {
    pub fn new(seq: Vec<T>) -> Self {
        Self { seq, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.seq
    }

    pub fn into_inner(self) -> Vec<T> {
        self.seq
    }
}

impl<T: Clone> Stream for CollectionStream<T> {
    type Item = T;

    fn at_beginning(&mut self) -> bool {
        self.pos == 0
    }

    fn at_end(&mut self) -> bool {
        self.pos >= self.seq.len()
    }

    fn basic_forward(&mut self) -> Result<T> {
        let element = self.seq.get(self.pos).cloned().ok_or(StreamError::EndOfStream)?;
        self.pos += 1;
        Ok(element)
    }

    fn basic_backward(&mut self) -> Result<T> {
        if self.pos == 0 {
            return Err(StreamError::EndOfStream);
        }
        self.pos -= 1;
        Ok(self.seq[self.pos].clone())
    }

    fn set_to_begin(&mut self) {
        self.pos = 0;
    }

    fn set_to_end(&mut self) {
        self.pos = self.seq.len();
    }

    fn current(&mut self) -> Result<T> {
        if self.pos == 0 {
            return Err(StreamError::EndOfStream);
        }
        Ok(self.seq[self.pos - 1].clone())
    }

    fn peek(&mut self) -> Result<T> {
        self.seq
            .get(self.pos)
            .cloned()
            .ok_or(StreamError::EndOfStream)
    }
}

impl<T: Clone> Unwrapped for CollectionStream<T> {
    type Base = Self;

    fn unwrapped(&self) -> &Self {
        self
    }
}

impl<T> From<Vec<T>> for CollectionStream<T> {
    fn from(seq: Vec<T>) -> Self {
        Self::new(seq)
    }
}

impl<T> FromIterator<T> for CollectionStream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
