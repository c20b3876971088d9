use super::{
    error::{Result, StreamError},
    CollectionStream, ConcatenatedStream, FilteredStream, ImplicitStream, MappedStream,
    ReversedStream,
};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// A shared, dynamically typed stream handle.
///
/// Cloning the handle does not clone the stream: every clone moves the same
/// cursor. This is what lets heterogeneous streams sit in one stream of
/// streams.
pub type SharedStream<'a, T> = Rc<RefCell<dyn Stream<Item = T> + 'a>>;

/// Wraps `stream` into a [`SharedStream`].
pub fn shared<'a, S>(stream: S) -> SharedStream<'a, S::Item>
where
    S: Stream + 'a,
{
    Rc::new(RefCell::new(stream))
}

/// A bidirectional external iterator.
///
/// The cursor of a stream sits between two adjacent elements, before the
/// first or after the last one. Implementors supply the four primitives
/// `at_beginning`, `at_end`, `basic_forward` and `basic_backward`; every
/// other operation is derived from them and is only overridden for
/// efficiency.
///
/// The boundary predicates take `&mut self` because lazy wrappers may have
/// to look ahead to answer them. They never change the logical position.
pub trait Stream {
    type Item;

    /// True iff no element precedes the cursor.
    fn at_beginning(&mut self) -> bool;

    /// True iff no element follows the cursor.
    fn at_end(&mut self) -> bool;

    /// Crosses the next element without checking `at_end` first.
    fn basic_forward(&mut self) -> Result<Self::Item>;

    /// Crosses the previous element without checking `at_beginning` first.
    fn basic_backward(&mut self) -> Result<Self::Item>;

    /// Advances the cursor and returns the element just crossed.
    fn forward(&mut self) -> Result<Self::Item> {
        if self.at_end() {
            Err(StreamError::EndOfStream)
        } else {
            self.basic_forward()
        }
    }

    /// Moves the cursor back and returns the element just crossed.
    fn backward(&mut self) -> Result<Self::Item> {
        if self.at_beginning() {
            Err(StreamError::EndOfStream)
        } else {
            self.basic_backward()
        }
    }

    fn set_to_begin(&mut self) {
        while !self.at_beginning() {
            if self.basic_backward().is_err() {
                break;
            }
        }
    }

    fn set_to_end(&mut self) {
        while !self.at_end() {
            if self.basic_forward().is_err() {
                break;
            }
        }
    }

    /// Moves forward until an element satisfies `pred` and returns it.
    ///
    /// Returns `None` if the end is reached first; the cursor then stays at
    /// the end.
    fn move_forward_until(
        &mut self,
        pred: &mut dyn FnMut(&Self::Item) -> bool,
    ) -> Option<Self::Item> {
        while !self.at_end() {
            match self.basic_forward() {
                Ok(element) if pred(&element) => return Some(element),
                Ok(_) => {}
                Err(_) => break,
            }
        }
        None
    }

    /// Moves backward until an element satisfies `pred` and returns it.
    fn move_backward_until(
        &mut self,
        pred: &mut dyn FnMut(&Self::Item) -> bool,
    ) -> Option<Self::Item> {
        while !self.at_beginning() {
            match self.basic_backward() {
                Ok(element) if pred(&element) => return Some(element),
                Ok(_) => {}
                Err(_) => break,
            }
        }
        None
    }

    /// The element the cursor last crossed moving forward.
    fn current(&mut self) -> Result<Self::Item> {
        if self.at_beginning() {
            return Err(StreamError::EndOfStream);
        }
        self.basic_backward()?;
        self.basic_forward()
    }

    /// The element the next `forward` would return.
    fn peek(&mut self) -> Result<Self::Item> {
        if self.at_end() {
            return Err(StreamError::EndOfStream);
        }
        self.basic_forward()?;
        self.basic_backward()
    }

    /// Rewinds the stream and iterates over all of its elements.
    fn elements(&mut self) -> Elements<'_, Self>
    where
        Self: Sized,
    {
        self.set_to_begin();
        Elements { stream: self }
    }

    fn to_vec(&mut self) -> Vec<Self::Item> {
        self.set_to_begin();
        let mut elements = vec![];
        while !self.at_end() {
            match self.basic_forward() {
                Ok(element) => elements.push(element),
                Err(_) => break,
            }
        }
        elements
    }

    fn first(&mut self) -> Option<Self::Item> {
        self.set_to_begin();
        self.forward().ok()
    }

    fn last(&mut self) -> Option<Self::Item> {
        self.set_to_end();
        self.backward().ok()
    }

    fn is_empty(&mut self) -> bool {
        self.at_beginning() && self.at_end()
    }

    /// The elements satisfying `pred`, computed lazily.
    fn filtered<'a, P>(self, pred: P) -> FilteredStream<'a, Self>
    where
        Self: Sized + 'a,
        P: FnMut(&Self::Item) -> bool + 'a,
    {
        FilteredStream::new(self, pred)
    }

    /// The same elements in reverse order.
    fn reversed(self) -> ReversedStream<Self>
    where
        Self: Sized,
    {
        ReversedStream::new(self)
    }

    /// Applies `f` to every element crossed.
    fn mapped<'a, T, F>(self, f: F) -> MappedStream<'a, Self, T>
    where
        Self: Sized + 'a,
        F: FnMut(Self::Item) -> T + 'a,
    {
        MappedStream::new(self, f)
    }

    /// Flattens a stream of streams.
    fn concatenate(self) -> ConcatenatedStream<Self>
    where
        Self: Sized,
        Self::Item: Stream,
    {
        ConcatenatedStream::new(self)
    }

    /// Maps every element to a stream and flattens the result.
    fn concatenate_collected<'a, S, F>(self, f: F) -> ConcatenatedStream<MappedStream<'a, Self, S>>
    where
        Self: Sized + 'a,
        S: Stream,
        F: FnMut(Self::Item) -> S + 'a,
    {
        self.mapped(f).concatenate()
    }

    /// The elements of `self` followed by the elements of `other`.
    fn concat<'a, S>(self, other: S) -> ConcatenatedStream<CollectionStream<SharedStream<'a, Self::Item>>>
    where
        Self: Sized + 'a,
        S: Stream<Item = Self::Item> + 'a,
    {
        CollectionStream::new(vec![shared(self), shared(other)]).concatenate()
    }

    /// All elements but the first.
    fn remove_first<'a>(self) -> ImplicitStream<'a, FilteredStream<'a, Self>, Self::Item>
    where
        Self: Sized + 'a,
        Self::Item: 'a,
    {
        let seen = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&seen);
        let filter = self.filtered(move |_: &Self::Item| {
            counter.set(counter.get() + 1);
            counter.get() > 1
        });
        ImplicitStream::wrap(filter).with_set_to_begin(
            move |filter: &mut FilteredStream<'a, Self>| {
                filter.set_to_begin();
                seen.set(0);
            },
        )
    }

    /// All elements but the last.
    fn remove_last<'a>(
        self,
    ) -> ReversedStream<ImplicitStream<'a, FilteredStream<'a, ReversedStream<Self>>, Self::Item>>
    where
        Self: Sized + 'a,
        Self::Item: 'a,
    {
        self.reversed().remove_first().reversed()
    }
}

/// Iterator returned by [`Stream::elements`].
pub struct Elements<'s, S: ?Sized> {
    stream: &'s mut S,
}

impl<'s, S: Stream + ?Sized> Iterator for Elements<'s, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stream.at_end() {
            None
        } else {
            self.stream.basic_forward().ok()
        }
    }
}

/// Streams whose innermost, non-wrapping stream can be reached.
pub trait Unwrapped {
    type Base: Stream;

    fn unwrapped(&self) -> &Self::Base;
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    type Item = S::Item;

    fn at_beginning(&mut self) -> bool {
        (**self).at_beginning()
    }

    fn at_end(&mut self) -> bool {
        (**self).at_end()
    }

    fn basic_forward(&mut self) -> Result<Self::Item> {
        (**self).basic_forward()
    }

    fn basic_backward(&mut self) -> Result<Self::Item> {
        (**self).basic_backward()
    }

    fn set_to_begin(&mut self) {
        (**self).set_to_begin()
    }

    fn set_to_end(&mut self) {
        (**self).set_to_end()
    }

    fn current(&mut self) -> Result<Self::Item> {
        (**self).current()
    }

    fn peek(&mut self) -> Result<Self::Item> {
        (**self).peek()
    }
}

impl<S: Stream + ?Sized> Stream for Rc<RefCell<S>> {
    type Item = S::Item;

    fn at_beginning(&mut self) -> bool {
        self.borrow_mut().at_beginning()
    }

    fn at_end(&mut self) -> bool {
        self.borrow_mut().at_end()
    }

    fn basic_forward(&mut self) -> Result<Self::Item> {
        self.borrow_mut().basic_forward()
    }

    fn basic_backward(&mut self) -> Result<Self::Item> {
        self.borrow_mut().basic_backward()
    }

    fn set_to_begin(&mut self) {
        self.borrow_mut().set_to_begin()
    }

    fn set_to_end(&mut self) {
        self.borrow_mut().set_to_end()
    }

    fn current(&mut self) -> Result<Self::Item> {
        self.borrow_mut().current()
    }

    fn peek(&mut self) -> Result<Self::Item> {
        self.borrow_mut().peek()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::IntervalStream;

    #[test]
    fn test_forward_backward() {
        let mut s = CollectionStream::new(vec![1, 2, 3]);
        assert!(s.at_beginning());
        assert_eq!(s.backward(), Err(StreamError::EndOfStream));
        assert_eq!(s.forward(), Ok(1));
        assert_eq!(s.forward(), Ok(2));
        assert_eq!(s.backward(), Ok(2));
        assert_eq!(s.forward(), Ok(2));
        assert_eq!(s.forward(), Ok(3));
        assert!(s.at_end());
        assert_eq!(s.forward(), Err(StreamError::EndOfStream));
    }

    #[test]
    fn test_move_until() {
        let mut s = IntervalStream::new(10);
        assert_eq!(s.move_forward_until(&mut |&x| x > 3), Some(4));
        assert_eq!(s.move_forward_until(&mut |&x| x > 20), None);
        assert!(s.at_end());
        assert_eq!(s.move_backward_until(&mut |&x| x % 4 == 0), Some(8));
        assert_eq!(s.forward(), Ok(8));
    }

    #[test]
    fn test_first_last() {
        let mut s = IntervalStream::new(4);
        assert_eq!(s.first(), Some(0));
        assert_eq!(s.last(), Some(3));
        assert!(!s.is_empty());
        assert_eq!(IntervalStream::new(0).first(), None);
        assert!(IntervalStream::new(0).is_empty());
    }

    #[test]
    fn test_elements_rewinds() {
        let mut s = CollectionStream::new(vec!['a', 'b']);
        s.set_to_end();
        assert_eq!(s.elements().collect::<String>(), "ab");
        assert_eq!(s.to_vec(), ['a', 'b']);
    }

    #[test]
    fn test_shared_handle() {
        let mut a = shared(IntervalStream::new(3));
        let mut b = Rc::clone(&a);
        assert_eq!(a.forward(), Ok(0));
        assert_eq!(b.forward(), Ok(1));
        assert_eq!(a.current(), Ok(1));
    }

    #[test]
    fn test_boxed() {
        let mut s: Box<dyn Stream<Item = usize>> = Box::new(IntervalStream::new(2));
        assert_eq!(s.to_vec(), [0, 1]);
        assert_eq!(s.peek(), Err(StreamError::EndOfStream));
    }
}
