use super::{
    error::{Result, StreamError},
    Stream,
};

type Predicate<'a, S> = Box<dyn FnMut(&mut S) -> bool + 'a>;
type Step<'a, S, T> = Box<dyn FnMut(&mut S) -> Result<T> + 'a>;
type Reposition<'a, S> = Box<dyn FnMut(&mut S) + 'a>;

/// A stream whose primitives are injected closures operating on a state `S`.
///
/// [`ImplicitStream::new`] starts from an empty stream over arbitrary state;
/// [`ImplicitStream::wrap`] starts from plain delegation to an inner stream.
/// The `with_*` methods replace single primitives.
pub struct ImplicitStream<'a, S, T> {
    state: S,
    at_beginning: Predicate<'a, S>,
    at_end: Predicate<'a, S>,
    forward: Step<'a, S, T>,
    backward: Step<'a, S, T>,
    set_to_begin: Reposition<'a, S>,
    set_to_end: Reposition<'a, S>,
}

impl<'a, S: 'a, T: 'a> ImplicitStream<'a, S, T> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            at_beginning: Box::new(|_: &mut S| true),
            at_end: Box::new(|_: &mut S| true),
            forward: Box::new(|_: &mut S| Err(StreamError::EndOfStream)),
            backward: Box::new(|_: &mut S| Err(StreamError::EndOfStream)),
            set_to_begin: Box::new(|_: &mut S| {}),
            set_to_end: Box::new(|_: &mut S| {}),
        }
    }

    pub fn with_at_beginning<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S) -> bool + 'a,
    {
        self.at_beginning = Box::new(f);
        self
    }

    pub fn with_at_end<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S) -> bool + 'a,
    {
        self.at_end = Box::new(f);
        self
    }

    pub fn with_forward<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S) -> Result<T> + 'a,
    {
        self.forward = Box::new(f);
        self
    }

    pub fn with_backward<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S) -> Result<T> + 'a,
    {
        self.backward = Box::new(f);
        self
    }

    pub fn with_set_to_begin<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S) + 'a,
    {
        self.set_to_begin = Box::new(f);
        self
    }

    pub fn with_set_to_end<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut S) + 'a,
    {
        self.set_to_end = Box::new(f);
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<'a, S> ImplicitStream<'a, S, S::Item>
where
    S: Stream + 'a,
    S::Item: 'a,
{
    pub fn wrap(inner: S) -> Self {
        Self::new(inner)
            .with_at_beginning(|s: &mut S| s.at_beginning())
            .with_at_end(|s: &mut S| s.at_end())
            .with_forward(|s: &mut S| s.basic_forward())
            .with_backward(|s: &mut S| s.basic_backward())
            .with_set_to_begin(|s: &mut S| s.set_to_begin())
            .with_set_to_end(|s: &mut S| s.set_to_end())
    }
}

impl<'a, S, T> Stream for ImplicitStream<'a, S, T> {
    type Item = T;

    fn at_beginning(&mut self) -> bool {
        (self.at_beginning)(&mut self.state)
    }

    fn at_end(&mut self) -> bool {
        (self.at_end)(&mut self.state)
    }

    fn basic_forward(&mut self) -> Result<T> {
        (self.forward)(&mut self.state)
    }

    fn basic_backward(&mut self) -> Result<T> {
        (self.backward)(&mut self.state)
    }

    fn set_to_begin(&mut self) {
        (self.set_to_begin)(&mut self.state)
    }

    fn set_to_end(&mut self) {
        (self.set_to_end)(&mut self.state)
    }
}

impl<'a, S: std::fmt::Debug, T> std::fmt::Debug for ImplicitStream<'a, S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImplicitStream")
            .field("state", &self.state)
            .finish()
    }
}
