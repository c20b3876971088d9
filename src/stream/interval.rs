use super::{
    error::{Result, StreamError},
    Stream, Unwrapped,
};

/// The stream `0, 1, ..., stop - 1`.
///
/// The bound may grow after construction, which is how
/// [`FilteredStream`](super::FilteredStream) counts matches it has already
/// discovered without knowing the filtered length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalStream {
    pos: usize,
    stop: usize,
}

impl IntervalStream {
    pub fn new(stop: usize) -> Self {
        Self { pos: 0, stop }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn stop(&self) -> usize {
        self.stop
    }

    pub fn increment_stop(&mut self) {
        self.increment_stop_by(1);
    }

    pub fn increment_stop_by(&mut self, incr: usize) {
        self.stop += incr;
    }
}

impl Stream for IntervalStream {
    type Item = usize;

    fn at_beginning(&mut self) -> bool {
        self.pos == 0
    }

    fn at_end(&mut self) -> bool {
        self.pos >= self.stop
    }

    fn basic_forward(&mut self) -> Result<usize> {
        if self.pos >= self.stop {
            return Err(StreamError::EndOfStream);
        }
        self.pos += 1;
        Ok(self.pos - 1)
    }

    fn basic_backward(&mut self) -> Result<usize> {
        if self.pos == 0 {
            return Err(StreamError::EndOfStream);
        }
        self.pos -= 1;
        Ok(self.pos)
    }

    fn set_to_begin(&mut self) {
        self.pos = 0;
    }

    fn set_to_end(&mut self) {
        self.pos = self.stop;
    }
}

impl Unwrapped for IntervalStream {
    type Base = Self;

    fn unwrapped(&self) -> &Self {
        self
    }
}
