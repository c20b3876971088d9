use crate::graph::Graph;
use crate::stream::Stream;

/// A stream bound to the graph it traverses.
pub trait GraphIterator: Stream {
    type G: Graph + ?Sized;

    fn graph(&self) -> &Self::G;

    /// The number of elements of a full traversal.
    ///
    /// Rewinds the iterator first and leaves it at the end.
    fn length(&mut self) -> usize {
        self.set_to_begin();
        let mut length = 0;
        while !self.at_end() {
            if self.basic_forward().is_err() {
                break;
            }
            length += 1;
        }
        length
    }
}
