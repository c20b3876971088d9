//! Bidirectional external iterators and their lazy compositions.

pub use collection::CollectionStream;
pub use concatenated::ConcatenatedStream;
pub use empty::EmptyStream;
pub use error::StreamError;
pub use filtered::FilteredStream;
pub use implicit::ImplicitStream;
pub use interval::IntervalStream;
pub use mapped::MappedStream;
pub use reversed::ReversedStream;
pub use stream::{shared, Elements, SharedStream, Stream, Unwrapped};
pub use wrapped::WrappedStream;

pub mod error;

mod collection;
mod concatenated;
mod empty;
mod filtered;
mod implicit;
mod interval;
mod mapped;
mod reversed;
mod stream;
mod wrapped;
