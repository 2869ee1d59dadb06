//! Errors shared by the collections in this crate.

/// Failures signalled by [`OrderedTree`][crate::OrderedTree] and
/// [`LinkedList`][crate::LinkedList].
///
/// Looking up something that isn't there is not an error - those operations return `false` or
/// `None`. These variants cover calls the collection refuses to serve at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The named bulk operation is deliberately not provided. Loop over the single element
    /// operation instead.
    #[error("`{0}` is not supported by this collection")]
    Unsupported(&'static str),
    /// The operation needs at least one element.
    #[error("the collection is empty")]
    Empty,
    /// A positional lookup went past the end of the collection.
    #[error("index {index} is out of bounds for a collection of length {len}")]
    IndexOutOfBounds {
        /// The requested position.
        index: usize,
        /// The length of the collection at the time of the call.
        len: usize,
    },
}
