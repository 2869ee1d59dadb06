//! Property tests running against the public API only.

use quickcheck::{Arbitrary, Gen};

mod linked_list;
mod tree;

/// An enum for the various kinds of "things" to do to
/// a collection in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<E> {
    /// Insert the element into the collection
    Insert(E),
    /// Remove the element from the collection
    Remove(E),
}

impl<E> Arbitrary for Op<E>
where
    E: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(E::arbitrary(g))
        } else {
            Op::Remove(E::arbitrary(g))
        }
    }
}
