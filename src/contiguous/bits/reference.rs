use std::fmt::{self, Debug, Display, Formatter};

use super::Block;

/// A proxy reference to a single bit of a [`BitVector`](super::BitVector).
///
/// Bits aren't addressable, so mutable access can't hand out a `&mut bool`. A `BitRef` stands
/// in for one: it holds a mutable reference to the block containing the target bit plus a mask
/// selecting it, and reads or rewrites just that bit. It owns nothing - the borrow it holds on
/// the container is what keeps it from outliving (or racing) a reallocation, so invalidation
/// is a compile error rather than a documented hazard.
///
/// # Examples
/// ```
/// # use vector_lib::contiguous::BitVector;
/// let mut vec = BitVector::repeat(false, 4);
/// let mut bit = vec.at_mut(2).expect("index 2 is in bounds");
/// bit.set(true);
/// assert!(bit.get());
/// assert_eq!(vec.get(2), Some(true));
/// ```
pub struct BitRef<'a> {
    pub(crate) block: &'a mut Block,
    pub(crate) mask: Block,
}

impl BitRef<'_> {
    /// Reads the referenced bit.
    pub fn get(&self) -> bool {
        *self.block & self.mask != 0
    }

    /// Writes the referenced bit, leaving every other bit of the block untouched. The
    /// read-modify-write is branchless: the value is spread into an all-ones or all-zeroes
    /// word and merged under the mask.
    pub fn set(&mut self, value: bool) {
        *self.block ^= ((value as Block).wrapping_neg() ^ *self.block) & self.mask;
    }

    /// Inverts the referenced bit.
    pub fn flip(&mut self) {
        *self.block ^= self.mask;
    }

    /// Writes the referenced bit and returns its previous value.
    pub fn replace(&mut self, value: bool) -> bool {
        let old = self.get();
        self.set(value);
        old
    }
}

impl From<BitRef<'_>> for bool {
    fn from(value: BitRef<'_>) -> Self {
        value.get()
    }
}

impl PartialEq for BitRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl PartialEq<bool> for BitRef<'_> {
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

impl Debug for BitRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitRef").field(&self.get()).finish()
    }
}

impl Display for BitRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.get(), f)
    }
}
