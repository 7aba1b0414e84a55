//! A module containing [`BitVector`] and associated types: the [`BitRef`] proxy reference for
//! mutating individual bits, and [`Iter`]/[`IntoIter`] for iteration.
//!
//! [`BitVector`] and [`BitRef`] are also re-exported under the parent module.

mod bit_vector;
mod iter;
mod reference;

pub use bit_vector::*;
pub use iter::*;
pub use reference::*;
