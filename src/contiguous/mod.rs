//! Contiguous collection types: [`Vector`] for arbitrary element types and [`BitVector`] for
//! bit-packed booleans.
#![warn(missing_docs)]

pub mod bits;
pub mod vector;

#[doc(inline)]
pub use bits::{BitRef, BitVector};
#[doc(inline)]
pub use vector::Vector;
