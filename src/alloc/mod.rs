//! The raw allocation layer: [`RawAlloc`] for requesting and releasing untyped storage, and
//! [`RawBuf`] for owning such storage for the lifetime of a container.
//!
//! Nothing in this module constructs or destroys elements. Object lifetime is entirely the
//! responsibility of the containers built on top (see
//! [`Vector`](crate::contiguous::Vector)).

mod buf;
mod raw_alloc;
mod tests;

pub use buf::*;
pub use raw_alloc::*;
