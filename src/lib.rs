//! This crate is a growable sequence container ("vector") and its companion raw memory
//! allocator, written from first principles.
//!
//! # Purpose
//! Writing a vector yourself is the quickest way to properly understand the separation between
//! memory allocation and object lifetime: the two are handled by different components here and
//! never conflated. The crate doesn't use [`Vec`], `Box<[T]>` or any other container for its
//! backing storage - all allocations go through [`alloc::RawAlloc`], which hands out raw,
//! uninitialized memory and nothing more.
//!
//! # Components
//! - [`alloc`]: the raw allocator and [`RawBuf<T>`](alloc::RawBuf), an owned storage handle
//!   that guarantees release of its allocation without ever touching element lifetimes.
//! - [`contiguous::Vector`]: the generic container. Tracks a logical length against an
//!   allocated capacity, constructs elements in place on insertion and destroys them on
//!   removal, and doubles its capacity when full for amortized constant-time appends.
//! - [`contiguous::BitVector`]: a bit-packed boolean container storing one value per bit of a
//!   `u64` block. Individual bits aren't addressable, so mutable access goes through the
//!   [`BitRef`](contiguous::BitRef) proxy instead of plain references.
//!
//! # Error Handling
//! Checked element access (`at`, `at_mut`) returns a [`Result`] with a strongly typed error.
//! Everything else follows the usual container conventions: indexed mutation panics on an
//! out-of-range index (with the same error's message), `pop`/`first`/`last` return [`Option`],
//! and allocation failure is treated as unrecoverable via
//! [`handle_alloc_error`](std::alloc::handle_alloc_error). Containers only swap new storage in
//! after a successful allocation, so state stays well-defined on every path that can report.
//!
//! # Concurrency
//! None. A container instance is exclusively owned by its caller; `Send`/`Sync` follow the
//! element type, and any cross-thread sharing must be synchronized externally.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod alloc;
pub mod contiguous;
pub mod error;

pub(crate) mod util;
