//! Non-owning contiguous and strided views over externally-owned buffers.
//!
//! The central types are [`Slice`] and [`SliceMut`], views that address
//! every `stride`-th element of a contiguous buffer, where both the element
//! count and the stride can be carried as compile-time constants or as
//! runtime values, independently of each other. [`Span`] is the stride-1
//! special case. The remaining modules are small companion utilities:
//! lazy value sequences, a fixed-capacity string, and a runtime
//! type-identity dispatch table.
//!
//! # Core Types
//!
//! - [`Slice`] / [`SliceMut`]: Zero-copy strided views over existing data
//! - [`Span`]: Zero-copy contiguous view with optionally static extent
//! - [`Extent`] ([`Fixed`], [`Dyn`]) and [`Stride`] ([`FixedStride`],
//!   [`DynStride`]): per-axis static/dynamic classification
//!
//! # View transformations
//!
//! All transformations are pure and share the underlying buffer:
//!
//! - [`Slice::first`] / [`Slice::last`]: keep a prefix or suffix
//! - [`Slice::drop_first`] / [`Slice::drop_last`]: remove a prefix or suffix
//! - [`Slice::skip`]: visit every k-th element
//! - [`Slice::into_dyn_extent`] / [`Slice::into_dyn_stride`] /
//!   [`Slice::into_dyn`]: widen a static classification to a runtime one
//! - [`Slice::try_fix_extent`] / [`Slice::try_fix_stride`]: checked
//!   narrowing back to a compile-time constant
//!
//! # Example
//!
//! ```rust
//! use strided_slice::Slice;
//!
//! let data = [10, 20, 30, 40, 50, 60];
//!
//! // Static extent 6, unit stride.
//! let view = Slice::from(&data);
//!
//! // Every other element: [10, 30, 50], stride 2.
//! let every_other = view.skip(2);
//! assert_eq!(every_other.len(), 3);
//! assert_eq!(every_other[1], 30);
//!
//! // The last two elements: [50, 60].
//! let tail = view.last(2);
//! assert_eq!(tail.iter().copied().collect::<Vec<_>>(), vec![50, 60]);
//!
//! // Widening never changes the stored values.
//! let dynamic = view.into_dyn();
//! assert_eq!(dynamic.len(), 6);
//! assert_eq!(dynamic.stride(), 1);
//! ```
//!
//! # Mutation Example
//!
//! ```rust
//! use strided_slice::SliceMut;
//!
//! let mut data = [0; 6];
//! let view = SliceMut::from(&mut data);
//!
//! // Write through every other element.
//! let mut every_other = view.skip(2);
//! for (i, x) in every_other.iter_mut().enumerate() {
//!     *x = i as i32 + 1;
//! }
//! assert_eq!(data, [1, 0, 2, 0, 3, 0]);
//! ```
//!
//! # Contracts
//!
//! Index and sub-view bounds are caller contracts: violations panic via
//! `assert!`. The checked alternatives are `get` (returning `Option`) and
//! the validating constructors (returning [`Result`]); the unchecked
//! alternatives are the `unsafe` `get_unchecked` variants.

mod extent;
mod fixed_str;
pub mod iter;
mod mapper;
mod sequences;
mod span;
mod stride;
pub mod view;

// ============================================================================
// View types
// ============================================================================
pub use extent::{Dyn, Extent, Fixed};
pub use stride::{DynStride, FixedStride, Stride, UnitStride};
pub use view::{Slice, SliceMut};

pub use span::Span;

// ============================================================================
// Iterators
// ============================================================================
pub use iter::{Iter, IterMut};

#[cfg(feature = "parallel")]
pub use iter::ParIter;

// ============================================================================
// Companion utilities
// ============================================================================
pub use fixed_str::FixedString;
pub use mapper::PolymorphicMapper;
pub use sequences::{fibonacci, iterate, nats, primes};

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the validating constructors and narrowing conversions.
#[derive(Debug, thiserror::Error)]
pub enum SliceError {
    /// Runtime element count contradicts a compile-time extent.
    #[error("extent mismatch: expected {expected}, got {actual}")]
    ExtentMismatch { expected: usize, actual: usize },

    /// Runtime stride contradicts a compile-time stride.
    #[error("stride mismatch: expected {expected}, got {actual}")]
    StrideMismatch { expected: isize, actual: isize },

    /// A view may not have stride zero.
    #[error("invalid stride 0")]
    ZeroStride,

    /// The view would reach outside its buffer.
    #[error("view reaches offset {offset} outside buffer of length {buffer_len}")]
    OutOfBounds { offset: isize, buffer_len: usize },
}

/// Result type for view construction and conversion.
pub type Result<T> = std::result::Result<T, SliceError>;
