//! Strides that are either compile-time constants or runtime values.
//!
//! The counterpart of [`crate::extent`] for the step between logically
//! consecutive elements. Strides are signed: a negative stride walks the
//! buffer backwards. A stride of zero is never valid for a view.

use core::fmt;

/// A stride that is either a compile-time constant or a runtime value.
pub trait Stride: Copy + fmt::Debug {
    /// The compile-time stride, if there is one.
    const STATIC: Option<isize>;

    /// The concrete stride.
    fn value(self) -> isize;

    /// Build from a runtime stride; `None` if it contradicts the static one.
    fn try_new(value: isize) -> Option<Self>;

    /// Build from a runtime stride that is known to agree with the static one.
    fn new(value: isize) -> Self;
}

/// A stride fixed at compile time. Zero-sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedStride<const K: isize>;

/// A stride carried at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DynStride(pub isize);

/// The contiguous stride, the default for freshly constructed views.
pub type UnitStride = FixedStride<1>;

impl<const K: isize> Stride for FixedStride<K> {
    const STATIC: Option<isize> = Some(K);

    #[inline]
    fn value(self) -> isize {
        K
    }

    #[inline]
    fn try_new(value: isize) -> Option<Self> {
        (value == K).then_some(FixedStride)
    }

    #[inline]
    fn new(value: isize) -> Self {
        debug_assert_eq!(value, K);
        FixedStride
    }
}

impl Stride for DynStride {
    const STATIC: Option<isize> = None;

    #[inline]
    fn value(self) -> isize {
        self.0
    }

    #[inline]
    fn try_new(value: isize) -> Option<Self> {
        Some(DynStride(value))
    }

    #[inline]
    fn new(value: isize) -> Self {
        DynStride(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_stride_is_static() {
        assert_eq!(<FixedStride<-2> as Stride>::STATIC, Some(-2));
        assert_eq!(FixedStride::<-2>.value(), -2);
        assert_eq!(core::mem::size_of::<UnitStride>(), 0);
    }

    #[test]
    fn fixed_stride_rejects_mismatch() {
        assert!(FixedStride::<2>::try_new(2).is_some());
        assert!(FixedStride::<2>::try_new(3).is_none());
    }

    #[test]
    fn dyn_stride_accepts_any_value() {
        assert_eq!(DynStride::try_new(-7).unwrap().value(), -7);
    }
}
