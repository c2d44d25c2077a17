//! Index trait for arena slots.
//!
//! The [`Index`] trait abstracts over the integer types used to address
//! nodes in an arena. It provides a sentinel value (`NONE`) standing in for
//! "no node", so links never need an `Option` wrapper in the hot path.

/// Trait for index types used to address arena slots.
///
/// Provides a sentinel value (`NONE`) and conversion to/from `usize`.
/// Implemented for the unsigned integer types; smaller types shrink the
/// per-node link footprint when the arena is known to stay small.
/// Indices are plain values, so the trait requires `'static`; borrowed
/// accessors stay tied to the arena's lifetime alone.
///
/// # Example
///
/// ```
/// use chainlist::Index;
///
/// // u32 is an Index with NONE = u32::MAX
/// let idx: u32 = 42;
/// assert!(idx.is_some());
/// assert!(u32::NONE.is_none());
/// ```
pub trait Index: Copy + Eq + core::fmt::Debug + 'static {
    /// Sentinel value representing "no node".
    ///
    /// For the integer types this is `MAX`, which also caps the usable
    /// arena capacity at `MAX - 1` slots.
    const NONE: Self;

    /// Creates an index from a `usize` slot position.
    fn from_usize(val: usize) -> Self;

    /// Returns the index as a `usize` slot position.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

macro_rules! impl_index {
    ($($t:ty),*) => {$(
        impl Index for $t {
            const NONE: Self = <$t>::MAX;

            #[inline]
            fn from_usize(val: usize) -> Self {
                val as $t
            }

            #[inline]
            fn as_usize(&self) -> usize {
                *self as usize
            }
        }
    )*};
}

impl_index!(u8, u16, u32, u64, usize);
