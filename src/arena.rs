//! Arena trait for node allocation with stable indices.
//!
//! An arena hands out fixed-size slots addressed by an [`Index`], where an
//! index stays valid until the slot is explicitly removed. Lists allocate
//! their nodes from an arena instead of the global allocator, which turns
//! "allocation failed" into an ordinary return value and lets several lists
//! share one pre-sized pool.

use crate::Index;

/// Slot allocation with stable indices.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable indices**: an index remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations
/// - **Slot reuse**: removed slots can be reused by future inserts
///
/// # Implementations
///
/// - [`FixedArena<T>`] - fixed capacity chosen at construction (in this crate)
/// - `slab::Slab<T>` - growable, never reports [`Full`] (feature `slab`)
pub trait Arena<T> {
    /// Index type for this arena.
    type Index: Index;

    /// Inserts a value, returning its stable index.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if every slot is occupied. Growable
    /// backends never fail.
    fn try_insert(&mut self, value: T) -> Result<Self::Index, Full<T>>;

    /// Removes and returns the value at `index`, if the slot is live.
    fn remove(&mut self, index: Self::Index) -> Option<T>;

    /// Returns a reference to the value at `index`, if the slot is live.
    fn get(&self, index: Self::Index) -> Option<&T>;

    /// Returns a mutable reference to the value at `index`, if the slot is live.
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;

    /// Returns the number of live slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slot is live.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error returned when a fixed-capacity arena has no free slot.
///
/// Carries the value back to the caller so nothing is dropped on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(
    /// The value that did not fit.
    pub T,
);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "arena is full")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}

// =============================================================================
// FixedArena - fixed capacity, slot vector with LIFO free list
// =============================================================================

enum Slot<T, Idx> {
    Vacant { next_free: Idx },
    Occupied(T),
}

/// Fixed-capacity arena backed by a slot vector.
///
/// Slots are handed out in order until the capacity chosen at construction
/// is reached, after which removed slots are reused LIFO. The arena never
/// reallocates, so inserting is O(1) and [`Full`] is the only failure mode.
///
/// # Example
///
/// ```
/// use chainlist::{Arena, FixedArena};
///
/// let mut arena: FixedArena<u64> = FixedArena::with_capacity(4);
///
/// let idx = arena.try_insert(42).unwrap();
/// assert_eq!(arena.get(idx), Some(&42));
/// assert_eq!(arena.remove(idx), Some(42));
/// assert_eq!(arena.get(idx), None);
/// ```
pub struct FixedArena<T, Idx: Index = u32> {
    slots: Vec<Slot<T, Idx>>,
    free_head: Idx,
    len: usize,
    capacity: usize,
}

impl<T, Idx: Index> FixedArena<T, Idx> {
    /// Creates an arena with exactly `capacity` slots.
    ///
    /// The slot vector is reserved up front; no further allocation happens
    /// on insert.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not representable by the index type (the
    /// sentinel value is reserved).
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= Idx::NONE.as_usize(),
            "capacity exceeds index type maximum"
        );

        Self {
            slots: Vec::with_capacity(capacity),
            free_head: Idx::NONE,
            len: 0,
            capacity,
        }
    }

    /// Returns the capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Drops every live value and makes all slots available again.
    ///
    /// Any index handed out earlier is dangling afterwards; callers must
    /// reset the structures that hold them (owned wrappers do this
    /// automatically).
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = Idx::NONE;
        self.len = 0;
    }
}

impl<T, Idx: Index> Arena<T> for FixedArena<T, Idx> {
    type Index = Idx;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<Idx, Full<T>> {
        if self.free_head.is_some() {
            let idx = self.free_head;
            let slot = &mut self.slots[idx.as_usize()];
            self.free_head = match slot {
                Slot::Vacant { next_free } => *next_free,
                Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
            };
            *slot = Slot::Occupied(value);
            self.len += 1;
            return Ok(idx);
        }

        if self.slots.len() < self.capacity {
            let idx = Idx::from_usize(self.slots.len());
            self.slots.push(Slot::Occupied(value));
            self.len += 1;
            return Ok(idx);
        }

        Err(Full(value))
    }

    #[inline]
    fn remove(&mut self, index: Idx) -> Option<T> {
        let i = index.as_usize();
        if !matches!(self.slots.get(i), Some(Slot::Occupied(_))) {
            return None;
        }

        let slot = core::mem::replace(
            &mut self.slots[i],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = index;
        self.len -= 1;

        match slot {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    #[inline]
    fn get(&self, index: Idx) -> Option<&T> {
        match self.slots.get(index.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, index: Idx) -> Option<&mut T> {
        match self.slots.get_mut(index.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T: core::fmt::Debug, Idx: Index> core::fmt::Debug for FixedArena<T, Idx> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixedArena")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Arena<T> for slab::Slab<T> {
    type Index = usize;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<usize, Full<T>> {
        Ok(self.insert(value))
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        self.try_remove(index)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}
