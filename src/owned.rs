//! Self-contained list that owns its arena.
//!
//! [`OwnedList`] pairs a [`List`] with a private [`FixedArena`], hiding the
//! engine's arena-threading. Capacity is fixed at construction; every
//! fallible operation reports through [`ListError`](crate::ListError)
//! rather than `Option`, since a caller holding the whole container has
//! nothing else to consult.
//!
//! # Example
//!
//! ```
//! use chainlist::OwnedList;
//!
//! let mut list: OwnedList<u64> = OwnedList::with_capacity(8);
//! list.push_back(1)?;
//! list.push_back(2)?;
//! list.push_front(0)?;
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
//! assert_eq!(list.pop_front()?, 0);
//! # Ok::<(), chainlist::ListError>(())
//! ```

use core::fmt;

use crate::error::{ErrorKind, ListError, Result};
use crate::list::{Cursor, Indices, Iter, IterMut, Node};
use crate::{FixedArena, Index, List};

/// A doubly-linked list that owns its node storage.
///
/// The backing arena is private and sized once at construction. Elements
/// are still addressable by the stable indices the mutating operations
/// return, which survive unrelated inserts and removals.
pub struct OwnedList<T, Idx: Index = u32> {
    arena: FixedArena<Node<T, Idx>, Idx>,
    list: List<T, FixedArena<Node<T, Idx>, Idx>, Idx>,
}

impl<T, Idx: Index> OwnedList<T, Idx> {
    /// Creates an empty list with the default capacity of 16.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list holding up to `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: FixedArena::with_capacity(capacity),
            list: List::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Returns the head element's index, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<Idx> {
        self.list.head()
    }

    /// Returns the tail element's index, or `None` if empty.
    #[inline]
    pub fn tail(&self) -> Option<Idx> {
        self.list.tail()
    }

    /// Appends a value, returning its stable index.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfMemory`] if the list is at capacity.
    #[track_caller]
    pub fn push_back(&mut self, value: T) -> Result<Idx> {
        self.list.checked_push_back(&mut self.arena, value)
    }

    /// Prepends a value, returning its stable index.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfMemory`] if the list is at capacity.
    #[track_caller]
    pub fn push_front(&mut self, value: T) -> Result<Idx> {
        self.list.checked_push_front(&mut self.arena, value)
    }

    /// Inserts a value after `after`, or at the front when `after` is
    /// `None`. Returns the new element's index.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfMemory`] if the list is at capacity.
    ///
    /// # Panics
    ///
    /// Panics if `after` is not a live index.
    #[track_caller]
    pub fn insert_after(&mut self, after: Option<Idx>, value: T) -> Result<Idx> {
        self.list.checked_insert_after(&mut self.arena, after, value)
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Empty`] if the list has no elements.
    #[track_caller]
    pub fn pop_front(&mut self) -> Result<T> {
        self.list.checked_pop_front(&mut self.arena)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Empty`] if the list has no elements.
    #[track_caller]
    pub fn pop_back(&mut self) -> Result<T> {
        self.list.checked_pop_back(&mut self.arena)
    }

    /// Removes an element by index.
    ///
    /// Returns `None` if the index is stale. Other elements' indices are
    /// unaffected.
    #[inline]
    pub fn remove(&mut self, idx: Idx) -> Option<T> {
        self.list.remove(&mut self.arena, idx)
    }

    /// Removes the element at position `at` and returns the index of its
    /// successor (`None` when the tail was removed).
    ///
    /// Accepts the position as `Option<Idx>` so the result of
    /// [`at`](Self::at) feeds in directly; chained erasures walk the list
    /// without re-counting.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Empty`] if `at` is `None` (the end position, which
    /// holds no element to erase).
    #[track_caller]
    pub fn erase(&mut self, at: Option<Idx>) -> Result<Option<Idx>> {
        let Some(idx) = at else {
            return Err(ListError::new(ErrorKind::Empty, "erase at end position"));
        };

        let next = self.list.next_index(&self.arena, idx);
        self.list.remove(&mut self.arena, idx);
        Ok(next)
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Empty`] if the list has no elements.
    #[track_caller]
    pub fn front(&self) -> Result<&T> {
        self.list.checked_front(&self.arena)
    }

    /// Returns a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Empty`] if the list has no elements.
    #[track_caller]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        match self.list.front_mut(&mut self.arena) {
            Some(value) => Ok(value),
            None => Err(ListError::new(ErrorKind::Empty, "front on empty list")),
        }
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Empty`] if the list has no elements.
    #[track_caller]
    pub fn back(&self) -> Result<&T> {
        self.list.checked_back(&self.arena)
    }

    /// Returns a mutable reference to the back element.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Empty`] if the list has no elements.
    #[track_caller]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        match self.list.back_mut(&mut self.arena) {
            Some(value) => Ok(value),
            None => Err(ListError::new(ErrorKind::Empty, "back on empty list")),
        }
    }

    /// Returns a reference to the element at `idx`.
    #[inline]
    pub fn get(&self, idx: Idx) -> Option<&T> {
        self.list.get(&self.arena, idx)
    }

    /// Returns a mutable reference to the element at `idx`.
    #[inline]
    pub fn get_mut(&mut self, idx: Idx) -> Option<&mut T> {
        self.list.get_mut(&mut self.arena, idx)
    }

    /// Returns the index of the element at `position`, in O(n).
    ///
    /// `None` when `position >= len()`.
    #[inline]
    pub fn at(&self, position: usize) -> Option<Idx> {
        self.list.at(&self.arena, position)
    }

    /// Returns the index of the element after `idx`, or `None` at the tail.
    #[inline]
    pub fn next_index(&self, idx: Idx) -> Option<Idx> {
        self.list.next_index(&self.arena, idx)
    }

    /// Returns the index of the element before `idx`, or `None` at the head.
    #[inline]
    pub fn prev_index(&self, idx: Idx) -> Option<Idx> {
        self.list.prev_index(&self.arena, idx)
    }

    /// Moves every element of `other` to the end of this list, preserving
    /// order. `other` is left empty on success and untouched on failure.
    ///
    /// Unlike the engine's [`List::append`], the two lists own separate
    /// arenas, so this is an O(n) element move with an up-front capacity
    /// check rather than a pointer splice.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfMemory`] if this list lacks room for all of
    /// `other`'s elements; neither list is modified in that case.
    #[track_caller]
    pub fn append(&mut self, other: &mut Self) -> Result<()> {
        let free = self.capacity() - self.len();
        if other.len() > free {
            return Err(ListError::new(
                ErrorKind::OutOfMemory,
                "append: insufficient free capacity for source list",
            ));
        }

        while let Some(value) = other.list.pop_front(&mut other.arena) {
            // Cannot fail: capacity was checked above
            self.list
                .checked_push_back(&mut self.arena, value)
                .map_err(|err| err.with_context("append: capacity check violated"))?;
        }
        Ok(())
    }

    /// Reverses the list in place in O(n). Indices remain valid.
    #[inline]
    pub fn reverse(&mut self) {
        self.list.reverse(&mut self.arena);
    }

    /// Removes every element. Capacity is retained.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear(&mut self.arena);
    }

    /// Returns a bidirectional iterator over references, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, FixedArena<Node<T, Idx>, Idx>, Idx> {
        self.list.iter(&self.arena)
    }

    /// Returns a bidirectional iterator over mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, FixedArena<Node<T, Idx>, Idx>, Idx> {
        self.list.iter_mut(&mut self.arena)
    }

    /// Returns a bidirectional iterator over element indices.
    ///
    /// Collecting indices up front is the supported way to mutate the list
    /// while walking it:
    ///
    /// ```
    /// use chainlist::OwnedList;
    ///
    /// let mut list: OwnedList<u64> = (1..=5).collect();
    ///
    /// let indices: Vec<_> = list.indices().collect();
    /// for idx in indices {
    ///     if list.get(idx).is_some_and(|v| v % 2 == 0) {
    ///         list.remove(idx);
    ///     }
    /// }
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
    /// ```
    #[inline]
    pub fn indices(&self) -> Indices<'_, T, FixedArena<Node<T, Idx>, Idx>, Idx> {
        self.list.indices(&self.arena)
    }

    /// Returns a cursor at the front; see [`Cursor`].
    #[inline]
    pub fn cursor_front(&mut self) -> Cursor<'_, T, FixedArena<Node<T, Idx>, Idx>, Idx> {
        self.list.cursor_front(&mut self.arena)
    }

    /// Returns a cursor at the back.
    #[inline]
    pub fn cursor_back(&mut self) -> Cursor<'_, T, FixedArena<Node<T, Idx>, Idx>, Idx> {
        self.list.cursor_back(&mut self.arena)
    }
}

impl<T, Idx: Index> Default for OwnedList<T, Idx> {
    /// An empty list with a default capacity of 16.
    fn default() -> Self {
        Self::with_capacity(16)
    }
}

impl<T: Clone, Idx: Index> Clone for OwnedList<T, Idx> {
    /// Deep copy: values are cloned into a fresh arena of the same
    /// capacity. Element order is preserved; indices are not.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for value in self.iter() {
            if copy
                .list
                .try_push_back(&mut copy.arena, value.clone())
                .is_err()
            {
                unreachable!("clone arena sized to the source capacity");
            }
        }
        copy
    }
}

impl<T, Idx: Index> FromIterator<T> for OwnedList<T, Idx> {
    /// Collects into a list whose capacity equals the element count.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = Self::with_capacity(values.len().max(1));
        for value in values {
            if list.list.try_push_back(&mut list.arena, value).is_err() {
                unreachable!("arena sized to the collected length");
            }
        }
        list
    }
}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for OwnedList<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, Idx: Index> PartialEq for OwnedList<T, Idx> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, Idx: Index> Eq for OwnedList<T, Idx> {}

/// Consuming iterator over an [`OwnedList`]'s values, front to back.
pub struct IntoIter<T, Idx: Index = u32> {
    inner: OwnedList<T, Idx>,
}

impl<T, Idx: Index> Iterator for IntoIter<T, Idx> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.list.pop_front(&mut self.inner.arena)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T, Idx: Index> DoubleEndedIterator for IntoIter<T, Idx> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.list.pop_back(&mut self.inner.arena)
    }
}

impl<T, Idx: Index> ExactSizeIterator for IntoIter<T, Idx> {}

impl<T, Idx: Index> IntoIterator for OwnedList<T, Idx> {
    type Item = T;
    type IntoIter = IntoIter<T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T, Idx: Index> IntoIterator for &'a OwnedList<T, Idx> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, FixedArena<Node<T, Idx>, Idx>, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, Idx: Index> IntoIterator for &'a mut OwnedList<T, Idx> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, FixedArena<Node<T, Idx>, Idx>, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
