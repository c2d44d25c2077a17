//! Checked operations: the engine's fallible surface as `Result`s.
//!
//! Every `checked_*` method mirrors an engine operation but reports failure
//! as a [`ListError`] carrying the failure kind, a message, and the call
//! site. Emptiness, which the base tier reports as `None`, becomes
//! [`ErrorKind::Empty`] here; arena exhaustion becomes
//! [`ErrorKind::OutOfMemory`].
//!
//! Nothing in this tier aborts or panics on failure. Call sites that treat
//! failure as unrecoverable opt in explicitly with
//! [`ResultExt::or_die`](crate::ResultExt::or_die).
//!
//! # Example
//!
//! ```
//! use chainlist::{ErrorKind, FixedArena, List, Node, ResultExt};
//!
//! let mut arena: FixedArena<Node<u64>> = FixedArena::with_capacity(1);
//! let mut list: List<u64, _> = List::new();
//!
//! list.checked_push_back(&mut arena, 1)?;
//!
//! let err = list.checked_push_back(&mut arena, 2).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfMemory);
//!
//! // Context composes while the error propagates
//! let err = list
//!     .checked_push_back(&mut arena, 3)
//!     .context("while enqueueing job")
//!     .unwrap_err();
//! assert_eq!(err.context_chain(), ["while enqueueing job"]);
//! # Ok::<(), chainlist::ListError>(())
//! ```

use crate::error::{ErrorKind, ListError, Result};
use crate::{Arena, Index, List, Node};

impl<T, A, Idx: Index> List<T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    /// Pushes a value to the back, reporting exhaustion as an error.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfMemory`] if the arena has no free slot. The value
    /// is dropped; use [`try_push_back`](Self::try_push_back) to get it
    /// back on failure.
    #[track_caller]
    pub fn checked_push_back(&mut self, arena: &mut A, value: T) -> Result<Idx> {
        // Errors are built in the method body, not a closure: closures do
        // not inherit #[track_caller], so the location would be this frame
        // instead of the caller's.
        match self.try_push_back(arena, value) {
            Ok(idx) => Ok(idx),
            Err(_) => Err(ListError::new(
                ErrorKind::OutOfMemory,
                "push_back: arena has no free slot",
            )),
        }
    }

    /// Pushes a value to the front, reporting exhaustion as an error.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfMemory`] if the arena has no free slot.
    #[track_caller]
    pub fn checked_push_front(&mut self, arena: &mut A, value: T) -> Result<Idx> {
        match self.try_push_front(arena, value) {
            Ok(idx) => Ok(idx),
            Err(_) => Err(ListError::new(
                ErrorKind::OutOfMemory,
                "push_front: arena has no free slot",
            )),
        }
    }

    /// Inserts a value after `after` (or at the front when `None`),
    /// reporting exhaustion as an error.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfMemory`] if the arena has no free slot.
    ///
    /// # Panics
    ///
    /// Panics if `after` is not a live index.
    #[track_caller]
    pub fn checked_insert_after(
        &mut self,
        arena: &mut A,
        after: Option<Idx>,
        value: T,
    ) -> Result<Idx> {
        match self.try_insert_after(arena, after, value) {
            Ok(idx) => Ok(idx),
            Err(_) => Err(ListError::new(
                ErrorKind::OutOfMemory,
                "insert_after: arena has no free slot",
            )),
        }
    }

    /// Removes and returns the front element, reporting emptiness as an
    /// error.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Empty`] if the list has no elements.
    #[track_caller]
    pub fn checked_pop_front(&mut self, arena: &mut A) -> Result<T> {
        match self.pop_front(arena) {
            Some(value) => Ok(value),
            None => Err(ListError::new(ErrorKind::Empty, "pop_front on empty list")),
        }
    }

    /// Removes and returns the back element, reporting emptiness as an
    /// error.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Empty`] if the list has no elements.
    #[track_caller]
    pub fn checked_pop_back(&mut self, arena: &mut A) -> Result<T> {
        match self.pop_back(arena) {
            Some(value) => Ok(value),
            None => Err(ListError::new(ErrorKind::Empty, "pop_back on empty list")),
        }
    }

    /// Returns a reference to the front element, reporting emptiness as an
    /// error.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Empty`] if the list has no elements.
    #[track_caller]
    pub fn checked_front<'a>(&self, arena: &'a A) -> Result<&'a T> {
        match self.front(arena) {
            Some(value) => Ok(value),
            None => Err(ListError::new(ErrorKind::Empty, "front on empty list")),
        }
    }

    /// Returns a reference to the back element, reporting emptiness as an
    /// error.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Empty`] if the list has no elements.
    #[track_caller]
    pub fn checked_back<'a>(&self, arena: &'a A) -> Result<&'a T> {
        match self.back(arena) {
            Some(value) => Ok(value),
            None => Err(ListError::new(ErrorKind::Empty, "back on empty list")),
        }
    }
}
