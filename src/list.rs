//! Doubly-linked list engine over arena storage.
//!
//! Nodes live in an [`Arena`]; the list itself is just a head/tail/len
//! triple coordinating prev/next indices. All structural operations are
//! O(1) except `clear`, `reverse` and `at`, which walk the chain.
//!
//! # Arena Invariant
//!
//! A list instance must always be used with the same arena instance.
//! Passing a different arena is a contract violation the engine cannot
//! detect; this is the caller's responsibility to enforce (same discipline
//! as the `slab` crate).
//!
//! # Example
//!
//! ```
//! use chainlist::{FixedArena, List, Node};
//!
//! let mut arena: FixedArena<Node<u64>> = FixedArena::with_capacity(16);
//! let mut list: List<u64, FixedArena<Node<u64>>> = List::new();
//!
//! let a = list.try_push_back(&mut arena, 10).unwrap();
//! list.try_push_back(&mut arena, 20).unwrap();
//! list.try_push_front(&mut arena, 5).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! let values: Vec<_> = list.iter(&arena).copied().collect();
//! assert_eq!(values, vec![5, 10, 20]);
//!
//! // O(1) removal from anywhere
//! assert_eq!(list.remove(&mut arena, a), Some(10));
//! ```
//!
//! # Moving nodes between lists
//!
//! [`detach`](List::detach) unlinks a node without freeing its slot and
//! hands back a [`Detached`] handle. The handle must be reattached to a
//! list over the same arena or explicitly discarded; dropping it leaks the
//! slot until the arena itself is cleared.
//!
//! ```
//! use chainlist::{FixedArena, List, Node};
//!
//! let mut arena: FixedArena<Node<u64>> = FixedArena::with_capacity(16);
//! let mut pending: List<u64, _> = List::new();
//! let mut done: List<u64, _> = List::new();
//!
//! let idx = pending.try_push_back(&mut arena, 42).unwrap();
//!
//! let node = pending.detach(&mut arena, idx);
//! done.attach_back(&mut arena, node);
//!
//! assert!(pending.is_empty());
//! assert_eq!(done.get(&arena, idx), Some(&42));
//! ```

use core::marker::PhantomData;

use crate::{Arena, Full, Index};

/// A node in a linked list: one value plus its prev/next links.
///
/// Arenas store `Node<T, Idx>` rather than bare `T`; callers interact with
/// `&T`/`&mut T` through the list's accessors and never touch the links.
#[derive(Debug)]
pub struct Node<T, Idx: Index = u32> {
    pub(crate) value: T,
    pub(crate) prev: Idx,
    pub(crate) next: Idx,
}

impl<T, Idx: Index> Node<T, Idx> {
    /// Creates a new unlinked node.
    #[inline]
    fn new(value: T) -> Self {
        Self {
            value,
            prev: Idx::NONE,
            next: Idx::NONE,
        }
    }
}

/// An unlinked node whose arena slot is still owned by the caller.
///
/// Returned by [`List::detach`]. The caller must either reattach it via
/// [`List::attach_back`]/[`List::attach_front`] or reclaim the slot with
/// [`Detached::discard`].
#[must_use = "a detached node must be reattached or discarded"]
#[derive(Debug)]
pub struct Detached<Idx: Index>(Idx);

impl<Idx: Index> Detached<Idx> {
    /// Returns the node's arena index.
    ///
    /// The index stays valid while the handle is alive; it can be used with
    /// [`List::get`]-style accessors on the arena's lists.
    #[inline]
    pub fn index(&self) -> Idx {
        self.0
    }

    /// Frees the node's slot and returns its value.
    pub fn discard<T, A>(self, arena: &mut A) -> T
    where
        A: Arena<Node<T, Idx>, Index = Idx>,
    {
        let node = arena.remove(self.0).expect("detached node missing from arena");
        node.value
    }
}

/// A doubly-linked list over arena storage.
///
/// The list tracks head, tail, and length. Nodes live in a caller-provided
/// arena, wrapped in [`Node`].
///
/// # Type Parameters
///
/// - `T`: element type
/// - `A`: arena type storing `Node<T, Idx>`
/// - `Idx`: index type (default `u32`)
#[derive(Debug)]
pub struct List<T, A, Idx: Index = u32>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    head: Idx,
    tail: Idx,
    len: usize,
    _marker: PhantomData<(T, A)>,
}

impl<T, A, Idx: Index> Default for List<T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A, Idx: Index> List<T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: Idx::NONE,
            tail: Idx::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's index, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<Idx> {
        if self.head.is_none() {
            None
        } else {
            Some(self.head)
        }
    }

    /// Returns the tail node's index, or `None` if empty.
    #[inline]
    pub fn tail(&self) -> Option<Idx> {
        if self.tail.is_none() {
            None
        } else {
            Some(self.tail)
        }
    }

    // ========================================================================
    // Insertion (allocate + link)
    // ========================================================================

    /// Pushes a value to the back of the list.
    ///
    /// Returns the index of the inserted element.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the arena has no free slot; the list is
    /// left unchanged.
    #[inline]
    pub fn try_push_back(&mut self, arena: &mut A, value: T) -> Result<Idx, Full<T>> {
        let idx = arena
            .try_insert(Node::new(value))
            .map_err(|e| Full(e.0.value))?;
        self.link_back(arena, idx);
        Ok(idx)
    }

    /// Pushes a value to the front of the list.
    ///
    /// Returns the index of the inserted element.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the arena has no free slot; the list is
    /// left unchanged.
    #[inline]
    pub fn try_push_front(&mut self, arena: &mut A, value: T) -> Result<Idx, Full<T>> {
        let idx = arena
            .try_insert(Node::new(value))
            .map_err(|e| Full(e.0.value))?;
        self.link_front(arena, idx);
        Ok(idx)
    }

    /// Inserts a value after an existing node, or at the front when `after`
    /// is `None`.
    ///
    /// Returns the index of the inserted element.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the arena has no free slot; the list is
    /// left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `after` is not a live index.
    #[inline]
    pub fn try_insert_after(
        &mut self,
        arena: &mut A,
        after: Option<Idx>,
        value: T,
    ) -> Result<Idx, Full<T>> {
        let Some(after) = after else {
            return self.try_push_front(arena, value);
        };

        let idx = arena
            .try_insert(Node::new(value))
            .map_err(|e| Full(e.0.value))?;
        self.link_after(arena, after, idx);
        Ok(idx)
    }

    // ========================================================================
    // Removal (unlink + deallocate)
    // ========================================================================

    /// Removes and returns the front element.
    ///
    /// Returns `None` if the list is empty; emptiness is not a failure at
    /// this tier.
    #[inline]
    pub fn pop_front(&mut self, arena: &mut A) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let idx = self.head;
        self.unlink(arena, idx);
        arena.remove(idx).map(|node| node.value)
    }

    /// Removes and returns the back element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_back(&mut self, arena: &mut A) -> Option<T> {
        if self.tail.is_none() {
            return None;
        }

        let idx = self.tail;
        self.unlink(arena, idx);
        arena.remove(idx).map(|node| node.value)
    }

    /// Removes an element by index.
    ///
    /// Returns `None` if the index is not live in the arena. The index must
    /// belong to this list (not to another list sharing the arena); that
    /// precondition is the caller's contract and is not checked.
    ///
    /// # Panics
    ///
    /// Panics if the node is live but already unlinked (held by a
    /// [`Detached`] handle); dispose of those with [`Detached::discard`].
    #[inline]
    pub fn remove(&mut self, arena: &mut A, idx: Idx) -> Option<T> {
        arena.get(idx)?;
        self.unlink(arena, idx);
        arena.remove(idx).map(|node| node.value)
    }

    /// Unlinks a node without freeing its slot, transferring ownership of
    /// the slot to the caller.
    ///
    /// The node's links are cleared. Reattach it with
    /// [`attach_back`](Self::attach_back)/[`attach_front`](Self::attach_front)
    /// (on any list over the same arena) or reclaim the slot with
    /// [`Detached::discard`].
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a live index, or if the node was already
    /// unlinked (a second `detach` of the same handle). `idx` must belong
    /// to this list; which list is not checked.
    #[inline]
    pub fn detach(&mut self, arena: &mut A, idx: Idx) -> Detached<Idx> {
        self.unlink(arena, idx);
        Detached(idx)
    }

    /// Links a detached node to the back of the list.
    ///
    /// Returns the node's index.
    #[inline]
    pub fn attach_back(&mut self, arena: &mut A, node: Detached<Idx>) -> Idx {
        let idx = node.0;
        self.link_back(arena, idx);
        idx
    }

    /// Links a detached node to the front of the list.
    ///
    /// Returns the node's index.
    #[inline]
    pub fn attach_front(&mut self, arena: &mut A, node: Detached<Idx>) -> Idx {
        let idx = node.0;
        self.link_front(arena, idx);
        idx
    }

    /// Clears the list, freeing every node's slot.
    pub fn clear(&mut self, arena: &mut A) {
        let mut idx = self.head;
        while idx.is_some() {
            let node = arena.remove(idx).expect("list node missing from arena");
            idx = node.next;
        }

        self.head = Idx::NONE;
        self.tail = Idx::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Appends `other` to the end of this list in O(1).
    ///
    /// Both lists must live over the same arena. `other` is always left
    /// empty afterwards, including when it already was.
    #[inline]
    pub fn append(&mut self, arena: &mut A, other: &mut Self) {
        if other.is_empty() {
            return;
        }

        if self.is_empty() {
            self.head = other.head;
            self.tail = other.tail;
            self.len = other.len;
        } else {
            arena
                .get_mut(self.tail)
                .expect("list tail missing from arena")
                .next = other.head;
            arena
                .get_mut(other.head)
                .expect("list head missing from arena")
                .prev = self.tail;
            self.tail = other.tail;
            self.len += other.len;
        }

        other.head = Idx::NONE;
        other.tail = Idx::NONE;
        other.len = 0;
    }

    /// Reverses the list in place in O(n).
    ///
    /// Every node's prev/next links are swapped, then head and tail.
    pub fn reverse(&mut self, arena: &mut A) {
        let mut idx = self.head;
        while idx.is_some() {
            let node = arena.get_mut(idx).expect("list node missing from arena");
            core::mem::swap(&mut node.prev, &mut node.next);
            // prev now holds the old successor
            idx = node.prev;
        }

        core::mem::swap(&mut self.head, &mut self.tail);
    }

    // ========================================================================
    // Lookup & navigation
    // ========================================================================

    /// Returns the index of the element at `position`, walking forward from
    /// the head in O(n).
    ///
    /// Returns `None` when `position >= len()`; an out-of-range position is
    /// an expected outcome, not an error.
    pub fn at(&self, arena: &A, position: usize) -> Option<Idx> {
        if position >= self.len {
            return None;
        }

        let mut idx = self.head;
        for _ in 0..position {
            idx = arena.get(idx).expect("list node missing from arena").next;
        }
        Some(idx)
    }

    /// Returns the index of the node after `idx`.
    ///
    /// Returns `None` if `idx` is the tail or not live.
    #[inline]
    pub fn next_index(&self, arena: &A, idx: Idx) -> Option<Idx> {
        let next = arena.get(idx)?.next;
        if next.is_none() { None } else { Some(next) }
    }

    /// Returns the index of the node before `idx`.
    ///
    /// Returns `None` if `idx` is the head or not live.
    #[inline]
    pub fn prev_index(&self, arena: &A, idx: Idx) -> Option<Idx> {
        let prev = arena.get(idx)?.prev;
        if prev.is_none() { None } else { Some(prev) }
    }

    /// Returns a reference to the element at `idx`.
    #[inline]
    pub fn get<'a>(&self, arena: &'a A, idx: Idx) -> Option<&'a T> {
        arena.get(idx).map(|node| &node.value)
    }

    /// Returns a mutable reference to the element at `idx`.
    #[inline]
    pub fn get_mut<'a>(&mut self, arena: &'a mut A, idx: Idx) -> Option<&'a mut T> {
        arena.get_mut(idx).map(|node| &mut node.value)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front<'a>(&self, arena: &'a A) -> Option<&'a T> {
        if self.head.is_none() {
            return None;
        }
        arena.get(self.head).map(|node| &node.value)
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut<'a>(&mut self, arena: &'a mut A) -> Option<&'a mut T> {
        if self.head.is_none() {
            return None;
        }
        arena.get_mut(self.head).map(|node| &mut node.value)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back<'a>(&self, arena: &'a A) -> Option<&'a T> {
        if self.tail.is_none() {
            return None;
        }
        arena.get(self.tail).map(|node| &node.value)
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut<'a>(&mut self, arena: &'a mut A) -> Option<&'a mut T> {
        if self.tail.is_none() {
            return None;
        }
        arena.get_mut(self.tail).map(|node| &mut node.value)
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns a bidirectional iterator over references, front to back.
    #[inline]
    pub fn iter<'a>(&self, arena: &'a A) -> Iter<'a, T, A, Idx> {
        Iter {
            arena,
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns a bidirectional iterator over mutable references, front to back.
    #[inline]
    pub fn iter_mut<'a>(&mut self, arena: &'a mut A) -> IterMut<'a, T, A, Idx> {
        IterMut {
            arena,
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns a bidirectional iterator over indices, front to back.
    ///
    /// Useful when both index and value are needed, or to collect indices
    /// before a pass that mutates the list.
    #[inline]
    pub fn indices<'a>(&self, arena: &'a A) -> Indices<'a, T, A, Idx> {
        Indices {
            arena,
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Empties the list, returning an iterator over the removed values.
    ///
    /// The list is empty as soon as this returns; slots are freed as the
    /// iterator is consumed (or when it is dropped).
    #[inline]
    pub fn drain<'a>(&mut self, arena: &'a mut A) -> Drain<'a, T, A, Idx> {
        let head = self.head;
        self.head = Idx::NONE;
        self.tail = Idx::NONE;
        self.len = 0;

        Drain {
            arena,
            current: head,
            _marker: PhantomData,
        }
    }

    /// Returns a cursor positioned at the front of the list.
    ///
    /// Cursors tolerate removal of the current element during traversal:
    /// the successor is captured before the node is unlinked.
    #[inline]
    pub fn cursor_front<'a>(&'a mut self, arena: &'a mut A) -> Cursor<'a, T, A, Idx> {
        let head = self.head;
        Cursor {
            list: self,
            arena,
            current: head,
        }
    }

    /// Returns a cursor positioned at the back of the list.
    #[inline]
    pub fn cursor_back<'a>(&'a mut self, arena: &'a mut A) -> Cursor<'a, T, A, Idx> {
        let tail = self.tail;
        Cursor {
            list: self,
            arena,
            current: tail,
        }
    }

    // ========================================================================
    // Link plumbing
    // ========================================================================

    fn link_back(&mut self, arena: &mut A, idx: Idx) {
        {
            let node = arena.get_mut(idx).expect("invalid index");
            node.prev = self.tail;
            node.next = Idx::NONE;
        }

        if self.tail.is_some() {
            arena
                .get_mut(self.tail)
                .expect("list tail missing from arena")
                .next = idx;
        } else {
            self.head = idx;
        }

        self.tail = idx;
        self.len += 1;
    }

    fn link_front(&mut self, arena: &mut A, idx: Idx) {
        {
            let node = arena.get_mut(idx).expect("invalid index");
            node.next = self.head;
            node.prev = Idx::NONE;
        }

        if self.head.is_some() {
            arena
                .get_mut(self.head)
                .expect("list head missing from arena")
                .prev = idx;
        } else {
            self.tail = idx;
        }

        self.head = idx;
        self.len += 1;
    }

    fn link_after(&mut self, arena: &mut A, after: Idx, idx: Idx) {
        let next = arena.get(after).expect("invalid 'after' index").next;

        {
            let node = arena.get_mut(idx).expect("invalid index");
            node.prev = after;
            node.next = next;
        }

        arena.get_mut(after).expect("invalid 'after' index").next = idx;

        if next.is_some() {
            arena
                .get_mut(next)
                .expect("list node missing from arena")
                .prev = idx;
        } else {
            self.tail = idx;
        }

        self.len += 1;
    }

    fn unlink(&mut self, arena: &mut A, idx: Idx) {
        let (prev, next) = {
            let node = arena.get(idx).expect("invalid index");
            (node.prev, node.next)
        };

        // A live node with cleared links that is not the head was already
        // unlinked; refuse rather than corrupt head/tail/len.
        assert!(
            prev.is_some() || next.is_some() || self.head == idx,
            "node is not linked into this list"
        );

        if prev.is_some() {
            arena
                .get_mut(prev)
                .expect("list node missing from arena")
                .next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            arena
                .get_mut(next)
                .expect("list node missing from arena")
                .prev = prev;
        } else {
            self.tail = prev;
        }

        let node = arena.get_mut(idx).expect("invalid index");
        node.prev = Idx::NONE;
        node.next = Idx::NONE;

        self.len -= 1;
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Bidirectional iterator over references to list elements.
pub struct Iter<'a, T, A, Idx: Index> {
    arena: &'a A,
    front: Idx,
    back: Idx,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, A, Idx: Index> Iterator for Iter<'a, T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self
            .arena
            .get(self.front)
            .expect("list node missing from arena");
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, A, Idx: Index> DoubleEndedIterator for Iter<'a, T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self
            .arena
            .get(self.back)
            .expect("list node missing from arena");
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T: 'a, A, Idx: Index> ExactSizeIterator for Iter<'a, T, A, Idx> where
    A: Arena<Node<T, Idx>, Index = Idx>
{
}

impl<'a, T: 'a, A, Idx: Index> core::iter::FusedIterator for Iter<'a, T, A, Idx> where
    A: Arena<Node<T, Idx>, Index = Idx>
{
}

/// Bidirectional iterator over mutable references to list elements.
pub struct IterMut<'a, T, A, Idx: Index> {
    arena: &'a mut A,
    front: Idx,
    back: Idx,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, A, Idx: Index> Iterator for IterMut<'a, T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self
            .arena
            .get_mut(self.front)
            .expect("list node missing from arena");
        self.front = node.next;
        self.remaining -= 1;

        // Extend lifetime - sound because each node is visited exactly once
        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, A, Idx: Index> DoubleEndedIterator for IterMut<'a, T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self
            .arena
            .get_mut(self.back)
            .expect("list node missing from arena");
        self.back = node.prev;
        self.remaining -= 1;

        // Extend lifetime - sound because each node is visited exactly once
        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }
}

impl<'a, T: 'a, A, Idx: Index> ExactSizeIterator for IterMut<'a, T, A, Idx> where
    A: Arena<Node<T, Idx>, Index = Idx>
{
}

impl<'a, T: 'a, A, Idx: Index> core::iter::FusedIterator for IterMut<'a, T, A, Idx> where
    A: Arena<Node<T, Idx>, Index = Idx>
{
}

/// Bidirectional iterator over the indices of list nodes.
pub struct Indices<'a, T, A, Idx: Index> {
    arena: &'a A,
    front: Idx,
    back: Idx,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<'a, T, A, Idx: Index> Iterator for Indices<'a, T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    type Item = Idx;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let idx = self.front;
        self.front = self
            .arena
            .get(idx)
            .expect("list node missing from arena")
            .next;
        self.remaining -= 1;
        Some(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, A, Idx: Index> DoubleEndedIterator for Indices<'a, T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let idx = self.back;
        self.back = self
            .arena
            .get(idx)
            .expect("list node missing from arena")
            .prev;
        self.remaining -= 1;
        Some(idx)
    }
}

impl<'a, T, A, Idx: Index> ExactSizeIterator for Indices<'a, T, A, Idx> where
    A: Arena<Node<T, Idx>, Index = Idx>
{
}

/// Iterator that removes and returns values from a list.
pub struct Drain<'a, T, A, Idx: Index>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    arena: &'a mut A,
    current: Idx,
    _marker: PhantomData<T>,
}

impl<'a, T, A, Idx: Index> Iterator for Drain<'a, T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        let node = self
            .arena
            .remove(self.current)
            .expect("list node missing from arena");
        self.current = node.next;
        Some(node.value)
    }
}

impl<T, A, Idx: Index> Drop for Drain<'_, T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    fn drop(&mut self) {
        // Exhaust remaining elements so their slots are freed
        for _ in self.by_ref() {}
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// A cursor over a list that tolerates removal of the current element.
///
/// Before [`remove_current`](Cursor::remove_current) unlinks a node it
/// captures the successor, so traversal continues where a plain iterator
/// would have been invalidated.
///
/// # Example
///
/// ```
/// use chainlist::{FixedArena, List, Node};
///
/// let mut arena: FixedArena<Node<u64>> = FixedArena::with_capacity(16);
/// let mut list: List<u64, _> = List::new();
/// for v in [1, 2, 3, 4, 5] {
///     list.try_push_back(&mut arena, v).unwrap();
/// }
///
/// // Drop the even elements mid-walk
/// let mut cursor = list.cursor_front(&mut arena);
/// while let Some(&v) = cursor.current() {
///     if v % 2 == 0 {
///         cursor.remove_current();
///     } else {
///         cursor.move_next();
///     }
/// }
///
/// let odd: Vec<_> = list.iter(&arena).copied().collect();
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub struct Cursor<'a, T, A, Idx: Index>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    list: &'a mut List<T, A, Idx>,
    arena: &'a mut A,
    current: Idx,
}

impl<'a, T, A, Idx: Index> Cursor<'a, T, A, Idx>
where
    A: Arena<Node<T, Idx>, Index = Idx>,
{
    /// Returns a reference to the current element, or `None` if the cursor
    /// has walked off the list.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        if self.current.is_none() {
            return None;
        }
        self.arena.get(self.current).map(|node| &node.value)
    }

    /// Returns a mutable reference to the current element.
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.current.is_none() {
            return None;
        }
        self.arena.get_mut(self.current).map(|node| &mut node.value)
    }

    /// Returns the current element's index, or `None` if exhausted.
    #[inline]
    pub fn index(&self) -> Option<Idx> {
        if self.current.is_none() {
            None
        } else {
            Some(self.current)
        }
    }

    /// Advances to the next element; a no-op once exhausted.
    #[inline]
    pub fn move_next(&mut self) {
        if self.current.is_some() {
            self.current = self
                .arena
                .get(self.current)
                .expect("list node missing from arena")
                .next;
        }
    }

    /// Moves to the previous element; a no-op once exhausted.
    #[inline]
    pub fn move_prev(&mut self) {
        if self.current.is_some() {
            self.current = self
                .arena
                .get(self.current)
                .expect("list node missing from arena")
                .prev;
        }
    }

    /// Removes the current element and advances to its successor.
    ///
    /// Returns the removed value, or `None` if the cursor is exhausted.
    #[inline]
    pub fn remove_current(&mut self) -> Option<T> {
        if self.current.is_none() {
            return None;
        }

        let idx = self.current;
        let next = self
            .arena
            .get(idx)
            .expect("list node missing from arena")
            .next;

        self.list.unlink(self.arena, idx);
        self.current = next;

        self.arena.remove(idx).map(|node| node.value)
    }
}
