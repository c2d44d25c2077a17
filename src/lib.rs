//! Arena-backed doubly-linked lists.
//!
//! Nodes live in index-addressed arena slots instead of individually boxed
//! allocations, so every structural operation — push, pop, remove by
//! handle, detach, O(1) splice — is pointer-free and allocation happens
//! once, up front. One generic engine serves every element type; there is
//! no per-type setup.
//!
//! # Three tiers
//!
//! - **Engine** ([`List`] + [`Arena`]): the caller threads the arena
//!   through every call. Multiple lists can share one arena, and
//!   [`List::append`] splices between them in O(1). Fallible allocation
//!   surfaces as [`Full`], emptiness as `None`.
//! - **Checked** (`checked_*` methods on [`List`]): the same operations
//!   returning [`Result`](crate::Result), with a [`ListError`] that
//!   records the failure kind, call site, and caller-supplied context.
//! - **Owned** ([`OwnedList`]): a self-contained container that owns its
//!   arena and exposes only the checked surface.
//!
//! # Quick start
//!
//! ```
//! use chainlist::OwnedList;
//!
//! let mut list: OwnedList<&str> = OwnedList::with_capacity(8);
//! list.push_back("beta")?;
//! list.push_front("alpha")?;
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.pop_front()?, "alpha");
//! # Ok::<(), chainlist::ListError>(())
//! ```
//!
//! # Stable indices
//!
//! Mutating operations return the element's arena index. An index stays
//! valid until that element is removed, regardless of what happens to the
//! rest of the list — removal by index is O(1) with no traversal.
//!
//! The index type is a generic parameter (default `u32`); see [`Index`].
//! Freed slots are reused, so a stale index may later address a different
//! element. Callers that need to detect this should wrap values with their
//! own generation counter.
//!
//! # Choosing a tier
//!
//! Use [`OwnedList`] unless lists need to share storage. Share an arena
//! (engine tier) when elements migrate between lists on a hot path and the
//! O(1) splice/detach operations matter.

#![warn(missing_docs)]

mod arena;
mod checked;
mod error;
mod index;
mod list;
mod owned;

pub use arena::{Arena, FixedArena, Full};
pub use error::{set_failure_action, ErrorKind, ListError, Result, ResultExt};
pub use index::Index;
pub use list::{Cursor, Detached, Drain, Indices, Iter, IterMut, List, Node};
pub use owned::{IntoIter, OwnedList};
