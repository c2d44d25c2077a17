//! Structured errors for the checked operation tier.
//!
//! A [`ListError`] records what went wrong (the [`ErrorKind`]), a
//! human-readable message, the call site that produced it, and any context
//! attached while the error propagated. Callers either inspect the error,
//! forward it with `?` (optionally adding [`context`](ResultExt::context) or
//! a [`trace`](ResultExt::trace) entry per frame), or opt into
//! [`or_die`](ResultExt::or_die) at sites where failure is unrecoverable.

use core::fmt;
use std::borrow::Cow;
use std::panic::Location;
use std::sync::Mutex;

/// Convenience alias for results of checked list operations.
pub type Result<T> = core::result::Result<T, ListError>;

/// Failure categories reported by the checked tier.
///
/// Out-of-range positional lookups are not represented here: `at()` returns
/// `None` because absence is an expected outcome of a search, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The arena had no free slot during a push or insert.
    OutOfMemory,
    /// A pop or peek that requires at least one element hit an empty list.
    Empty,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "out of memory"),
            Self::Empty => write!(f, "empty list"),
        }
    }
}

/// Error record produced by checked list operations.
///
/// # Example
///
/// ```
/// use chainlist::{ErrorKind, OwnedList};
///
/// let mut list: OwnedList<u64> = OwnedList::with_capacity(4);
/// let err = list.pop_front().unwrap_err();
///
/// assert_eq!(err.kind(), ErrorKind::Empty);
/// assert!(err.location().file().ends_with(".rs"));
/// ```
#[derive(Debug, Clone)]
pub struct ListError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    location: &'static Location<'static>,
    context: Vec<Cow<'static, str>>,
}

impl ListError {
    /// Creates an error record, capturing the caller's source location.
    #[track_caller]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: Location::caller(),
            context: Vec::new(),
        }
    }

    /// Returns the failure category.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the call site where the error originated.
    #[inline]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Returns the context entries, outermost last.
    #[inline]
    pub fn context_chain(&self) -> &[Cow<'static, str>] {
        &self.context
    }

    /// Appends a context entry and returns the error.
    pub fn with_context(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.context.push(msg.into());
        self
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        write!(
            f,
            "\n    at {}:{}:{}",
            self.location.file(),
            self.location.line(),
            self.location.column()
        )?;
        for entry in &self.context {
            write!(f, "\n    context: {entry}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ListError {}

// Action invoked by `or_die` after the diagnostic is printed.
static FAILURE_ACTION: Mutex<fn() -> !> = Mutex::new(std::process::abort);

/// Replaces the process-wide action taken by [`ResultExt::or_die`] after it
/// prints its diagnostic. The default is `std::process::abort`.
pub fn set_failure_action(action: fn() -> !) {
    *FAILURE_ACTION.lock().unwrap_or_else(|e| e.into_inner()) = action;
}

fn die() -> ! {
    let action = *FAILURE_ACTION.lock().unwrap_or_else(|e| e.into_inner());
    action()
}

/// Propagation helpers for `Result<T, ListError>`.
pub trait ResultExt<T> {
    /// Attaches a context entry to the error, if any.
    fn context(self, msg: impl Into<Cow<'static, str>>) -> Result<T>;

    /// Appends the caller's source location to the error's context chain.
    ///
    /// Call this once per frame while re-surfacing an error to build a
    /// lightweight propagation trace.
    #[track_caller]
    fn trace(self) -> Result<T>;

    /// Unwraps the value, or prints the full diagnostic and invokes the
    /// configured failure action.
    ///
    /// This is the explicit opt-in for call sites that treat failure as
    /// unrecoverable; checked operations never abort on their own.
    fn or_die(self, msg: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, msg: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|err| err.with_context(msg))
    }

    #[track_caller]
    fn trace(self) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let loc = Location::caller();
                Err(err.with_context(format!(
                    "at {}:{}:{}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )))
            }
        }
    }

    fn or_die(self, msg: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                eprintln!("[fatal] {msg}\n{err}");
                die()
            }
        }
    }
}
