//! Single todo records and the shared handles lists hold them through.
//!
//! This module provides [`Todo`], a task record with an immutable title and
//! a completion flag, and [`SharedTodo`], the reference-counted handle
//! through which lists and callers alias the same underlying record.
//!
//! # Examples
//!
//! ```rust
//! use todors::todo::SharedTodo;
//!
//! let todo = SharedTodo::new("Buy milk");
//! let alias = todo.clone();
//!
//! alias.mark_done();
//!
//! // Both handles observe the same record
//! assert!(todo.is_done());
//! assert_eq!(todo.to_string(), "[X] Buy milk");
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use super::SharedCell;

// =============================================================================
// Constants
// =============================================================================

/// Marker rendered before the title of a completed todo.
const DONE_MARKER: &str = "[X]";

/// Marker rendered before the title of a pending todo.
const UNDONE_MARKER: &str = "[ ]";

// =============================================================================
// Todo Definition
// =============================================================================

/// A single task record with an immutable title and a completion flag.
///
/// The title is fixed at construction and never changes; the completion flag
/// starts out `false` and is toggled through [`mark_done`](Self::mark_done)
/// and [`mark_undone`](Self::mark_undone), both of which are idempotent and
/// cannot fail.
///
/// Lists do not store `Todo` values directly; they hold [`SharedTodo`]
/// handles so that a list and its filtered derivatives alias the same
/// record.
///
/// # Examples
///
/// ```rust
/// use todors::todo::Todo;
///
/// let mut todo = Todo::new("Buy milk");
/// assert_eq!(todo.title(), "Buy milk");
/// assert!(!todo.is_done());
///
/// todo.mark_done();
/// assert!(todo.is_done());
/// assert_eq!(todo.to_string(), "[X] Buy milk");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Todo {
    /// The task description, fixed at construction.
    title: String,
    /// Whether the task has been completed.
    done: bool,
}

impl Todo {
    /// Creates a new, not-yet-done todo with the given title.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todors::todo::Todo;
    ///
    /// let todo = Todo::new("Clean room");
    /// assert!(!todo.is_done());
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }

    /// Returns the title.
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns `true` if the todo has been completed.
    #[inline]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Marks the todo as done. Idempotent.
    #[inline]
    pub const fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the todo as not done. Idempotent.
    #[inline]
    pub const fn mark_undone(&mut self) {
        self.done = false;
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { DONE_MARKER } else { UNDONE_MARKER };
        write!(formatter, "{marker} {}", self.title)
    }
}

// =============================================================================
// SharedTodo Definition
// =============================================================================

/// A shared, mutable handle to a [`Todo`].
///
/// Cloning a `SharedTodo` does not copy the underlying record: both handles
/// alias the same todo, and a mark operation through either handle is
/// visible through the other. This is the sharing contract between a
/// [`TodoList`](crate::todo::TodoList) and its filtered derivatives.
///
/// Equality ([`PartialEq`]) compares the *current values* of the two
/// records; use [`ptr_eq`](Self::ptr_eq) to ask whether two handles alias
/// the same record.
///
/// `SharedTodo` is intentionally neither `Send` nor `Sync`; the library is
/// single-threaded.
///
/// # Examples
///
/// ```rust
/// use todors::todo::SharedTodo;
///
/// let todo = SharedTodo::new("Go to the gym");
/// let alias = todo.clone();
/// let twin = SharedTodo::new("Go to the gym");
///
/// assert!(todo.ptr_eq(&alias));
/// assert!(!todo.ptr_eq(&twin));
/// assert_eq!(todo, twin); // equal by value
///
/// alias.mark_done();
/// assert!(todo.is_done());
/// assert_ne!(todo, twin); // values diverged
/// ```
#[derive(Debug, Clone)]
pub struct SharedTodo {
    inner: SharedCell<Todo>,
}

impl SharedTodo {
    /// Creates a new, not-yet-done todo with the given title and returns a
    /// handle to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todors::todo::SharedTodo;
    ///
    /// let todo = SharedTodo::new("Buy milk");
    /// assert_eq!(&*todo.title(), "Buy milk");
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::from(Todo::new(title))
    }

    /// Returns a borrowed view of the title.
    ///
    /// The view keeps the underlying record borrowed until it is dropped;
    /// dereference it (`&*todo.title()`) to compare against a `&str`.
    #[inline]
    #[must_use]
    pub fn title(&self) -> Ref<'_, str> {
        Ref::map(self.inner.borrow(), |todo| todo.title())
    }

    /// Returns `true` if the todo has been completed.
    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.inner.borrow().is_done()
    }

    /// Marks the todo as done. Idempotent.
    ///
    /// Takes `&self`: the mutation goes through the shared record, and is
    /// visible through every handle and list that aliases it.
    #[inline]
    pub fn mark_done(&self) {
        self.inner.borrow_mut().mark_done();
    }

    /// Marks the todo as not done. Idempotent.
    #[inline]
    pub fn mark_undone(&self) {
        self.inner.borrow_mut().mark_undone();
    }

    /// Returns `true` if the two handles alias the same underlying record.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns an owned copy of the record's current state.
    ///
    /// The copy is detached: mutating it does not affect the shared record.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Todo {
        self.inner.borrow().clone()
    }
}

impl From<Todo> for SharedTodo {
    #[inline]
    fn from(todo: Todo) -> Self {
        Self {
            inner: Rc::new(RefCell::new(todo)),
        }
    }
}

impl PartialEq for SharedTodo {
    fn eq(&self, other: &Self) -> bool {
        *self.inner.borrow() == *other.inner.borrow()
    }
}

impl Eq for SharedTodo {}

impl fmt::Display for SharedTodo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.inner.borrow())
    }
}

static_assertions::assert_not_impl_any!(SharedTodo: Send, Sync);

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for SharedTodo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.borrow().serialize(serializer)
    }
}

// Deserialization produces a fresh record: handle identity is not part of
// the serialized form.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SharedTodo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Todo::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_todo_is_not_done() {
        let todo = Todo::new("Buy milk");
        assert_eq!(todo.title(), "Buy milk");
        assert!(!todo.is_done());
    }

    #[rstest]
    fn test_mark_done_is_idempotent() {
        let mut todo = Todo::new("Buy milk");
        todo.mark_done();
        todo.mark_done();
        assert!(todo.is_done());
    }

    #[rstest]
    fn test_mark_undone_is_idempotent() {
        let mut todo = Todo::new("Buy milk");
        todo.mark_done();
        todo.mark_undone();
        todo.mark_undone();
        assert!(!todo.is_done());
    }

    #[rstest]
    fn test_display_markers() {
        let mut todo = Todo::new("Buy milk");
        assert_eq!(format!("{todo}"), "[ ] Buy milk");
        todo.mark_done();
        assert_eq!(format!("{todo}"), "[X] Buy milk");
    }

    #[rstest]
    fn test_shared_todo_clone_aliases_record() {
        let todo = SharedTodo::new("Clean room");
        let alias = todo.clone();
        alias.mark_done();
        assert!(todo.is_done());
    }

    #[rstest]
    fn test_shared_todo_ptr_eq_distinguishes_twins() {
        let todo = SharedTodo::new("Clean room");
        let twin = SharedTodo::new("Clean room");
        assert!(todo.ptr_eq(&todo.clone()));
        assert!(!todo.ptr_eq(&twin));
        assert_eq!(todo, twin);
    }

    #[rstest]
    fn test_snapshot_is_detached() {
        let todo = SharedTodo::new("Clean room");
        let mut snapshot = todo.snapshot();
        snapshot.mark_done();
        assert!(!todo.is_done());
    }
}
