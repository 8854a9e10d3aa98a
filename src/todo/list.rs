//! Ordered, insertion-order-preserving todo list.
//!
//! This module provides [`TodoList`], an ordered container of
//! [`SharedTodo`] handles supporting positional access, bulk state
//! transitions, derived filtered views, and exact textual rendering.
//!
//! # Overview
//!
//! A `TodoList` preserves insertion order across every non-filtering
//! operation. Items are held through shared handles, so a list derived via
//! [`filter`](TodoList::filter) aliases the same records as its source:
//! mutating a todo through one list is visible through the other.
//!
//! # Time Complexity
//!
//! | Operation                      | Complexity |
//! |--------------------------------|------------|
//! | `add`, `pop_back`              | O(1) amortized |
//! | `len`, `is_empty`, `first`, `last`, `item_at` | O(1) |
//! | `pop_front`, `remove_at`       | O(n) |
//! | `is_done`, `filter`, `find_by_title`, `mark_all_done`, `to_vec`, rendering | O(n) |
//!
//! # Examples
//!
//! ```rust
//! use todors::todo::{SharedTodo, TodoList};
//!
//! let mut list = TodoList::new("Today's Todos");
//! list.add(SharedTodo::new("Buy milk"));
//! list.add(SharedTodo::new("Clean room"));
//! list.add(SharedTodo::new("Go to the gym"));
//!
//! list.mark_done_at(0).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(
//!     list.to_string(),
//!     "----Today's Todos----\n[X] Buy milk\n[ ] Clean room\n[ ] Go to the gym"
//! );
//! ```

use std::fmt;

use super::error::{OutOfRangeError, TodoListError};
use super::item::SharedTodo;

// =============================================================================
// TodoList Definition
// =============================================================================

/// An ordered, insertion-order-preserving container of shared todos.
///
/// The list owns a sequence of [`SharedTodo`] handles and a title used by
/// the textual rendering. Membership is typed: [`add`](Self::add) accepts
/// only `SharedTodo`, so no runtime membership check exists.
///
/// Two kinds of access coexist:
///
/// - **Lenient**: [`first`](Self::first), [`last`](Self::last),
///   [`pop_front`](Self::pop_front), [`pop_back`](Self::pop_back), and
///   [`find_by_title`](Self::find_by_title) yield `None` when there is
///   legitimately nothing to return.
/// - **Strict**: [`item_at`](Self::item_at) and the positional mutators
///   built on it ([`mark_done_at`](Self::mark_done_at),
///   [`mark_undone_at`](Self::mark_undone_at),
///   [`remove_at`](Self::remove_at)) fail with
///   [`TodoListError::OutOfRange`] for any position outside `0..len`.
///
/// Cloning a list is shallow: the clone shares every todo with the
/// original, in the same order.
///
/// # Examples
///
/// ```rust
/// use todors::todo::{SharedTodo, TodoList};
///
/// let mut list = TodoList::new("Today's Todos");
/// list.add(SharedTodo::new("Buy milk"));
///
/// let derived = list.all_not_done();
/// derived.mark_all_done();
/// assert!(list.is_done()); // shared records
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    /// Label used by the textual rendering.
    title: String,
    /// The contained todos, in insertion order.
    todos: Vec<SharedTodo>,
}

impl TodoList {
    /// Creates a new, empty list with the given title.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todors::todo::TodoList;
    ///
    /// let list = TodoList::new("Today's Todos");
    /// assert!(list.is_empty());
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Creates a list with the given title containing the given todos, in
    /// iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todors::todo::{SharedTodo, TodoList};
    ///
    /// let list = TodoList::with_todos(
    ///     "Today's Todos",
    ///     [SharedTodo::new("Buy milk"), SharedTodo::new("Clean room")],
    /// );
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn with_todos<I>(title: impl Into<String>, todos: I) -> Self
    where
        I: IntoIterator<Item = SharedTodo>,
    {
        Self {
            title: title.into(),
            todos: todos.into_iter().collect(),
        }
    }

    /// Returns the list's title.
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the number of todos in the list.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns `true` if the list contains no todos.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Appends a todo to the end of the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todors::todo::{SharedTodo, TodoList};
    ///
    /// let mut list = TodoList::new("Today's Todos");
    /// list.add(SharedTodo::new("Buy milk"));
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    pub fn add(&mut self, todo: SharedTodo) {
        self.todos.push(todo);
    }

    /// Returns the first todo without removing it, or `None` if the list is
    /// empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&SharedTodo> {
        self.todos.first()
    }

    /// Returns the last todo without removing it, or `None` if the list is
    /// empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&SharedTodo> {
        self.todos.last()
    }

    /// Returns the todo at the given zero-based position.
    ///
    /// This is the strict, validated accessor: unlike
    /// [`first`](Self::first)/[`last`](Self::last), a position outside
    /// `0..len` is an error, not an absent value. The positional mutators
    /// resolve their target through this method and propagate its failure.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::OutOfRange`] if `position >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todors::todo::{SharedTodo, TodoList};
    ///
    /// let mut list = TodoList::new("Today's Todos");
    /// list.add(SharedTodo::new("Buy milk"));
    ///
    /// assert!(list.item_at(0).is_ok());
    /// assert!(list.item_at(1).is_err());
    /// ```
    pub fn item_at(&self, position: usize) -> Result<&SharedTodo, TodoListError> {
        self.todos
            .get(position)
            .ok_or(TodoListError::OutOfRange(OutOfRangeError {
                position,
                length: self.todos.len(),
            }))
    }

    /// Marks the todo at the given position as done.
    ///
    /// The mutation goes through the shared record and is visible through
    /// every list and handle aliasing it; the list's structure is untouched,
    /// so the method takes `&self`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::OutOfRange`] if `position >= len`.
    pub fn mark_done_at(&self, position: usize) -> Result<(), TodoListError> {
        self.item_at(position)?.mark_done();
        Ok(())
    }

    /// Marks the todo at the given position as not done.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::OutOfRange`] if `position >= len`.
    pub fn mark_undone_at(&self, position: usize) -> Result<(), TodoListError> {
        self.item_at(position)?.mark_undone();
        Ok(())
    }

    /// Returns `true` if every contained todo is done.
    ///
    /// Vacuously true for an empty list.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(SharedTodo::is_done)
    }

    /// Removes and returns the first todo, or `None` if the list is empty.
    ///
    /// All remaining todos shift one position down.
    pub fn pop_front(&mut self) -> Option<SharedTodo> {
        if self.todos.is_empty() {
            return None;
        }
        Some(self.todos.remove(0))
    }

    /// Removes and returns the last todo, or `None` if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<SharedTodo> {
        self.todos.pop()
    }

    /// Removes and returns the todo at the given position.
    ///
    /// Subsequent todos shift one position down. The position is validated
    /// through [`item_at`](Self::item_at) before anything is removed.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::OutOfRange`] if `position >= len`; the list
    /// is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todors::todo::{SharedTodo, TodoList};
    ///
    /// let mut list = TodoList::new("Today's Todos");
    /// list.add(SharedTodo::new("Buy milk"));
    /// list.add(SharedTodo::new("Clean room"));
    ///
    /// let removed = list.remove_at(1).unwrap();
    /// assert_eq!(&*removed.title(), "Clean room");
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove_at(&mut self, position: usize) -> Result<SharedTodo, TodoListError> {
        self.item_at(position)?;
        Ok(self.todos.remove(position))
    }

    /// Returns an iterator over the todos, in order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> TodoListIterator<'_> {
        TodoListIterator {
            inner: self.todos.iter(),
        }
    }

    /// Invokes `function` once per todo, in order, for side effects only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todors::todo::{SharedTodo, TodoList};
    ///
    /// let mut list = TodoList::new("Today's Todos");
    /// list.add(SharedTodo::new("Buy milk"));
    ///
    /// let mut count = 0;
    /// list.for_each(|_| count += 1);
    /// assert_eq!(count, 1);
    /// ```
    pub fn for_each<F>(&self, mut function: F)
    where
        F: FnMut(&SharedTodo),
    {
        for todo in &self.todos {
            function(todo);
        }
    }

    /// Returns a new list, with the same title, containing the todos for
    /// which `predicate` returns `true`, in the original order.
    ///
    /// The source list is not mutated, and the returned list shares its
    /// todos with the source: mutating a todo through either list is
    /// visible through the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todors::todo::{SharedTodo, TodoList};
    ///
    /// let mut list = TodoList::new("Today's Todos");
    /// list.add(SharedTodo::new("Buy milk"));
    /// list.add(SharedTodo::new("Clean room"));
    /// list.mark_done_at(0).unwrap();
    ///
    /// let done = list.filter(|todo| todo.is_done());
    /// assert_eq!(done.len(), 1);
    /// assert_eq!(done.title(), list.title());
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&SharedTodo) -> bool,
    {
        let mut todos = Vec::new();
        for todo in &self.todos {
            if predicate(todo) {
                todos.push(todo.clone());
            }
        }
        Self {
            title: self.title.clone(),
            todos,
        }
    }

    /// Returns the first todo whose title exactly equals `title`, or `None`
    /// if no todo matches.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<SharedTodo> {
        self.todos
            .iter()
            .find(|todo| *todo.title() == *title)
            .cloned()
    }

    /// Returns a new list containing the todos that are done.
    ///
    /// Equivalent to `filter(|todo| todo.is_done())`.
    #[must_use]
    pub fn all_done(&self) -> Self {
        self.filter(|todo| todo.is_done())
    }

    /// Returns a new list containing the todos that are not done.
    ///
    /// Equivalent to `filter(|todo| !todo.is_done())`.
    #[must_use]
    pub fn all_not_done(&self) -> Self {
        self.filter(|todo| !todo.is_done())
    }

    /// Marks the first todo whose title exactly equals `title` as done.
    ///
    /// Does nothing if no todo matches; the silent no-op is the contract,
    /// not an error.
    pub fn mark_done(&self, title: &str) {
        if let Some(todo) = self.find_by_title(title) {
            todo.mark_done();
        }
    }

    /// Marks every contained todo as done, in order.
    pub fn mark_all_done(&self) {
        for todo in &self.todos {
            todo.mark_done();
        }
    }

    /// Marks every contained todo as not done, in order.
    pub fn mark_all_undone(&self) {
        for todo in &self.todos {
            todo.mark_undone();
        }
    }

    /// Returns a shallow copy of the contained sequence.
    ///
    /// Mutating the returned `Vec` (pushing, popping, reordering) never
    /// affects the list; mutating a *todo* reached through it does, since
    /// the handles are shared.
    #[must_use]
    pub fn to_vec(&self) -> Vec<SharedTodo> {
        self.todos.clone()
    }
}

static_assertions::assert_not_impl_any!(TodoList: Send, Sync);

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the todos in a [`TodoList`].
pub struct TodoListIterator<'a> {
    inner: std::slice::Iter<'a, SharedTodo>,
}

impl<'a> Iterator for TodoListIterator<'a> {
    type Item = &'a SharedTodo;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for TodoListIterator<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl DoubleEndedIterator for TodoListIterator<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Owning iterator over the todos of a consumed [`TodoList`].
pub struct TodoListIntoIterator {
    inner: std::vec::IntoIter<SharedTodo>,
}

impl Iterator for TodoListIntoIterator {
    type Item = SharedTodo;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for TodoListIntoIterator {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl DoubleEndedIterator for TodoListIntoIterator {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for TodoList {
    /// Renders the list as its header line followed by one line per todo.
    ///
    /// The header is `----<title>----`; each todo line is the todo's own
    /// rendering. Lines are newline-joined with no trailing newline, and an
    /// empty list renders as just the header line.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "----{}----", self.title)?;
        for todo in &self.todos {
            write!(formatter, "\n{todo}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a SharedTodo;
    type IntoIter = TodoListIterator<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for TodoList {
    type Item = SharedTodo;
    type IntoIter = TodoListIntoIterator;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        TodoListIntoIterator {
            inner: self.todos.into_iter(),
        }
    }
}

impl Extend<SharedTodo> for TodoList {
    #[inline]
    fn extend<I: IntoIterator<Item = SharedTodo>>(&mut self, iter: I) {
        self.todos.extend(iter);
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for TodoList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TodoList", 2)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("todos", &self.todos)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
struct TodoListVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for TodoListVisitor {
    type Value = TodoList;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("struct TodoList")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let title: String = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
        let todos: Vec<SharedTodo> = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
        Ok(TodoList { title, todos })
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut title: Option<String> = None;
        let mut todos: Option<Vec<SharedTodo>> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "title" => {
                    if title.is_some() {
                        return Err(serde::de::Error::duplicate_field("title"));
                    }
                    title = Some(map.next_value()?);
                }
                "todos" => {
                    if todos.is_some() {
                        return Err(serde::de::Error::duplicate_field("todos"));
                    }
                    todos = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<serde::de::IgnoredAny>()?;
                }
            }
        }
        let title = title.ok_or_else(|| serde::de::Error::missing_field("title"))?;
        let todos = todos.ok_or_else(|| serde::de::Error::missing_field("todos"))?;
        Ok(TodoList { title, todos })
    }
}

// Deserialization produces fresh handles: aliasing between a serialized
// source list and its derivatives is not preserved across a round trip.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TodoList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_struct("TodoList", &["title", "todos"], TodoListVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn groceries() -> TodoList {
        TodoList::with_todos(
            "Groceries",
            [
                SharedTodo::new("Milk"),
                SharedTodo::new("Eggs"),
                SharedTodo::new("Bread"),
            ],
        )
    }

    #[rstest]
    fn test_new_list_is_empty() {
        let list = TodoList::new("Groceries");
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.title(), "Groceries");
    }

    #[rstest]
    fn test_add_preserves_insertion_order() {
        let list = groceries();
        let titles: Vec<String> = list.iter().map(|todo| todo.title().to_string()).collect();
        assert_eq!(titles, ["Milk", "Eggs", "Bread"]);
    }

    #[rstest]
    fn test_item_at_out_of_range_carries_position_and_length() {
        let list = groceries();
        let error = list.item_at(7).unwrap_err();
        assert_eq!(
            error,
            TodoListError::OutOfRange(OutOfRangeError {
                position: 7,
                length: 3,
            })
        );
    }

    #[rstest]
    fn test_remove_at_out_of_range_leaves_list_unchanged() {
        let mut list = groceries();
        assert!(list.remove_at(3).is_err());
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_filter_shares_records_with_source() {
        let list = groceries();
        let derived = list.filter(|_| true);
        derived.mark_all_done();
        assert!(list.is_done());
    }

    #[rstest]
    fn test_clone_is_shallow() {
        let list = groceries();
        let clone = list.clone();
        clone.mark_done_at(1).unwrap();
        assert!(list.item_at(1).unwrap().is_done());
    }

    #[rstest]
    fn test_is_done_vacuously_true_for_empty_list() {
        assert!(TodoList::new("Groceries").is_done());
    }

    #[rstest]
    fn test_display_empty_list_is_header_only() {
        let list = TodoList::new("Groceries");
        assert_eq!(list.to_string(), "----Groceries----");
    }

    #[rstest]
    fn test_iterators_are_exact_size_and_double_ended() {
        let list = groceries();
        let mut iterator = list.iter();
        assert_eq!(iterator.len(), 3);
        assert_eq!(&*iterator.next_back().unwrap().title(), "Bread");
        assert_eq!(iterator.len(), 2);

        let mut into_iterator = list.into_iter();
        assert_eq!(into_iterator.len(), 3);
        assert_eq!(&*into_iterator.next().unwrap().title(), "Milk");
    }

    #[rstest]
    fn test_extend_appends_in_order() {
        let mut list = TodoList::new("Groceries");
        list.extend([SharedTodo::new("Milk"), SharedTodo::new("Eggs")]);
        assert_eq!(list.len(), 2);
        assert_eq!(&*list.last().unwrap().title(), "Eggs");
    }
}
