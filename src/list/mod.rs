//! Sequential lists under test.
//!
//! [`SequentialList`] is the capability the scenarios rely on: append,
//! bulk append, first-match removal, and membership. It is implemented for
//! the array-backed [`Vec`] and the node-linked [`LinkedList`].
//!
//! [`LinkedList`]: std::collections::LinkedList

mod array;
mod linked;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered collection supporting the benchmarked operations.
pub trait SequentialList<T: PartialEq>: Default {
    /// Create an empty list sized for `capacity` elements where the
    /// representation allows it.
    fn with_capacity(capacity: usize) -> Self;

    /// Append `value` at the end.
    fn append(&mut self, value: T);

    /// Append clones of `values`, in order.
    fn append_all(&mut self, values: &[T])
    where
        T: Clone;

    /// Remove the first element equal to `value`. Returns whether an element
    /// was removed; on a miss the list is left untouched.
    fn remove_first(&mut self, value: &T) -> bool;

    /// Whether any element equals `value`.
    fn contains(&self, value: &T) -> bool;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the list has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ordered snapshot of the contents.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

/// Which list implementation a case exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// [`Vec`], contiguous storage.
    Array,
    /// [`LinkedList`](std::collections::LinkedList), one heap node per element.
    Linked,
}

impl ListKind {
    /// Every kind, in reporting order.
    pub const ALL: [ListKind; 2] = [ListKind::Array, ListKind::Linked];

    /// Human-readable label used in case names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Array => "Array List",
            Self::Linked => "Linked List",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::LinkedList;

    const INPUT: [&str; 5] = ["a", "b", "c", "b", "e"];

    fn append_each<L: SequentialList<&'static str>>() -> L {
        let mut list = L::default();
        for value in INPUT {
            list.append(value);
        }
        list
    }

    fn check_append_order<L: SequentialList<&'static str>>() {
        let list = append_each::<L>();
        assert_eq!(list.len(), INPUT.len());
        assert_eq!(list.to_vec(), INPUT.to_vec());
    }

    fn check_append_all<L: SequentialList<&'static str>>() {
        let mut list = L::with_capacity(2);
        list.append("start");
        list.append_all(&INPUT);
        assert_eq!(list.len(), 6);
        assert_eq!(list.to_vec()[1..], INPUT);
    }

    fn check_remove_first<L: SequentialList<&'static str>>() {
        let mut list = append_each::<L>();

        assert!(list.remove_first(&"b"));
        assert_eq!(list.to_vec(), vec!["a", "c", "b", "e"]);

        assert!(list.remove_first(&"a"));
        assert!(list.remove_first(&"e"));
        assert_eq!(list.to_vec(), vec!["c", "b"]);
    }

    fn check_remove_missing<L: SequentialList<&'static str>>() {
        let mut list = append_each::<L>();

        assert!(!list.remove_first(&"z"));
        assert_eq!(list.to_vec(), INPUT.to_vec());
    }

    fn check_contains<L: SequentialList<&'static str>>() {
        let list = append_each::<L>();
        assert!(list.contains(&"c"));
        assert!(!list.contains(&"z"));
        assert!(!L::default().contains(&"a"));
    }

    fn check_empty<L: SequentialList<&'static str>>() {
        let mut list = L::with_capacity(8);
        assert!(list.is_empty());
        assert!(!list.remove_first(&"a"));

        list.append("a");
        assert!(!list.is_empty());
        assert!(list.remove_first(&"a"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        check_append_order::<Vec<_>>();
        check_append_order::<LinkedList<_>>();
    }

    #[test]
    fn test_append_all_appends_in_order() {
        check_append_all::<Vec<_>>();
        check_append_all::<LinkedList<_>>();
    }

    #[test]
    fn test_remove_first_match_only() {
        check_remove_first::<Vec<_>>();
        check_remove_first::<LinkedList<_>>();
    }

    #[test]
    fn test_remove_missing_leaves_list_unchanged() {
        check_remove_missing::<Vec<_>>();
        check_remove_missing::<LinkedList<_>>();
    }

    #[test]
    fn test_contains() {
        check_contains::<Vec<_>>();
        check_contains::<LinkedList<_>>();
    }

    #[test]
    fn test_empty_lists() {
        check_empty::<Vec<_>>();
        check_empty::<LinkedList<_>>();
    }

    #[test]
    fn test_list_kind_labels() {
        assert_eq!(ListKind::Array.to_string(), "Array List");
        assert_eq!(ListKind::Linked.label(), "Linked List");
        assert_eq!(ListKind::ALL.len(), 2);
    }
}
