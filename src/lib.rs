//! This crate provides [`IndexableSet`], an ordered set of unique
//! elements with array-like positional access based off a sorted
//! [`Vec`].
//!
//! A normal ordered set answers "is this value present?" and "what
//! comes next?" but makes you walk the whole collection to answer
//! "what is the third-smallest element?". [`IndexableSet`] keeps set
//! semantics (unique elements, kept in comparator order) and adds the
//! sequence semantics on top: [`front`], [`back`] and signed
//! positional access where `-1` is the largest element.
//!
//! ## Example
//!
//! ```rust
//! use indexable_set::IndexableSet;
//!
//! let set: IndexableSet<i32> = [3, 4, 1, 2, 5].into_iter().collect();
//!
//! assert_eq!(set.len(), 5);
//! assert_eq!(set[0], 1);
//! assert_eq!(set[-1], 5);
//! assert_eq!(set.at(7).is_err(), true);
//! ```
//!
//! ## Example using a custom order
//!
//! ```rust
//! use indexable_set::{Descending, IndexableSet};
//!
//! let set = IndexableSet::from_iter_with_order([1, 2, 3, 4, 5], Descending);
//!
//! assert_eq!(set[0], 5);
//! assert_eq!(set.back(), Ok(&1));
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Negative Indexing
//!
//! Indices are signed. A non-negative index `i` counts from the front
//! of the sorted order, so `0` is the smallest element. A negative
//! index `i` resolves to position `len + i`, so `-1` is the largest
//! element and `-len` is the smallest. Everything outside
//! `-len..len` is rejected with [`IndexOutOfRangeError`], one past
//! each end: for a five element set both `set.at(5)` and `set.at(-6)`
//! fail. There is no wrapping and no clamping, and on an empty set
//! every index is out of range.
//!
//! ### Ordering and Equivalence
//!
//! The sort order is a capability of the set's type, given by the
//! [`TotalOrder`] parameter and fixed for the lifetime of the set. It
//! also decides uniqueness: two elements are duplicates exactly when
//! the order compares them equal, and of each equivalence class the
//! first element seen during construction is the one kept. With the
//! default [`Ascending`] order this is ordinary [`Ord`] behaviour;
//! substituting [`Descending`] or an ordering closure changes the
//! sort and the equivalence without touching any other semantics.
//!
//! ### Representation
//!
//! The elements live in a sorted [`Vec`] rather than a search tree.
//! The set has no insert or remove, only construction, so the usual
//! argument for a tree never applies: sorting is paid once up front
//! and every positional access afterwards is a plain O(1) slice
//! index, with value lookup an O(log n) binary search.
//!
//! # Similar Crates
//!
//! Here are some relevant crates I found whilst searching around the
//! topic area:
//!
//! - <https://docs.rs/sorted-vec>
//!   Sorted `Vec` wrappers with incremental insertion, but indices
//!   are unsigned and duplicates need a separate type.
//! - <https://docs.rs/indexmap>
//!   `IndexSet` gives positional access by insertion order rather
//!   than comparator order.
//! - <https://docs.rs/wabi_tree>
//!   Order-statistic B-trees with rank queries on a mutable set, the
//!   tree-backed take on the same idea.
//! - <https://docs.rs/copse>
//!   Ordered collections parameterised by a total order, which is
//!   where the ordering-as-type-parameter design here comes from.
//!
//! [`Vec`]: alloc::vec::Vec
//! [`front`]: IndexableSet::front
//! [`back`]: IndexableSet::back

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;

pub mod order;
pub mod set;

pub use crate::order::{Ascending, Descending, TotalOrder};
pub use crate::set::{IndexOutOfRangeError, IndexableSet, IntoIter};
