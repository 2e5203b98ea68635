//! This crate implements a textbook Binary Search Tree (BST) together with
//! the fixed-capacity FIFO queue that backs its level-order traversal. It
//! exists mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! The tree in this crate does **not** balance itself. Inserting keys in
//! sorted order degenerates into a linked list, and the height can be
//! inspected with [`tree::Tree::height`] and [`tree::Tree::is_balanced`].
//! Calling [`tree::Tree::rebalance`] rebuilds the tree at near-minimal height
//! on demand.
//!
//! Deletion comes in two classic flavors, [`tree::Tree::delete_by_copy`] and
//! [`tree::Tree::delete_by_merge`], which differ in how they remove a node
//! with two children.
//!
//! ## Queue
//!
//! [`queue::Queue`] is a fixed-capacity circular buffer with O(1) FIFO
//! operations. The tree's [`tree::Tree::breadth_first`] traversal drives one
//! internally, but it is usable on its own.

#![deny(missing_docs)]

pub mod queue;
pub mod tree;
