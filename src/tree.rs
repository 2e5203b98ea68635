//! An owned, mutable BST supporting two deletion strategies and on-demand
//! rebalancing. The tree never balances itself; see [`Tree::rebalance`].
//!
//! Equal keys are allowed. An inserted key equal to an existing one goes to
//! the **right**, so duplicates live in the right subtree of the first
//! occurrence, and `search` and both deletes operate on the topmost (first
//! inserted) node with a matching key.
//!
//! # Examples
//!
//! ```
//! use bstree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(1, "one");
//! tree.insert(2, "two");
//! assert_eq!(tree.search(&1), Some(&"one"));
//! assert_eq!(tree.size(), 2);
//!
//! // Deleting a node returns its value.
//! let deleted = tree.delete_by_copy(&1);
//!
//! assert_eq!(deleted, Some("one"));
//! assert_eq!(tree.search(&1), None);
//! ```

use std::cmp::Ordering;

use crate::queue::Queue;

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone, Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree mapping keys to values. This can be used for
/// inserting, finding, and deleting keys and values; it also exposes the
/// classic structural diagnostics (height, fullness, balance) and all four
/// standard traversal orders.
#[derive(Clone, Debug)]
pub struct Tree<K, V> {
    root: Link<K, V>,
    /// Number of nodes reachable from `root`, maintained incrementally.
    /// [`Tree::count`] recomputes it from scratch as a cross-check.
    size: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Inserts the given key and value as a new leaf in its sorted position.
    /// Keys equal to an existing key are inserted to its right, so inserting
    /// the same key twice stores two nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, "first");
    /// tree.insert(1, "second");
    ///
    /// // The topmost occurrence is the first one inserted.
    /// assert_eq!(tree.search(&1), Some(&"first"));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        self.size += 1;

        let mut cur = &mut self.root;
        while let Some(node) = cur {
            // Strictly-less goes left, so equal keys end up in the right
            // subtree of the first occurrence.
            cur = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cur = Some(Node::new(key, value));
    }

    /// Potentially finds the value associated with the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.search(&1), Some(&2));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// The entry with the smallest key, or `None` for an empty tree.
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut cur = self.root.as_deref()?;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        Some((&cur.key, &cur.value))
    }

    /// The entry with the largest key, or `None` for an empty tree.
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut cur = self.root.as_deref()?;
        while let Some(right) = cur.right.as_deref() {
            cur = right;
        }
        Some((&cur.key, &cur.value))
    }

    /// Iterates over `(&key, &value)` pairs in sorted key order
    /// (left-self-right).
    pub fn in_order(&self) -> InOrder<'_, K, V> {
        InOrder {
            stack: Vec::new(),
            cur: self.root.as_deref(),
        }
    }

    /// Iterates over `(&key, &value)` pairs in pre-order (self-left-right).
    pub fn pre_order(&self) -> PreOrder<'_, K, V> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Iterates over `(&key, &value)` pairs in post-order (left-right-self).
    pub fn post_order(&self) -> PostOrder<'_, K, V> {
        PostOrder {
            stack: self.root.as_deref().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Iterates over `(&key, &value)` pairs level by level, left to right
    /// within each level.
    ///
    /// The traversal is driven by a [`Queue`] sized to the node count. Every
    /// node is enqueued exactly once, so the live element count never exceeds
    /// the node count and the queue cannot overflow.
    pub fn breadth_first(&self) -> BreadthFirst<'_, K, V> {
        let mut queue = Queue::with_capacity(self.size);
        if let Some(root) = self.root.as_deref() {
            queue
                .enqueue(root)
                .expect("a non-empty tree has capacity for its root");
        }
        BreadthFirst { queue }
    }

    /// Collects the tree's entries in sorted key order. The result always has
    /// exactly [`Tree::size`] elements.
    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.in_order().collect()
    }

    /// The number of nodes in the tree, as maintained across inserts and
    /// deletes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of nodes in the tree, recomputed by a full traversal. This
    /// always agrees with [`Tree::size`]; it exists as an independent
    /// cross-check.
    pub fn count(&self) -> usize {
        count(self.root.as_deref())
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An
    /// empty tree has height 0 and a lone root has height 1.
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }

    /// Whether every node has either zero or exactly two children (a "full"
    /// binary tree). This is a shape property, not an occupancy one; the
    /// empty tree is not considered full.
    pub fn is_full(&self) -> bool {
        self.root.as_deref().map_or(false, is_full)
    }

    /// Whether, for every node, the heights of its two subtrees differ by at
    /// most one. True for the empty tree.
    ///
    /// This is a diagnostic; nothing maintains it. Use [`Tree::rebalance`] to
    /// restore it after skewed insertions.
    pub fn is_balanced(&self) -> bool {
        is_balanced(self.root.as_deref())
    }

    /// Deletes the topmost node with the given key and returns its value, or
    /// returns `None` (leaving the tree untouched) if no node has the key.
    ///
    /// A node with two children is deleted "by copy": its payload is
    /// overwritten with its in-order predecessor's (the rightmost node of its
    /// left subtree), and the predecessor node is spliced out instead. The
    /// node itself stays where it is, so the tree's shape changes as little
    /// as possible.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.delete_by_copy(&2), Some("b"));
    /// assert_eq!(tree.search(&2), None);
    /// assert_eq!(tree.size(), 2);
    ///
    /// // Deleting a missing key is a no-op.
    /// assert_eq!(tree.delete_by_copy(&2), None);
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn delete_by_copy(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let cur = find_link(&mut self.root, key);
        let node = cur.as_deref_mut()?;

        let removed = if node.left.is_none() {
            // Zero or one child: splice the other side (possibly empty)
            // directly into this slot.
            let node = cur.take().expect("the link was just matched");
            *cur = node.right;
            node.value
        } else if node.right.is_none() {
            let node = cur.take().expect("the link was just matched");
            *cur = node.left;
            node.value
        } else {
            // Two children: walk to the link owning the in-order
            // predecessor, splice it out (keeping its left subtree), and
            // move its payload into this node.
            let mut pred = &mut node.left;
            while pred.as_ref().map_or(false, |n| n.right.is_some()) {
                pred = &mut pred.as_mut().expect("the loop guard saw a node").right;
            }
            let pred_node = pred
                .take()
                .expect("a node with two children has a predecessor");
            *pred = pred_node.left;

            node.key = pred_node.key;
            std::mem::replace(&mut node.value, pred_node.value)
        };

        self.size -= 1;
        Some(removed)
    }

    /// Deletes the topmost node with the given key and returns its value, or
    /// returns `None` (leaving the tree untouched) if no node has the key.
    ///
    /// A node with two children is deleted "by merge": its two subtrees are
    /// merged by hanging the right subtree off the in-order predecessor's
    /// right link, and the merged left subtree is promoted into the deleted
    /// node's slot. Unlike [`Tree::delete_by_copy`], the deleted node is
    /// discarded entirely.
    pub fn delete_by_merge(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let cur = find_link(&mut self.root, key);
        cur.as_ref()?;

        let mut node = cur.take().expect("the link was just matched");
        match (node.left.take(), node.right.take()) {
            (None, right) => *cur = right,
            (left, None) => *cur = left,
            (Some(mut left), Some(right)) => {
                // The predecessor is the rightmost node of the left subtree.
                // Its right link is free, so the deleted node's right subtree
                // hangs there, keeping every key in order.
                {
                    let mut pred = &mut left;
                    while pred.right.is_some() {
                        pred = pred
                            .right
                            .as_mut()
                            .expect("the loop guard saw a right child");
                    }
                    pred.right = Some(right);
                }
                *cur = Some(left);
            }
        }

        self.size -= 1;
        Some(node.value)
    }

    /// Rebuilds the tree at near-minimal height without changing its
    /// contents.
    ///
    /// The entries are drained in sorted order, then the tree is rebuilt
    /// middle-first per subrange, so every subtree splits its entries roughly
    /// in half. The shape is determined by position in the sorted sequence,
    /// not by key comparisons, so runs of equal keys cannot skew it. After
    /// this, [`Tree::is_balanced`] holds and [`Tree::height`] is at most
    /// `floor(log2(size)) + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 1..=7 {
    ///     tree.insert(key, key);
    /// }
    ///
    /// // Sorted insertion degenerated into a list.
    /// assert_eq!(tree.height(), 7);
    ///
    /// tree.rebalance();
    ///
    /// assert_eq!(tree.height(), 3);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) {
        let mut entries = Vec::with_capacity(self.size);
        drain_in_order(self.root.take(), &mut entries);
        self.root = build_balanced(&mut entries);
    }
}

/// Builds a subtree from the range by taking the middle entry as the root
/// and recursing on the two halves around it.
fn build_balanced<K, V>(entries: &mut [Option<(K, V)>]) -> Link<K, V> {
    if entries.is_empty() {
        return None;
    }
    let middle = (entries.len() - 1) / 2;
    let (key, value) = entries[middle].take().expect("each slot is drained once");
    let (left, right) = entries.split_at_mut(middle);

    let mut node = Node::new(key, value);
    node.left = build_balanced(left);
    node.right = build_balanced(&mut right[1..]);
    Some(node)
}

/// Descends from `cur` to the link owning the topmost node whose key equals
/// `key`. If there is no such node, the returned link is the empty slot where
/// the search bottomed out.
///
/// The returned `&mut Link` doubles as the "parent handle": replacing its
/// contents is how the caller splices nodes in and out without parent
/// pointers.
fn find_link<'a, K, V>(mut cur: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V>
where
    K: Ord,
{
    while cur.as_ref().map_or(false, |node| node.key != *key) {
        let node = cur.as_mut().expect("the loop guard saw a node");
        cur = if *key < node.key {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    cur
}

fn height<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |n| {
        1 + height(n.left.as_deref()).max(height(n.right.as_deref()))
    })
}

fn count<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |n| {
        1 + count(n.left.as_deref()) + count(n.right.as_deref())
    })
}

fn is_full<K, V>(node: &Node<K, V>) -> bool {
    match (node.left.as_deref(), node.right.as_deref()) {
        (None, None) => true,
        (Some(left), Some(right)) => is_full(left) && is_full(right),
        _ => false,
    }
}

fn is_balanced<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(true, |n| {
        let left_height = height(n.left.as_deref()) as isize;
        let right_height = height(n.right.as_deref()) as isize;

        (right_height - left_height).abs() <= 1
            && is_balanced(n.left.as_deref())
            && is_balanced(n.right.as_deref())
    })
}

/// Moves every entry of the subtree into `out` in sorted order, consuming the
/// nodes.
fn drain_in_order<K, V>(link: Link<K, V>, out: &mut Vec<Option<(K, V)>>) {
    if let Some(node) = link {
        let node = *node;
        drain_in_order(node.left, out);
        out.push(Some((node.key, node.value)));
        drain_in_order(node.right, out);
    }
}

/// Iterator over a tree's entries in sorted key order. Created by
/// [`Tree::in_order`].
pub struct InOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    cur: Option<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.cur {
            self.stack.push(node);
            self.cur = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.cur = node.right.as_deref();
        Some((&node.key, &node.value))
    }
}

/// Iterator over a tree's entries in pre-order. Created by
/// [`Tree::pre_order`].
pub struct PreOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree pops first.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some((&node.key, &node.value))
    }
}

/// Iterator over a tree's entries in post-order. Created by
/// [`Tree::post_order`].
pub struct PostOrder<'a, K, V> {
    /// Nodes paired with whether their children have been pushed yet. A node
    /// is yielded the second time it is popped.
    stack: Vec<(&'a Node<K, V>, bool)>,
}

impl<'a, K, V> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some((&node.key, &node.value));
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Iterator over a tree's entries level by level. Created by
/// [`Tree::breadth_first`].
pub struct BreadthFirst<'a, K, V> {
    queue: Queue<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for BreadthFirst<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.dequeue().ok()?;
        if let Some(left) = node.left.as_deref() {
            self.queue
                .enqueue(left)
                .expect("the queue is sized to the node count");
        }
        if let Some(right) = node.right.as_deref() {
            self.queue
                .enqueue(right)
                .expect("the queue is sized to the node count");
        }
        Some((&node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The key set the structural tests build on:
    ///
    /// ```text
    ///             8
    ///       6           9
    ///     5   7           42
    ///   3
    /// 0
    /// ```
    const KEYS: [i32; 8] = [8, 6, 7, 5, 3, 0, 9, 42];

    fn sample_tree() -> Tree<i32, i32> {
        let mut tree = Tree::new();
        for key in KEYS {
            tree.insert(key, key);
        }
        tree
    }

    fn in_order_keys<V>(tree: &Tree<i32, V>) -> Vec<i32> {
        tree.in_order().map(|(key, _)| *key).collect()
    }

    #[test]
    fn empty_tree() {
        let tree: Tree<i32, &str> = Tree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.count(), 0);
        assert_eq!(tree.height(), 0);
        assert!(!tree.is_full());
        assert!(tree.is_balanced());
        assert_eq!(tree.search(&1), None);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.in_order().count(), 0);
        assert_eq!(tree.pre_order().count(), 0);
        assert_eq!(tree.post_order().count(), 0);
        assert_eq!(tree.breadth_first().count(), 0);
        assert!(tree.entries().is_empty());
    }

    #[test]
    fn always_adding_left() {
        let keys = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut inserted = Vec::new();

        let mut tree = Tree::new();
        assert!(tree.search(&10).is_none());

        for key in keys {
            tree.insert(key, key * 2);
            inserted.push(key);
            for inserted in &inserted {
                assert_eq!(tree.search(inserted), Some(&(inserted * 2)));
            }
        }

        // No self-balancing: a descending insert order is a left chain.
        assert_eq!(tree.height(), 10);
        assert!(!tree.is_balanced());
    }

    #[test]
    fn always_adding_right() {
        let keys = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut inserted = Vec::new();

        let mut tree = Tree::new();
        assert!(tree.search(&1).is_none());

        for key in keys {
            tree.insert(key, key * 2);
            inserted.push(key);
            for inserted in &inserted {
                assert_eq!(tree.search(inserted), Some(&(inserted * 2)));
            }
        }

        assert_eq!(tree.height(), 10);
        assert!(!tree.is_balanced());
    }

    #[test]
    fn sample_tree_shape_and_lookups() {
        let tree = sample_tree();

        assert_eq!(in_order_keys(&tree), vec![0, 3, 5, 6, 7, 8, 9, 42]);
        assert_eq!(tree.size(), 8);
        assert_eq!(tree.count(), 8);

        // The longest path is 8 -> 6 -> 5 -> 3 -> 0.
        assert_eq!(tree.height(), 5);
        assert!(!tree.is_balanced());
        assert!(!tree.is_full());

        assert_eq!(tree.search(&42), Some(&42));
        assert_eq!(tree.search(&9), Some(&9));
        assert_eq!(tree.search(&17), None);

        assert_eq!(tree.min(), Some((&0, &0)));
        assert_eq!(tree.max(), Some((&42, &42)));
    }

    #[test]
    fn traversal_orders() {
        let tree = sample_tree();

        assert_eq!(in_order_keys(&tree), vec![0, 3, 5, 6, 7, 8, 9, 42]);

        let pre: Vec<i32> = tree.pre_order().map(|(k, _)| *k).collect();
        assert_eq!(pre, vec![8, 6, 5, 3, 0, 7, 9, 42]);

        let post: Vec<i32> = tree.post_order().map(|(k, _)| *k).collect();
        assert_eq!(post, vec![0, 3, 5, 7, 6, 42, 9, 8]);

        let breadth: Vec<i32> = tree.breadth_first().map(|(k, _)| *k).collect();
        assert_eq!(breadth, vec![8, 6, 9, 5, 7, 42, 3, 0]);
    }

    #[test]
    fn traversals_are_restartable() {
        let tree = sample_tree();

        let first: Vec<i32> = tree.in_order().map(|(k, _)| *k).collect();
        let second: Vec<i32> = tree.in_order().map(|(k, _)| *k).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn a_full_tree_is_detected() {
        let mut tree = Tree::new();
        for key in [5, 3, 7, 2, 4, 6, 8] {
            tree.insert(key, key);
        }

        assert!(tree.is_full());
        assert!(tree.is_balanced());

        // One extra leaf gives node 2 a single child.
        tree.insert(1, 1);
        assert!(!tree.is_full());
    }

    #[test]
    fn duplicates_go_right() {
        let mut tree = Tree::new();
        tree.insert(5, "first");
        tree.insert(5, "second");

        assert_eq!(tree.size(), 2);
        assert_eq!(in_order_keys(&tree), vec![5, 5]);
        assert_eq!(tree.search(&5), Some(&"first"));

        // Deleting removes the topmost occurrence and exposes the next one.
        assert_eq!(tree.delete_by_copy(&5), Some("first"));
        assert_eq!(tree.search(&5), Some(&"second"));
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn delete_by_copy_leaf() {
        let mut tree = sample_tree();

        assert_eq!(tree.delete_by_copy(&0), Some(0));
        assert_eq!(tree.search(&0), None);
        assert_eq!(in_order_keys(&tree), vec![3, 5, 6, 7, 8, 9, 42]);
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.count(), 7);
    }

    #[test]
    fn delete_by_copy_single_child() {
        let mut tree = sample_tree();

        // 3 has only a left child (0), which takes its place.
        assert_eq!(tree.delete_by_copy(&3), Some(3));
        assert_eq!(in_order_keys(&tree), vec![0, 5, 6, 7, 8, 9, 42]);

        // 9 has only a right child (42).
        assert_eq!(tree.delete_by_copy(&9), Some(9));
        assert_eq!(in_order_keys(&tree), vec![0, 5, 6, 7, 8, 42]);
        assert_eq!(tree.size(), 6);
        assert_eq!(tree.count(), 6);
    }

    #[test]
    fn delete_by_copy_two_children_keeps_position() {
        let mut tree = sample_tree();

        // 8 has two children; its predecessor 7 is copied into the root
        // slot, so the level order now starts at 7.
        assert_eq!(tree.delete_by_copy(&8), Some(8));

        let breadth: Vec<i32> = tree.breadth_first().map(|(k, _)| *k).collect();
        assert_eq!(breadth, vec![7, 6, 9, 5, 42, 3, 0]);

        assert_eq!(in_order_keys(&tree), vec![0, 3, 5, 6, 7, 9, 42]);
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.count(), 7);
        assert_eq!(tree.search(&8), None);
        assert_eq!(tree.search(&7), Some(&7));
    }

    #[test]
    fn delete_by_merge_two_children_promotes_left_subtree() {
        let mut tree = sample_tree();
        tree.delete_by_copy(&8);

        // Deleting 7 by merge hangs its right subtree (9, 42) off its
        // predecessor 6 and promotes the left subtree.
        assert_eq!(tree.delete_by_merge(&7), Some(7));

        let breadth: Vec<i32> = tree.breadth_first().map(|(k, _)| *k).collect();
        assert_eq!(breadth, vec![6, 5, 9, 3, 42, 0]);

        assert_eq!(in_order_keys(&tree), vec![0, 3, 5, 6, 9, 42]);
        assert_eq!(tree.size(), 6);
        assert_eq!(tree.count(), 6);
    }

    #[test]
    fn delete_by_merge_leaf_and_single_child() {
        let mut tree = sample_tree();

        assert_eq!(tree.delete_by_merge(&42), Some(42));
        assert_eq!(in_order_keys(&tree), vec![0, 3, 5, 6, 7, 8, 9]);

        // 3 has only a left child.
        assert_eq!(tree.delete_by_merge(&3), Some(3));
        assert_eq!(in_order_keys(&tree), vec![0, 5, 6, 7, 8, 9]);
        assert_eq!(tree.size(), 6);
        assert_eq!(tree.count(), 6);
    }

    #[test]
    fn delete_root_until_empty() {
        let deletes: [fn(&mut Tree<i32, i32>, &i32) -> Option<i32>; 2] =
            [Tree::delete_by_copy, Tree::delete_by_merge];

        for delete in deletes {
            let mut tree = sample_tree();

            loop {
                let root_key = match tree.breadth_first().next() {
                    Some((key, _)) => *key,
                    None => break,
                };
                assert!(delete(&mut tree, &root_key).is_some());
            }

            assert!(tree.is_empty());
            assert_eq!(tree.size(), 0);
            assert_eq!(tree.count(), 0);
        }
    }

    #[test]
    fn delete_missing_key_changes_nothing() {
        let mut tree = sample_tree();
        let before: Vec<(i32, i32)> = tree.in_order().map(|(k, v)| (*k, *v)).collect();
        let breadth_before: Vec<i32> = tree.breadth_first().map(|(k, _)| *k).collect();

        assert_eq!(tree.delete_by_copy(&17), None);
        assert_eq!(tree.delete_by_merge(&17), None);

        let after: Vec<(i32, i32)> = tree.in_order().map(|(k, v)| (*k, *v)).collect();
        let breadth_after: Vec<i32> = tree.breadth_first().map(|(k, _)| *k).collect();
        assert_eq!(before, after);
        assert_eq!(breadth_before, breadth_after);
        assert_eq!(tree.size(), 8);
        assert_eq!(tree.count(), 8);
    }

    #[test]
    fn delete_on_empty_tree() {
        let mut tree: Tree<i32, i32> = Tree::new();

        assert_eq!(tree.delete_by_copy(&1), None);
        assert_eq!(tree.delete_by_merge(&1), None);
        assert_eq!(tree.size(), 0);
    }

    #[test]
    fn rebalance_fixes_a_skewed_tree() {
        let mut tree = sample_tree();
        let before = in_order_keys(&tree);
        assert!(!tree.is_balanced());

        tree.rebalance();

        assert_eq!(in_order_keys(&tree), before);
        assert_eq!(tree.size(), 8);
        assert_eq!(tree.count(), 8);
        assert!(tree.is_balanced());
        assert_eq!(tree.height(), 4);

        // The midpoint rule picks 6 as the new root.
        let breadth: Vec<i32> = tree.breadth_first().map(|(k, _)| *k).collect();
        assert_eq!(breadth, vec![6, 3, 8, 0, 5, 7, 9, 42]);
    }

    #[test]
    fn rebalance_with_duplicate_keys() {
        let mut tree = Tree::new();
        for value in ["a", "b", "c"] {
            tree.insert(0, value);
        }

        // Equal keys chain down the right spine on insert.
        assert_eq!(tree.height(), 3);
        assert!(!tree.is_balanced());

        tree.rebalance();

        // The rebuilt shape follows positions, not key comparisons, so the
        // duplicates cannot re-form a chain.
        assert_eq!(tree.height(), 2);
        assert!(tree.is_balanced());
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.count(), 3);

        // Relative order of the duplicates is preserved.
        let values: Vec<&str> = tree.in_order().map(|(_, value)| *value).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn rebalance_empty_and_single_node() {
        let mut tree: Tree<i32, i32> = Tree::new();
        tree.rebalance();
        assert!(tree.is_empty());

        tree.insert(1, 1);
        tree.rebalance();
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.search(&1), Some(&1));
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn entries_collects_in_order() {
        let tree = sample_tree();
        let entries = tree.entries();

        assert_eq!(entries.len(), tree.size());
        assert_eq!(
            entries,
            vec![
                (&0, &0),
                (&3, &3),
                (&5, &5),
                (&6, &6),
                (&7, &7),
                (&8, &8),
                (&9, &9),
                (&42, &42)
            ]
        );
    }
}
