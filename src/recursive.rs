//! The textbook BST. Every operation is a single recursive pass over the
//! tree, written in the "return the new subtree root" style: mutating helpers
//! take ownership of a link, rebuild it, and hand it back to the parent.
//!
//! Because the helpers recurse once per level, the call stack grows with the
//! height of the tree. For adversarial insertion orders (e.g. strictly
//! ascending keys) the tree degenerates into a chain and a large enough tree
//! will exhaust the stack. The [`iterative`][crate::iterative] flavor performs
//! the same operations in constant stack space.
//!
//! # Examples
//!
//! ```
//! use bstree::recursive::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Deleting a key reports whether anything was removed.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

/// A Binary Search Tree of keys. This can be used for inserting, finding,
/// and deleting keys, and for reading the keys back in the canonical
/// traversal orders.
///
/// Duplicate keys are allowed; an inserted key equal to an existing one lands
/// in the existing node's right subtree.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

#[derive(Clone, Debug)]
struct Node<K> {
    key: K,
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of nodes in the tree. Duplicates each count.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the given key into the tree. Inserting always succeeds; a key
    /// equal to one already present is stored again in the right subtree of
    /// the first equal node encountered.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.inorder(), [&1, &2, &2]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        Self::insert_node(&mut self.root, key);
        self.len += 1;
    }

    fn insert_node(node: &mut Option<Box<Node<K>>>, key: K)
    where
        K: Ord,
    {
        match node {
            None => *node = Some(Box::new(Node::new(key))),
            Some(n) => {
                if key < n.key {
                    Self::insert_node(&mut n.left, key)
                } else {
                    // Equal keys descend right, matching the ordering
                    // invariant's "greater than or equal" side.
                    Self::insert_node(&mut n.right, key)
                }
            }
        }
    }

    /// Returns `true` if the given key is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        Self::contains_node(&self.root, key)
    }

    fn contains_node(node: &Option<Box<Node<K>>>, key: &K) -> bool
    where
        K: Ord,
    {
        match node {
            None => false,
            Some(n) => match key.cmp(&n.key) {
                Ordering::Less => Self::contains_node(&n.left, key),
                Ordering::Equal => true,
                Ordering::Greater => Self::contains_node(&n.right, key),
            },
        }
    }

    /// Deletes one node holding the given key and returns `true`, or returns
    /// `false` leaving the tree untouched if the key isn't present. With
    /// duplicates, the node removed is the first equal node on the search
    /// path from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.contains(&1));
    ///
    /// // Deleting an absent key is a no-op.
    /// assert!(!tree.delete(&1));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let (root, removed) = Self::delete_node(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn delete_node(node: Option<Box<Node<K>>>, key: &K) -> (Option<Box<Node<K>>>, bool)
    where
        K: Ord,
    {
        match node {
            None => (None, false),
            Some(mut n) => match key.cmp(&n.key) {
                Ordering::Less => {
                    let (left, removed) = Self::delete_node(n.left.take(), key);
                    n.left = left;
                    (Some(n), removed)
                }
                Ordering::Greater => {
                    let (right, removed) = Self::delete_node(n.right.take(), key);
                    n.right = right;
                    (Some(n), removed)
                }
                Ordering::Equal => match (n.left.take(), n.right.take()) {
                    (None, None) => (None, true),
                    (Some(child), None) | (None, Some(child)) => (Some(child), true),

                    // If the node has two children we have to figure out which
                    // key to promote. We choose this node's successor: the
                    // smallest key in its right subtree. The found node keeps
                    // its place in the tree and takes over the successor's
                    // key; the successor node is the one physically unlinked.
                    (Some(left), Some(right)) => {
                        let (successor, right) = Self::take_min(right);
                        n.key = successor;
                        n.left = Some(left);
                        n.right = right;
                        (Some(n), true)
                    }
                },
            },
        }
    }

    /// Removes the smallest node from the subtree, returning its key and the
    /// subtree without it. The leftmost node has no left child, so unlinking
    /// it just promotes its right child.
    fn take_min(mut node: Box<Node<K>>) -> (K, Option<Box<Node<K>>>) {
        match node.left.take() {
            Some(left) => {
                let (key, rest) = Self::take_min(left);
                node.left = rest;
                (key, Some(node))
            }
            None => {
                let Node { key, right, .. } = *node;
                (key, right)
            }
        }
    }

    /// Returns the smallest key in the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&K> {
        let mut cur = self.root.as_deref()?;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        Some(&cur.key)
    }

    /// Returns the largest key in the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&K> {
        let mut cur = self.root.as_deref()?;
        while let Some(right) = cur.right.as_deref() {
            cur = right;
        }
        Some(&cur.key)
    }

    /// Returns the height of the tree: the number of edges on the longest
    /// path from the root to a leaf. An empty tree has height `-1` and a
    /// single node has height `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        Self::height_node(&self.root)
    }

    fn height_node(node: &Option<Box<Node<K>>>) -> isize {
        match node {
            None => -1,
            Some(n) => 1 + Self::height_node(&n.left).max(Self::height_node(&n.right)),
        }
    }

    /// Returns the keys in sorted order by visiting the left subtree, then
    /// the node, then the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.inorder(), [&1, &2, &3]);
    /// ```
    pub fn inorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        Self::inorder_node(&self.root, &mut keys);
        keys
    }

    fn inorder_node<'a>(node: &'a Option<Box<Node<K>>>, keys: &mut Vec<&'a K>) {
        if let Some(n) = node {
            Self::inorder_node(&n.left, keys);
            keys.push(&n.key);
            Self::inorder_node(&n.right, keys);
        }
    }

    /// Returns the keys in preorder: each node before both of its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.preorder(), [&2, &1, &3]);
    /// ```
    pub fn preorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        Self::preorder_node(&self.root, &mut keys);
        keys
    }

    fn preorder_node<'a>(node: &'a Option<Box<Node<K>>>, keys: &mut Vec<&'a K>) {
        if let Some(n) = node {
            keys.push(&n.key);
            Self::preorder_node(&n.left, keys);
            Self::preorder_node(&n.right, keys);
        }
    }

    /// Returns the keys in postorder: each node after both of its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.postorder(), [&1, &3, &2]);
    /// ```
    pub fn postorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        Self::postorder_node(&self.root, &mut keys);
        keys
    }

    fn postorder_node<'a>(node: &'a Option<Box<Node<K>>>, keys: &mut Vec<&'a K>) {
        if let Some(n) = node {
            Self::postorder_node(&n.left, keys);
            Self::postorder_node(&n.right, keys);
            keys.push(&n.key);
        }
    }

    /// Returns the keys level by level, left to right within each level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.level_order(), [&2, &1, &3]);
    /// ```
    pub fn level_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(n) = queue.pop_front() {
            keys.push(&n.key);
            if let Some(left) = n.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = n.right.as_deref() {
                queue.push_back(right);
            }
        }
        keys
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}
