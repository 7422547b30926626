//! The same tree as [`recursive`][crate::recursive] with the recursion
//! converted to explicit loops and work lists, so stack usage stays bounded
//! even when the tree degenerates into a chain. Descent happens by rebinding
//! a cursor over `&mut Option<Box<Node>>` links; traversals drive a `Vec` or
//! `VecDeque` of pending nodes instead of the call stack.
//!
//! Observable behavior is identical to the recursive flavor, and the
//! integration quicktests hold the two to that.
//!
//! Dropping a tree still walks it with the derived recursive `Drop` glue,
//! so a pathological chain can in principle overflow the stack on drop.
//!
//! # Examples
//!
//! ```
//! use bstree::iterative::Tree;
//!
//! let mut tree = Tree::new();
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! assert!(tree.delete(&1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

/// A Binary Search Tree of keys with loop-based operations. See the
/// [recursive flavor][crate::recursive::Tree] for the API-level details;
/// the two expose the same surface and the same semantics.
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
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the given key into the tree. Duplicates are kept; an equal key
    /// descends into the right subtree of the first equal node encountered.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.inorder(), [&1, &2, &2]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            cur = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cur = Some(Box::new(Node::new(key)));
        self.len += 1;
    }

    /// Returns `true` if the given key is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::iterative::Tree;
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
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        false
    }

    /// Deletes one node holding the given key and returns `true`, or returns
    /// `false` leaving the tree untouched if the key isn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        // Walk down to the link owning the first node equal to `key`. The
        // comparison happens on a short shared reborrow so that `cur` itself
        // stays free to step or to unlink the node.
        let mut cur = &mut self.root;
        loop {
            match cur.as_deref().map(|node| key.cmp(&node.key)) {
                None => return false,
                Some(Ordering::Equal) => break,
                Some(Ordering::Less) => {
                    cur = &mut cur.as_mut().expect("compared against a node above").left;
                }
                Some(Ordering::Greater) => {
                    cur = &mut cur.as_mut().expect("compared against a node above").right;
                }
            }
        }

        let mut node = cur.take().expect("loop breaks only on an equal node");
        match (node.left.take(), node.right.take()) {
            (None, None) => {}
            (Some(child), None) | (None, Some(child)) => *cur = Some(child),
            (Some(left), Some(right)) => {
                // Two children: the found node stays put and takes over its
                // successor's key; the successor node is unlinked from the
                // right subtree.
                let (successor, right) = Self::take_min(right);
                node.key = successor;
                node.left = Some(left);
                node.right = right;
                *cur = Some(node);
            }
        }
        self.len -= 1;
        true
    }

    /// Removes the smallest node from the subtree, returning its key and the
    /// subtree without it.
    fn take_min(mut node: Box<Node<K>>) -> (K, Option<Box<Node<K>>>) {
        if node.left.is_none() {
            let Node { key, right, .. } = *node;
            return (key, right);
        }

        // Stop at the parent of the leftmost node so it can be unlinked.
        let mut parent = &mut node;
        while parent.left.as_ref().map_or(false, |n| n.left.is_some()) {
            parent = parent.left.as_mut().expect("checked in the loop condition");
        }
        let min = parent.left.take().expect("descent stops above a left child");
        let Node { key, right, .. } = *min;
        parent.left = right;
        (key, Some(node))
    }

    /// Returns the smallest key in the tree, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&K> {
        let mut cur = self.root.as_deref()?;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        Some(&cur.key)
    }

    /// Returns the largest key in the tree, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&K> {
        let mut cur = self.root.as_deref()?;
        while let Some(right) = cur.right.as_deref() {
            cur = right;
        }
        Some(&cur.key)
    }

    /// Returns the height of the tree: `-1` when empty, `0` for a single
    /// node, otherwise the edge count of the longest root-to-leaf path.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&Node<K>, isize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    /// Returns the keys in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::iterative::Tree;
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
        let mut stack: Vec<&Node<K>> = Vec::new();
        let mut cur = self.root.as_deref();
        while cur.is_some() || !stack.is_empty() {
            // Slide down the left spine, parking each node for later.
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            let node = stack.pop().expect("outer loop guarantees a parked node");
            keys.push(&node.key);
            cur = node.right.as_deref();
        }
        keys
    }

    /// Returns the keys in preorder: each node before both of its subtrees.
    pub fn preorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(&node.key);
            // Right first so the left subtree pops first.
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
        keys
    }

    /// Returns the keys in postorder: each node after both of its subtrees.
    pub fn postorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        // Each node is pushed unexpanded, then re-pushed expanded once its
        // children are on the stack; it is only visited the second time.
        let mut stack: Vec<(&Node<K>, bool)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, false));
        }
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                keys.push(&node.key);
                continue;
            }
            stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, false));
            }
        }
        keys
    }

    /// Returns the keys level by level, left to right within each level.
    pub fn level_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            keys.push(&node.key);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
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
