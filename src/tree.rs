//! An unbalanced BST that owns its nodes through `Box`es. Nothing is rebalanced, so the shape of
//! the tree is decided entirely by the order keys are inserted in (and by which successor gets
//! promoted when a node with two children is deleted).
//!
//! # Examples
//!
//! ```
//! use pretty_bst::Tree;
//!
//! let mut tree = Tree::build(vec![5, 3, 8]);
//! assert_eq!(tree.in_order(), "3 5 8 ");
//!
//! tree.insert(4);
//! assert!(tree.contains(&4));
//!
//! // Deleting a key hands it back.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.in_order(), "3 4 8 ");
//!
//! // Deleting a missing key does nothing.
//! assert_eq!(tree.delete(&42), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use tracing::{debug, trace};

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single key with two (possibly absent) children. Nodes don't know their parent - every walk
/// starts at the root and goes down.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Returns the smallest key in the subtree rooted at this node by following left children
    /// until there are none left.
    ///
    /// # Examples
    ///
    /// ```
    /// use pretty_bst::Tree;
    ///
    /// let tree = Tree::build(vec![5, 3, 8, 7, 9]);
    /// let right = tree.root().and_then(|root| root.right()).unwrap();
    ///
    /// assert_eq!(right.min_key(), &7);
    /// ```
    pub fn min_key(&self) -> &K {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.key
    }

    /// Same as [`Node::min_key`] but following right children.
    pub fn max_key(&self) -> &K {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.key
    }
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// An unbalanced Binary Search Tree of keys. Keys smaller than a node go to its left, everything
/// else (including an equal key) goes to its right.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // `Box`'s own drop would recurse once per level which overflows the stack on a degenerate
    // tree, so detach the children before each node goes away.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        let mut root = None;
        let mut stack: Vec<(&Node<K>, &mut Link<K>)> = Vec::new();
        if let Some(node) = self.root() {
            stack.push((node, &mut root));
        }

        while let Some((source, slot)) = stack.pop() {
            let copy = slot.insert(Node::new_boxed(source.key.clone()));
            if let Some(left) = source.left() {
                stack.push((left, &mut copy.left));
            }
            if let Some(right) = source.right() {
                stack.push((right, &mut copy.right));
            }
        }

        Self {
            root,
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("keys", &DebugKeys(self.pre_order_iter()))
            .finish()
    }
}

/// Lists keys in pre-order, which is enough to rebuild the same shape with [`Tree::build`].
struct DebugKeys<I>(I);

impl<I> fmt::Debug for DebugKeys<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree by inserting every key of `keys` in order. Nothing is deduplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use pretty_bst::Tree;
    ///
    /// let tree = Tree::build(vec![5, 3, 8, 1, 4, 7, 9]);
    ///
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(tree.level_order(), "5 3 8 1 4 7 9 ");
    /// ```
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        keys.into_iter().collect()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node, leaving an empty tree.
    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing tree");
        drop(mem::take(self));
    }

    /// Number of levels in the tree: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// The smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        self.root().map(Node::min_key)
    }

    /// The largest key, if any.
    pub fn max(&self) -> Option<&K> {
        self.root().map(Node::max_key)
    }

    /// Whether a node holding `key` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use pretty_bst::Tree;
    ///
    /// let tree = Tree::build(vec![2, 1, 3]);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut cursor = self.root();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Inserts `key` by walking down from the root (left when `key` is smaller than the node,
    /// right otherwise) and hanging a new node off the first empty slot. Inserting a key that is
    /// already present adds a second node for it in the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use pretty_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.pre_order(), "2 1 ");
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0;
        while let Some(node) = slot {
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        trace!(depth, len = self.len, "inserted key");
    }

    /// Deletes the node containing the given key from the tree and returns the key. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// A node with one child is replaced by that child. A node with two children takes the key of
    /// its successor (the smallest key in its right subtree) and the successor's node is unlinked
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use pretty_bst::Tree;
    ///
    /// let mut tree = Tree::build(vec![5, 3, 8, 7, 9]);
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// // 7 was promoted to the root.
    /// assert_eq!(tree.pre_order(), "7 3 8 9 ");
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => {
                    debug!(depth, "key to delete not found");
                    return None;
                }
            };
            slot = match ordering {
                Ordering::Less => &mut slot.as_mut()?.left,
                Ordering::Equal => break,
                Ordering::Greater => &mut slot.as_mut()?.right,
            };
            depth += 1;
        }

        let mut node = slot.take()?;
        let removed = match (node.left.take(), node.right.take()) {
            (None, right) => {
                *slot = right;
                node.key
            }
            (left, None) => {
                *slot = left;
                node.key
            }
            (Some(left), Some(right)) => {
                let (successor, rest) = take_min(right);
                trace!(depth, "promoting successor");
                node.left = Some(left);
                node.right = rest;
                let removed = mem::replace(&mut node.key, successor);
                *slot = Some(node);
                removed
            }
        };

        self.len -= 1;
        debug!(depth, len = self.len, "deleted key");
        Some(removed)
    }
}

/// Removes the node with the smallest key from `subtree`. Returns that key and what is left of the
/// subtree, with the removed node's right child hung where the node used to be.
fn take_min<K>(subtree: Box<Node<K>>) -> (K, Link<K>) {
    // Unhook the left spine on the way down and put it back together on the way up.
    let mut spine = Vec::new();
    let mut node = subtree;
    while let Some(left) = node.left.take() {
        spine.push(node);
        node = left;
    }

    let Node { key, right, .. } = *node;
    let mut rest = right;
    while let Some(mut parent) = spine.pop() {
        parent.left = rest;
        rest = Some(parent);
    }
    (key, rest)
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
