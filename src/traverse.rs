//! Depth-first and breadth-first walks over a tree. Each walk is available as a lazy iterator over
//! the keys and as text where every key is followed by a single space.
//!
//! None of these recurse, so walking a tree that degenerated into a long chain is fine.
//!
//! # Examples
//!
//! ```
//! use pretty_bst::{traverse, Tree};
//!
//! let tree = Tree::build(vec![5, 3, 8, 1, 4, 7, 9]);
//!
//! assert_eq!(traverse::in_order(tree.root()), "1 3 4 5 7 8 9 ");
//! assert_eq!(traverse::pre_order(tree.root()), "5 3 1 4 8 7 9 ");
//! assert_eq!(traverse::post_order(tree.root()), "1 4 3 7 9 8 5 ");
//! assert_eq!(traverse::level_order(tree.root()), "5 3 8 1 4 7 9 ");
//!
//! // Any node can be the starting point.
//! assert_eq!(traverse::in_order(tree.root().and_then(|n| n.left())), "1 3 4 ");
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::tree::{Node, Tree};

/// Writes every key followed by a space.
struct Spaced<I>(I);

impl<'a, K, I> fmt::Display for Spaced<I>
where
    K: fmt::Display + 'a,
    I: Iterator<Item = &'a K> + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.0.clone() {
            write!(f, "{} ", key)?;
        }
        Ok(())
    }
}

/// Keys of the subtree at `node` in ascending order. Empty for `None`.
pub fn in_order<K: fmt::Display>(node: Option<&Node<K>>) -> String {
    Spaced(InOrder::new(node)).to_string()
}

/// Keys of the subtree at `node`, each node before its children. Empty for `None`.
pub fn pre_order<K: fmt::Display>(node: Option<&Node<K>>) -> String {
    Spaced(PreOrder::new(node)).to_string()
}

/// Keys of the subtree at `node`, each node after its children. Empty for `None`.
pub fn post_order<K: fmt::Display>(node: Option<&Node<K>>) -> String {
    Spaced(PostOrder::new(node)).to_string()
}

/// Keys of the subtree at `node` level by level, left to right. Empty for `None`.
pub fn level_order<K: fmt::Display>(node: Option<&Node<K>>) -> String {
    Spaced(LevelOrder::new(node)).to_string()
}

/// Left subtree, node, right subtree.
pub struct InOrder<'a, K> {
    /// Nodes whose left subtree has been pushed but who haven't been yielded yet.
    stack: Vec<&'a Node<K>>,
}

// Manual so cloning the iterator doesn't require `K: Clone`.
impl<'a, K> Clone for InOrder<'a, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(node: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(node);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

/// Node, left subtree, right subtree.
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Clone for PreOrder<'a, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(node: Option<&'a Node<K>>) -> Self {
        Self {
            stack: node.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

/// Left subtree, right subtree, node.
pub struct PostOrder<'a, K> {
    /// Each node is pushed twice: once to expand its children and once to be yielded after them.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> Clone for PostOrder<'a, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(node: Option<&'a Node<K>>) -> Self {
        Self {
            stack: node.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.key());
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

/// Breadth first: the root, then its children left to right, then their children...
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> Clone for LevelOrder<'a, K> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
        }
    }
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(node: Option<&'a Node<K>>) -> Self {
        Self {
            queue: node.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.key())
    }
}

impl<K> Tree<K> {
    /// Iterates over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pretty_bst::Tree;
    ///
    /// let tree = Tree::build(vec![2, 3, 1]);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> InOrder<'_, K> {
        InOrder::new(self.root())
    }

    /// Iterates over the keys in pre-order.
    pub fn pre_order_iter(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root())
    }

    /// Iterates over the keys in post-order.
    pub fn post_order_iter(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root())
    }

    /// Iterates over the keys level by level.
    pub fn level_order_iter(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root())
    }

    /// The keys in ascending order, each followed by a space. See [`in_order`].
    pub fn in_order(&self) -> String
    where
        K: fmt::Display,
    {
        in_order(self.root())
    }

    /// The keys in pre-order, each followed by a space. See [`pre_order`].
    pub fn pre_order(&self) -> String
    where
        K: fmt::Display,
    {
        pre_order(self.root())
    }

    /// The keys in post-order, each followed by a space. See [`post_order`].
    pub fn post_order(&self) -> String
    where
        K: fmt::Display,
    {
        post_order(self.root())
    }

    /// The keys level by level, each followed by a space. An empty tree gives an empty string,
    /// same as the other traversals. See [`level_order`].
    pub fn level_order(&self) -> String
    where
        K: fmt::Display,
    {
        level_order(self.root())
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
