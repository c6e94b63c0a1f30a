//! Draws a tree sideways, one node per line. Larger keys (the right subtree) are drawn above their
//! parent and smaller keys below it:
//!
//! ```text
//! │       ┌── 9
//! │   ┌── 8
//! │   │   └── 7
//! └── 5
//!     │   ┌── 4
//!     └── 3
//!         └── 1
//! ```

use std::fmt::{self, Write};

use crate::tree::{Node, Tree};

const LEFT_BRANCH: &str = "└── ";
const RIGHT_BRANCH: &str = "┌── ";
const CONTINUE: &str = "│   ";
const BLANK: &str = "    ";

enum Step<'a, K> {
    /// Queue up the node's right subtree, its own line and its left subtree.
    Expand(&'a Node<K>, String, bool),
    /// Write the node's own line.
    Line(&'a Node<K>, String, bool),
}

/// Renders the subtree at `node`. Every line starts with `prefix`; `is_left` says which branch
/// glyph to draw for `node` itself. The root of a tree is drawn with an empty prefix and
/// `is_left == true`. Renders nothing for `None`.
///
/// # Examples
///
/// ```
/// use pretty_bst::{render, Tree};
///
/// let tree = Tree::build(vec![2, 1, 3]);
///
/// assert_eq!(
///     render::render(tree.root(), "", true),
///     "│   ┌── 3\n└── 2\n    └── 1\n",
/// );
/// ```
pub fn render<K: fmt::Display>(node: Option<&Node<K>>, prefix: &str, is_left: bool) -> String {
    let mut out = String::new();
    // Only a key's `Display` can fail here; treat that the way `ToString` does.
    write_tree(&mut out, node, prefix, is_left)
        .expect("a Display implementation returned an error unexpectedly");
    out
}

fn write_tree<K, W>(out: &mut W, node: Option<&Node<K>>, prefix: &str, is_left: bool) -> fmt::Result
where
    K: fmt::Display,
    W: Write,
{
    let mut stack: Vec<Step<'_, K>> = node
        .map(|n| Step::Expand(n, prefix.to_owned(), is_left))
        .into_iter()
        .collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Line(node, prefix, is_left) => {
                let branch = if is_left { LEFT_BRANCH } else { RIGHT_BRANCH };
                writeln!(out, "{}{}{}", prefix, branch, node.key())?;
            }
            Step::Expand(node, prefix, is_left) => {
                // Pushed in reverse: right subtree, then this line, then the left subtree.
                if let Some(left) = node.left() {
                    let indent = if is_left { BLANK } else { CONTINUE };
                    stack.push(Step::Expand(left, format!("{}{}", prefix, indent), true));
                }
                let right = node.right().map(|right| {
                    let indent = if is_left { CONTINUE } else { BLANK };
                    Step::Expand(right, format!("{}{}", prefix, indent), false)
                });
                stack.push(Step::Line(node, prefix, is_left));
                stack.extend(right);
            }
        }
    }

    Ok(())
}

impl<K> Tree<K> {
    /// Draws the whole tree. Empty for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use pretty_bst::Tree;
    ///
    /// let tree = Tree::build(vec![5]);
    ///
    /// assert_eq!(tree.render(), "└── 5\n");
    /// ```
    pub fn render(&self) -> String
    where
        K: fmt::Display,
    {
        render(self.root(), "", true)
    }
}

/// Same drawing as [`Tree::render`].
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, self.root(), "", true)
    }
}
