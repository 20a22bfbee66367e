//! An unbalanced BST of `i64` keys. Every [`Node`] exclusively owns its children and a [`Tree`]
//! owns the root, so dropping the tree releases everything. Keys equal to a node's key are
//! inserted to its right.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(1));
//! assert_eq!(tree.inorder().count(), 0);
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert!(tree.search(1));
//!
//! // Inverting mirrors the tree so an inorder walk runs backwards.
//! tree.invert();
//! assert_eq!(tree.inorder().collect::<Vec<_>>(), [3, 2, 1]);
//! ```

use std::cmp;
use std::fmt;
use std::mem;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ParseTreeError;
use crate::traversal::{BreadthFirst, Inorder, Postorder, Preorder};

type Link = Option<Box<Node>>;

/// A single key in a [`Tree`] along with the subtrees hanging off of it.
///
/// Nodes are only ever created by a [`Tree`], so there is no public constructor:
///
/// ```compile_fail
/// let node = bst::Node::new(1);
/// ```
pub struct Node {
    data: i64,
    left: Link,
    right: Link,
}

impl Node {
    /// Construct a new childless `Node` holding `data`.
    pub(crate) fn new(data: i64) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn data(&self) -> i64 {
        self.data
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::with_root(2);
    /// assert!(tree.root().unwrap().is_leaf());
    ///
    /// tree.insert(3);
    /// let root = tree.root().unwrap();
    /// assert!(!root.is_leaf());
    /// assert!(root.right().unwrap().is_leaf());
    /// ```
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A Binary Search Tree of `i64` keys. This can be used for inserting and searching for keys, for
/// mirroring the whole tree and for walking it in any of the four classic orders.
///
/// The tree never rebalances. Inserting keys in ascending order produces a chain leaning right.
#[derive(Default)]
pub struct Tree {
    root: Link,
    len: usize,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Generates a `Tree` containing only `data`.
    pub fn with_root(data: i64) -> Self {
        Self {
            root: Some(Box::new(Node::new(data))),
            len: 1,
        }
    }

    /// Inserts the given key into the tree. Keys less than a node's key go into its left subtree
    /// and everything else, including duplicates, goes into its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.root().unwrap().right().unwrap().data(), 1);
    /// ```
    pub fn insert(&mut self, key: i64) {
        trace!(key, "inserting key");

        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(key)));
        self.len += 1;
    }

    /// Returns whether `key` is stored in this tree.
    ///
    /// Only meaningful while the tree is a valid search tree, i.e. not while it is inverted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree = [3, 12, 1].into_iter().collect();
    ///
    /// assert!(tree.search(12));
    /// assert!(!tree.search(42));
    /// ```
    pub fn search(&self, key: i64) -> bool {
        let mut link = self.root();
        while let Some(node) = link {
            link = match key.cmp(&node.data) {
                cmp::Ordering::Less => node.left(),
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Mirrors the tree in place by swapping the children of every node. Inverting twice gives
    /// back the original tree.
    ///
    /// **Note** The mirrored tree is no longer ordered as a search tree so [`Tree::search`] and
    /// [`Tree::insert`] stop making sense until it is inverted back.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree = [2, 1, 3].into_iter().collect();
    /// let original = tree.clone();
    ///
    /// tree.invert();
    /// assert_eq!(tree.root().unwrap().left().unwrap().data(), 3);
    ///
    /// tree.invert();
    /// assert_eq!(tree, original);
    /// ```
    pub fn invert(&mut self) {
        debug!(len = self.len, "inverting tree");

        let mut stack: Vec<&mut Node> = self.root.as_deref_mut().into_iter().collect();
        while let Some(node) = stack.pop() {
            mem::swap(&mut node.left, &mut node.right);
            stack.extend(node.left.as_deref_mut());
            stack.extend(node.right.as_deref_mut());
        }
    }

    /// The root of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// How many keys have been inserted, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the number of levels in this tree. An empty tree has height 0 and a single node has
    /// height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }

        height
    }

    /// Walks the tree level by level, left to right within each level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree = [3, 12, 1, -12, 2].into_iter().collect();
    /// assert_eq!(tree.breadth_first().collect::<Vec<_>>(), [3, 1, 12, -12, 2]);
    /// ```
    pub fn breadth_first(&self) -> BreadthFirst<'_> {
        BreadthFirst::new(self.root())
    }

    /// Walks the left subtree, then the node, then the right subtree. For a search tree this
    /// yields the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree = [3, 12, 1, -12, 2].into_iter().collect();
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [-12, 1, 2, 3, 12]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_> {
        Inorder::new(self.root())
    }

    /// Walks the node, then the left subtree, then the right subtree. Inserting the yielded keys
    /// into an empty tree rebuilds this exact shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree = [3, 12, 1, -12, 2].into_iter().collect();
    /// assert_eq!(tree.preorder().collect::<Vec<_>>(), [3, 1, -12, 2, 12]);
    /// ```
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(self.root())
    }

    /// Walks the left subtree, then the right subtree, then the node. Children always come before
    /// their parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree = [3, 12, 1, -12, 2].into_iter().collect();
    /// assert_eq!(tree.postorder().collect::<Vec<_>>(), [-12, 2, 1, 12, 3]);
    /// ```
    pub fn postorder(&self) -> Postorder<'_> {
        Postorder::new(self.root())
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        // Detach every child before its box is freed so dropping a long chain doesn't recurse.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        let mut root = None;
        {
            let mut stack: Vec<(&Node, &mut Link)> = Vec::new();
            if let Some(node) = self.root() {
                stack.push((node, &mut root));
            }
            while let Some((original, link)) = stack.pop() {
                let copy = link.insert(Box::new(Node::new(original.data)));
                if let Some(left) = original.left() {
                    stack.push((left, &mut copy.left));
                }
                if let Some(right) = original.right() {
                    stack.push((right, &mut copy.right));
                }
            }
        }

        Self {
            root,
            len: self.len,
        }
    }
}

/// Two trees are equal when they have the same shape and the same key at every position.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self.root(), other.root())];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.data == b.data => {
                    stack.push((a.left(), b.left()));
                    stack.push((a.right(), b.right()));
                }
                _ => return false,
            }
        }

        true
    }
}

impl Eq for Tree {}

/// Only shows whether each child is present so formatting never walks the subtrees.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("has_left", &self.left.is_some())
            .field("has_right", &self.right.is_some())
            .finish()
    }
}

/// Shows the keys in preorder, which pins down the shape of a search tree.
impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("preorder", &self.preorder().collect::<Vec<_>>())
            .finish()
    }
}

/// Prints one key per line in ascending (inorder) order.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.inorder() {
            writeln!(f, "{key}")?;
        }
        Ok(())
    }
}

impl Extend<i64> for Tree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<i64> for Tree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i64;
    type IntoIter = Inorder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// Parses keys separated by whitespace and/or commas, inserting them in the order they appear.
///
/// # Examples
///
/// ```
/// use bst::Tree;
///
/// let tree: Tree = "3, 12 1 -12".parse().unwrap();
/// assert_eq!(tree.preorder().collect::<Vec<_>>(), [3, 1, -12, 12]);
///
/// let err = "3 twelve".parse::<Tree>().unwrap_err();
/// assert_eq!(err.token, "twelve");
/// ```
impl FromStr for Tree {
    type Err = ParseTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tree = Self::new();
        for token in s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
        {
            let key = token.parse().map_err(|source| ParseTreeError {
                token: token.to_string(),
                source,
            })?;
            tree.insert(key);
        }

        debug!(len = tree.len, "parsed tree");
        Ok(tree)
    }
}
