//! Iterators over the keys of a [`Tree`][crate::Tree]. Each one borrows the tree and walks it with
//! an explicit stack or queue, so no traversal recurses. They are created by
//! [`Tree::breadth_first`][crate::Tree::breadth_first], [`Tree::inorder`][crate::Tree::inorder],
//! [`Tree::preorder`][crate::Tree::preorder] and [`Tree::postorder`][crate::Tree::postorder].
//! Calling one of those again starts a fresh walk from the root.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::Node;

/// Yields keys level by level, left to right within a level.
#[derive(Clone, Debug)]
pub struct BreadthFirst<'a> {
    queue: VecDeque<&'a Node>,
}

impl<'a> BreadthFirst<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl Iterator for BreadthFirst<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());

        Some(node.data())
    }
}

impl FusedIterator for BreadthFirst<'_> {}

/// Yields the left subtree, then the node, then the right subtree.
#[derive(Clone, Debug)]
pub struct Inorder<'a> {
    /// Ancestors whose left subtree is being walked and which haven't been yielded yet.
    stack: Vec<&'a Node>,
    /// The next subtree to descend into.
    cursor: Option<&'a Node>,
}

impl<'a> Inorder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: Vec::new(),
            cursor: root,
        }
    }
}

impl Iterator for Inorder<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.cursor {
            self.stack.push(node);
            self.cursor = node.left();
        }

        let node = self.stack.pop()?;
        self.cursor = node.right();
        Some(node.data())
    }
}

impl FusedIterator for Inorder<'_> {}

/// Yields the node, then the left subtree, then the right subtree.
#[derive(Clone, Debug)]
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl Iterator for Preorder<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());

        Some(node.data())
    }
}

impl FusedIterator for Preorder<'_> {}

/// Yields the left subtree, then the right subtree, then the node.
#[derive(Clone, Debug)]
pub struct Postorder<'a> {
    /// Each node is pushed twice: once unexpanded and, once its children are queued up above it,
    /// again marked as expanded so it is yielded after them.
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> Postorder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl Iterator for Postorder<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node.data());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }

        None
    }
}

impl FusedIterator for Postorder<'_> {}
