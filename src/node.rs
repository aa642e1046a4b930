use std::cmp;

use serde_derive::{Deserialize, Serialize};

use crate::tree;

/// A struct representing an internal node of an AVL tree.
#[derive(Serialize, Deserialize)]
pub struct Node<T> {
    pub key: T,
    pub height: usize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node {
            height,
            left,
            right,
            ..
        } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> i32 {
        (tree::height(&self.left) as i32) - (tree::height(&self.right) as i32)
    }
}

/// A read-only view of a single tree node, exposing its key, cached height, and children.
///
/// Views let an external collaborator (for example, a layout or drawing routine) reconstruct the
/// full shape of the tree in a single walk, without searching the tree by key.
///
/// # Examples
///
/// ```
/// use avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.key(), &20);
/// assert_eq!(root.left().unwrap().key(), &10);
/// assert_eq!(root.right().unwrap().key(), &30);
/// ```
pub struct NodeView<'a, T> {
    node: &'a Node<T>,
}

impl<'a, T> NodeView<'a, T> {
    pub(crate) fn new(node: &'a Node<T>) -> Self {
        NodeView { node }
    }

    /// Returns a reference to the key stored in this node.
    pub fn key(&self) -> &'a T {
        &self.node.key
    }

    /// Returns the cached height of the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> usize {
        self.node.height
    }

    /// Returns a view of the left child, or `None` if this node has no left child.
    pub fn left(&self) -> Option<NodeView<'a, T>> {
        self.node.left.as_deref().map(NodeView::new)
    }

    /// Returns a view of the right child, or `None` if this node has no right child.
    pub fn right(&self) -> Option<NodeView<'a, T>> {
        self.node.right.as_deref().map(NodeView::new)
    }
}

impl<'a, T> Clone for NodeView<'a, T> {
    fn clone(&self) -> Self {
        NodeView { node: self.node }
    }
}

impl<'a, T> Copy for NodeView<'a, T> {}
