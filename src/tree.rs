//! Unbalanced binary search tree.
//!
//! Every node's left subtree holds only smaller elements and its right
//! subtree only larger ones, so in-order traversal yields the elements in
//! strictly increasing order.  Duplicates are rejected on insertion.

use std::cmp::Ordering;
use std::iter::FusedIterator;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone, Debug)]
struct Node<T> {
    element: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(element: T) -> Box<Self> {
        Box::new(Node{element, left: None, right: None})
    }
}

/// Binary search tree of distinct, totally ordered elements.
///
/// ```rust
/// use keygraph::tree::BinarySearchTree;
///
/// let mut tree: BinarySearchTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
/// assert!(!tree.insert(4));
/// assert!(tree.remove(&3));
/// assert_eq!(vec![1, 4, 5, 8], tree.iter().copied().collect::<Vec<_>>());
/// assert_eq!(vec![5, 1, 4, 8], tree.pre_order().copied().collect::<Vec<_>>());
/// ```
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        BinarySearchTree{root: None, len: 0}
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `element`, returning `false` (and dropping it) if an equal
    /// element is already present.
    pub fn insert(&mut self, element: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match element.cmp(&node.element) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Some(Node::leaf(element));
        self.len += 1;
        true
    }

    /// Remove the element equal to `element`, returning whether it was found.
    ///
    /// A node with two children takes over the largest element of its left
    /// subtree.
    pub fn remove(&mut self, element: &T) -> bool {
        let removed = remove_from(&mut self.root, element);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Check whether an element equal to `element` is present.
    pub fn contains(&self, element: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match element.cmp(&node.element) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }
}

impl<T> BinarySearchTree<T> {
    /// Number of elements in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of edges on the longest root-to-leaf path; `None` for an empty
    /// tree, `Some(0)` for a single node.
    pub fn height(&self) -> Option<usize> {
        fn depth<T>(link: &Link<T>) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + depth(&node.left).max(depth(&node.right)),
            }
        }
        depth(&self.root).checked_sub(1)
    }

    /// Iterate over the elements in increasing order.
    pub fn iter(&self) -> InOrder<'_, T> {
        let mut iter = InOrder{stack: Vec::new(), remaining: self.len};
        iter.push_left_spine(&self.root);
        iter
    }

    /// Iterate over the elements in pre-order: each node before its left
    /// subtree, the left subtree before the right.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder{stack: self.root.as_deref().into_iter().collect(), remaining: self.len}
    }

    /// Clone the elements into a vector, in increasing order.
    pub fn to_vec(&self) -> Vec<T>
        where T: Clone
    {
        self.iter().cloned().collect()
    }
}

/// Unlink the node holding `element` from the subtree at `link`.
fn remove_from<T: Ord>(link: &mut Link<T>, element: &T) -> bool {
    let Some(node) = link else { return false };
    match element.cmp(&node.element) {
        Ordering::Less => remove_from(&mut node.left, element),
        Ordering::Greater => remove_from(&mut node.right, element),
        Ordering::Equal => {
            if let Some(mut node) = link.take() {
                *link = match (node.left.take(), node.right.take()) {
                    (None, None) => None,
                    (Some(child), None) | (None, Some(child)) => Some(child),
                    (Some(left), Some(right)) => {
                        let mut left = Some(left);
                        if let Some(max) = take_max(&mut left) {
                            node.element = max;
                        }
                        node.left = left;
                        node.right = Some(right);
                        Some(node)
                    }
                };
            }
            true
        }
    }
}

/// Detach the largest element of the subtree at `link`.
fn take_max<T>(link: &mut Link<T>) -> Option<T> {
    if link.as_ref()?.right.is_some() {
        return take_max(&mut link.as_mut()?.right);
    }
    let node = *link.take()?;
    *link = node.left;
    Some(node.element)
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ----------------------------------------------------------------
// Iterators

/// In-order iterator; see [`BinarySearchTree::iter`].
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for InOrder<'a, T> {}
impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Pre-order iterator; see [`BinarySearchTree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for PreOrder<'a, T> {}
impl<'a, T> FusedIterator for PreOrder<'a, T> {}
