use std::borrow::Borrow;
use std::cmp;
use std::cmp::Ordering;

use crate::node::Node;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// The rotation case is picked from the direction the inserted key took at the child that grew:
// at most one path changed height, so that direction identifies the grandchild holding the new
// node. Ties descend right, so `Equal` belongs with the right-going cases.
fn rebalance<T>(mut node: Box<Node<T>>, child_ordering: Ordering) -> Box<Node<T>>
where
    T: Ord,
{
    let balance = node.balance();
    if balance > 1 {
        if child_ordering == Ordering::Less {
            rotate_right(node)
        } else {
            let child = match node.left.take() {
                Some(child) => child,
                None => unreachable!(),
            };
            node.left = Some(rotate_left(child));
            rotate_right(node)
        }
    } else if balance < -1 {
        if child_ordering == Ordering::Less {
            let child = match node.right.take() {
                Some(child) => child,
                None => unreachable!(),
            };
            node.right = Some(rotate_right(child));
            rotate_left(node)
        } else {
            rotate_left(node)
        }
    } else {
        node
    }
}

pub fn insert<T>(tree: &mut Tree<T>, new_node: Node<T>)
where
    T: Ord,
{
    insert_rec(tree, new_node);
}

// Returns how the inserted key compared against this subtree's root on entry, which the caller
// needs to pick a rotation case if the insertion unbalances it.
fn insert_rec<T>(tree: &mut Tree<T>, new_node: Node<T>) -> Ordering
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(new_node));
            return Ordering::Equal;
        },
    };

    let ordering = new_node.key.cmp(&node.key);
    let child_ordering = match ordering {
        Ordering::Less => insert_rec(&mut node.left, new_node),
        _ => insert_rec(&mut node.right, new_node),
    };

    node.update();
    let node = rebalance(node, child_ordering);
    debug_assert!(node.balance().abs() <= 1);
    *tree = Some(node);
    ordering
}

pub fn get<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn ceil<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.key.borrow()) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn floor<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        Some(&curr.key)
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        Some(&curr.key)
    })
}

// Walks the whole tree, re-deriving every height from scratch. Returns the node count so the
// container can cross-check its cached length.
pub fn assert_invariants<T>(tree: &Tree<T>) -> usize
where
    T: Ord,
{
    check_node(tree, None, None).1
}

fn check_node<'a, T>(tree: &'a Tree<T>, lower: Option<&'a T>, upper: Option<&'a T>) -> (usize, usize)
where
    T: Ord,
{
    let node = match tree {
        None => return (0, 0),
        Some(ref node) => node,
    };

    // Rotations can move an equal key into a left subtree, so both bounds are inclusive.
    if let Some(lower) = lower {
        assert!(*lower <= node.key, "key out of order with an ancestor");
    }
    if let Some(upper) = upper {
        assert!(node.key <= *upper, "key out of order with an ancestor");
    }

    let (left_height, left_len) = check_node(&node.left, lower, Some(&node.key));
    let (right_height, right_len) = check_node(&node.right, Some(&node.key), upper);

    let height = cmp::max(left_height, right_height) + 1;
    assert_eq!(node.height, height, "cached height is stale");

    let balance = (left_height as i32) - (right_height as i32);
    assert!(balance.abs() <= 1, "balance factor out of range");

    (height, left_len + right_len + 1)
}
