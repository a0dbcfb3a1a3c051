use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;

/// An owned, possibly empty subtree. Every child link in the tree is a Branch, as is the root.
pub(crate) struct Branch<K: Ord, V>(pub Option<Box<Node<K, V>>>);

pub(crate) struct Node<K: Ord, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
}

impl<K: Ord, V> Node<K, V> {
    pub const fn leaf(key: K, value: V) -> Node<K, V> {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
            value,
        }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K: Ord, V> Branch<K, V> {
    pub const fn empty() -> Branch<K, V> {
        Branch(None)
    }

    /// Inserts the entry below this branch, returning the previous value if the key was already
    /// present. The tree shape only changes when the key is new.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut branch = self;
        loop {
            match *branch {
                Branch(Some(ref mut node)) => match key.cmp(&node.key) {
                    Ordering::Less => branch = &mut node.left,
                    Ordering::Greater => branch = &mut node.right,
                    Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
                },
                Branch(None) => {
                    branch.0 = Some(Box::new(Node::leaf(key, value)));
                    return None;
                },
            }
        }
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;
        loop {
            let ordering = key.cmp(branch.0.as_ref()?.key.borrow());
            if ordering == Ordering::Equal {
                return branch.unlink();
            }
            let node = branch.0.as_mut()?;
            branch = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    /// Removes the node at the top of this branch.
    ///
    /// With at most one child, the child is spliced into this branch. With two children, the
    /// in-order successor's entry is moved into this node and the successor's old position is
    /// removed instead, so the node that is physically freed has at most one child.
    fn unlink(&mut self) -> Option<(K, V)> {
        let mut node = self.0.take()?;
        if node.left.0.is_some() {
            if let Some((key, value)) = node.right.take_first_entry() {
                let removed = (
                    mem::replace(&mut node.key, key),
                    mem::replace(&mut node.value, value),
                );
                self.0 = Some(node);
                return Some(removed);
            }
        }
        let Node { left, right, key, value } = *node;
        *self = if left.0.is_some() { left } else { right };
        Some((key, value))
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.0.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.0.as_deref(),
                Ordering::Greater => node.right.0.as_deref(),
                Ordering::Equal => return Some(node.tuple()),
            };
        }
        None
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.0.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.0.as_deref_mut(),
                Ordering::Greater => node.right.0.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }
        Some(node.tuple())
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }
        Some(node.tuple())
    }

    /// Detaches the entry with the smallest key. The detached node never has a left child, so its
    /// right child takes its place.
    pub fn take_first_entry(&mut self) -> Option<(K, V)> {
        let mut branch = self;
        while branch.0.as_ref()?.left.0.is_some() {
            branch = &mut branch.0.as_mut()?.left;
        }
        let node = branch.0.take()?;
        let Node { right, key, value, .. } = *node;
        *branch = right;
        Some((key, value))
    }

    pub fn take_last_entry(&mut self) -> Option<(K, V)> {
        let mut branch = self;
        while branch.0.as_ref()?.right.0.is_some() {
            branch = &mut branch.0.as_mut()?.right;
        }
        let node = branch.0.take()?;
        let Node { left, key, value, .. } = *node;
        *branch = left;
        Some((key, value))
    }
}

/// Tears the tree down with an explicit stack, so dropping never recurses. The same goes for every
/// walk over the tree: an unbalanced tree can be as deep as it is long.
impl<K: Ord, V> Drop for Branch<K, V> {
    fn drop(&mut self) {
        let Some(root) = self.0.take() else {
            return;
        };
        let mut stack = vec![root];
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

impl<K: Ord + Debug, V: Debug> Debug for Branch<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}: {:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.key,
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
