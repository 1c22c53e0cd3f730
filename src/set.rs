use crate::arena::NodeId;
use crate::error::{Error, Result};
use crate::node::Side;
use crate::tree::{Balance, RawTree};
use log::debug;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::borrow::Borrow;
use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

/// An ordered set backed by a binary search tree whose shape is maintained by the strategy `B`.
///
/// Nodes keep a handle to their parent, so every walk over the tree (descent, rebalancing,
/// iteration, and height computation) is iterative and the stack never grows with the tree. Use
/// the aliases `BstSet<T>` for a plain binary search tree and `AvlSet<T>` for an avl tree.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.find_min(), Ok(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct TreeSet<T, B> {
    pub(crate) tree: RawTree<T>,
    _balance: PhantomData<B>,
}

impl<T, B> TreeSet<T, B>
where
    T: Ord,
    B: Balance,
{
    /// Constructs a new, empty `TreeSet<T, B>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        TreeSet {
            tree: RawTree::new(),
            _balance: PhantomData,
        }
    }

    /// Constructs a new, empty `TreeSet<T, B>` with room for `capacity` values before the node
    /// storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::bst::BstSet;
    ///
    /// let set: BstSet<u32> = BstSet::with_capacity(64);
    /// assert!(set.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        TreeSet {
            tree: RawTree::with_capacity(capacity),
            _balance: PhantomData,
        }
    }

    /// Inserts a value into the set. Returns `false` and leaves the set untouched if an equal
    /// value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        match self.tree.insert(value) {
            Some(id) => {
                B::after_insert(&mut self.tree, id);
                true
            },
            None => false,
        }
    }

    /// Inserts every value in order. Returns `true` only if every insertion succeeded; a
    /// duplicate does not stop the remaining values from being inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert_all(vec![2, 1]));
    /// assert!(!set.insert_all(vec![1, 3]));
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn insert_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .fold(true, |status, value| self.insert(value) && status)
    }

    /// Removes a value from the set and returns it. Returns `None` if the value is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.tree.find(value)?;
        Some(self.remove_at(id))
    }

    /// Removes a value from the set. Returns `false` if the value is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes every value in order. Returns `true` only if every value was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert_all(vec![1, 2, 3]);
    /// assert!(!set.remove_all(&[1, 4]));
    /// assert!(set.remove_all(&[2, 3]));
    /// assert!(set.is_empty());
    /// ```
    pub fn remove_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        values
            .into_iter()
            .fold(true, |status, value| self.remove::<T>(value.borrow()) && status)
    }

    /// Removes and returns the minimum value of the set.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTree` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    /// use balanced_collections::Error;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert_all(vec![1, 3]);
    /// assert_eq!(set.remove_min(), Ok(1));
    /// assert_eq!(set.remove_min(), Ok(3));
    /// assert_eq!(set.remove_min(), Err(Error::EmptyTree));
    /// ```
    pub fn remove_min(&mut self) -> Result<T> {
        let id = self.tree.first().ok_or(Error::EmptyTree)?;
        Ok(self.remove_at(id))
    }

    /// Removes and returns the maximum value of the set.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTree` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert_all(vec![1, 3]);
    /// assert_eq!(set.remove_max(), Ok(3));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove_max(&mut self) -> Result<T> {
        let id = self.tree.last().ok_or(Error::EmptyTree)?;
        Ok(self.remove_at(id))
    }

    fn remove_at(&mut self, id: NodeId) -> T {
        let (value, detached) = self.tree.remove_node(id);
        B::after_remove(&mut self.tree, detached);
        value
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(value).is_some()
    }

    /// Returns a reference to the stored value equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(String::from("avl"));
    /// assert_eq!(set.get("avl"), Some(&String::from("avl")));
    /// assert_eq!(set.get("bst"), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(value).map(|id| self.tree.value(id))
    }

    /// Returns the minimum value of the set.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTree` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.find_min(), Ok(&1));
    /// ```
    pub fn find_min(&self) -> Result<&T> {
        self.tree
            .first()
            .map(|id| self.tree.value(id))
            .ok_or(Error::EmptyTree)
    }

    /// Returns the maximum value of the set.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTree` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.find_max(), Ok(&3));
    /// ```
    pub fn find_max(&self) -> Result<&T> {
        self.tree
            .last()
            .map(|id| self.tree.value(id))
            .ok_or(Error::EmptyTree)
    }

    /// Returns a value in the set that is less than or equal to a particular value. Returns `None`
    /// if such a value does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.floor(value).map(|id| self.tree.value(id))
    }

    /// Returns a value in the set that is greater than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.ceil(value).map(|id| self.tree.value(id))
    }

    /// Returns every value matching `predicate`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..10).collect();
    /// assert_eq!(set.find_all(|value| value % 3 == 0), vec![&0, &3, &6, &9]);
    /// ```
    pub fn find_all<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|value| predicate(*value)).collect()
    }

    /// Returns the number of levels in the tree, computed by visiting every node. An empty set
    /// has height 0 and a single value has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert_eq!(set.height(), 0);
    /// set.insert_all(vec![1, 2, 3]);
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the values of the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert_all(vec![3, 1, 2]);
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, B> TreeSet<T, B> {
    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreeSetIter<'_, T> {
        TreeSetIter {
            tree: &self.tree,
            front: self.tree.first(),
            back: self.tree.last(),
            remaining: self.tree.len(),
        }
    }
}

impl<T, B> IntoIterator for TreeSet<T, B> {
    type Item = T;
    type IntoIter = TreeSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        debug!("draining tree with {} nodes", self.tree.len());
        TreeSetIntoIter {
            next: self.tree.first(),
            tree: self.tree,
        }
    }
}

impl<'a, T, B> IntoIterator for &'a TreeSet<T, B>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = TreeSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `TreeSet<T, B>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values. Each step
/// unlinks the current minimum, which never has a left child, so no rebalancing is needed.
pub struct TreeSetIntoIter<T> {
    tree: RawTree<T>,
    next: Option<NodeId>,
}

impl<T> Iterator for TreeSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = match self.tree.nodes[id].right {
            Some(right) => Some(self.tree.extreme(right, Side::Left)),
            None => self.tree.nodes[id].parent,
        };
        let (value, _) = self.tree.remove_node(id);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T> ExactSizeIterator for TreeSetIntoIter<T> {}

/// An iterator for `TreeSet<T, B>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references. It
/// follows parent links, so it needs no auxiliary stack.
pub struct TreeSetIter<'a, T>
where
    T: 'a,
{
    tree: &'a RawTree<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for TreeSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.tree.neighbour(id, Side::Right);
        Some(self.tree.value(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for TreeSetIter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.tree.neighbour(id, Side::Left);
        Some(self.tree.value(id))
    }
}

impl<'a, T> ExactSizeIterator for TreeSetIter<'a, T> where T: 'a {}

impl<T, B> Default for TreeSet<T, B>
where
    T: Ord,
    B: Balance,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> Clone for TreeSet<T, B>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        TreeSet {
            tree: self.tree.clone(),
            _balance: PhantomData,
        }
    }
}

impl<T, B> fmt::Debug for TreeSet<T, B>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, B> PartialEq for TreeSet<T, B>
where
    T: PartialEq,
{
    fn eq(&self, other: &TreeSet<T, B>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, B> Eq for TreeSet<T, B> where T: Eq {}

impl<T, B> FromIterator<T> for TreeSet<T, B>
where
    T: Ord,
    B: Balance,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = TreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T, B> Extend<T> for TreeSet<T, B>
where
    T: Ord,
    B: Balance,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, B> Serialize for TreeSet<T, B>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct TreeSetVisitor<T, B> {
    marker: PhantomData<fn() -> TreeSet<T, B>>,
}

impl<'de, T, B> Visitor<'de> for TreeSetVisitor<T, B>
where
    T: Deserialize<'de> + Ord,
    B: Balance,
{
    type Value = TreeSet<T, B>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of values")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = TreeSet::with_capacity(cmp::min(seq.size_hint().unwrap_or(0), 4096));
        while let Some(value) = seq.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

impl<'de, T, B> Deserialize<'de> for TreeSet<T, B>
where
    T: Deserialize<'de> + Ord,
    B: Balance,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeSetVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::avl::AvlSet;
    use crate::bst::BstSet;
    use crate::error::Error;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.find_min(), Err(Error::EmptyTree));
        assert_eq!(set.find_max(), Err(Error::EmptyTree));
    }

    #[test]
    fn test_remove_empty() {
        let mut set: BstSet<u32> = BstSet::new();
        assert!(!set.remove(&1));
        assert_eq!(set.remove_min(), Err(Error::EmptyTree));
        assert_eq!(set.remove_max(), Err(Error::EmptyTree));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_vec(), vec![1]);
    }

    #[test]
    fn test_insert_all_partial() {
        let mut set = BstSet::new();
        assert!(!set.insert_all(vec![1, 2, 1, 3]));
        assert_eq!(set.to_vec(), vec![1, 2, 3]);
        set.tree.assert_structure();
    }

    #[test]
    fn test_remove_all_partial() {
        let mut set: AvlSet<u32> = (0..5).collect();
        assert!(!set.remove_all(vec![1u32, 7, 3]));
        assert_eq!(set.to_vec(), vec![0, 2, 4]);
        set.tree.assert_structure();
    }

    #[test]
    fn test_min_max() {
        let set: BstSet<u32> = vec![8, 6, 7, 5, 1, 3, 9, 4, 0, 2].into_iter().collect();
        assert_eq!(set.find_min(), Ok(&0));
        assert_eq!(set.find_max(), Ok(&9));
    }

    #[test]
    fn test_floor_ceil() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.floor(&0), None);
        assert_eq!(set.floor(&2), Some(&1));
        assert_eq!(set.floor(&4), Some(&3));
        assert_eq!(set.floor(&6), Some(&5));

        assert_eq!(set.ceil(&0), Some(&1));
        assert_eq!(set.ceil(&2), Some(&3));
        assert_eq!(set.ceil(&4), Some(&5));
        assert_eq!(set.ceil(&6), None);
    }

    #[test]
    fn test_take_borrowed() {
        let mut set = AvlSet::new();
        set.insert(String::from("a"));
        set.insert(String::from("b"));
        assert_eq!(set.take("a"), Some(String::from("a")));
        assert!(!set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn test_round_trip_restores_sequence() {
        let mut set: AvlSet<u32> = vec![8, 6, 7, 5, 1, 3, 9, 4, 0, 2].into_iter().collect();
        let before = set.to_vec();
        assert!(set.insert(42));
        assert!(set.remove(&42));
        assert_eq!(set.to_vec(), before);
    }

    #[test]
    fn test_iter() {
        let set: BstSet<u32> = vec![1, 5, 3].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!(set.iter().rev().collect::<Vec<&u32>>(), vec![&5, &3, &1]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_iter_both_ends() {
        let set: AvlSet<u32> = (0..5).collect();
        let mut iter = set.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_into_iter() {
        let set: AvlSet<u32> = vec![8, 6, 7, 5, 1, 3, 9, 4, 0, 2].into_iter().collect();
        let mut iter = set.into_iter();
        assert_eq!(iter.len(), 10);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.collect::<Vec<u32>>(), (1..10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_to_vec_repeatable() {
        let set: BstSet<u32> = vec![2, 1, 3].into_iter().collect();
        assert_eq!(set.to_vec(), set.to_vec());
    }

    #[test]
    fn test_clear() {
        let mut set: AvlSet<u32> = (0..10).collect();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.height(), 0);
        assert!(set.insert(3));
        assert_eq!(set.to_vec(), vec![3]);
    }

    #[test]
    fn test_clone_eq_debug() {
        let set: AvlSet<u32> = vec![2, 1, 3].into_iter().collect();
        let mut other = set.clone();
        assert_eq!(set, other);
        other.remove(&2);
        assert_ne!(set, other);
        assert_eq!(format!("{:?}", set), "{1, 2, 3}");
    }

    #[test]
    fn test_serde_tokens() {
        let set: AvlSet<i32> = vec![3, 1, 2].into_iter().collect();
        assert_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::I32(1),
                Token::I32(2),
                Token::I32(3),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let set: BstSet<i32> = vec![1, 2].into_iter().collect();
        assert_de_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::I32(2),
                Token::I32(1),
                Token::I32(2),
                Token::SeqEnd,
            ],
        );
    }
}
