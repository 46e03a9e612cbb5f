use std::collections::{
    BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque,
};
use std::hash::{BuildHasher, Hash};

/// A destination container for `collect` and `partition`.
///
/// Draining a chain into a container inserts one element at a time. The
/// insertion used depends on the category of the container:
///
/// * sequential containers append (`Vec`, `VecDeque`, `LinkedList`,
///   `BinaryHeap`, `String`).
/// * associative containers insert by key (`HashMap`, `BTreeMap`). A later
///   element replaces an earlier one with the same key.
/// * set containers insert uniquely (`HashSet`, `BTreeSet`).
///
/// Implement this trait to collect into your own containers.
pub trait Emplace<T> {
    /// Insert a single element.
    fn emplace(&mut self, item: T);
}

impl<T> Emplace<T> for Vec<T> {
    #[inline]
    fn emplace(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Emplace<T> for VecDeque<T> {
    #[inline]
    fn emplace(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T> Emplace<T> for LinkedList<T> {
    #[inline]
    fn emplace(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: Ord> Emplace<T> for BinaryHeap<T> {
    #[inline]
    fn emplace(&mut self, item: T) {
        self.push(item);
    }
}

impl Emplace<char> for String {
    #[inline]
    fn emplace(&mut self, item: char) {
        self.push(item);
    }
}

impl<'a> Emplace<&'a char> for String {
    #[inline]
    fn emplace(&mut self, item: &'a char) {
        self.push(*item);
    }
}

impl<'a> Emplace<&'a str> for String {
    #[inline]
    fn emplace(&mut self, item: &'a str) {
        self.push_str(item);
    }
}

impl<T: Eq + Hash, S: BuildHasher> Emplace<T> for HashSet<T, S> {
    #[inline]
    fn emplace(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Ord> Emplace<T> for BTreeSet<T> {
    #[inline]
    fn emplace(&mut self, item: T) {
        self.insert(item);
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Emplace<(K, V)> for HashMap<K, V, S> {
    #[inline]
    fn emplace(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Emplace<(K, V)> for BTreeMap<K, V> {
    #[inline]
    fn emplace(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}
