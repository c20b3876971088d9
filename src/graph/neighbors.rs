use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;

/// Container holding the dense indices of a vertex's neighbors.
///
/// `HashSet<usize>` gives simple-graph semantics with O(1) membership,
/// `BTreeSet<usize>` keeps neighbors ordered by vertex index and
/// `Vec<usize>` admits parallel edges.
pub trait NeighborSet: Clone + Default + Debug {
    fn add(&mut self, n: usize);

    /// Removes every occurrence of `n`, returning whether any was present.
    fn delete(&mut self, n: usize) -> bool;

    fn has(&self, n: usize) -> bool;

    fn count(&self) -> usize;

    fn indices(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Renames index `from` to `to`.
    fn relabel(&mut self, from: usize, to: usize) {
        if self.delete(from) {
            self.add(to);
        }
    }
}

impl NeighborSet for HashSet<usize> {
    fn add(&mut self, n: usize) {
        self.insert(n);
    }

    fn delete(&mut self, n: usize) -> bool {
        self.remove(&n)
    }

    fn has(&self, n: usize) -> bool {
        self.contains(&n)
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn indices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.iter().copied())
    }
}

impl NeighborSet for BTreeSet<usize> {
    fn add(&mut self, n: usize) {
        self.insert(n);
    }

    fn delete(&mut self, n: usize) -> bool {
        self.remove(&n)
    }

    fn has(&self, n: usize) -> bool {
        self.contains(&n)
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn indices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.iter().copied())
    }
}

impl NeighborSet for Vec<usize> {
    fn add(&mut self, n: usize) {
        self.push(n);
    }

    fn delete(&mut self, n: usize) -> bool {
        let len = self.len();
        self.retain(|&m| m != n);
        self.len() != len
    }

    fn has(&self, n: usize) -> bool {
        self.contains(&n)
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn indices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.iter().copied())
    }

    fn relabel(&mut self, from: usize, to: usize) {
        for m in self.iter_mut().filter(|m| **m == from) {
            *m = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_set() {
        let mut s: HashSet<usize> = HashSet::new();
        s.add(1);
        s.add(1);
        s.add(3);
        assert_eq!(s.count(), 2);
        assert!(s.delete(1));
        assert!(!s.delete(1));
        s.relabel(3, 0);
        assert_eq!(s.indices().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn test_btree_set_order() {
        let mut s: BTreeSet<usize> = BTreeSet::new();
        for n in vec![4, 0, 2] {
            s.add(n);
        }
        assert_eq!(s.indices().collect::<Vec<_>>(), [0, 2, 4]);
    }

    #[test]
    fn test_vec_multiset() {
        let mut s: Vec<usize> = vec![];
        s.add(2);
        s.add(5);
        s.add(2);
        assert_eq!(s.count(), 3);
        s.relabel(2, 7);
        assert_eq!(s, [7, 5, 7]);
        assert!(s.delete(7));
        assert_eq!(s, [5]);
        assert!(!s.has(7));
    }
}
