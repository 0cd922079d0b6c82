use std::{collections::BTreeSet, hash::Hash};

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// Represents a bijective mapping between `L` and `R`, that is a mapping which associates
/// each `L` with precisely one `R` and vice versa.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;

/// A partition groups elements of type `I` into disjoint classes. Each class is kept as an
/// ordered set and the classes themselves are ordered by their smallest element, so two
/// partitions built from the same relation always enumerate their classes identically.
#[derive(Debug, Clone)]
pub struct Partition<I: Hash + Eq>(Vec<BTreeSet<I>>);

impl<I: Hash + Eq> std::ops::Deref for Partition<I> {
    type Target = Vec<BTreeSet<I>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, I: Hash + Eq> IntoIterator for &'a Partition<I> {
    type Item = &'a BTreeSet<I>;
    type IntoIter = std::slice::Iter<'a, BTreeSet<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<I: Hash + Eq> PartialEq for Partition<I> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|o| other.contains(o))
    }
}
impl<I: Hash + Eq> Eq for Partition<I> {}

impl<I: Hash + Eq + Ord> Partition<I> {
    /// Returns the size of the partition, i.e. the number of classes.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Builds a new partition from an iterator that yields iterators over the elements
    /// of each class. Empty classes are discarded and the remaining ones are sorted by
    /// their minimal element.
    pub fn new<X: IntoIterator<Item = I>, Y: IntoIterator<Item = X>>(iter: Y) -> Self {
        let mut classes: Vec<BTreeSet<I>> = iter
            .into_iter()
            .map(|it| it.into_iter().collect::<BTreeSet<_>>())
            .filter(|class| !class.is_empty())
            .collect();
        classes.sort_by(|x, y| x.first().cmp(&y.first()));
        Self(classes)
    }
}

impl Partition<usize> {
    /// Returns a vector that maps every element `0..n` to the position of its class.
    /// Elements that are not covered by the partition are absent from the result, which
    /// is why the caller has to give `n`.
    pub fn class_indices(&self, n: usize) -> Vec<Option<usize>> {
        let mut out = vec![None; n];
        for (pos, class) in self.iter().enumerate() {
            for &q in class {
                if let Some(slot) = out.get_mut(q) {
                    *slot = Some(pos);
                }
            }
        }
        out
    }
}

/// A disjoint-set forest over the integers `0..n`, using union by rank and path compression.
///
/// Merging indistinguishable states has to be transitively closed: if `p` and `q` end up in
/// one class and `q` and `r` end up in one class, then so do `p` and `r`, regardless of the
/// order in which these facts are discovered.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Creates a forest in which every element `0..n` forms its own singleton class.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the forest has no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the root of the tree containing `x`, compressing the path on the way.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the classes of `x` and `y`. Returns `false` if they were already merged.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }
        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        true
    }

    /// Returns `true` if `x` and `y` belong to the same class.
    pub fn same_class(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Consumes the forest and collects its classes into a [`Partition`].
    pub fn into_partition(mut self) -> Partition<usize> {
        let mut classes: Map<usize, Vec<usize>> = Map::default();
        for x in 0..self.len() {
            let root = self.find(x);
            classes.entry(root).or_default().push(x);
        }
        Partition::new(classes.into_values())
    }
}

#[cfg(test)]
mod tests {
    use super::{Partition, UnionFind};

    #[test]
    fn union_find_is_transitive_for_scattered_unions() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 3));
        assert!(uf.union(4, 1));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 4));
        assert!(uf.same_class(0, 1));
        assert!(!uf.same_class(2, 5));

        let partition = uf.into_partition();
        assert_eq!(
            partition,
            Partition::new([vec![0, 1, 3, 4], vec![2], vec![5]])
        );
        assert_eq!(partition.size(), 3);
        assert_eq!(
            partition.class_indices(6),
            vec![Some(0), Some(0), Some(1), Some(0), Some(0), Some(2)]
        );
    }

    #[test]
    fn partition_classes_are_ordered_by_minimum() {
        let partition = Partition::new([vec![5, 2], vec![], vec![4, 0], vec![1]]);
        let firsts: Vec<_> = partition.iter().map(|c| *c.first().unwrap()).collect();
        assert_eq!(firsts, vec![0, 1, 2]);
    }
}
