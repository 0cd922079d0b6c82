use bit_set::BitSet;
use owo_colors::OwoColorize;

use crate::prelude::*;

/// The table of the table-filling algorithm. For every unordered pair of distinct states it
/// stores whether the pair is known to be distinguishable. A pair is canonicalized as
/// `(min, max)` of the state indices and stored in a triangular [`BitSet`], so the table
/// for `n` states needs `n * (n - 1) / 2` bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceTable {
    size: usize,
    marked: BitSet,
}

impl EquivalenceTable {
    /// Builds the initial table: a pair is distinguishable iff exactly one of its states is
    /// accepting, as the empty word already tells them apart.
    pub fn new(ts: &IndexedAutomaton) -> Self {
        let size = ts.size();
        let mut marked = BitSet::with_capacity(size * size.saturating_sub(1) / 2);
        for q in 1..size {
            for p in 0..q {
                if ts.is_accepting(p) != ts.is_accepting(q) {
                    marked.insert(Self::pair_index(p, q));
                }
            }
        }
        Self { size, marked }
    }

    /// Position of the canonical pair `(p, q)` with `p < q` in the triangular layout.
    fn pair_index(p: usize, q: usize) -> usize {
        debug_assert!(p < q);
        q * (q - 1) / 2 + p
    }

    /// Number of states the table ranges over.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `p` and `q` have been marked as distinguishable. The order of the
    /// arguments does not matter and a state is never distinguishable from itself.
    pub fn is_distinguishable(&self, p: usize, q: usize) -> bool {
        match p.cmp(&q) {
            std::cmp::Ordering::Equal => false,
            std::cmp::Ordering::Less => self.marked.contains(Self::pair_index(p, q)),
            std::cmp::Ordering::Greater => self.marked.contains(Self::pair_index(q, p)),
        }
    }

    /// Marks `p` and `q` as distinguishable, returns `true` if they were not marked before.
    pub fn mark(&mut self, p: usize, q: usize) -> bool {
        match p.cmp(&q) {
            std::cmp::Ordering::Equal => false,
            std::cmp::Ordering::Less => self.marked.insert(Self::pair_index(p, q)),
            std::cmp::Ordering::Greater => self.marked.insert(Self::pair_index(q, p)),
        }
    }

    /// Iterates over all canonical pairs `(p, q)` with `p < q` that are not marked.
    pub fn unmarked_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..self.size)
            .flat_map(|q| (0..q).map(move |p| (p, q)))
            .filter(|&(p, q)| !self.marked.contains(Self::pair_index(p, q)))
    }

    /// Number of marked pairs.
    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Returns `true` if every pair of distinct states is marked, which means that no two
    /// states can be merged.
    pub fn is_fully_distinguished(&self) -> bool {
        self.unmarked_pairs().next().is_none()
    }

    /// Renders the lower triangle of the table. Marked pairs show a red `x`, pairs that are
    /// still considered equivalent a green `=`.
    pub fn render(&self, ts: &IndexedAutomaton) -> String {
        let name = |q: usize| ts.state_name(q).unwrap_or("?").to_string();
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once(String::new()).chain((0..self.size.saturating_sub(1)).map(name)),
        );
        for q in 1..self.size {
            let mut row = vec![name(q)];
            for p in 0..self.size.saturating_sub(1) {
                row.push(if p >= q {
                    String::new()
                } else if self.is_distinguishable(p, q) {
                    "x".red().to_string()
                } else {
                    "=".green().to_string()
                });
            }
            builder.push_record(row);
        }
        builder
            .build()
            .with(tabled::settings::Style::ascii())
            .to_string()
    }
}
