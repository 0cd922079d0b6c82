use std::collections::{BTreeSet, VecDeque};

use itertools::Itertools;

use crate::{math::Bijection, prelude::*};

/// Enumerates all words over `alphabet` of length at most `max_len`, shortest first and in
/// lexicographic order (with respect to the order of `alphabet`) within each length.
pub fn words_up_to<S: AsRef<str>>(
    alphabet: &[S],
    max_len: usize,
) -> impl Iterator<Item = Vec<&str>> + '_ {
    let symbols = alphabet.iter().map(AsRef::as_ref).collect_vec();
    std::iter::once(vec![]).chain((1..=max_len).flat_map(move |len| {
        std::iter::repeat(symbols.clone())
            .take(len)
            .multi_cartesian_product()
    }))
}

impl Automaton {
    /// All symbols that are either declared or used by some transition, sorted.
    fn used_symbols(&self) -> BTreeSet<&str> {
        self.alphabet
            .iter()
            .map(String::as_str)
            .chain(self.transitions.iter().map(|t| t.symbol.as_str()))
            .collect()
    }

    /// Searches for a word of length at most `max_len` on which `self` and `other` disagree.
    /// The words are taken over the union of both alphabets and the shortest one is
    /// returned. `None` means the two automata agree on all words up to that length.
    pub fn separate_up_to(&self, other: &Automaton, max_len: usize) -> Option<Vec<String>> {
        let symbols = self
            .used_symbols()
            .union(&other.used_symbols())
            .copied()
            .collect_vec();
        let separating = words_up_to(&symbols, max_len)
            .find(|w| self.accepts(w) != other.accepts(w))
            .map(|w| w.into_iter().map(str::to_string).collect());
        separating
    }

    /// Returns `true` if `self` and `other` accept the same words of length at most `max_len`.
    pub fn agrees_up_to(&self, other: &Automaton, max_len: usize) -> bool {
        self.separate_up_to(other, max_len).is_none()
    }

    /// Decides whether `self` and `other` are equal up to renaming of states. Both have to
    /// have the same number of states, all of which must be reachable, and there has to be
    /// a bijection between them that maps the initial state to the initial state, respects
    /// acceptance and commutes with every (defined or undefined) transition.
    pub fn is_isomorphic_to(&self, other: &Automaton) -> bool {
        if self.size() != other.size() {
            return false;
        }
        let symbols = self.used_symbols();
        if symbols != other.used_symbols() {
            return false;
        }

        let mut bijection: Bijection<&str, &str> = Bijection::new();
        let mut queue = VecDeque::new();
        bijection.insert(self.initial.as_str(), other.initial.as_str());
        queue.push_back((self.initial.as_str(), other.initial.as_str()));

        while let Some((p, q)) = queue.pop_front() {
            if self.is_accepting(p) != other.is_accepting(q) {
                return false;
            }
            for &sym in &symbols {
                match (self.successor(p, sym), other.successor(q, sym)) {
                    (None, None) => {}
                    (Some(x), Some(y)) => match bijection.get_by_left(x) {
                        Some(&mapped) if mapped == y => {}
                        Some(_) => return false,
                        None => {
                            if bijection.contains_right(y) {
                                return false;
                            }
                            bijection.insert(x, y);
                            queue.push_back((x, y));
                        }
                    },
                    _ => return false,
                }
            }
        }

        bijection.len() == self.size()
    }
}
