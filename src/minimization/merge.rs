use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::trace;

use crate::{
    math::{Map, Partition, Set, UnionFind},
    prelude::*,
};

use super::{EquivalenceClass, EquivalenceTable};

/// Groups the states of `ts` into classes of pairwise unmarked states. Every unmarked pair
/// is united in a [`UnionFind`] forest, so the classes are closed under transitivity even
/// if their members are discovered in a scattered order.
pub fn equivalence_partition(
    ts: &IndexedAutomaton,
    table: &EquivalenceTable,
) -> Partition<usize> {
    let mut forest = UnionFind::new(ts.size());
    for (p, q) in table.unmarked_pairs() {
        forest.union(p, q);
    }
    forest.into_partition()
}

/// The result of merging the states of an automaton along a [`Partition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    /// The automaton built from the classes.
    pub automaton: Automaton,
    /// The classes, in the order in which their names appear in `Q` of `automaton`.
    pub classes: Vec<EquivalenceClass>,
}

/// Builds the quotient automaton of `ts` with respect to the classes of unmarked pairs in
/// `table`. The alphabet of the result is `alphabet`, everything else is derived:
/// - `Q` holds one name per class, ordered by name ([`ClassNaming::Concatenate`]) or by the
///   position of the first member ([`ClassNaming::Indexed`]),
/// - `Delta` holds every transition of `ts` with both endpoints replaced by their class,
///   deduplicated and sorted by source, symbol name and target,
/// - `q0` is the class of the initial state and `F` the sorted classes of accepting states.
pub fn merge_equivalent_states(
    ts: &IndexedAutomaton,
    table: &EquivalenceTable,
    alphabet: &[String],
    naming: &ClassNaming,
) -> Result<Merged, MinimizeError> {
    let partition = equivalence_partition(ts, table);
    let class_of = partition.class_indices(ts.size());
    let class = |q: usize| {
        class_of
            .get(q)
            .copied()
            .flatten()
            .expect("every state belongs to a class")
    };

    let members = partition
        .iter()
        .map(|c| {
            c.iter()
                .map(|&q| {
                    ts.state_name(q)
                        .expect("classes only contain known states")
                        .to_string()
                })
                .sorted()
                .collect_vec()
        })
        .collect_vec();
    let names = match naming {
        ClassNaming::Concatenate(separator) => members
            .iter()
            .map(|m| m.join(separator.as_str()))
            .collect_vec(),
        ClassNaming::Indexed => (0..partition.size()).map(|i| format!("q{i}")).collect_vec(),
    };

    let mut seen = Set::default();
    for name in &names {
        if !seen.insert(name.as_str()) {
            return Err(MinimizeError::ClassNameCollision(name.clone()));
        }
    }

    // position of each class in the output Q
    let order = match naming {
        ClassNaming::Concatenate(_) => (0..names.len())
            .sorted_by(|&x, &y| names[x].cmp(&names[y]))
            .collect_vec(),
        ClassNaming::Indexed => (0..names.len()).collect_vec(),
    };
    let mut rank = vec![0; names.len()];
    for (position, &c) in order.iter().enumerate() {
        rank[c] = position;
    }

    let mut successors: Map<(usize, &str), usize> = Map::default();
    let mut transitions = BTreeSet::new();
    for (p, a, q) in ts.edges() {
        let symbol = ts
            .symbol_name(a)
            .expect("transitions only use interned symbols");
        let (source, target) = (class(p), class(q));
        if let Some(&existing) = successors.get(&(source, symbol)) {
            if existing != target {
                return Err(MinimizeError::InconsistentPartition {
                    class: names[source].clone(),
                    symbol: symbol.to_string(),
                });
            }
        }
        successors.insert((source, symbol), target);
        transitions.insert((rank[source], symbol, rank[target]));
    }

    let accepting: BTreeSet<usize> = ts
        .state_indices()
        .filter(|&q| ts.is_accepting(q))
        .map(|q| rank[class(q)])
        .collect();

    for (c, m) in members.iter().enumerate().filter(|(_, m)| m.len() > 1) {
        trace!("merging {{{}}} into {}", m.join(", "), names[c]);
    }

    let automaton = Automaton {
        states: order.iter().map(|&c| names[c].clone()).collect(),
        alphabet: alphabet.to_vec(),
        transitions: transitions
            .into_iter()
            .map(|(p, a, q)| {
                Transition::new(names[order[p]].clone(), a, names[order[q]].clone())
            })
            .collect(),
        initial: names[class(ts.initial())].clone(),
        accepting: accepting
            .into_iter()
            .map(|c| names[order[c]].clone())
            .collect(),
    };
    let classes = order
        .iter()
        .map(|&c| EquivalenceClass {
            name: names[c].clone(),
            members: members[c].clone(),
        })
        .collect();

    Ok(Merged { automaton, classes })
}
