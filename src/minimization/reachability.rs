use std::collections::VecDeque;

use bit_set::BitSet;
use tracing::trace;

use crate::prelude::*;

/// Computes the set of states that can be reached from the initial state by a breadth-first
/// search along the transitions. The initial state is always contained.
pub fn reachable_states(ts: &IndexedAutomaton) -> BitSet {
    let mut seen = BitSet::with_capacity(ts.size());
    let mut queue = VecDeque::from([ts.initial()]);
    seen.insert(ts.initial());

    while let Some(q) = queue.pop_front() {
        for a in 0..ts.symbol_count() {
            if let Some(p) = ts.successor(q, a) {
                if seen.insert(p) {
                    queue.push_back(p);
                }
            }
        }
    }
    seen
}

/// Removes every state that is not reachable from the initial state, together with all
/// transitions touching it and its membership in the accepting set. This is pruning and
/// never fails.
pub fn remove_unreachable(ts: &IndexedAutomaton) -> IndexedAutomaton {
    let reachable = reachable_states(ts);
    if reachable.len() == ts.size() {
        return ts.clone();
    }
    if tracing::enabled!(tracing::Level::TRACE) {
        for q in ts.state_indices().filter(|q| !reachable.contains(*q)) {
            trace!("state {} is unreachable", ts.state_name(q).unwrap_or("?"));
        }
    }
    ts.restrict(&reachable)
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    use super::{reachable_states, remove_unreachable};

    #[test]
    fn reachable_states_from_initial() {
        let dfa = Automaton::builder()
            .with_states(["A", "B", "C", "D", "E"])
            .with_transitions([
                ("A", "a", "B"),
                ("B", "a", "D"),
                ("C", "a", "A"),
                ("E", "a", "E"),
            ])
            .with_accepting(["C", "D"])
            .into_automaton("A");
        let ts = IndexedAutomaton::new(&dfa, &Options::default()).unwrap();

        assert_eq!(
            reachable_states(&ts).iter().collect::<Vec<_>>(),
            vec![0, 1, 3]
        );

        let trimmed = remove_unreachable(&ts);
        assert_eq!(trimmed.size(), 3);
        assert_eq!(
            trimmed
                .state_indices()
                .filter_map(|q| trimmed.state_name(q))
                .collect::<Vec<_>>(),
            vec!["A", "B", "D"]
        );
        assert!(trimmed.is_accepting(2));
        assert!(!trimmed.is_accepting(0));
        assert_eq!(trimmed.edges().count(), 2);
    }

    #[test]
    fn initial_state_alone_survives_without_transitions() {
        let dfa = Automaton::builder()
            .with_states(["A", "B"])
            .with_accepting(["B"])
            .into_automaton("B");
        let ts = IndexedAutomaton::new(&dfa, &Options::default()).unwrap();
        let trimmed = remove_unreachable(&ts);

        assert_eq!(trimmed.size(), 1);
        assert_eq!(trimmed.initial(), 0);
        assert_eq!(trimmed.state_name(0), Some("B"));
        assert!(trimmed.is_accepting(0));
    }
}
