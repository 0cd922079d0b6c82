use bit_set::BitSet;
use itertools::Itertools;
use tracing::trace;

use crate::{
    math::{Bijection, Map},
    prelude::*,
};

/// An integer-indexed view of an [`Automaton`] on which the minimization stages operate.
///
/// States are numbered `0..size()` and symbols `0..symbol_count()`, both in the order in
/// which they appear in the record. The names are kept in a [`Bijection`] so they can be
/// recovered when the result is assembled. Symbols used by transitions but absent from
/// `Sigma` (if tolerated) get indices after all declared ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedAutomaton {
    states: Bijection<usize, String>,
    symbols: Bijection<usize, String>,
    transitions: Map<(usize, usize), usize>,
    initial: usize,
    accepting: BitSet,
}

impl IndexedAutomaton {
    /// Validates `dfa` and builds the indexed view. This is the single place where the
    /// record is checked, in the following order:
    /// - `Q` must not contain duplicates and must not be empty,
    /// - `q0` and every member of `F` must be in `Q`,
    /// - transitions on symbols outside of `Sigma` are kept or rejected per [`SymbolPolicy`],
    /// - transitions with a source or target outside of `Q` are dropped or rejected per
    ///   [`DanglingPolicy`],
    /// - no two remaining transitions may leave the same state on the same symbol towards
    ///   different targets. Exact duplicates are merged.
    pub fn new(dfa: &Automaton, options: &Options) -> Result<Self, MinimizeError> {
        let mut states = Bijection::new();
        for (idx, q) in dfa.states.iter().enumerate() {
            if states.insert_no_overwrite(idx, q.clone()).is_err() {
                return Err(MinimizeError::DuplicateState(q.clone()));
            }
        }
        if states.is_empty() {
            return Err(MinimizeError::EmptyStates);
        }

        let initial = *states
            .get_by_right(dfa.initial.as_str())
            .ok_or_else(|| MinimizeError::UnknownInitial(dfa.initial.clone()))?;

        let mut accepting = BitSet::with_capacity(states.len());
        for f in &dfa.accepting {
            let idx = states
                .get_by_right(f.as_str())
                .ok_or_else(|| MinimizeError::UnknownAccepting(f.clone()))?;
            accepting.insert(*idx);
        }

        let mut symbols: Bijection<usize, String> = Bijection::new();
        for a in dfa.alphabet.iter().unique() {
            symbols.insert(symbols.len(), a.clone());
        }

        let mut transitions = Map::default();
        for t in &dfa.transitions {
            let symbol = match symbols.get_by_right(t.symbol.as_str()) {
                Some(a) => *a,
                None if options.unknown_symbols == SymbolPolicy::Reject => {
                    return Err(MinimizeError::UnknownSymbol(t.symbol.clone()));
                }
                None => {
                    trace!("tolerating symbol {} which is not in Sigma", t.symbol);
                    let a = symbols.len();
                    symbols.insert(a, t.symbol.clone());
                    a
                }
            };

            let (Some(&source), Some(&target)) = (
                states.get_by_right(t.source.as_str()),
                states.get_by_right(t.target.as_str()),
            ) else {
                if options.dangling == DanglingPolicy::Reject {
                    return Err(MinimizeError::DanglingTransition {
                        origin: t.source.clone(),
                        symbol: t.symbol.clone(),
                        target: t.target.clone(),
                    });
                }
                trace!("dropping dangling transition {t}");
                continue;
            };

            if let Some(&existing) = transitions.get(&(source, symbol)) {
                if existing != target {
                    return Err(MinimizeError::NonDeterministic {
                        state: t.source.clone(),
                        symbol: t.symbol.clone(),
                    });
                }
                continue;
            }
            transitions.insert((source, symbol), target);
        }

        Ok(Self {
            states,
            symbols,
            transitions,
            initial,
            accepting,
        })
    }

    /// Number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Number of symbols, including tolerated ones that are not part of `Sigma`.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Iterates over all state indices in ascending order.
    pub fn state_indices(&self) -> std::ops::Range<usize> {
        0..self.size()
    }

    /// The index of the initial state.
    pub fn initial(&self) -> usize {
        self.initial
    }

    /// Returns `true` if the state with index `q` is accepting.
    pub fn is_accepting(&self, q: usize) -> bool {
        self.accepting.contains(q)
    }

    /// The target of the transition from `q` on the symbol with index `a`, if defined.
    pub fn successor(&self, q: usize, a: usize) -> Option<usize> {
        self.transitions.get(&(q, a)).copied()
    }

    /// The name of the state with index `q`.
    pub fn state_name(&self, q: usize) -> Option<&str> {
        self.states.get_by_left(&q).map(String::as_str)
    }

    /// The name of the symbol with index `a`.
    pub fn symbol_name(&self, a: usize) -> Option<&str> {
        self.symbols.get_by_left(&a).map(String::as_str)
    }

    /// Iterates over all transitions as `(source, symbol, target)` index triples, sorted.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.transitions
            .iter()
            .map(|(&(p, a), &q)| (p, a, q))
            .sorted()
    }

    /// Restricts `self` to the states in `keep`, renumbering them while preserving their
    /// relative order. Transitions are kept if both endpoints survive. The initial state
    /// must be contained in `keep`.
    pub fn restrict(&self, keep: &BitSet) -> Self {
        debug_assert!(keep.contains(self.initial));
        let renumbered: Map<usize, usize> = self
            .state_indices()
            .filter(|q| keep.contains(*q))
            .enumerate()
            .map(|(new, old)| (old, new))
            .collect();

        let states = renumbered
            .iter()
            .filter_map(|(old, new)| Some((*new, self.state_name(*old)?.to_string())))
            .collect();
        let transitions = self
            .transitions
            .iter()
            .filter_map(|(&(p, a), q)| Some(((*renumbered.get(&p)?, a), *renumbered.get(q)?)))
            .collect();
        let accepting = self
            .accepting
            .iter()
            .filter_map(|f| renumbered.get(&f).copied())
            .collect();

        Self {
            states,
            symbols: self.symbols.clone(),
            transitions,
            initial: *renumbered
                .get(&self.initial)
                .expect("the initial state must be kept"),
            accepting,
        }
    }

    /// Returns a string representation of the transition table, the initial state is
    /// prefixed with `->` and accepting states are marked with `*`.
    pub fn transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(
                (0..self.symbol_count()).map(|a| self.symbol_name(a).unwrap_or("?").to_string()),
            ),
        );
        for q in self.state_indices() {
            let mut row = vec![format!(
                "{}{}{}",
                if q == self.initial { "->" } else { "" },
                self.state_name(q).unwrap_or("?"),
                if self.is_accepting(q) { "*" } else { "" }
            )];
            for a in 0..self.symbol_count() {
                row.push(
                    self.successor(q, a)
                        .and_then(|p| self.state_name(p))
                        .unwrap_or("-")
                        .to_string(),
                );
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use bit_set::BitSet;

    use crate::prelude::*;

    fn sample() -> Automaton {
        Automaton::builder()
            .with_states(["A", "B", "C"])
            .with_alphabet(["0", "1"])
            .with_transitions([("A", "0", "B"), ("B", "1", "C"), ("C", "0", "A")])
            .with_accepting(["C"])
            .into_automaton("A")
    }

    #[test]
    fn indexes_in_record_order() {
        let ts = IndexedAutomaton::new(&sample(), &Options::default()).unwrap();
        assert_eq!(ts.size(), 3);
        assert_eq!(ts.symbol_count(), 2);
        assert_eq!(ts.initial(), 0);
        assert_eq!(ts.successor(0, 0), Some(1));
        assert_eq!(ts.successor(0, 1), None);
        assert!(ts.is_accepting(2));
        assert_eq!(ts.state_name(1), Some("B"));
        assert_eq!(ts.symbol_name(1), Some("1"));
        assert_eq!(
            ts.edges().collect::<Vec<_>>(),
            vec![(0, 0, 1), (1, 1, 2), (2, 0, 0)]
        );
    }

    #[test]
    fn validation_errors() {
        let options = Options::default();

        let mut dfa = sample();
        dfa.initial = "X".into();
        assert_eq!(
            dfa.validate(&options),
            Err(MinimizeError::UnknownInitial("X".into()))
        );

        let mut dfa = sample();
        dfa.accepting.push("Y".into());
        assert_eq!(
            dfa.validate(&options),
            Err(MinimizeError::UnknownAccepting("Y".into()))
        );

        let mut dfa = sample();
        dfa.transitions.push(Transition::new("A", "0", "C"));
        assert_eq!(
            dfa.validate(&options),
            Err(MinimizeError::NonDeterministic {
                state: "A".into(),
                symbol: "0".into()
            })
        );

        let mut dfa = sample();
        dfa.transitions.push(Transition::new("A", "0", "B"));
        assert_eq!(dfa.validate(&options), Ok(()));

        let dfa = Automaton {
            states: vec![],
            alphabet: vec![],
            transitions: vec![],
            initial: "A".into(),
            accepting: vec![],
        };
        assert_eq!(dfa.validate(&options), Err(MinimizeError::EmptyStates));
    }

    #[test]
    fn dangling_transitions_follow_policy() {
        let mut dfa = sample();
        dfa.transitions.push(Transition::new("C", "1", "Z"));

        let ts = IndexedAutomaton::new(&dfa, &Options::default()).unwrap();
        assert_eq!(ts.successor(2, 1), None);

        let strict = Options::default().with_dangling(DanglingPolicy::Reject);
        assert_eq!(
            dfa.validate(&strict),
            Err(MinimizeError::DanglingTransition {
                origin: "C".into(),
                symbol: "1".into(),
                target: "Z".into()
            })
        );
    }

    #[test]
    fn unknown_symbols_follow_policy() {
        let mut dfa = sample();
        dfa.transitions.push(Transition::new("A", "2", "A"));

        let ts = IndexedAutomaton::new(&dfa, &Options::default()).unwrap();
        assert_eq!(ts.symbol_count(), 3);
        assert_eq!(ts.symbol_name(2), Some("2"));
        assert_eq!(ts.successor(0, 2), Some(0));

        let strict = Options::default().with_unknown_symbols(SymbolPolicy::Reject);
        assert_eq!(
            dfa.validate(&strict),
            Err(MinimizeError::UnknownSymbol("2".into()))
        );
    }

    #[test]
    fn restrict_renumbers_in_order() {
        let ts = IndexedAutomaton::new(&sample(), &Options::default()).unwrap();
        let keep: BitSet = [0, 2].into_iter().collect();
        let restricted = ts.restrict(&keep);

        assert_eq!(restricted.size(), 2);
        assert_eq!(restricted.state_name(0), Some("A"));
        assert_eq!(restricted.state_name(1), Some("C"));
        assert!(restricted.is_accepting(1));
        assert_eq!(restricted.edges().collect::<Vec<_>>(), vec![(1, 0, 0)]);
    }

    #[test_log::test]
    fn transition_table_marks_initial_and_accepting() {
        let ts = IndexedAutomaton::new(&sample(), &Options::default()).unwrap();
        let table = ts.transition_table();
        tracing::debug!("\n{table}");
        assert!(table.contains("->A"));
        assert!(table.contains("C*"));
    }
}
