use itertools::Itertools;

use crate::prelude::*;

use super::Transition;

/// Helper struct for the construction of an [`Automaton`]. It collects states, symbols,
/// transitions and accepting states, and fills in whatever can be inferred.
///
/// States and symbols that appear in a transition but were not declared are appended in
/// order of their first occurrence, the initial state is added to `Q` if it is missing.
/// Declaring nothing but transitions is therefore enough for most uses.
///
/// # Example
/// ```
/// use dfa_minimize::prelude::*;
///
/// let dfa = Automaton::builder()
///     .with_transitions([("0", "a", "1"), ("1", "a", "1")])
///     .with_accepting(["1"])
///     .into_automaton("0");
/// assert_eq!(dfa.states, vec!["0", "1"]);
/// assert_eq!(dfa.alphabet, vec!["a"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
    states: Vec<String>,
    symbols: Vec<String>,
    transitions: Vec<Transition>,
    accepting: Vec<String>,
}

impl AutomatonBuilder {
    /// Declares states, in the order in which they should appear in `Q`.
    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Declares symbols of the alphabet, in the order in which they should appear in `Sigma`.
    pub fn with_alphabet<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Adds transitions, given as anything that converts into a [`Transition`], for example
    /// `(source, symbol, target)` triples.
    pub fn with_transitions<I, T>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Transition>,
    {
        self.transitions.extend(transitions.into_iter().map(Into::into));
        self
    }

    /// Marks the given states as accepting.
    pub fn with_accepting<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepting.extend(states.into_iter().map(Into::into));
        self
    }

    /// Builds the [`Automaton`] with `initial` as `q0`. Undeclared states and symbols
    /// mentioned by transitions are appended, duplicates in declarations are kept as given
    /// so that validation can still report them.
    pub fn into_automaton(self, initial: impl Into<String>) -> Automaton {
        let initial = initial.into();
        let mut states = self.states;
        let inferred_states = std::iter::once(&initial)
            .chain(
                self.transitions
                    .iter()
                    .flat_map(|t| [&t.source, &t.target]),
            )
            .chain(self.accepting.iter())
            .unique()
            .filter(|q| !states.contains(q))
            .cloned()
            .collect_vec();
        states.extend(inferred_states);

        let mut alphabet = self.symbols;
        let inferred_symbols = self
            .transitions
            .iter()
            .map(|t| &t.symbol)
            .unique()
            .filter(|a| !alphabet.contains(a))
            .cloned()
            .collect_vec();
        alphabet.extend(inferred_symbols);

        Automaton {
            states,
            alphabet,
            transitions: self.transitions,
            initial,
            accepting: self.accepting,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn infers_missing_states_and_symbols() {
        let dfa = Automaton::builder()
            .with_states(["B"])
            .with_alphabet(["y"])
            .with_transitions([("A", "x", "B"), ("B", "y", "C"), ("C", "x", "A")])
            .with_accepting(["D"])
            .into_automaton("A");

        assert_eq!(dfa.states, vec!["B", "A", "C", "D"]);
        assert_eq!(dfa.alphabet, vec!["y", "x"]);
        assert_eq!(dfa.initial, "A");
        assert_eq!(dfa.transitions[1], Transition::new("B", "y", "C"));
    }

    #[test]
    fn keeps_declared_duplicates() {
        let dfa = Automaton::builder()
            .with_states(["A", "A"])
            .into_automaton("A");
        assert_eq!(dfa.states, vec!["A", "A"]);
        assert_eq!(
            dfa.validate(&Options::default()),
            Err(MinimizeError::DuplicateState("A".into()))
        );
    }
}
