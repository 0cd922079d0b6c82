use std::fmt::Display;

use itertools::Itertools;

use crate::prelude::*;

mod builder;
pub use builder::AutomatonBuilder;

mod indexed;
pub use indexed::IndexedAutomaton;

mod language;
pub use language::words_up_to;

/// A single transition `(source, symbol, target)` of an [`Automaton`]. In the serialized
/// record it is written as the three element array `[source, symbol, target]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "(String, String, String)",
        into = "(String, String, String)"
    )
)]
pub struct Transition {
    /// The state in which the transition originates.
    pub source: String,
    /// The symbol on which the transition is taken.
    pub symbol: String,
    /// The state that is reached.
    pub target: String,
}

impl Transition {
    /// Creates a new transition from its three parts.
    pub fn new(
        source: impl Into<String>,
        symbol: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            symbol: symbol.into(),
            target: target.into(),
        }
    }
}

impl<P: Into<String>, S: Into<String>, Q: Into<String>> From<(P, S, Q)> for Transition {
    fn from((source, symbol, target): (P, S, Q)) -> Self {
        Self::new(source, symbol, target)
    }
}

impl From<Transition> for (String, String, String) {
    fn from(t: Transition) -> Self {
        (t.source, t.symbol, t.target)
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.symbol, self.target)
    }
}

/// A deterministic finite automaton given as the record `(Q, Sigma, Delta, q0, F)`.
///
/// States and symbols are plain strings. The record is not validated on construction,
/// this happens once when it is handed to [`crate::minimize`] (or explicitly through
/// [`Automaton::validate`]). A missing transition for some state and symbol means that
/// the transition is undefined and a run reaching it rejects.
///
/// # Example
/// ```
/// use dfa_minimize::prelude::*;
///
/// let dfa = Automaton::builder()
///     .with_transitions([("A", "0", "B"), ("B", "0", "A")])
///     .with_accepting(["B"])
///     .into_automaton("A");
/// assert!(dfa.accepts(["0"]));
/// assert!(!dfa.accepts(["0", "0"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Automaton {
    /// The states `Q`, order is kept for deterministic naming.
    #[cfg_attr(feature = "serde", serde(rename = "Q"))]
    pub states: Vec<String>,
    /// The input alphabet `Sigma`.
    #[cfg_attr(feature = "serde", serde(rename = "Sigma"))]
    pub alphabet: Vec<String>,
    /// The transition relation `Delta`.
    #[cfg_attr(feature = "serde", serde(rename = "Delta"))]
    pub transitions: Vec<Transition>,
    /// The initial state `q0`.
    #[cfg_attr(feature = "serde", serde(rename = "q0"))]
    pub initial: String,
    /// The accepting states `F`.
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    pub accepting: Vec<String>,
}

impl Automaton {
    /// Returns an empty [`AutomatonBuilder`].
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::default()
    }

    /// Number of states in `Q`.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if `state` is a member of `F`.
    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepting.iter().any(|f| f == state)
    }

    /// Returns the target of the transition leaving `state` on `symbol`, if there is one.
    pub fn successor(&self, state: &str, symbol: &str) -> Option<&str> {
        self.transitions
            .iter()
            .find(|t| t.source == state && t.symbol == symbol)
            .map(|t| t.target.as_str())
    }

    /// Returns the state that is reached by reading `word` from `q0`, or `None` if the run
    /// hits an undefined transition.
    pub fn reached_state<I, S>(&self, word: I) -> Option<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        word.into_iter()
            .try_fold(self.initial.as_str(), |q, sym| self.successor(q, sym.as_ref()))
    }

    /// Returns `true` if the run on `word` exists and ends in an accepting state.
    pub fn accepts<I, S>(&self, word: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reached_state(word)
            .map(|q| self.is_accepting(q))
            .unwrap_or(false)
    }

    /// Checks the structural invariants of `self` under the given [`Options`], see
    /// [`IndexedAutomaton::new`] for the list of checks.
    pub fn validate(&self, options: &Options) -> Result<(), MinimizeError> {
        IndexedAutomaton::new(self, options).map(|_| ())
    }

    /// Computes the minimal automaton for the language of `self` with default [`Options`].
    pub fn minimize(&self) -> Result<Automaton, MinimizeError> {
        crate::minimize(self)
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Q: {{{}}}", self.states.iter().join(", "))?;
        writeln!(f, "Sigma: {{{}}}", self.alphabet.iter().join(", "))?;
        writeln!(f, "q0: {}", self.initial)?;
        writeln!(f, "F: {{{}}}", self.accepting.iter().join(", "))?;
        write!(f, "Delta: [{}]", self.transitions.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn runs_and_acceptance() {
        let dfa = Automaton::builder()
            .with_alphabet(["a", "b"])
            .with_transitions([("p", "a", "q"), ("q", "b", "p")])
            .with_accepting(["q"])
            .into_automaton("p");

        assert_eq!(dfa.reached_state(["a", "b"]), Some("p"));
        assert_eq!(dfa.reached_state(["b"]), None);
        assert!(dfa.accepts(["a"]));
        assert!(dfa.accepts(["a", "b", "a"]));
        assert!(!dfa.accepts(Vec::<String>::new()));
        assert!(!dfa.accepts(["a", "a"]));
    }

    #[test]
    fn display_lists_all_fields() {
        let dfa = Automaton::builder()
            .with_transitions([("p", "a", "p")])
            .into_automaton("p");
        assert_eq!(
            dfa.to_string(),
            "Q: {p}\nSigma: {a}\nq0: p\nF: {}\nDelta: [(p, a, p)]"
        );
    }
}
