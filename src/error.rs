use thiserror::Error;

/// Everything that can go wrong when minimizing an [`crate::Automaton`]. All of these are
/// detected before or while building the result, a partially minimized automaton is
/// never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinimizeError {
    /// `Q` is empty, so there is no state that could serve as `q0`.
    #[error("malformed automaton: Q is empty")]
    EmptyStates,
    /// `Q` lists the same state twice.
    #[error("malformed automaton: state `{0}` occurs more than once in Q")]
    DuplicateState(String),
    /// `q0` is not a member of `Q`.
    #[error("malformed automaton: initial state q0 = `{0}` is not a member of Q")]
    UnknownInitial(String),
    /// Some member of `F` is not a member of `Q`.
    #[error("malformed automaton: accepting state `{0}` in F is not a member of Q")]
    UnknownAccepting(String),
    /// Two transitions leave `state` on `symbol` but go to different targets.
    #[error("malformed automaton: state `{state}` has more than one transition on `{symbol}`")]
    NonDeterministic {
        /// The source state of the conflicting transitions.
        state: String,
        /// The symbol on which the transitions conflict.
        symbol: String,
    },
    /// A transition mentions a source or target outside of `Q`. Only raised when
    /// [`crate::DanglingPolicy::Reject`] is in effect.
    #[error("dangling transition ({origin}, {symbol}, {target}) references a state outside of Q")]
    DanglingTransition {
        /// Source of the offending transition.
        origin: String,
        /// Symbol of the offending transition.
        symbol: String,
        /// Target of the offending transition.
        target: String,
    },
    /// A transition uses a symbol that `Sigma` does not declare. Only raised when
    /// [`crate::SymbolPolicy::Reject`] is in effect.
    #[error("transition uses symbol `{0}` which is not a member of Sigma")]
    UnknownSymbol(String),
    /// The refinement loop did not reach its fixed point within the configured budget.
    #[error("equivalence table did not converge within {0} refinement passes")]
    RefinementBudgetExceeded(usize),
    /// Two different classes were given the same name.
    #[error("equivalence class name `{0}` is not unique, pick a different separator")]
    ClassNameCollision(String),
    /// Merging the unmarked pairs produced a class with two different successors on
    /// one symbol. This can only happen when partial transitions are not treated as
    /// distinguishing, see [`crate::PartialPolicy`].
    #[error("class `{class}` has conflicting transitions on `{symbol}`, the indistinguishability relation is not transitive for this partial automaton")]
    InconsistentPartition {
        /// Name of the class with conflicting successors.
        class: String,
        /// The symbol on which the successors differ.
        symbol: String,
    },
}
