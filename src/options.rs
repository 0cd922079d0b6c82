/// What to do with a transition whose source or target is not a member of `Q`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DanglingPolicy {
    /// Silently drop the transition. This happens together with the removal of
    /// unreachable states and is not considered an error.
    #[default]
    Drop,
    /// Reject the automaton with [`crate::MinimizeError::DanglingTransition`].
    Reject,
}

/// What to do with a transition whose symbol is not listed in `Sigma`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SymbolPolicy {
    /// Keep the transition. The symbol takes part in the refinement like any declared
    /// one, but the output `Sigma` stays exactly the input `Sigma`.
    #[default]
    Tolerate,
    /// Reject the automaton with [`crate::MinimizeError::UnknownSymbol`].
    Reject,
}

/// Determines how the refinement treats a symbol on which exactly one state of a pair
/// has a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PartialPolicy {
    /// A one-sided transition is no evidence at all. For total automata this makes no
    /// difference, for partial ones the merged automaton may accept more words.
    #[default]
    NoEvidence,
    /// Undefined transitions lead to an implicit rejecting sink. A one-sided transition
    /// then distinguishes the pair iff its target can still reach an accepting state.
    /// The result is language equivalent to the input for partial automata as well.
    ImplicitSink,
}

/// How the states of the minimized automaton are named.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassNaming {
    /// The sorted member names, joined by the given separator. Singleton classes keep
    /// the name of their only member.
    Concatenate(String),
    /// `q0, q1, ...`, numbered in the order of the first member of each class in `Q`.
    /// The members of each class are still reported in [`crate::Minimized::classes`].
    Indexed,
}

impl Default for ClassNaming {
    fn default() -> Self {
        ClassNaming::Concatenate("_".to_string())
    }
}

/// Settings for [`crate::minimize_with`]. The default values reproduce the classical
/// table-filling behaviour.
///
/// # Example
/// ```
/// use dfa_minimize::prelude::*;
///
/// let options = Options::default()
///     .with_partial(PartialPolicy::ImplicitSink)
///     .with_max_refinement_passes(64);
/// assert_eq!(options.max_refinement_passes, Some(64));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Treatment of transitions that reference states outside of `Q`.
    pub dangling: DanglingPolicy,
    /// Treatment of transitions on symbols outside of `Sigma`.
    pub unknown_symbols: SymbolPolicy,
    /// Treatment of one-sided undefined transitions during refinement.
    pub partial: PartialPolicy,
    /// Naming scheme for the merged states.
    pub naming: ClassNaming,
    /// Upper bound on the number of refinement passes, `None` means unbounded.
    pub max_refinement_passes: Option<usize>,
}

impl Options {
    /// Sets the [`DanglingPolicy`].
    pub fn with_dangling(mut self, policy: DanglingPolicy) -> Self {
        self.dangling = policy;
        self
    }

    /// Sets the [`SymbolPolicy`].
    pub fn with_unknown_symbols(mut self, policy: SymbolPolicy) -> Self {
        self.unknown_symbols = policy;
        self
    }

    /// Sets the [`PartialPolicy`].
    pub fn with_partial(mut self, policy: PartialPolicy) -> Self {
        self.partial = policy;
        self
    }

    /// Sets the [`ClassNaming`].
    pub fn with_naming(mut self, naming: ClassNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Bounds the number of refinement passes.
    pub fn with_max_refinement_passes(mut self, passes: usize) -> Self {
        self.max_refinement_passes = Some(passes);
        self
    }
}
