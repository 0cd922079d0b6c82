use tracing::debug;

use crate::prelude::*;

mod reachability;
pub use reachability::{reachable_states, remove_unreachable};

mod table;
pub use table::EquivalenceTable;

mod refine;
pub use refine::live_states;

mod merge;
pub use merge::{equivalence_partition, merge_equivalent_states, Merged};

/// A state of the minimized automaton together with the original states it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EquivalenceClass {
    /// The name of the class in the minimized automaton.
    pub name: String,
    /// The names of the merged states, sorted.
    pub members: Vec<String>,
}

/// Everything [`minimize_with`] produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimized {
    /// The minimal automaton.
    pub automaton: Automaton,
    /// One entry per state of `automaton`, in the same order.
    pub classes: Vec<EquivalenceClass>,
    /// Number of passes the refinement needed to reach its fixed point.
    pub refinement_passes: usize,
    /// Number of states that were removed because they are unreachable.
    pub pruned_states: usize,
}

/// Minimizes `dfa` with the default [`Options`].
///
/// # Errors
/// Returns a [`MinimizeError`] if `dfa` is malformed. With the default
/// [`PartialPolicy::NoEvidence`], an automaton with a partial transition function may also
/// yield [`MinimizeError::InconsistentPartition`] when its equivalent states cannot be merged
/// deterministically; [`PartialPolicy::ImplicitSink`] never does.
///
/// # Example
/// ```
/// use dfa_minimize::prelude::*;
///
/// // two states that both accept everything
/// let dfa = Automaton::builder()
///     .with_transitions([("p", "a", "q"), ("q", "a", "p")])
///     .with_accepting(["p", "q"])
///     .into_automaton("p");
/// let min = minimize(&dfa).unwrap();
/// assert_eq!(min.states, vec!["p_q"]);
/// assert_eq!(min.transitions, vec![Transition::new("p_q", "a", "p_q")]);
/// ```
pub fn minimize(dfa: &Automaton) -> Result<Automaton, MinimizeError> {
    minimize_with(dfa, &Options::default()).map(|m| m.automaton)
}

/// Minimizes `dfa` with the given [`Options`] and reports how the result came about.
///
/// The input is validated once, see [`IndexedAutomaton::new`]. Afterwards unreachable
/// states are removed, the [`EquivalenceTable`] is built and refined to its fixed point,
/// and the classes of unmarked pairs are merged. The function is pure: the same input
/// and options always give the same output, field for field.
pub fn minimize_with(dfa: &Automaton, options: &Options) -> Result<Minimized, MinimizeError> {
    let ts = IndexedAutomaton::new(dfa, options)?;
    let reachable = remove_unreachable(&ts);
    let pruned_states = ts.size() - reachable.size();
    debug!(
        "minimizing automaton with {} states, {} of them reachable",
        ts.size(),
        reachable.size()
    );
    if tracing::enabled!(tracing::Level::TRACE) {
        tracing::trace!("reachable part\n{}", reachable.transition_table());
    }

    let mut table = EquivalenceTable::new(&reachable);
    let refinement_passes = table.refine(&reachable, options)?;
    if tracing::enabled!(tracing::Level::TRACE) {
        tracing::trace!("refined equivalence table\n{}", table.render(&reachable));
    }

    let Merged {
        automaton,
        classes,
    } = merge_equivalent_states(&reachable, &table, &dfa.alphabet, &options.naming)?;
    debug!(
        "minimal automaton has {} states after {refinement_passes} refinement passes",
        automaton.size()
    );

    Ok(Minimized {
        automaton,
        classes,
        refinement_passes,
        pruned_states,
    })
}

/// Returns `true` if `dfa` is already minimal: all of its states are reachable and no two of
/// them are equivalent under the given [`Options`].
pub fn is_minimal(dfa: &Automaton, options: &Options) -> Result<bool, MinimizeError> {
    let ts = IndexedAutomaton::new(dfa, options)?;
    if reachable_states(&ts).len() != ts.size() {
        return Ok(false);
    }
    let mut table = EquivalenceTable::new(&ts);
    table.refine(&ts, options)?;
    Ok(table.is_fully_distinguished())
}
