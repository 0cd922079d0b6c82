use bit_set::BitSet;
use tracing::{debug, trace};

use crate::prelude::*;

use super::EquivalenceTable;

/// Computes the states from which some accepting state can be reached. These are exactly
/// the states that an implicit rejecting sink is distinguishable from.
pub fn live_states(ts: &IndexedAutomaton) -> BitSet {
    let mut live: BitSet = ts.state_indices().filter(|&q| ts.is_accepting(q)).collect();
    loop {
        let mut changed = false;
        for q in ts.state_indices() {
            if live.contains(q) {
                continue;
            }
            if (0..ts.symbol_count()).any(|a| ts.successor(q, a).is_some_and(|p| live.contains(p)))
            {
                live.insert(q);
                changed = true;
            }
        }
        if !changed {
            return live;
        }
    }
}

impl EquivalenceTable {
    /// Propagates distinguishability until a fixed point is reached and returns the number of
    /// passes that were made, including the final one in which nothing changed.
    ///
    /// In every pass each unmarked pair `(p, q)` is checked symbol by symbol: if both
    /// successors are defined and already form a marked pair, `(p, q)` is marked and the
    /// remaining symbols are skipped. A symbol on which only one of the two states has a
    /// transition is handled according to [`PartialPolicy`]. Marks made during a pass are
    /// visible to the pairs checked later in the same pass.
    pub fn refine(
        &mut self,
        ts: &IndexedAutomaton,
        options: &Options,
    ) -> Result<usize, MinimizeError> {
        debug_assert_eq!(self.size(), ts.size());
        let live = match options.partial {
            PartialPolicy::NoEvidence => None,
            PartialPolicy::ImplicitSink => Some(live_states(ts)),
        };

        let mut passes = 0;
        loop {
            if let Some(budget) = options.max_refinement_passes {
                if passes >= budget {
                    return Err(MinimizeError::RefinementBudgetExceeded(passes));
                }
            }
            passes += 1;

            let mut changed = false;
            for q in 1..ts.size() {
                for p in 0..q {
                    if self.is_distinguishable(p, q) {
                        continue;
                    }
                    let witness = (0..ts.symbol_count()).find(|&a| {
                        match (ts.successor(p, a), ts.successor(q, a)) {
                            (Some(p2), Some(q2)) => self.is_distinguishable(p2, q2),
                            (Some(r), None) | (None, Some(r)) => {
                                live.as_ref().is_some_and(|live| live.contains(r))
                            }
                            (None, None) => false,
                        }
                    });
                    if let Some(a) = witness {
                        trace!(
                            "marking ({}, {}) on {}",
                            ts.state_name(p).unwrap_or("?"),
                            ts.state_name(q).unwrap_or("?"),
                            ts.symbol_name(a).unwrap_or("?")
                        );
                        self.mark(p, q);
                        changed = true;
                    }
                }
            }

            if !changed {
                debug!(
                    "equivalence table converged after {passes} passes with {} marked pairs",
                    self.marked_count()
                );
                return Ok(passes);
            }
        }
    }
}
