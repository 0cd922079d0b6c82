//! Library for minimizing deterministic finite automata in Rust.
//!
//! An [`Automaton`] is the record `(Q, Sigma, Delta, q0, F)` with states and symbols given
//! as strings. [`minimize`] turns it into the unique automaton with the fewest states that
//! accepts the same language. This happens in a fixed sequence of pure transforms, none of
//! which mutates its input:
//! - the record is validated once and turned into an [`IndexedAutomaton`], which numbers
//!   states and symbols and is what all later stages work on,
//! - states that cannot be reached from the initial state are removed,
//! - an [`EquivalenceTable`] is initialized with the pairs that differ in acceptance and
//!   refined until no more pairs can be marked (the table-filling algorithm),
//! - states that remain pairwise unmarked are grouped with a union-find structure, and the
//!   resulting classes become the states of the minimal automaton.
//!
//! Policies that are left open by the classical algorithm, such as the handling of partial
//! transition functions or of transitions that point outside of `Q`, are configured
//! through [`Options`] and [`minimize_with`].
//!
//! The crate performs no I/O and never installs a `tracing` subscriber. With the `serde`
//! feature the record can be (de)serialized with the field names `Q`, `Sigma`, `Delta`,
//! `q0` and `F`, and the `random` feature provides generators for random automata.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa_minimize::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        automaton::{words_up_to, Automaton, AutomatonBuilder, IndexedAutomaton, Transition},
        error::MinimizeError,
        minimization::{
            is_minimal, minimize, minimize_with, EquivalenceClass, EquivalenceTable, Minimized,
        },
        options::{ClassNaming, DanglingPolicy, Options, PartialPolicy, SymbolPolicy},
    };
}

/// This module contains the set, map and partition types as well as the union-find forest
/// that are used throughout the crate.
pub mod math;

/// Defines the automaton record, its builder and the indexed view used by the algorithms.
pub mod automaton;
pub use automaton::{Automaton, IndexedAutomaton, Transition};

/// The error type of the crate.
mod error;
pub use error::MinimizeError;

/// Configuration of the minimization.
mod options;
pub use options::{ClassNaming, DanglingPolicy, Options, PartialPolicy, SymbolPolicy};

/// Contains the stages of the minimization and the pipeline composing them.
pub mod minimization;
pub use minimization::{is_minimal, minimize, minimize_with, EquivalenceTable, Minimized};

/// Implements the generation of random automata and words. This is feature gated behind
/// the `random` feature.
#[cfg(feature = "random")]
pub mod random;
