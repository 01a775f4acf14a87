//! Library for working with finite automata over character alphabets.
//!
//! An [`Automaton`] consists of an alphabet (a set of printable characters), a set of states
//! identified by non-negative integers, each of which may be initial and/or final, and a
//! transition relation that maps a state and a [`Symbol`] to a set of successor states. A symbol
//! is either a character of the alphabet or [`Symbol::Epsilon`], which labels transitions that
//! consume no input. Automata are built incrementally through the methods of [`Automaton`], all
//! of which report failure through their return value and never leave a partially applied
//! modification behind.
//!
//! On top of this model the crate implements the classical constructions. None of them modifies
//! its input, each returns a freshly built [`Automaton`] so that they can be chained freely:
//! - [`Automaton::create_mirror`] reverses every transition and swaps initial and final states,
//! - [`Automaton::create_deterministic`] performs the subset construction,
//! - [`Automaton::create_complete`] adds (or reuses) a sink state,
//! - [`Automaton::create_complement`] accepts the complement language,
//! - [`Automaton::create_product`] accepts the intersection of two languages,
//! - [`Automaton::create_minimal_moore`] and [`Automaton::create_minimal_brzozowski`] compute
//!   the minimal deterministic automaton through partition refinement and double reversal
//!   respectively.
//!
//! Language level queries such as [`Automaton::is_language_empty`],
//! [`Automaton::has_empty_intersection_with`] and [`Automaton::is_included_in`] are built from
//! these. Finally, automata can be written out as a human readable listing
//! ([`Automaton::pretty_print`]) or in the DOT format ([`Automaton::dot_representation`]).
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use fa::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        automaton::{Automaton, AutomatonBuilder, StateFlags, StateId},
        math,
        symbol::{Symbol, EPSILON_GLYPH},
        Show,
    };
    #[cfg(feature = "random")]
    pub use super::random;
}

/// This module contains some definitions of mathematical objects which are used throughout the crate and
/// do not really fit to the top level.
pub mod math;

/// Defines the labels of transitions.
pub mod symbol;
pub use symbol::Symbol;

/// Defines the automaton model together with its local queries and the reachability analysis.
pub mod automaton;
pub use automaton::Automaton;

/// Language preserving and language changing constructions on automata.
pub mod operations;

/// Contains the implementations of the two minimization algorithms.
pub mod minimization;

/// Export of automata in the DOT format of graphviz.
pub mod dot;

/// Implements the generation of random automata and words.
#[cfg(feature = "random")]
pub mod random;

use itertools::Itertools;

/// Helper trait which can be used to display states, symbols and collections thereof.
pub trait Show {
    /// Returns a human readable representation of `self`. For a state that is simply its
    /// number and for a symbol it is the character, or the epsilon glyph.
    fn show(&self) -> String;
    /// Show a collection of the thing, for a collection of states this should be {0, 1, 2, ...}.
    /// By default the elements are separated by commas and enclosed in braces.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

impl Show for usize {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show> Show for std::collections::BTreeSet<S> {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl<S: Show> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}
