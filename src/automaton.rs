use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::{
    math::{OrderedMap, OrderedSet},
    symbol::{is_printable, Symbol, EPSILON_GLYPH},
    Show,
};

mod builder;
pub use builder::AutomatonBuilder;

mod fmt;

mod reachability;

/// States are identified by non-negative integers.
pub type StateId = usize;

/// The two independent flags that every state carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StateFlags {
    /// Whether runs may start in the state.
    pub initial: bool,
    /// Whether runs ending in the state are accepting.
    pub accepting: bool,
}

/// A (possibly nondeterministic) finite automaton over an alphabet of characters.
///
/// The automaton owns its alphabet, its states and its transition relation. Every modifying
/// method maintains the following properties:
/// - both endpoints of a transition are states of the automaton,
/// - a transition is labeled either by [`Symbol::Epsilon`] or by a symbol of the alphabet,
/// - removing a state or a symbol removes all transitions that mention it,
/// - there are no duplicate transitions.
///
/// Modifications that would violate one of them are rejected by returning `false` and leave the
/// automaton untouched.
///
/// # Example
/// ```
/// use fa::prelude::*;
///
/// let mut fa = Automaton::new();
/// assert!(fa.add_symbol('a'));
/// assert!(fa.add_state(0));
/// assert!(fa.add_state(1));
/// fa.set_state_initial(0);
/// fa.set_state_final(1);
/// assert!(fa.add_transition(0, 'a', 1));
/// assert!(!fa.add_transition(0, 'b', 1), "b is not part of the alphabet");
///
/// assert!(fa.accepts("a"));
/// assert!(!fa.accepts("aa"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Automaton {
    pub(crate) alphabet: OrderedSet<char>,
    pub(crate) states: OrderedMap<StateId, StateFlags>,
    pub(crate) transitions: OrderedMap<(StateId, Symbol), OrderedSet<StateId>>,
}

impl Automaton {
    /// Builds an empty automaton, it has no symbols, no states and no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder which allows constructing an automaton in one expression.
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::default()
    }

    /// An automaton is valid if it has at least one symbol and at least one state.
    pub fn is_valid(&self) -> bool {
        !self.alphabet.is_empty() && !self.states.is_empty()
    }

    /// Adds `symbol` to the alphabet. Returns `true` if the symbol was effectively added, which
    /// is not the case if it is already present, or if it is not printable.
    ///
    /// [`Symbol::Epsilon`] is never a member of the alphabet and is rejected, and so is
    /// [`EPSILON_GLYPH`], which would print like an epsilon transition.
    pub fn add_symbol<S: Into<Symbol>>(&mut self, symbol: S) -> bool {
        let Symbol::Char(c) = symbol.into() else {
            warn!("epsilon cannot be added to the alphabet");
            return false;
        };
        if !is_printable(c) {
            warn!("rejecting non-printable symbol {:?}", c);
            return false;
        }
        if c == EPSILON_GLYPH {
            warn!("{c} is reserved for printing epsilon transitions");
            return false;
        }
        self.alphabet.insert(c)
    }

    /// Removes `symbol` from the alphabet together with all transitions labeled by it.
    /// Returns `false` if the symbol is not present.
    pub fn remove_symbol(&mut self, symbol: char) -> bool {
        if !self.alphabet.remove(&symbol) {
            return false;
        }
        self.transitions
            .retain(|(_, label), _| *label != Symbol::Char(symbol));
        true
    }

    /// Tells whether `symbol` is part of the alphabet.
    pub fn has_symbol(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// Returns the number of symbols in the alphabet.
    pub fn count_symbols(&self) -> usize {
        self.alphabet.len()
    }

    /// Iterates over the alphabet in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
    }

    /// Adds a state with the given id. The new state is neither initial nor final.
    /// Returns `false` if a state with this id already exists.
    pub fn add_state(&mut self, state: StateId) -> bool {
        if self.states.contains_key(&state) {
            debug!("state {state} already exists");
            return false;
        }
        self.states.insert(state, StateFlags::default());
        true
    }

    /// Removes a state and every transition that starts or ends in it. Returns `false`
    /// if the state does not exist.
    pub fn remove_state(&mut self, state: StateId) -> bool {
        if self.states.remove(&state).is_none() {
            return false;
        }
        self.transitions.retain(|(source, _), targets| {
            if *source == state {
                return false;
            }
            targets.remove(&state);
            !targets.is_empty()
        });
        true
    }

    /// Tells whether a state with the given id exists.
    pub fn has_state(&self, state: StateId) -> bool {
        self.states.contains_key(&state)
    }

    /// Returns the number of states.
    pub fn count_states(&self) -> usize {
        self.states.len()
    }

    /// Iterates over the ids of all states in ascending order.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.keys().copied()
    }

    /// Returns the flags of `state`, or `None` if it does not exist.
    pub fn state_flags(&self, state: StateId) -> Option<StateFlags> {
        self.states.get(&state).copied()
    }

    /// Marks `state` as initial. Does nothing if the state does not exist.
    pub fn set_state_initial(&mut self, state: StateId) {
        if let Some(flags) = self.states.get_mut(&state) {
            flags.initial = true;
        }
    }

    /// Marks `state` as final. Does nothing if the state does not exist.
    pub fn set_state_final(&mut self, state: StateId) {
        if let Some(flags) = self.states.get_mut(&state) {
            flags.accepting = true;
        }
    }

    /// Tells whether `state` is initial, `false` if it does not exist.
    pub fn is_state_initial(&self, state: StateId) -> bool {
        self.states.get(&state).is_some_and(|flags| flags.initial)
    }

    /// Tells whether `state` is final, `false` if it does not exist.
    pub fn is_state_final(&self, state: StateId) -> bool {
        self.states.get(&state).is_some_and(|flags| flags.accepting)
    }

    /// Returns the set of initial states.
    pub fn initial_states(&self) -> BTreeSet<StateId> {
        self.states
            .iter()
            .filter_map(|(&q, flags)| flags.initial.then_some(q))
            .collect()
    }

    /// Returns the set of final states.
    pub fn final_states(&self) -> BTreeSet<StateId> {
        self.states
            .iter()
            .filter_map(|(&q, flags)| flags.accepting.then_some(q))
            .collect()
    }

    /// Adds the transition `(from, symbol, to)`. This fails and returns `false` if one of the
    /// states does not exist, if the transition is already present or if the symbol is neither
    /// epsilon nor part of the alphabet.
    pub fn add_transition<S: Into<Symbol>>(&mut self, from: StateId, symbol: S, to: StateId) -> bool {
        let symbol = symbol.into();
        if !self.has_state(from) || !self.has_state(to) {
            debug!(
                "cannot add transition ({from}, {}, {to}), a state is missing",
                symbol.show()
            );
            return false;
        }
        if let Symbol::Char(c) = symbol {
            if !self.has_symbol(c) {
                debug!("cannot add transition on {c}, it is not part of the alphabet");
                return false;
            }
        }
        self.transitions
            .entry((from, symbol))
            .or_default()
            .insert(to)
    }

    /// Removes the transition `(from, symbol, to)`, returns `false` if it does not exist.
    pub fn remove_transition<S: Into<Symbol>>(
        &mut self,
        from: StateId,
        symbol: S,
        to: StateId,
    ) -> bool {
        let key = (from, symbol.into());
        let Some(targets) = self.transitions.get_mut(&key) else {
            return false;
        };
        if !targets.remove(&to) {
            return false;
        }
        if targets.is_empty() {
            self.transitions.remove(&key);
        }
        true
    }

    /// Tells whether the transition `(from, symbol, to)` exists.
    pub fn has_transition<S: Into<Symbol>>(&self, from: StateId, symbol: S, to: StateId) -> bool {
        self.transitions
            .get(&(from, symbol.into()))
            .is_some_and(|targets| targets.contains(&to))
    }

    /// Returns the number of transitions, i.e. of `(from, symbol, to)` triples.
    pub fn count_transitions(&self) -> usize {
        self.transitions.values().map(BTreeSet::len).sum()
    }

    /// Iterates over all transitions as `(from, symbol, to)` triples, ordered by source, then by
    /// symbol and then by target.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, StateId)> + '_ {
        self.transitions.iter().flat_map(|(&(from, symbol), targets)| {
            targets.iter().map(move |&to| (from, symbol, to))
        })
    }

    /// Returns the successors of `state` on `symbol`, the empty set if there are none.
    pub fn successors<S: Into<Symbol>>(&self, state: StateId, symbol: S) -> BTreeSet<StateId> {
        self.transitions
            .get(&(state, symbol.into()))
            .cloned()
            .unwrap_or_default()
    }

    /// Iterates over the outgoing transitions of `state` as `(symbol, targets)` pairs.
    pub(crate) fn edges_from(
        &self,
        state: StateId,
    ) -> impl Iterator<Item = (Symbol, &BTreeSet<StateId>)> + '_ {
        self.transitions
            .range((state, Symbol::Epsilon)..)
            .take_while(move |((source, _), _)| *source == state)
            .map(|((_, symbol), targets)| (*symbol, targets))
    }

    /// Tells whether some transition is labeled with epsilon.
    pub fn has_epsilon_transition(&self) -> bool {
        self.transitions
            .keys()
            .any(|(_, symbol)| symbol.is_epsilon())
    }

    /// An automaton is deterministic if it has exactly one initial state and no state has two
    /// transitions on the same symbol.
    ///
    /// Epsilon transitions are not taken into account here; the constructions that produce
    /// deterministic automata never introduce them.
    pub fn is_deterministic(&self) -> bool {
        if self.states.values().filter(|flags| flags.initial).count() != 1 {
            return false;
        }
        match self.transitions.iter().find(|(_, targets)| targets.len() > 1) {
            Some(((q, symbol), targets)) => {
                trace!(
                    "state {q} has several successors on {}: {}",
                    symbol.show(),
                    targets.show()
                );
                false
            }
            None => true,
        }
    }

    /// An automaton is complete if every state has at least one transition for every symbol of
    /// the alphabet.
    pub fn is_complete(&self) -> bool {
        self.states.keys().all(|&q| {
            self.alphabet
                .iter()
                .all(|&c| self.transitions.contains_key(&(q, Symbol::Char(c))))
        })
    }

    /// Computes the set of states that is reached from the initial states by reading `word`.
    /// Epsilon transitions are not followed, so reading the empty word yields exactly the set of
    /// initial states. Characters that are not part of the alphabet lead to the empty set.
    pub fn read_string(&self, word: &str) -> BTreeSet<StateId> {
        word.chars().fold(self.initial_states(), |current, c| {
            current
                .iter()
                .filter_map(|&q| self.transitions.get(&(q, Symbol::Char(c))))
                .flatten()
                .copied()
                .collect()
        })
    }

    /// Tells whether `word` is accepted, that is whether reading it reaches a final state.
    pub fn accepts(&self, word: &str) -> bool {
        self.read_string(word)
            .into_iter()
            .any(|q| self.is_state_final(q))
    }

    /// Returns the smallest id that is not used by a state.
    pub(crate) fn fresh_state_id(&self) -> StateId {
        // ids are sorted and distinct, so the first id that differs from its position is a gap
        self.states
            .keys()
            .enumerate()
            .find_map(|(position, &q)| (position != q).then_some(position))
            .unwrap_or(self.states.len())
    }

    /// Builds an automaton from its parts without any further checks.
    pub(crate) fn from_parts(
        alphabet: OrderedSet<char>,
        states: OrderedMap<StateId, StateFlags>,
        transitions: OrderedMap<(StateId, Symbol), OrderedSet<StateId>>,
    ) -> Self {
        Self {
            alphabet,
            states,
            transitions,
        }
    }

    /// Returns a short summary of the size of `self`, used in log messages.
    pub(crate) fn summary(&self) -> String {
        format!(
            "{} states, {} transitions over [{}]",
            self.count_states(),
            self.count_transitions(),
            self.symbols().join("")
        )
    }
}
