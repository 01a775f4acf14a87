use tracing::warn;

use crate::prelude::*;

/// Helper struct for the construction of automata in a single expression. It collects symbols,
/// states, flags and transitions and inserts them through the usual methods of [`Automaton`]
/// once [`AutomatonBuilder::build`] is called. Entries that would be rejected by those methods
/// (for example a transition on a symbol that was never added) are skipped with a warning.
///
/// # Example
///
/// We want to create an automaton with two states 0 and 1 over the alphabet `['a', 'b']`, in
/// which 0 is initial, 1 is final and reading `b` moves from 0 to 1:
/// ```
/// use fa::prelude::*;
///
/// let fa = Automaton::builder()
///     .with_symbols(['a', 'b'])
///     .with_states([0, 1])
///     .with_initial([0])
///     .with_final([1])
///     .with_transitions([(0, 'a', 0), (0, 'b', 1), (1, 'a', 1), (1, 'b', 1)])
///     .build();
/// assert!(fa.is_deterministic());
/// assert!(fa.accepts("aab"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
    symbols: Vec<char>,
    states: Vec<StateId>,
    initial: Vec<StateId>,
    accepting: Vec<StateId>,
    transitions: Vec<(StateId, Symbol, StateId)>,
}

impl AutomatonBuilder {
    /// Adds the given symbols to the alphabet.
    pub fn with_symbols<I: IntoIterator<Item = char>>(mut self, symbols: I) -> Self {
        self.symbols.extend(symbols);
        self
    }

    /// Adds states with the given ids.
    pub fn with_states<I: IntoIterator<Item = StateId>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Marks the given states as initial.
    pub fn with_initial<I: IntoIterator<Item = StateId>>(mut self, states: I) -> Self {
        self.initial.extend(states);
        self
    }

    /// Marks the given states as final.
    pub fn with_final<I: IntoIterator<Item = StateId>>(mut self, states: I) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Adds transitions given as `(from, symbol, to)` triples. The symbol can be anything that
    /// converts into a [`Symbol`], so characters may be used directly.
    pub fn with_transitions<S, I>(mut self, transitions: I) -> Self
    where
        S: Into<Symbol>,
        I: IntoIterator<Item = (StateId, S, StateId)>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(from, symbol, to)| (from, symbol.into(), to)),
        );
        self
    }

    /// Consumes `self` and builds the automaton.
    pub fn build(self) -> Automaton {
        let mut fa = Automaton::new();
        for symbol in self.symbols {
            fa.add_symbol(symbol);
        }
        for state in self.states {
            fa.add_state(state);
        }
        for state in self.initial {
            fa.set_state_initial(state);
        }
        for state in self.accepting {
            fa.set_state_final(state);
        }
        for (from, symbol, to) in self.transitions {
            if !fa.add_transition(from, symbol, to) && !fa.has_transition(from, symbol, to) {
                warn!(
                    "skipping transition ({from}, {}, {to}) which cannot be added",
                    symbol.show()
                );
            }
        }
        fa
    }
}
