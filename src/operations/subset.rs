use std::collections::{BTreeSet, VecDeque};

use tracing::{debug, trace};

use crate::{
    math::{Bijection, OrderedSet},
    prelude::*,
};

/// A set of states of the automaton that is being determinized.
type Subset = OrderedSet<StateId>;

impl Automaton {
    /// Returns the epsilon closure of `states`, that is every state reachable from one of them
    /// by only taking epsilon transitions.
    pub(crate) fn epsilon_closure<I: IntoIterator<Item = StateId>>(&self, states: I) -> Subset {
        let mut closure = Subset::new();
        let mut stack: Vec<StateId> = states.into_iter().collect();
        while let Some(q) = stack.pop() {
            if !closure.insert(q) {
                continue;
            }
            if let Some(targets) = self.transitions.get(&(q, Symbol::Epsilon)) {
                stack.extend(targets.iter().filter(|p| !closure.contains(*p)));
            }
        }
        closure
    }

    /// Computes the states reached from any state in `subset` by reading `symbol`, followed by
    /// the epsilon closure of the result.
    fn subset_successor(&self, subset: &Subset, symbol: char) -> Subset {
        let step = subset
            .iter()
            .filter_map(|&q| self.transitions.get(&(q, Symbol::Char(symbol))))
            .flatten()
            .copied();
        self.epsilon_closure(step)
    }

    /// Creates a deterministic automaton accepting the same language as `automaton` through
    /// the subset construction.
    ///
    /// The states of the result are the sets of states of `automaton` that are reachable from the
    /// set of initial states, numbered from `0` in breadth-first order. The initial set is state
    /// `0`. A set is final if it contains a final state. Epsilon transitions are eliminated by
    /// closing every set under them. Because the empty set is a state like any other, the result
    /// is also complete, and if `automaton` has no initial state it consists of a single rejecting
    /// state looping on every symbol.
    ///
    /// # Example
    /// ```
    /// use fa::prelude::*;
    ///
    /// let nfa = Automaton::builder()
    ///     .with_symbols(['a', 'b'])
    ///     .with_states([0, 1])
    ///     .with_initial([0])
    ///     .with_final([1])
    ///     .with_transitions([(0, 'a', 0), (0, 'b', 0), (0, 'a', 1)])
    ///     .build();
    /// let dfa = Automaton::create_deterministic(&nfa);
    /// assert!(dfa.is_deterministic());
    /// assert!(dfa.accepts("ba"));
    /// assert!(!dfa.accepts("ab"));
    /// ```
    pub fn create_deterministic(automaton: &Automaton) -> Automaton {
        let mut dfa = Automaton::new();
        for symbol in automaton.symbols() {
            dfa.add_symbol(symbol);
        }

        let mut ids: Bijection<Subset, StateId> = Bijection::new();
        let mut queue = VecDeque::new();

        let initial = automaton.epsilon_closure(automaton.initial_states());
        dfa.add_subset_state(automaton, &initial, 0);
        dfa.set_state_initial(0);
        ids.insert(initial, 0);
        queue.push_back(0);

        while let Some(id) = queue.pop_front() {
            let Some(subset) = ids.get_by_right(&id).cloned() else {
                continue;
            };
            for symbol in automaton.symbols() {
                let successor = automaton.subset_successor(&subset, symbol);
                let target = match ids.get_by_left(&successor) {
                    Some(&target) => target,
                    None => {
                        let target = ids.len();
                        trace!("discovered subset {} as {target}", successor.show());
                        dfa.add_subset_state(automaton, &successor, target);
                        ids.insert(successor, target);
                        queue.push_back(target);
                        target
                    }
                };
                dfa.add_transition(id, symbol, target);
            }
        }

        debug!(
            "subset construction turned {} into {}",
            automaton.summary(),
            dfa.summary()
        );
        dfa
    }

    /// Adds the state `id` representing `subset` of `original`'s states.
    fn add_subset_state(&mut self, original: &Automaton, subset: &BTreeSet<StateId>, id: StateId) {
        self.add_state(id);
        if subset.iter().any(|&q| original.is_state_final(q)) {
            self.set_state_final(id);
        }
    }
}
