use std::collections::{BTreeSet, VecDeque};

use bit_set::BitSet;
use tracing::{debug, trace};

use crate::{math::Set, prelude::*};

impl Automaton {
    /// Returns the set of states that can be reached from some initial state. Transitions on
    /// every symbol, epsilon included, are followed.
    ///
    /// # Example
    /// ```
    /// use fa::prelude::*;
    ///
    /// let fa = Automaton::builder()
    ///     .with_symbols(['a'])
    ///     .with_states([0, 1, 2])
    ///     .with_initial([0])
    ///     .with_transitions([(0, 'a', 1), (2, 'a', 0)])
    ///     .build();
    /// assert_eq!(fa.accessible_states().into_iter().collect::<Vec<_>>(), vec![0, 1]);
    /// ```
    pub fn accessible_states(&self) -> BTreeSet<StateId> {
        self.reachable_from(self.initial_states())
    }

    /// Returns the set of states from which some final state can be reached.
    pub fn co_accessible_states(&self) -> BTreeSet<StateId> {
        Automaton::create_mirror(self).accessible_states()
    }

    /// Depth-first traversal from all `origins`, using an explicit stack so that the depth of the
    /// search is not limited by the call stack.
    pub(crate) fn reachable_from<I: IntoIterator<Item = StateId>>(
        &self,
        origins: I,
    ) -> BTreeSet<StateId> {
        let mut seen = BTreeSet::new();
        let mut stack: Vec<StateId> = origins
            .into_iter()
            .filter(|&q| self.has_state(q))
            .collect();
        while let Some(q) = stack.pop() {
            if !seen.insert(q) {
                continue;
            }
            for (_, targets) in self.edges_from(q) {
                stack.extend(targets.iter().filter(|p| !seen.contains(*p)));
            }
        }
        seen
    }

    /// Removes every state that cannot be reached from an initial state.
    ///
    /// If there is no initial state at all, the automaton accepts nothing and is collapsed into a
    /// single initial state `0` without any transitions. The alphabet is kept in both cases.
    pub fn remove_non_accessible_states(&mut self) {
        if self.initial_states().is_empty() {
            debug!("no initial state, collapsing {}", self.summary());
            self.states.clear();
            self.transitions.clear();
            self.add_state(0);
            self.set_state_initial(0);
            return;
        }
        let accessible = self.accessible_states();
        self.retain_states(&accessible);
    }

    /// Removes every state from which no final state can be reached. This is done by removing
    /// the non-accessible states of the mirrored automaton and mirroring back.
    pub fn remove_non_co_accessible_states(&mut self) {
        let mut mirror = Automaton::create_mirror(self);
        mirror.remove_non_accessible_states();
        *self = Automaton::create_mirror(&mirror);
    }

    /// Tells whether the automaton accepts no word at all, i.e. whether no final state is
    /// reachable from an initial state.
    pub fn is_language_empty(&self) -> bool {
        let initial = self.initial_states();
        if initial.is_empty() || self.final_states().is_empty() {
            trace!("language is empty, there are no initial or no final states");
            return true;
        }
        if initial.iter().any(|&q| self.is_state_final(q)) {
            trace!("an initial state is final, the empty word is accepted");
            return false;
        }

        let mut seen = Set::default();
        let mut stack: Vec<StateId> = initial.into_iter().collect();
        while let Some(q) = stack.pop() {
            if !seen.insert(q) {
                continue;
            }
            for (_, targets) in self.edges_from(q) {
                for &p in targets {
                    if self.is_state_final(p) {
                        trace!("reached final state {p} from {q}, language is not empty");
                        return false;
                    }
                    if !seen.contains(&p) {
                        stack.push(p);
                    }
                }
            }
        }
        true
    }

    /// Returns a shortest word accepted by `self`, the length-lexicographically smallest one
    /// among them, or `None` if the language is empty.
    ///
    /// The search runs breadth-first over the subset construction of `self`, whose states are
    /// numbered densely from `0`.
    ///
    /// # Example
    /// ```
    /// use fa::prelude::*;
    ///
    /// let fa = Automaton::builder()
    ///     .with_symbols(['a', 'b'])
    ///     .with_states([0, 1, 2])
    ///     .with_initial([0])
    ///     .with_final([2])
    ///     .with_transitions([(0, 'b', 1), (0, 'a', 0), (1, 'a', 2), (0, 'b', 2)])
    ///     .build();
    /// assert_eq!(fa.shortest_accepted_word(), Some("b".to_string()));
    /// ```
    pub fn shortest_accepted_word(&self) -> Option<String> {
        let dfa = Automaton::create_deterministic(self);
        let initial = dfa.initial_states().into_iter().next()?;

        let mut seen = BitSet::with_capacity(dfa.count_states());
        seen.insert(initial);
        let mut queue = VecDeque::from([(String::new(), initial)]);
        while let Some((word, q)) = queue.pop_front() {
            if dfa.is_state_final(q) {
                return Some(word);
            }
            for c in dfa.symbols() {
                for p in dfa.successors(q, c) {
                    if seen.insert(p) {
                        let mut extended = word.clone();
                        extended.push(c);
                        queue.push_back((extended, p));
                    }
                }
            }
        }
        None
    }

    /// Keeps only the states in `keep`, together with the transitions between them.
    fn retain_states(&mut self, keep: &BTreeSet<StateId>) {
        let before = self.count_states();
        self.states.retain(|q, _| keep.contains(q));
        self.transitions.retain(|(source, _), targets| {
            if !keep.contains(source) {
                return false;
            }
            targets.retain(|q| keep.contains(q));
            !targets.is_empty()
        });
        debug!(
            "removed {} states, {} remain",
            before - self.count_states(),
            self.count_states()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::prelude::*;

    fn chain() -> Automaton {
        // 0 -a-> 1 -a-> 2 (final), 3 -a-> 0, 4 isolated and final, 1 -b-> 5 (dead end)
        Automaton::builder()
            .with_symbols(['a', 'b'])
            .with_states([0, 1, 2, 3, 4, 5])
            .with_initial([0])
            .with_final([2, 4])
            .with_transitions([(0, 'a', 1), (1, 'a', 2), (3, 'a', 0), (1, 'b', 5)])
            .build()
    }

    #[test]
    fn accessibility() {
        let fa = chain();
        assert_eq!(fa.accessible_states(), BTreeSet::from([0, 1, 2, 5]));
        assert_eq!(fa.co_accessible_states(), BTreeSet::from([0, 1, 2, 3, 4]));

        let mut trimmed = fa.clone();
        trimmed.remove_non_accessible_states();
        assert_eq!(trimmed.states().collect::<Vec<_>>(), vec![0, 1, 2, 5]);
        assert_eq!(trimmed.count_transitions(), 3);
        assert!(trimmed.accepts("aa"));

        let mut trimmed = fa.clone();
        trimmed.remove_non_co_accessible_states();
        assert_eq!(trimmed.states().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert!(!trimmed.has_transition(1, 'b', 5));
        assert!(trimmed.is_state_initial(0));
        assert!(trimmed.is_state_final(4));
        assert!(trimmed.accepts("aa"));
    }

    #[test]
    fn epsilon_transitions_are_followed() {
        let fa = Automaton::builder()
            .with_symbols(['a'])
            .with_states([0, 1])
            .with_initial([0])
            .with_final([1])
            .with_transitions([(0, Symbol::Epsilon, 1)])
            .build();
        assert_eq!(fa.accessible_states().len(), 2);
        assert!(!fa.is_language_empty());
    }

    #[test_log::test]
    fn without_initial_state_everything_collapses() {
        let fa = chain();
        let mut no_initial = Automaton::new();
        for c in fa.symbols() {
            no_initial.add_symbol(c);
        }
        for q in fa.states() {
            no_initial.add_state(q);
        }
        no_initial.remove_non_accessible_states();
        assert_eq!(no_initial.count_states(), 1);
        assert!(no_initial.is_state_initial(0));
        assert!(!no_initial.is_state_final(0));
        assert_eq!(no_initial.count_transitions(), 0);
        assert_eq!(no_initial.count_symbols(), 2);
        assert!(no_initial.is_language_empty());
    }

    #[test]
    fn language_emptiness() {
        assert!(Automaton::new().is_language_empty());
        assert!(!chain().is_language_empty());

        let mut fa = chain();
        assert!(fa.remove_transition(1, 'a', 2));
        assert!(fa.is_language_empty(), "final states 2 and 4 are unreachable");

        let only_epsilon_word = Automaton::builder()
            .with_symbols(['a'])
            .with_states([0])
            .with_initial([0])
            .with_final([0])
            .build();
        assert!(!only_epsilon_word.is_language_empty());

        let no_initial = Automaton::builder()
            .with_symbols(['a'])
            .with_states([0, 1])
            .with_final([1])
            .with_transitions([(0, 'a', 1)])
            .build();
        assert!(no_initial.is_language_empty());
    }

    #[test]
    fn shortest_words() {
        assert_eq!(chain().shortest_accepted_word(), Some("aa".to_string()));

        let mut fa = chain();
        fa.remove_transition(1, 'a', 2);
        assert_eq!(fa.shortest_accepted_word(), None);

        let epsilon_word = Automaton::builder()
            .with_symbols(['a'])
            .with_states([0, 1])
            .with_initial([0])
            .with_final([1])
            .with_transitions([(0, Symbol::Epsilon, 1)])
            .build();
        assert_eq!(epsilon_word.shortest_accepted_word(), Some(String::new()));
    }

    #[test]
    fn cycles_terminate() {
        let fa = Automaton::builder()
            .with_symbols(['a'])
            .with_states([0, 1, 2, 3])
            .with_initial([0])
            .with_final([3])
            .with_transitions([(0, 'a', 1), (1, 'a', 2), (2, 'a', 0)])
            .build();
        assert!(fa.is_language_empty());
        assert_eq!(fa.accessible_states().len(), 3);
    }

    #[test]
    fn deep_chains_do_not_overflow() {
        let size = 200_000;
        let mut fa = Automaton::new();
        fa.add_symbol('a');
        for q in 0..size {
            fa.add_state(q);
        }
        for q in 1..size {
            fa.add_transition(q - 1, 'a', q);
        }
        fa.set_state_initial(0);
        fa.set_state_final(size - 1);
        assert_eq!(fa.accessible_states().len(), size);
        assert!(!fa.is_language_empty());
    }
}
