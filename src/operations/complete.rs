use tracing::debug;

use crate::prelude::*;

impl Automaton {
    /// Tells whether `state` can serve as a sink: it is not final, it loops on every symbol of
    /// the alphabet and it has no transition leaving it.
    fn is_sink_candidate(&self, state: StateId) -> bool {
        !self.is_state_final(state)
            && self
                .edges_from(state)
                .all(|(_, targets)| targets.iter().all(|&p| p == state))
            && self
                .symbols()
                .all(|c| self.has_transition(state, c, state))
    }

    /// Creates a complete automaton accepting the same language as `automaton`, in which every
    /// state has at least one transition for every symbol.
    ///
    /// If `automaton` is already complete, an identical copy is returned. Otherwise missing
    /// transitions are redirected to a sink state. An existing state that already behaves like a
    /// sink is reused, otherwise a new state with the smallest unused id is added.
    ///
    /// # Example
    /// ```
    /// use fa::prelude::*;
    ///
    /// let fa = Automaton::builder()
    ///     .with_symbols(['a', 'b'])
    ///     .with_states([0, 1])
    ///     .with_initial([0])
    ///     .with_final([1])
    ///     .with_transitions([(0, 'a', 1)])
    ///     .build();
    /// let complete = Automaton::create_complete(&fa);
    /// assert!(complete.is_complete());
    /// assert_eq!(complete.count_states(), 3);
    /// assert!(complete.accepts("a"));
    /// assert!(!complete.accepts("ab"));
    /// ```
    pub fn create_complete(automaton: &Automaton) -> Automaton {
        if automaton.is_complete() {
            return automaton.clone();
        }

        let mut complete = automaton.clone();
        let sink = match automaton.states().find(|&q| automaton.is_sink_candidate(q)) {
            Some(sink) => {
                debug!("reusing state {sink} as sink");
                sink
            }
            None => {
                let sink = automaton.fresh_state_id();
                debug!("adding state {sink} as sink");
                complete.add_state(sink);
                sink
            }
        };

        for c in automaton.symbols() {
            complete.add_transition(sink, c, sink);
        }
        for q in automaton.states() {
            for c in automaton.symbols() {
                if automaton.successors(q, c).is_empty() {
                    complete.add_transition(q, c, sink);
                }
            }
        }
        complete
    }
}
