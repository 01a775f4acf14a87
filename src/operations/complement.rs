use tracing::debug;

use crate::prelude::*;

impl Automaton {
    /// Creates an automaton accepting exactly the words over the alphabet of `automaton` that
    /// `automaton` rejects.
    ///
    /// Flipping the final states is only correct for deterministic and complete automata, so
    /// the input is determinized first if it is not deterministic (or if it has epsilon
    /// transitions) and completed if it is not complete. An automaton without initial state is
    /// not deterministic, and its determinization is a single rejecting state `0` which is
    /// initial, so the complement of such an automaton accepts every word.
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
    ///     .with_transitions([(0, 'a', 1), (0, 'b', 0), (1, 'a', 1), (1, 'b', 1)])
    ///     .build();
    /// let complement = Automaton::create_complement(&fa);
    /// assert!(complement.accepts("bbb"));
    /// assert!(!complement.accepts("ba"));
    /// ```
    pub fn create_complement(automaton: &Automaton) -> Automaton {
        let mut complement = if !automaton.is_deterministic() || automaton.has_epsilon_transition()
        {
            debug!("determinizing before complementation");
            Automaton::create_deterministic(automaton)
        } else {
            automaton.clone()
        };
        if !complement.is_complete() {
            complement = Automaton::create_complete(&complement);
        }

        for flags in complement.states.values_mut() {
            flags.accepting = !flags.accepting;
        }
        complement
    }
}
