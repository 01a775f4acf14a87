use crate::{math::OrderedMap, prelude::*};

impl Automaton {
    /// Creates the mirror of `automaton`: every transition `(p, a, q)` becomes `(q, a, p)`, the
    /// final states become initial and the initial states become final. The mirror accepts the
    /// reversal of every word accepted by `automaton`. States keep their ids.
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
    ///     .with_transitions([(0, 'a', 1), (1, 'b', 2)])
    ///     .build();
    /// let mirror = Automaton::create_mirror(&fa);
    /// assert!(fa.accepts("ab"));
    /// assert!(mirror.accepts("ba"));
    /// assert!(!mirror.accepts("ab"));
    /// ```
    pub fn create_mirror(automaton: &Automaton) -> Automaton {
        let states = automaton
            .states
            .iter()
            .map(|(&q, flags)| {
                let swapped = StateFlags {
                    initial: flags.accepting,
                    accepting: flags.initial,
                };
                (q, swapped)
            })
            .collect();

        let mut transitions: OrderedMap<_, math::OrderedSet<StateId>> = OrderedMap::new();
        for (from, symbol, to) in automaton.transitions() {
            transitions.entry((to, symbol)).or_default().insert(from);
        }

        Automaton::from_parts(automaton.alphabet.clone(), states, transitions)
    }
}
