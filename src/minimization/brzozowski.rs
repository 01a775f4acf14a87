use tracing::debug;

use crate::prelude::*;

impl Automaton {
    /// Returns the minimal deterministic and complete automaton accepting the same language as
    /// `automaton`, computed with Brzozowski's algorithm: the automaton is mirrored and
    /// determinized twice, and the result is completed.
    ///
    /// Determinizing the mirror of an automaton whose mirror is accessible yields a minimal
    /// automaton, and the first round makes sure that this holds in the second round.
    ///
    /// # Example
    /// ```
    /// use fa::prelude::*;
    ///
    /// let fa = Automaton::builder()
    ///     .with_symbols(['a'])
    ///     .with_states([0, 1, 2])
    ///     .with_initial([0])
    ///     .with_final([1, 2])
    ///     .with_transitions([(0, 'a', 1), (0, 'a', 2), (1, 'a', 1), (2, 'a', 2)])
    ///     .build();
    /// let minimal = Automaton::create_minimal_brzozowski(&fa);
    /// assert_eq!(minimal.count_states(), 2);
    /// assert!(minimal.accepts("aa"));
    /// assert!(!minimal.accepts(""));
    /// ```
    pub fn create_minimal_brzozowski(automaton: &Automaton) -> Automaton {
        let once = Automaton::create_deterministic(&Automaton::create_mirror(automaton));
        debug!("first reversal has {}", once.summary());
        let twice = Automaton::create_deterministic(&Automaton::create_mirror(&once));
        Automaton::create_complete(&twice)
    }
}
