pub(crate) mod partition_refinement;
pub use partition_refinement::moore_partition_refinement;

mod brzozowski;

use crate::prelude::*;

impl Automaton {
    /// Returns the minimal deterministic and complete automaton accepting the same language as
    /// `automaton`, computed with Moore's partition refinement algorithm.
    ///
    /// The input is normalized first: non-accessible states are removed, the result is
    /// completed and then determinized. States of the minimal automaton are the equivalence
    /// classes found by [`moore_partition_refinement`], numbered from `0`.
    ///
    /// # Example
    /// ```
    /// use fa::prelude::*;
    ///
    /// // two copies of the same accepting loop
    /// let fa = Automaton::builder()
    ///     .with_symbols(['a'])
    ///     .with_states([0, 1])
    ///     .with_initial([0])
    ///     .with_final([0, 1])
    ///     .with_transitions([(0, 'a', 1), (1, 'a', 0)])
    ///     .build();
    /// let minimal = Automaton::create_minimal_moore(&fa);
    /// assert_eq!(minimal.count_states(), 1);
    /// assert!(minimal.accepts("aaa"));
    /// ```
    pub fn create_minimal_moore(automaton: &Automaton) -> Automaton {
        let mut trimmed = automaton.clone();
        trimmed.remove_non_accessible_states();
        let dfa = Automaton::create_deterministic(&Automaton::create_complete(&trimmed));
        let partition = moore_partition_refinement(&dfa);
        partition_refinement::quotient(&dfa, &partition)
    }
}
