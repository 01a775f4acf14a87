use tracing::debug;

use crate::prelude::*;

impl Automaton {
    /// Tells whether every word accepted by `self` is also accepted by `other`.
    ///
    /// This holds precisely if `self` has an empty intersection with the complement of
    /// `other`. As the complement depends on the alphabet, the symbols of `self` that `other`
    /// lacks are first added to (a copy of) `other`.
    ///
    /// # Example
    /// ```
    /// use fa::prelude::*;
    ///
    /// let only_a = Automaton::builder()
    ///     .with_symbols(['a'])
    ///     .with_states([0])
    ///     .with_initial([0])
    ///     .with_final([0])
    ///     .with_transitions([(0, 'a', 0)])
    ///     .build();
    /// let everything = Automaton::builder()
    ///     .with_symbols(['a', 'b'])
    ///     .with_states([0])
    ///     .with_initial([0])
    ///     .with_final([0])
    ///     .with_transitions([(0, 'a', 0), (0, 'b', 0)])
    ///     .build();
    /// assert!(only_a.is_included_in(&everything));
    /// assert!(!everything.is_included_in(&only_a));
    /// ```
    pub fn is_included_in(&self, other: &Automaton) -> bool {
        let mut extended = other.clone();
        for c in self.symbols() {
            if extended.add_symbol(c) {
                debug!("extending alphabet of the including automaton by {c}");
            }
        }
        self.has_empty_intersection_with(&Automaton::create_complement(&extended))
    }

    /// Tells whether `self` and `other` accept the same language, which is the case if each is
    /// included in the other.
    pub fn equivalent(&self, other: &Automaton) -> bool {
        self.is_included_in(other) && other.is_included_in(self)
    }
}
