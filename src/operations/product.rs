use std::collections::VecDeque;

use itertools::Itertools;
use tracing::debug;

use crate::{math::Bijection, prelude::*};

/// Symbol that is put into the alphabet of a product whose operands share no symbol, so that
/// the product is still a valid automaton.
pub const DEFAULT_SYMBOL: char = 'a';

/// Pairs of states of the two operands are numbered in the order of their discovery.
struct PairIds {
    ids: Bijection<(StateId, StateId), StateId>,
    queue: VecDeque<(StateId, StateId)>,
}

impl PairIds {
    fn new() -> Self {
        Self {
            ids: Bijection::new(),
            queue: VecDeque::new(),
        }
    }

    /// Returns the id of `pair`, inserting it into `product` and scheduling it for exploration if
    /// it has not been seen before.
    fn id_of(
        &mut self,
        pair: (StateId, StateId),
        lhs: &Automaton,
        rhs: &Automaton,
        product: &mut Automaton,
    ) -> StateId {
        if let Some(&id) = self.ids.get_by_left(&pair) {
            return id;
        }
        let id = self.ids.len();
        product.add_state(id);
        if lhs.is_state_final(pair.0) && rhs.is_state_final(pair.1) {
            product.set_state_final(id);
        }
        self.ids.insert(pair, id);
        self.queue.push_back(pair);
        id
    }
}

impl Automaton {
    /// Creates the synchronized product of `lhs` and `rhs`, which accepts the intersection of
    /// their languages.
    ///
    /// The alphabet of the product consists of the symbols both operands share. Its states are
    /// the pairs of states reachable from the pairs of initial states, numbered from `0` in the
    /// order of discovery. A pair is final if both of its components are. Epsilon transitions of
    /// either side are taken while the other side stays in place.
    ///
    /// The product is always valid: if no pair is reachable a single rejecting state is added.
    /// If the alphabets are disjoint, the product consists of the single state `0` over
    /// [`DEFAULT_SYMBOL`], no matter how many initial states the operands have.
    ///
    /// # Example
    /// ```
    /// use fa::prelude::*;
    ///
    /// let starts_with_a = Automaton::builder()
    ///     .with_symbols(['a', 'b'])
    ///     .with_states([0, 1])
    ///     .with_initial([0])
    ///     .with_final([1])
    ///     .with_transitions([(0, 'a', 1), (1, 'a', 1), (1, 'b', 1)])
    ///     .build();
    /// let ends_with_b = Automaton::builder()
    ///     .with_symbols(['a', 'b'])
    ///     .with_states([0, 1])
    ///     .with_initial([0])
    ///     .with_final([1])
    ///     .with_transitions([(0, 'a', 0), (0, 'b', 1), (1, 'a', 0), (1, 'b', 1)])
    ///     .build();
    /// let product = Automaton::create_product(&starts_with_a, &ends_with_b);
    /// assert!(product.accepts("aab"));
    /// assert!(!product.accepts("ba"));
    /// assert!(!product.accepts("aba"));
    /// ```
    pub fn create_product(lhs: &Automaton, rhs: &Automaton) -> Automaton {
        let mut product = Automaton::new();
        for c in lhs.alphabet.intersection(&rhs.alphabet) {
            product.add_symbol(*c);
        }
        if product.count_symbols() == 0 {
            return Automaton::disjoint_product(lhs, rhs);
        }

        let mut pairs = PairIds::new();
        let rhs_initial = rhs.initial_states();
        for (p, q) in lhs
            .initial_states()
            .into_iter()
            .cartesian_product(rhs_initial.iter().copied())
        {
            let id = pairs.id_of((p, q), lhs, rhs, &mut product);
            product.set_state_initial(id);
        }

        let shared = product.symbols().collect_vec();
        while let Some((p, q)) = pairs.queue.pop_front() {
            let source = pairs.id_of((p, q), lhs, rhs, &mut product);
            for &c in &shared {
                let rhs_successors = rhs.successors(q, c);
                for (p2, q2) in lhs
                    .successors(p, c)
                    .into_iter()
                    .cartesian_product(rhs_successors.iter().copied())
                {
                    let target = pairs.id_of((p2, q2), lhs, rhs, &mut product);
                    product.add_transition(source, c, target);
                }
            }
            for p2 in lhs.successors(p, Symbol::Epsilon) {
                let target = pairs.id_of((p2, q), lhs, rhs, &mut product);
                product.add_transition(source, Symbol::Epsilon, target);
            }
            for q2 in rhs.successors(q, Symbol::Epsilon) {
                let target = pairs.id_of((p, q2), lhs, rhs, &mut product);
                product.add_transition(source, Symbol::Epsilon, target);
            }
        }

        if product.count_states() == 0 {
            debug!("no pair of initial states, the product is empty");
            product.add_state(0);
        }
        debug!("product has {}", product.summary());
        product
    }

    /// Product of two automata without a common symbol. The intersection of their languages
    /// contains at most the empty word, so it is represented by the single state `0` over
    /// [`DEFAULT_SYMBOL`]. The state is initial if both operands have an initial state and it is
    /// final if both accept the empty word.
    fn disjoint_product(lhs: &Automaton, rhs: &Automaton) -> Automaton {
        debug!("operands share no symbol, using {DEFAULT_SYMBOL}");
        let accepts_empty_word = |fa: &Automaton| {
            fa.epsilon_closure(fa.initial_states())
                .into_iter()
                .any(|q| fa.is_state_final(q))
        };

        let mut product = Automaton::new();
        product.add_symbol(DEFAULT_SYMBOL);
        product.add_state(0);
        if !lhs.initial_states().is_empty() && !rhs.initial_states().is_empty() {
            product.set_state_initial(0);
        }
        if accepts_empty_word(lhs) && accepts_empty_word(rhs) {
            product.set_state_final(0);
        }
        product
    }

    /// Tells whether no word is accepted by both `self` and `other`.
    pub fn has_empty_intersection_with(&self, other: &Automaton) -> bool {
        Automaton::create_product(self, other).is_language_empty()
    }
}
