use itertools::Itertools;
use tracing::trace;

use crate::{
    math::{Map, Partition},
    prelude::*,
};

/// Assigns a class index to every state such that two states get the same index if and only if
/// their signatures agree. Indices are handed out in the order in which signatures first appear
/// when going through `states`, so the labeling only depends on the induced partition.
fn label_by_signature<S, F>(states: &[StateId], signature: F) -> Map<StateId, usize>
where
    S: std::hash::Hash + Eq,
    F: Fn(StateId) -> S,
{
    let mut ids: Map<S, usize> = Map::default();
    states
        .iter()
        .map(|&q| {
            let next = ids.len();
            (q, *ids.entry(signature(q)).or_insert(next))
        })
        .collect()
}

/// Computes the partition of the states of the deterministic automaton `dfa` into
/// classes of states that accept the same words, using Moore's algorithm.
///
/// The initial partition separates final from non-final states. Each round then splits a class
/// by the classes that its members reach on every symbol, until a round leaves the partition
/// unchanged. Classes are ordered by their smallest member.
///
/// # Example
/// ```
/// use fa::{minimization::moore_partition_refinement, prelude::*};
///
/// let dfa = Automaton::builder()
///     .with_symbols(['a'])
///     .with_states([0, 1, 2])
///     .with_initial([0])
///     .with_final([2])
///     .with_transitions([(0, 'a', 1), (1, 'a', 2), (2, 'a', 2)])
///     .build();
/// let partition = moore_partition_refinement(&dfa);
/// assert_eq!(partition.size(), 3);
/// ```
pub fn moore_partition_refinement(dfa: &Automaton) -> Partition<StateId> {
    let states = dfa.states().collect_vec();
    let symbols = dfa.symbols().collect_vec();

    let mut labels = label_by_signature(&states, |q| dfa.is_state_final(q));
    let mut round = 0;
    loop {
        let refined = label_by_signature(&states, |q| {
            let successors = symbols
                .iter()
                .map(|&c| {
                    dfa.successors(q, c)
                        .first()
                        .and_then(|p| labels.get(p))
                        .copied()
                })
                .collect_vec();
            (labels.get(&q).copied(), successors)
        });
        round += 1;
        trace!(
            "refinement round {round}: {} classes",
            refined.values().unique().count()
        );
        if refined == labels {
            break;
        }
        labels = refined;
    }

    let mut classes = vec![math::OrderedSet::new(); labels.values().unique().count()];
    for (q, class) in labels {
        classes[class].insert(q);
    }
    Partition::from(classes)
}

/// Builds the quotient of `dfa` by `partition`: one state per class, numbered by the position of
/// the class. A class is initial if it contains an initial state and final if it contains a
/// final state. Transitions are taken from an arbitrary member of each class, which is sound
/// because `partition` is a congruence.
pub(crate) fn quotient(dfa: &Automaton, partition: &Partition<StateId>) -> Automaton {
    let class_of: Map<StateId, usize> = partition
        .iter()
        .enumerate()
        .flat_map(|(i, class)| class.iter().map(move |&q| (q, i)))
        .collect();

    let mut minimal = Automaton::new();
    for c in dfa.symbols() {
        minimal.add_symbol(c);
    }
    for (i, class) in partition.iter().enumerate() {
        minimal.add_state(i);
        if class.iter().any(|&q| dfa.is_state_initial(q)) {
            minimal.set_state_initial(i);
        }
        if class.iter().any(|&q| dfa.is_state_final(q)) {
            minimal.set_state_final(i);
        }
    }
    for (i, class) in partition.iter().enumerate() {
        let Some(&representative) = class.first() else {
            continue;
        };
        for c in dfa.symbols() {
            for p in dfa.successors(representative, c) {
                if let Some(&target) = class_of.get(&p) {
                    minimal.add_transition(i, c, target);
                }
            }
        }
    }
    minimal
}
