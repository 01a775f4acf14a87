use std::collections::BTreeSet;

use fa::prelude::*;
use itertools::Itertools;

/// All words over `alphabet` of length at most `max_len`, shortest first.
fn words_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    std::iter::once(String::new())
        .chain((1..=max_len).flat_map(|len| {
            std::iter::repeat(alphabet.iter().copied())
                .take(len)
                .multi_cartesian_product()
                .map(|word| word.into_iter().collect::<String>())
        }))
        .collect()
}

/// Deterministic and complete, accepts the words ending in `bb`.
fn ends_with_bb() -> Automaton {
    Automaton::builder()
        .with_symbols(['a', 'b'])
        .with_states([0, 1, 2])
        .with_initial([0])
        .with_final([2])
        .with_transitions([
            (0, 'a', 0),
            (0, 'b', 1),
            (1, 'a', 0),
            (1, 'b', 2),
            (2, 'a', 0),
            (2, 'b', 2),
        ])
        .build()
}

#[test_log::test]
fn minimizing_a_minimal_automaton() {
    let fa = ends_with_bb();
    let moore = Automaton::create_minimal_moore(&fa);
    let brzozowski = Automaton::create_minimal_brzozowski(&fa);

    assert_eq!(moore.count_states(), 3);
    assert_eq!(brzozowski.count_states(), 3);
    for minimal in [&moore, &brzozowski] {
        assert!(minimal.is_included_in(&fa));
        assert!(fa.is_included_in(minimal));
    }
    for word in words_up_to(&['a', 'b'], 6) {
        let expected = word.ends_with("bb");
        assert_eq!(moore.accepts(&word), expected, "moore on {word:?}");
        assert_eq!(brzozowski.accepts(&word), expected, "brzozowski on {word:?}");
    }
}

#[test_log::test]
fn automaton_without_initial_state() {
    let fa = Automaton::builder()
        .with_symbols(['a', 'b'])
        .with_states([0, 1, 2])
        .with_final([1, 2])
        .with_transitions([(0, 'a', 1), (1, 'b', 2)])
        .build();
    assert!(fa.is_language_empty());

    let complement = Automaton::create_complement(&fa);
    assert!(!complement.is_language_empty());
    assert!(complement.is_complete());
    assert!(complement.is_deterministic());
    for word in words_up_to(&['a', 'b'], 4) {
        assert!(complement.accepts(&word), "complement rejects {word:?}");
    }
}

#[test]
fn reading_the_empty_word() {
    let mut fa = Automaton::builder()
        .with_symbols(['a'])
        .with_states([0, 1, 2, 3])
        .with_initial([1, 3])
        .with_transitions([(1, 'a', 2)])
        .with_transitions([(1, Symbol::Epsilon, 0)])
        .build();
    assert_eq!(fa.read_string(""), BTreeSet::from([1, 3]));
    assert_eq!(fa.read_string(""), fa.initial_states());

    fa.remove_state(1);
    fa.remove_state(3);
    assert!(fa.read_string("").is_empty());
    assert!(Automaton::new().read_string("").is_empty());
}

#[test]
fn product_of_disjoint_alphabets() {
    let lhs = Automaton::builder()
        .with_symbols(['a', 'b'])
        .with_states([0, 1])
        .with_initial([0])
        .with_final([1])
        .with_transitions([(0, 'a', 1), (1, 'b', 0)])
        .build();
    let rhs = Automaton::builder()
        .with_symbols(['x', 'y'])
        .with_states([4, 5])
        .with_initial([4])
        .with_final([5])
        .with_transitions([(4, 'x', 5), (5, 'y', 5)])
        .build();
    let product = Automaton::create_product(&lhs, &rhs);
    assert!(product.is_valid());
    assert_eq!(product.count_transitions(), 0);
    assert_eq!(product.count_states(), 1);
    assert_eq!(product.count_symbols(), 1);
    assert!(product.is_language_empty());
    assert!(lhs.has_empty_intersection_with(&rhs));
}

#[test]
fn mirror_reverses_the_language() {
    let fa = ends_with_bb();
    let mirror = Automaton::create_mirror(&fa);
    for word in words_up_to(&['a', 'b'], 5) {
        let reversed: String = word.chars().rev().collect();
        assert_eq!(mirror.accepts(&reversed), fa.accepts(&word));
    }
    assert!(mirror.accepts("bba"));
    assert!(!mirror.accepts("abb"));
}

#[test]
fn shortest_words_and_pretty_printing() {
    let fa = ends_with_bb();
    assert_eq!(fa.shortest_accepted_word().as_deref(), Some("bb"));

    let mut out = Vec::new();
    fa.pretty_print(&mut out).unwrap();
    let listing = String::from_utf8(out).unwrap();
    assert!(listing.starts_with("Initial states:\n\t0 \nFinal states:\n\t2 \n"));
    assert!(listing.contains("\tFor state 1:\n\t\tFor letter a: 0 \n\t\tFor letter b: 2 \n"));
    assert!(fa.dot_representation().contains("2 [shape=doublecircle"));
}

#[cfg(feature = "random")]
mod random_properties {
    use fa::prelude::*;
    use fastrand::Rng;

    use super::words_up_to;

    const SEEDS: std::ops::Range<u64> = 0..40;

    fn nfa(seed: u64) -> Automaton {
        let mut rng = Rng::with_seed(seed);
        let size = rng.usize(1..=6);
        random::generate_random_nfa(&mut rng, 2, size, 0.3, 0.3)
    }

    fn dfa(seed: u64) -> Automaton {
        let mut rng = Rng::with_seed(seed);
        let size = rng.usize(1..=8);
        random::generate_random_dfa(&mut rng, 2, size, 0.4)
    }

    #[test]
    fn determinization_yields_deterministic_automata() {
        for seed in SEEDS {
            let fa = nfa(seed);
            let det = Automaton::create_deterministic(&fa);
            assert!(det.is_deterministic(), "seed {seed}");
            for word in words_up_to(&['a', 'b'], 5) {
                assert_eq!(det.accepts(&word), fa.accepts(&word), "seed {seed}, {word:?}");
            }
        }
    }

    #[test]
    fn double_complement_is_identity() {
        for seed in SEEDS {
            let fa = dfa(seed);
            let complement = Automaton::create_complement(&fa);
            let twice = Automaton::create_complement(&complement);
            assert!(twice.equivalent(&fa), "seed {seed}");
            for word in words_up_to(&['a', 'b'], 5) {
                assert_ne!(complement.accepts(&word), fa.accepts(&word), "seed {seed}");
            }
        }
    }

    #[test]
    fn product_emptiness_agrees_with_intersection_test() {
        for seed in SEEDS {
            let (lhs, rhs) = (nfa(seed), nfa(seed + 1000));
            let product = Automaton::create_product(&lhs, &rhs);
            assert_eq!(
                product.is_language_empty(),
                lhs.has_empty_intersection_with(&rhs),
                "seed {seed}"
            );
            for word in words_up_to(&['a', 'b'], 4) {
                assert_eq!(
                    product.accepts(&word),
                    lhs.accepts(&word) && rhs.accepts(&word),
                    "seed {seed}, {word:?}"
                );
            }
        }
    }

    #[test_log::test]
    fn minimization_algorithms_agree() {
        for seed in SEEDS {
            for fa in [dfa(seed), nfa(seed)] {
                let moore = Automaton::create_minimal_moore(&fa);
                let brzozowski = Automaton::create_minimal_brzozowski(&fa);
                assert_eq!(moore.count_states(), brzozowski.count_states(), "seed {seed}");
                assert!(moore.equivalent(&fa), "seed {seed}");
                assert!(brzozowski.equivalent(&fa), "seed {seed}");
                assert!(
                    moore.count_states() <= Automaton::create_deterministic(&fa).count_states()
                );
            }
        }
    }

    #[test]
    fn inclusion_is_reflexive() {
        for seed in SEEDS {
            let fa = nfa(seed);
            assert!(fa.is_included_in(&fa), "seed {seed}");
            assert!(fa.equivalent(&fa.clone()), "seed {seed}");
        }
    }

    #[test]
    fn double_mirror_preserves_the_language() {
        for seed in SEEDS {
            let fa = nfa(seed);
            let twice = Automaton::create_mirror(&Automaton::create_mirror(&fa));
            assert_eq!(twice, fa, "seed {seed}");
            assert!(twice.equivalent(&fa), "seed {seed}");
        }
    }

    #[test]
    fn reading_the_empty_word_on_random_automata() {
        for seed in SEEDS {
            let fa = nfa(seed);
            assert_eq!(fa.read_string(""), fa.initial_states());
        }
    }

    #[test]
    fn emptiness_agrees_with_trimming() {
        for seed in SEEDS {
            let fa = nfa(seed);
            let mut trimmed = fa.clone();
            trimmed.remove_non_accessible_states();
            trimmed.remove_non_co_accessible_states();
            assert_eq!(fa.is_language_empty(), fa.shortest_accepted_word().is_none());
            if fa.is_language_empty() {
                assert_eq!(trimmed.count_states(), 1, "seed {seed}");
                assert!(trimmed.is_language_empty());
            } else {
                let states: std::collections::BTreeSet<_> = trimmed.states().collect();
                assert_eq!(trimmed.accessible_states(), states, "seed {seed}");
                assert_eq!(trimmed.co_accessible_states(), states, "seed {seed}");
                assert!(trimmed.equivalent(&fa), "seed {seed}");
            }
        }
    }
}
