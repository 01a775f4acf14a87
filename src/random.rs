use fastrand::Rng;
use itertools::Itertools;
use tracing::debug;

use crate::prelude::*;

/// Returns the first `symbols` letters of `a..=z` followed by `A..=Z`. At most 52 symbols are
/// available, larger values are capped.
pub fn letters(symbols: usize) -> Vec<char> {
    ('a'..='z').chain('A'..='Z').take(symbols).collect()
}

/// Draws a random, usually nondeterministic automaton with states `0..size` over the alphabet
/// [`letters`]`(symbols)`. Every triple `(p, c, q)` becomes a transition with probability
/// `density`, and every state is final with probability `final_probability`. State `0` is the
/// only initial state, unless `size` is `0` in which case the automaton has no states at all.
pub fn generate_random_nfa(
    rng: &mut Rng,
    symbols: usize,
    size: usize,
    density: f64,
    final_probability: f64,
) -> Automaton {
    let alphabet = letters(symbols);
    let mut nfa = Automaton::new();
    for &c in &alphabet {
        nfa.add_symbol(c);
    }
    for q in 0..size {
        nfa.add_state(q);
        if rng.f64() < final_probability {
            nfa.set_state_final(q);
        }
    }
    nfa.set_state_initial(0);

    for ((p, c), q) in (0..size)
        .cartesian_product(alphabet.iter().copied())
        .cartesian_product(0..size)
    {
        if rng.f64() < density {
            nfa.add_transition(p, c, q);
        }
    }
    debug!("drew random nfa with {}", nfa.summary());
    nfa
}

/// Draws a random deterministic and complete automaton with states `0..size` over the alphabet
/// [`letters`]`(symbols)` by picking a uniformly random target for every state and symbol.
/// State `0` is initial, every state is final with probability `final_probability`. Depending
/// on the drawn transitions some states may not be accessible.
///
/// If `size` is `0`, a single state is created anyway so that the result is deterministic.
pub fn generate_random_dfa(
    rng: &mut Rng,
    symbols: usize,
    size: usize,
    final_probability: f64,
) -> Automaton {
    let size = size.max(1);
    let mut dfa = generate_random_nfa(rng, symbols, size, 0.0, final_probability);
    for q in 0..size {
        for c in letters(symbols) {
            let target = rng.usize(..size);
            dfa.add_transition(q, c, target);
        }
    }
    dfa
}

/// Generate a random `String` over the symbols in `alphabet`. The length of the `String` is drawn
/// uniformly from the range `min_len..=max_len`. For an empty alphabet the empty word is
/// returned.
pub fn generate_random_word(
    rng: &mut Rng,
    alphabet: &[char],
    min_len: usize,
    max_len: usize,
) -> String {
    if alphabet.is_empty() {
        return String::new();
    }
    let length = rng.usize(min_len..=max_len.max(min_len));
    (0..length)
        .map(|_| alphabet[rng.usize(..alphabet.len())])
        .collect()
}

/// Generate `number` random words over `alphabet`, see [`generate_random_word`].
pub fn generate_random_words(
    rng: &mut Rng,
    alphabet: &[char],
    min_len: usize,
    max_len: usize,
    number: usize,
) -> Vec<String> {
    (0..number)
        .map(|_| generate_random_word(rng, alphabet, min_len, max_len))
        .collect()
}
