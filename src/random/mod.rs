use crate::prelude::*;

/// Names of the first `symbols` letters `a, b, c, ...`. Beyond `z` the names continue as
/// `a1, b1, ...`.
pub fn alphabet_of_size(symbols: usize) -> Vec<String> {
    (0..symbols)
        .map(|i| {
            let letter = (b'a' + (i % 26) as u8) as char;
            match i / 26 {
                0 => letter.to_string(),
                round => format!("{letter}{round}"),
            }
        })
        .collect()
}

/// Generate a random automaton with `size` states `s0, s1, ...` over an alphabet with
/// `symbols` letters. Every transition exists with probability `density`, its target is
/// drawn uniformly and each state is accepting with probability one half. The initial
/// state is `s0`, depending on the drawn transitions there may be unreachable states.
/// The same `seed` always yields the same automaton.
pub fn generate_random_automaton(
    symbols: usize,
    size: usize,
    density: f64,
    seed: u64,
) -> Automaton {
    let mut rng = fastrand::Rng::with_seed(seed);
    let size = size.max(1);
    let states: Vec<String> = (0..size).map(|i| format!("s{i}")).collect();
    let alphabet = alphabet_of_size(symbols);

    let mut transitions = vec![];
    for q in &states {
        for sym in &alphabet {
            if rng.f64() < density {
                let target = &states[rng.usize(..size)];
                transitions.push(Transition::new(q.clone(), sym.clone(), target.clone()));
            }
        }
    }
    let accepting = states.iter().filter(|_| rng.bool()).cloned().collect::<Vec<_>>();

    Automaton::builder()
        .with_states(states)
        .with_alphabet(alphabet)
        .with_transitions(transitions)
        .with_accepting(accepting)
        .into_automaton("s0")
}

/// Works as [`generate_random_automaton`] with `density` one, i.e. the transition function
/// is total.
pub fn generate_random_dfa(symbols: usize, size: usize, seed: u64) -> Automaton {
    generate_random_automaton(symbols, size, 1.0, seed)
}

/// Generate a random word over `alphabet` whose length is drawn uniformly from
/// `min_len..=max_len`.
pub fn generate_random_word(
    rng: &mut fastrand::Rng,
    alphabet: &[String],
    min_len: usize,
    max_len: usize,
) -> Vec<String> {
    if alphabet.is_empty() {
        return vec![];
    }
    let length = rng.usize(min_len..=max_len);
    (0..length)
        .map(|_| alphabet[rng.usize(..alphabet.len())].clone())
        .collect()
}
