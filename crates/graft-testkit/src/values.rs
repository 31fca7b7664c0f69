//! Random fixture values, so tests do not accidentally depend on constants.

use rand::Rng;

const WORDS: &[&str] = &[
    "amber", "birch", "cedar", "delta", "ember", "fjord", "grove", "heron",
    "inlet", "juniper", "kestrel", "larch", "meadow", "north", "osprey",
    "pine", "quarry", "ridge", "spruce", "thicket",
];

/// Random email address.
pub fn random_email() -> String {
    let mut rng = rand::thread_rng();
    let local: String = (0..10).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
    format!("{local}@example.com")
}

/// Random short sentence.
pub fn random_sentence() -> String {
    let mut rng = rand::thread_rng();
    let words: Vec<&str> = (0..rng.gen_range(4..8))
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect();
    words.join(" ")
}

/// Random row identifier.
pub fn random_id() -> u64 {
    rand::thread_rng().gen_range(1..1_000_000)
}
