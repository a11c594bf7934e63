//! Seeded random letters for filling empty board cells

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Relative frequency of `a`-`z` in English text (percent)
pub const LETTER_WEIGHTS: [f64; 26] = [
    8.17, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, 6.75, 7.51,
    1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07,
];

/// Deterministic letter source weighted by English letter frequency
pub struct RandomLetters {
    rng: StdRng,
    total: f64,
}

impl RandomLetters {
    /// Create a letter source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            total: LETTER_WEIGHTS.iter().sum(),
        }
    }

    /// Draw the next letter using the cumulative weight distribution
    pub fn next_letter(&mut self) -> char {
        let mut rand_val = self.rng.random::<f64>() * self.total;
        for (letter, &weight) in ('a'..='z').zip(LETTER_WEIGHTS.iter()) {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return letter;
            }
        }
        'z'
    }
}
