use crate::constants::MAX_SAVED_STATES;

/// Knobs for building a [`Chip8`](crate::Chip8).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Seed for `Cxkk`; seeded from the OS when `None`
    pub rng_seed: Option<u64>,
    /// How many past states to keep for rewinding; 0 turns rewinding off
    pub history: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rng_seed: None,
            history: MAX_SAVED_STATES,
        }
    }
}
