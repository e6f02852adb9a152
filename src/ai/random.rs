use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::GameState;

use super::agent::Agent;

/// The opponent chooser: selects uniformly at random from the legal columns.
/// No look-ahead, no blocking heuristics — intentionally the weakest
/// possible opponent.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded construction for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, state: &GameState) -> usize {
        let columns = state.legal_columns();
        assert!(!columns.is_empty(), "No legal columns available");
        let idx = self.rng.random_range(0..columns.len());
        columns[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
