use crate::agent::Agent;
use dizhu_core::model::infoset::InformationSet;
use dizhu_core::model::play::Move;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Uniformly random legal play; the baseline opponent.
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, info: &InformationSet) -> Move {
        let legal = info
            .legal_moves
            .as_deref()
            .expect("random agent consulted for a non-acting seat");
        let index = self.rng.gen_range(0..legal.len());
        legal[index].clone()
    }
}
