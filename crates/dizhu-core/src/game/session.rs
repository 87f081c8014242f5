use crate::model::deck::{DealError, Deck};
use crate::model::game::GameState;
use crate::model::score::ScoreBoard;
use crate::model::seat::Side;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// A run of consecutive games sharing one scoreboard and one seeded RNG.
///
/// The nth game of a session is reproducible from the seed and the game
/// number alone; restoring a session replays the preceding shuffles.
#[derive(Debug, Clone)]
pub struct Session {
    scores: ScoreBoard,
    game_number: u32,
    current: GameState,
    rng: StdRng,
    seed: u64,
}

impl Session {
    pub fn new() -> Result<Self, DealError> {
        let seed: u64 = rand::random();
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Result<Self, DealError> {
        Self::with_seed_game(seed, 1)
    }

    pub fn with_seed_game(seed: u64, game_number: u32) -> Result<Self, DealError> {
        let normalized = game_number.max(1);
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 1..normalized {
            let _ = Deck::shuffled(&mut rng);
        }

        let deck = Deck::shuffled(&mut rng);
        let current = GameState::deal(&deck)?;

        Ok(Self {
            scores: ScoreBoard::new(),
            game_number: normalized,
            current,
            rng,
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn scores_mut(&mut self) -> &mut ScoreBoard {
        &mut self.scores
    }

    pub fn game(&self) -> &GameState {
        &self.current
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.current
    }

    /// Applies the finished game to the scoreboard and deals the next one.
    /// Returns the side that won the settled game.
    pub fn settle_and_start_next(&mut self) -> Result<Side, SessionError> {
        let winner = self.current.winner().ok_or(SessionError::GameUnfinished)?;
        self.scores.settle(winner, self.current.bomb_count());

        self.game_number += 1;
        let deck = Deck::shuffled(&mut self.rng);
        self.current = GameState::deal(&deck).map_err(SessionError::Deal)?;
        Ok(winner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    GameUnfinished,
    Deal(DealError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::GameUnfinished => {
                write!(f, "current game has no winner yet")
            }
            SessionError::Deal(inner) => write!(f, "{inner}"),
        }
    }
}

impl std::error::Error for SessionError {}
