use crate::model::seat::Side;

/// Point multiplier for a finished game: the base value of 1 doubles once
/// per bomb or rocket played.
pub const fn multiplier(bomb_count: u32) -> i64 {
    1i64 << bomb_count
}

/// Cumulative per-side tallies across a session of games. Explicitly owned
/// and explicitly reset; nothing here is process-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    wins: [u32; 2],
    scores: [i64; 2],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self {
            wins: [0; 2],
            scores: [0; 2],
        }
    }

    /// Applies one finished game: the winning side gains a win and the
    /// multiplier, the losing side mirrors the score without a win.
    pub fn settle(&mut self, winner: Side, bomb_count: u32) {
        let points = multiplier(bomb_count);
        self.wins[winner.index()] += 1;
        self.scores[winner.index()] += points;
        self.scores[winner.opponent().index()] -= points;
    }

    pub fn wins(&self, side: Side) -> u32 {
        self.wins[side.index()]
    }

    pub fn score(&self, side: Side) -> i64 {
        self.scores[side.index()]
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_tallies(&mut self, wins: [u32; 2], scores: [i64; 2]) {
        self.wins = wins;
        self.scores = scores;
    }

    pub fn tallies(&self) -> ([u32; 2], [i64; 2]) {
        (self.wins, self.scores)
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}
