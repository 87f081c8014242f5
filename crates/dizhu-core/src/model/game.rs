use crate::model::card::Card;
use crate::model::combo::Combo;
use crate::model::deck::{Deal, DealError, Deck};
use crate::model::generator::{self, MoveError};
use crate::model::hand::Hand;
use crate::model::play::Move;
use crate::model::seat::{Seat, Side};
use std::fmt;

/// One accepted turn: who acted and what they played (possibly a pass).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRecord {
    pub seat: Seat,
    pub action: Move,
}

/// The card-play state machine for a single game.
///
/// Mutated exclusively through [`GameState::apply`]; once a winner is set
/// every further submission is rejected.
#[derive(Debug, Clone)]
pub struct GameState {
    hands: [Hand; 3],
    reserved: Vec<Card>,
    acting: Seat,
    history: Vec<PlayRecord>,
    played: [Vec<Card>; 3],
    to_beat: Option<(Move, Combo)>,
    last_to_play: Option<Seat>,
    passes_since_play: u8,
    bombs: u32,
    winner: Option<Side>,
}

impl GameState {
    /// Deals a new game from a shuffled deck. The landlord acts first.
    pub fn deal(deck: &Deck) -> Result<Self, DealError> {
        Ok(Self::from_deal(Deal::from_deck(deck)?))
    }

    pub fn from_deal(deal: Deal) -> Self {
        let (hands, reserved) = deal.into_parts();
        Self {
            hands,
            reserved,
            acting: Seat::Landlord,
            history: Vec::new(),
            played: [Vec::new(), Vec::new(), Vec::new()],
            to_beat: None,
            last_to_play: None,
            passes_since_play: 0,
            bombs: 0,
            winner: None,
        }
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn acting_seat(&self) -> Seat {
        self.acting
    }

    pub fn history(&self) -> &[PlayRecord] {
        &self.history
    }

    /// Cards each seat has played so far, in play order.
    pub fn played(&self, seat: Seat) -> &[Card] {
        &self.played[seat.index()]
    }

    /// The reserved landlord cards not yet played by the landlord.
    pub fn reserved_cards(&self) -> &[Card] {
        &self.reserved
    }

    /// The play the acting seat must beat; `None` when leading a fresh trick.
    pub fn move_to_beat(&self) -> Option<&Move> {
        self.to_beat.as_ref().map(|(mv, _)| mv)
    }

    pub fn combo_to_beat(&self) -> Option<&Combo> {
        self.to_beat.as_ref().map(|(_, combo)| combo)
    }

    /// Seat that made the most recent non-pass play.
    pub fn last_to_play(&self) -> Option<Seat> {
        self.last_to_play
    }

    /// Bombs and rockets played so far; each doubles the final multiplier.
    pub fn bomb_count(&self) -> u32 {
        self.bombs
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Legal moves for the acting seat against the current move-to-beat.
    pub fn legal_moves(&self) -> Vec<Move> {
        generator::legal_moves(&self.hands[self.acting.index()], self.combo_to_beat())
    }

    /// Applies one turn. On any error the state is left exactly as it was;
    /// rejections are reported, never corrected.
    pub fn apply(&mut self, seat: Seat, action: &Move) -> Result<PlayOutcome, PlayError> {
        if self.winner.is_some() {
            return Err(PlayError::GameOver);
        }
        if seat != self.acting {
            return Err(PlayError::OutOfTurn {
                expected: self.acting,
                actual: seat,
            });
        }

        let combo = generator::validate(
            &self.hands[seat.index()],
            action,
            self.combo_to_beat(),
        )
        .map_err(PlayError::Move)?;

        self.hands[seat.index()]
            .remove_all(action.cards())
            .map_err(|card| PlayError::Move(MoveError::CardNotInHand(card)))?;
        self.history.push(PlayRecord {
            seat,
            action: action.clone(),
        });

        match combo {
            Some(combo) => {
                self.played[seat.index()].extend_from_slice(action.cards());
                self.last_to_play = Some(seat);
                self.passes_since_play = 0;
                if combo.category.is_bomb() {
                    self.bombs += 1;
                }
                self.to_beat = Some((action.clone(), combo));

                if seat == Seat::Landlord {
                    self.prune_reserved(action.cards());
                }

                if self.hands[seat.index()].is_empty() {
                    let winner = seat.side();
                    self.winner = Some(winner);
                    return Ok(PlayOutcome::Finished { winner });
                }
            }
            None => {
                self.passes_since_play += 1;
                if self.passes_since_play == 2 {
                    // Both opponents declined: the trick is over and the
                    // next actor leads fresh.
                    self.to_beat = None;
                    self.passes_since_play = 0;
                }
            }
        }

        self.acting = self.acting.next();
        Ok(PlayOutcome::Played)
    }

    /// Drops played copies from the reserved three. The scan walks the
    /// play's cards in order and stops once the reserved set is empty.
    fn prune_reserved(&mut self, cards: &[Card]) {
        for &card in cards {
            if self.reserved.is_empty() {
                break;
            }
            if let Some(index) = self.reserved.iter().position(|&c| c == card) {
                self.reserved.remove(index);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    Finished { winner: Side },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    GameOver,
    OutOfTurn { expected: Seat, actual: Seat },
    Move(MoveError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::GameOver => write!(f, "the game is already decided"),
            PlayError::OutOfTurn { expected, actual } => {
                write!(f, "expected {expected} to act but got {actual}")
            }
            PlayError::Move(inner) => write!(f, "{inner}"),
        }
    }
}

impl std::error::Error for PlayError {}
