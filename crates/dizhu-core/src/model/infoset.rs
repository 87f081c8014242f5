use crate::model::card::Card;
use crate::model::game::{GameState, PlayRecord};
use crate::model::play::Move;
use crate::model::seat::{Seat, Side};

/// What one seat is allowed to see: its own cards, everyone's counts, and
/// the public record of the game. Derived on demand from [`GameState`] and
/// never the source of truth.
///
/// Legal moves are present only in the acting seat's own view; computing
/// them for any other target would require that seat's hidden hand.
#[derive(Debug, Clone)]
pub struct InformationSet {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub hand_sizes: [usize; 3],
    pub acting: Seat,
    pub move_to_beat: Option<Move>,
    pub legal_moves: Option<Vec<Move>>,
    pub history: Vec<PlayRecord>,
    pub played: [Vec<Card>; 3],
    pub reserved: Vec<Card>,
    pub winner: Option<Side>,
}

impl InformationSet {
    pub fn observe(state: &GameState, seat: Seat) -> Self {
        let mut hand_sizes = [0usize; 3];
        let mut played: [Vec<Card>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        for &other in &Seat::LOOP {
            hand_sizes[other.index()] = state.hand(other).len();
            played[other.index()] = state.played(other).to_vec();
        }

        let legal_moves =
            (seat == state.acting_seat() && !state.is_over()).then(|| state.legal_moves());

        Self {
            seat,
            hand: state.hand(seat).cards().to_vec(),
            hand_sizes,
            acting: state.acting_seat(),
            move_to_beat: state.move_to_beat().cloned(),
            legal_moves,
            history: state.history().to_vec(),
            played,
            reserved: state.reserved_cards().to_vec(),
            winner: state.winner(),
        }
    }

    pub fn hand_size(&self, seat: Seat) -> usize {
        self.hand_sizes[seat.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::InformationSet;
    use crate::model::deck::Deck;
    use crate::model::game::GameState;
    use crate::model::seat::Seat;

    #[test]
    fn exposes_own_hand_and_only_counts_for_others() {
        let state = GameState::deal(&Deck::shuffled_with_seed(11)).unwrap();
        let info = InformationSet::observe(&state, Seat::LandlordUp);

        assert_eq!(info.seat, Seat::LandlordUp);
        assert_eq!(info.hand.len(), 17);
        assert_eq!(info.hand, state.hand(Seat::LandlordUp).cards());
        assert_eq!(info.hand_size(Seat::Landlord), 20);
        assert_eq!(info.hand_size(Seat::LandlordDown), 17);
    }

    #[test]
    fn legal_moves_only_for_the_acting_seat() {
        let state = GameState::deal(&Deck::shuffled_with_seed(11)).unwrap();

        let acting = InformationSet::observe(&state, Seat::Landlord);
        assert!(acting.legal_moves.as_ref().is_some_and(|m| !m.is_empty()));

        let observer = InformationSet::observe(&state, Seat::LandlordDown);
        assert!(observer.legal_moves.is_none());
    }

    #[test]
    fn projection_tracks_public_record() {
        let mut state = GameState::deal(&Deck::shuffled_with_seed(11)).unwrap();
        let lead = state.legal_moves().into_iter().next().unwrap();
        state.apply(Seat::Landlord, &lead).unwrap();

        let info = InformationSet::observe(&state, Seat::LandlordDown);
        assert_eq!(info.history.len(), 1);
        assert_eq!(info.move_to_beat.as_ref(), Some(&lead));
        assert_eq!(info.played[Seat::Landlord.index()], lead.cards());
        assert_eq!(info.acting, Seat::LandlordUp);
    }

    #[test]
    fn reserved_cards_are_visible_to_everyone() {
        let state = GameState::deal(&Deck::shuffled_with_seed(11)).unwrap();
        for &seat in &Seat::LOOP {
            let info = InformationSet::observe(&state, seat);
            assert_eq!(info.reserved, state.reserved_cards());
        }
    }
}
