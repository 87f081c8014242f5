use super::session::{Session, SessionError};
use crate::model::seat::Side;
use serde::{Deserialize, Serialize};

/// The durable identity of a session: enough to re-deal the current game
/// and carry the tallies forward. Hands in progress are not captured; a
/// restored session restarts its current game from the deal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub seed: u64,
    pub game_number: u32,
    pub landlord_wins: u32,
    pub farmer_wins: u32,
    pub landlord_score: i64,
    pub farmer_score: i64,
}

impl SessionSnapshot {
    pub fn capture(session: &Session) -> Self {
        let scores = session.scores();
        SessionSnapshot {
            seed: session.seed(),
            game_number: session.game_number(),
            landlord_wins: scores.wins(Side::Landlord),
            farmer_wins: scores.wins(Side::Farmers),
            landlord_score: scores.score(Side::Landlord),
            farmer_score: scores.score(Side::Farmers),
        }
    }

    pub fn restore(self) -> Result<Session, SessionError> {
        let mut session =
            Session::with_seed_game(self.seed, self.game_number).map_err(SessionError::Deal)?;
        session.scores_mut().set_tallies(
            [self.landlord_wins, self.farmer_wins],
            [self.landlord_score, self.farmer_score],
        );
        Ok(session)
    }

    pub fn to_json(session: &Session) -> serde_json::Result<String> {
        let snapshot = Self::capture(session);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionSnapshot;
    use crate::game::session::Session;
    use crate::model::seat::{Seat, Side};

    #[test]
    fn snapshot_serializes_to_json() {
        let session = Session::with_seed(99).unwrap();
        let json = SessionSnapshot::to_json(&session).unwrap();
        assert!(json.contains("\"seed\": 99"));
        assert!(json.contains("\"game_number\": 1"));
    }

    #[test]
    fn snapshot_roundtrip_restores_deal_and_tallies() {
        let mut session = Session::with_seed(123).unwrap();
        session.scores_mut().set_tallies([3, 1], [5, -5]);

        let snapshot = SessionSnapshot::capture(&session);
        let restored = snapshot.clone().restore().unwrap();

        assert_eq!(restored.seed(), 123);
        assert_eq!(restored.scores().wins(Side::Landlord), 3);
        assert_eq!(restored.scores().score(Side::Farmers), -5);
        for &seat in &Seat::LOOP {
            assert_eq!(restored.game().hand(seat), session.game().hand(seat));
        }
    }

    #[test]
    fn snapshot_from_json_ignores_unknown_fields() {
        let legacy = r#"{
            "seed": 7,
            "game_number": 2,
            "landlord_wins": 1,
            "farmer_wins": 0,
            "landlord_score": 2,
            "farmer_score": -2,
            "bomb_total": 4
        }"#;

        let snapshot = SessionSnapshot::from_json(legacy).unwrap();
        assert_eq!(snapshot.game_number, 2);
        assert_eq!(snapshot.landlord_score, 2);
    }
}
