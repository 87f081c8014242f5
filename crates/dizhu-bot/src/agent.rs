use dizhu_core::model::infoset::InformationSet;
use dizhu_core::model::play::Move;

/// A decision-maker for one seat.
///
/// The engine consults the agent once per turn with the acting seat's
/// information set and validates whatever comes back; a returned move is a
/// proposal, never trusted. Implementations may keep state across turns.
pub trait Agent: Send {
    fn act(&mut self, info: &InformationSet) -> Move;
}
