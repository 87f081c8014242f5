use crate::agent::Agent;
use dizhu_core::model::combo::Combo;
use dizhu_core::model::infoset::InformationSet;
use dizhu_core::model::play::Move;
use tracing::{Level, event};

/// Hand sizes at or below this commit bombs to win races instead of
/// holding them for a later trick.
const BOMB_COMMIT_HAND_SIZE: usize = 10;

/// Deterministic baseline: sheds as many cards as possible when leading,
/// answers with the cheapest beating combination, and keeps bombs back
/// until the hand is short enough to race.
pub struct GreedyAgent;

impl GreedyAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn act(&mut self, info: &InformationSet) -> Move {
        let legal = info
            .legal_moves
            .as_deref()
            .expect("greedy agent consulted for a non-acting seat");

        let classified: Vec<(&Move, Combo)> = legal
            .iter()
            .filter_map(|m| m.combo().map(|combo| (m, combo)))
            .collect();

        let hand_size = info.hand.len();
        let (chosen, reason) = if info.move_to_beat.is_none() {
            choose_lead(&classified, hand_size)
        } else {
            choose_response(&classified, hand_size)
        };

        log_decision(info, legal.len(), &chosen, reason);
        chosen
    }
}

fn win_out(classified: &[(&Move, Combo)], hand_size: usize) -> Option<Move> {
    classified
        .iter()
        .find(|(mv, _)| mv.len() == hand_size)
        .map(|(mv, _)| (*mv).clone())
}

fn choose_lead(classified: &[(&Move, Combo)], hand_size: usize) -> (Move, &'static str) {
    if let Some(mv) = win_out(classified, hand_size) {
        return (mv, "lead_out");
    }

    // Singles are always available when leading, so a non-bomb pick exists.
    let (mv, _) = classified
        .iter()
        .filter(|(_, combo)| !combo.category.is_bomb())
        .max_by(|(_, a), (_, b)| {
            a.len
                .cmp(&b.len)
                .then_with(|| b.primary.cmp(&a.primary))
        })
        .expect("leading seat always has a playable combination");
    ((*mv).clone(), "lead_shed_most")
}

fn choose_response(classified: &[(&Move, Combo)], hand_size: usize) -> (Move, &'static str) {
    if let Some(mv) = win_out(classified, hand_size) {
        return (mv, "respond_out");
    }

    let cheapest_plain = classified
        .iter()
        .filter(|(_, combo)| !combo.category.is_bomb())
        .min_by_key(|(_, combo)| combo.primary);

    if let Some((mv, _)) = cheapest_plain {
        return ((*mv).clone(), "respond_cheapest");
    }

    if hand_size <= BOMB_COMMIT_HAND_SIZE {
        if let Some((mv, _)) = classified
            .iter()
            .min_by_key(|(_, combo)| combo.primary)
        {
            return ((*mv).clone(), "respond_bomb_race");
        }
    }

    (Move::pass(), "respond_hold_back")
}

fn log_decision(info: &InformationSet, legal_count: usize, chosen: &Move, reason: &str) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    if detail_logging_enabled() {
        event!(
            target: "dizhu_bot::play",
            Level::DEBUG,
            seat = %info.seat,
            hand_size = info.hand.len(),
            legal_count,
            to_beat = %info
                .move_to_beat
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string()),
            chosen = %chosen,
            reason,
        );
    } else {
        event!(
            target: "dizhu_bot::play",
            Level::DEBUG,
            seat = %info.seat,
            chosen = %chosen,
            reason,
        );
    }
}

fn detail_logging_enabled() -> bool {
    std::env::var("MDD_BOT_DETAILS")
        .map(|raw| matches!(raw.trim(), "1" | "true" | "TRUE" | "on" | "ON"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::GreedyAgent;
    use crate::agent::Agent;
    use dizhu_core::game::session::Session;
    use dizhu_core::model::game::PlayOutcome;
    use dizhu_core::model::infoset::InformationSet;

    #[test]
    fn lead_sheds_the_largest_combination() {
        let session = Session::with_seed(21).unwrap();
        let info = InformationSet::observe(session.game(), session.game().acting_seat());
        let legal = info.legal_moves.clone().unwrap();

        let chosen = GreedyAgent::new().act(&info);
        assert!(!chosen.is_pass());
        assert!(legal.contains(&chosen));

        let max_plain_len = legal
            .iter()
            .filter_map(|m| m.combo())
            .filter(|c| !c.category.is_bomb())
            .map(|c| c.len)
            .max()
            .unwrap();
        assert_eq!(chosen.combo().unwrap().len, max_plain_len);
    }

    #[test]
    fn decisions_are_deterministic() {
        let session = Session::with_seed(34).unwrap();
        let info = InformationSet::observe(session.game(), session.game().acting_seat());
        assert_eq!(GreedyAgent::new().act(&info), GreedyAgent::new().act(&info));
    }

    #[test]
    fn greedy_table_plays_full_games_to_completion() {
        let mut session = Session::with_seed(55).unwrap();
        let mut agents = [GreedyAgent::new(), GreedyAgent::new(), GreedyAgent::new()];

        for _ in 0..4 {
            loop {
                let acting = session.game().acting_seat();
                let info = InformationSet::observe(session.game(), acting);
                let action = agents[acting.index()].act(&info);
                match session
                    .game_mut()
                    .apply(acting, &action)
                    .expect("greedy agents only propose legal moves")
                {
                    PlayOutcome::Finished { .. } => break,
                    PlayOutcome::Played => {}
                }
            }
            session.settle_and_start_next().unwrap();
        }

        let (wins, _) = session.scores().tallies();
        assert_eq!(wins.iter().sum::<u32>(), 4);
    }

    #[test]
    fn detail_logging_follows_env_flag() {
        unsafe {
            std::env::remove_var("MDD_BOT_DETAILS");
        }
        assert!(!super::detail_logging_enabled());
        unsafe {
            std::env::set_var("MDD_BOT_DETAILS", "on");
        }
        assert!(super::detail_logging_enabled());
        unsafe {
            std::env::remove_var("MDD_BOT_DETAILS");
        }
    }
}
