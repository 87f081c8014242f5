use anyhow::{Context, Result};
use dizhu_bot::Agent;
use dizhu_core::model::card::render_cards;
use dizhu_core::model::game::PlayOutcome;
use dizhu_core::model::infoset::InformationSet;
use dizhu_core::model::score::multiplier;
use dizhu_core::model::seat::{Seat, Side};
use dizhu_core::game::session::Session;
use tracing::info;

use crate::human;

/// Plays the current game to completion with one agent per seat.
///
/// When the acting seat has exactly one legal move it is played without
/// consulting the agent. Any rejected proposal is a bug in the proposing
/// agent and surfaces as an error.
pub fn run_game(
    session: &mut Session,
    agents: &mut [Box<dyn Agent>; 3],
    echo: bool,
) -> Result<Side> {
    loop {
        let acting = session.game().acting_seat();
        let info = InformationSet::observe(session.game(), acting);
        let action = match info.legal_moves.as_deref() {
            Some([only]) => only.clone(),
            _ => agents[acting.index()].act(&info),
        };

        let outcome = session
            .game_mut()
            .apply(acting, &action)
            .with_context(|| format!("{acting} proposed an illegal move '{action}'"))?;
        if echo {
            println!("{acting}: {action}");
        }

        match outcome {
            PlayOutcome::Finished { winner } => return Ok(winner),
            PlayOutcome::Played => {}
        }
    }
}

/// Plays `games` consecutive bot games, settling each into the session
/// tallies.
pub fn run_games(
    session: &mut Session,
    agents: &mut [Box<dyn Agent>; 3],
    games: u32,
    echo: bool,
) -> Result<()> {
    for _ in 0..games {
        let winner = run_game(session, agents, echo)?;
        let bombs = session.game().bomb_count();
        info!(
            game = session.game_number(),
            %winner,
            bombs,
            points = multiplier(bombs),
            "game finished"
        );
        if echo {
            println!("{winner} side wins (x{})", multiplier(bombs));
        }
        session
            .settle_and_start_next()
            .context("advancing to the next deal")?;
    }
    Ok(())
}

/// One interactive game: the human plays the landlord from stdin, the two
/// farmers are bots. Returns the winning side; the game is left terminal
/// for the caller to settle.
pub fn run_interactive(
    session: &mut Session,
    farmers: &mut [Box<dyn Agent>; 2],
) -> Result<Side> {
    loop {
        let acting = session.game().acting_seat();
        let info = InformationSet::observe(session.game(), acting);
        let action = match acting {
            Seat::Landlord => human::prompt_move(&info)?,
            Seat::LandlordUp => farmer_action(&info, &mut *farmers[0]),
            Seat::LandlordDown => farmer_action(&info, &mut *farmers[1]),
        };

        let outcome = session
            .game_mut()
            .apply(acting, &action)
            .with_context(|| format!("{acting} proposed an illegal move '{action}'"))?;
        println!("{acting}: {action}");

        if let PlayOutcome::Finished { winner } = outcome {
            for &seat in &Seat::LOOP {
                println!(
                    "{seat} left: {}",
                    render_cards(session.game().hand(seat).cards())
                );
            }
            return Ok(winner);
        }
    }
}

fn farmer_action(info: &InformationSet, agent: &mut dyn Agent) -> dizhu_core::model::play::Move {
    match info.legal_moves.as_deref() {
        Some([only]) => only.clone(),
        _ => agent.act(info),
    }
}

pub fn print_tallies(session: &Session) {
    let scores = session.scores();
    println!(
        "landlord  wins {:>3}  score {:>5}",
        scores.wins(Side::Landlord),
        scores.score(Side::Landlord)
    );
    println!(
        "farmers   wins {:>3}  score {:>5}",
        scores.wins(Side::Farmers),
        scores.score(Side::Farmers)
    );
}
