use anyhow::{Context, Result, bail};
use dizhu_core::model::card::render_cards;
use dizhu_core::model::infoset::InformationSet;
use dizhu_core::model::play::Move;
use dizhu_core::model::seat::Seat;
use std::io::{self, BufRead, Write};

/// Prompts the landlord for a move on stdin until a legal one arrives.
///
/// Input uses the one-character-per-card encoding (`34567`, `XD`, ...) with
/// `n` or `pass` for the pass. Bad input re-prompts; a closed stdin is an
/// error. A forced move is played without prompting.
pub fn prompt_move(info: &InformationSet) -> Result<Move> {
    let legal = info
        .legal_moves
        .as_deref()
        .context("prompted for a seat that is not acting")?;
    if let [only] = legal {
        println!("forced: {only}");
        return Ok(only.clone());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!(
            "{} | {} | {}",
            info.hand_size(Seat::LandlordUp),
            render_cards(&info.hand),
            info.hand_size(Seat::LandlordDown),
        );
        print!("INPUT: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("input closed before a move was chosen");
        };
        let line = line?;
        let action = match Move::parse(line.trim()) {
            Ok(action) => action,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if legal.contains(&action) {
            return Ok(action);
        }
        println!("'{action}' is not a legal move here");
    }
}
