use crate::model::card::Card;
use crate::model::combo::{Combo, classify, rank_groups};
use crate::model::hand::Hand;
use crate::model::play::Move;
use std::collections::BTreeSet;
use std::fmt;

/// Why a candidate move was rejected.
///
/// `CardNotInHand` signals a state-consistency bug in the caller, not a
/// rules violation; the other two are ordinary rejections the caller may
/// recover from by re-consulting its agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    CardNotInHand(Card),
    MalformedMove,
    IllegalResponse,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::CardNotInHand(card) => {
                write!(f, "acting seat does not hold {card}")
            }
            MoveError::MalformedMove => {
                write!(f, "cards do not form a recognized combination")
            }
            MoveError::IllegalResponse => {
                write!(
                    f,
                    "move does not beat the current play, or passes when a play is required"
                )
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Checks one candidate move without enumerating alternatives.
///
/// Returns the classification for a play, `None` for an accepted pass.
/// Never mutates the hand.
pub fn validate(
    hand: &Hand,
    mv: &Move,
    to_beat: Option<&Combo>,
) -> Result<Option<Combo>, MoveError> {
    if mv.is_pass() {
        return match to_beat {
            Some(_) => Ok(None),
            None => Err(MoveError::IllegalResponse),
        };
    }
    for &(rank, needed) in &rank_groups(mv.cards()) {
        if hand.count_of(rank) < needed {
            return Err(MoveError::CardNotInHand(rank));
        }
    }
    let combo = classify(mv.cards()).ok_or(MoveError::MalformedMove)?;
    if let Some(target) = to_beat {
        if !combo.beats(target) {
            return Err(MoveError::IllegalResponse);
        }
    }
    Ok(Some(combo))
}

/// Every legal move for `hand` against `to_beat`.
///
/// Leading (`None`): all classifiable combinations present in the hand,
/// deduplicated by the exact card multiset; no pass. Responding: the pass
/// plus every combination that beats the target.
pub fn legal_moves(hand: &Hand, to_beat: Option<&Combo>) -> Vec<Move> {
    match to_beat {
        None => lead_moves(hand),
        Some(target) => {
            let mut moves = vec![Move::pass()];
            moves.extend(
                lead_moves(hand)
                    .into_iter()
                    .filter(|mv| mv.combo().is_some_and(|combo| combo.beats(target))),
            );
            moves
        }
    }
}

fn lead_moves(hand: &Hand) -> Vec<Move> {
    let groups = rank_groups(hand.cards());
    let mut seen: BTreeSet<Vec<Card>> = BTreeSet::new();

    for &(rank, count) in &groups {
        seen.insert(vec![rank]);
        for width in 2..=count.min(4) {
            seen.insert(vec![rank; width]);
        }
    }

    if hand.contains(Card::BlackJoker) && hand.contains(Card::RedJoker) {
        seen.insert(vec![Card::BlackJoker, Card::RedJoker]);
    }

    for &(trio, count) in &groups {
        if count < 3 {
            continue;
        }
        for &(other, other_count) in &groups {
            if other == trio {
                continue;
            }
            insert_with_attachment(&mut seen, &[trio; 3], &[other]);
            if other_count >= 2 {
                insert_with_attachment(&mut seen, &[trio; 3], &[other, other]);
            }
        }
    }

    for &(quad, count) in &groups {
        if count < 4 {
            continue;
        }
        let spare = spare_counts(&groups, &[quad], 4);
        for wings in card_multisets(&spare, 2) {
            insert_with_attachment(&mut seen, &[quad; 4], &wings);
        }
        let pair_ranks = pair_ranks(&spare);
        for wings in rank_combinations(&pair_ranks, 2) {
            let doubled: Vec<Card> = wings.iter().flat_map(|&r| [r, r]).collect();
            insert_with_attachment(&mut seen, &[quad; 4], &doubled);
        }
    }

    run_windows(&groups, 1, 5, 12, |window| {
        seen.insert(window.to_vec());
    });
    run_windows(&groups, 2, 3, 10, |window| {
        let cards: Vec<Card> = window.iter().flat_map(|&r| [r, r]).collect();
        seen.insert(cards);
    });

    let mut airplanes: Vec<Vec<Card>> = Vec::new();
    run_windows(&groups, 3, 2, 6, |window| {
        airplanes.push(window.to_vec());
    });
    for window in &airplanes {
        let trio_cards: Vec<Card> = window.iter().flat_map(|&r| [r, r, r]).collect();
        seen.insert(trio_cards.clone());

        let spare = spare_counts(&groups, window, 3);
        for wings in card_multisets(&spare, window.len()) {
            insert_with_attachment(&mut seen, &trio_cards, &wings);
        }
        let pair_ranks = pair_ranks(&spare);
        for wings in rank_combinations(&pair_ranks, window.len()) {
            let doubled: Vec<Card> = wings.iter().flat_map(|&r| [r, r]).collect();
            insert_with_attachment(&mut seen, &trio_cards, &doubled);
        }
    }

    seen.into_iter().map(Move::from_cards).collect()
}

fn insert_with_attachment(seen: &mut BTreeSet<Vec<Card>>, base: &[Card], attachment: &[Card]) {
    let mut cards = base.to_vec();
    cards.extend_from_slice(attachment);
    cards.sort();
    seen.insert(cards);
}

/// Remaining copies per rank after removing `used_per_rank` copies of every
/// rank in `used`.
fn spare_counts(
    groups: &[(Card, usize)],
    used: &[Card],
    used_per_rank: usize,
) -> Vec<(Card, usize)> {
    groups
        .iter()
        .filter_map(|&(rank, count)| {
            let left = if used.contains(&rank) {
                count.saturating_sub(used_per_rank)
            } else {
                count
            };
            (left > 0).then_some((rank, left))
        })
        .collect()
}

fn pair_ranks(spare: &[(Card, usize)]) -> Vec<Card> {
    spare
        .iter()
        .filter(|&&(_, count)| count >= 2)
        .map(|&(rank, _)| rank)
        .collect()
}

/// All card multisets of `size` drawn from the spare pool, each rank bounded
/// by its remaining copies.
fn card_multisets(pool: &[(Card, usize)], size: usize) -> Vec<Vec<Card>> {
    fn recurse(
        pool: &[(Card, usize)],
        at: usize,
        remaining: usize,
        current: &mut Vec<Card>,
        out: &mut Vec<Vec<Card>>,
    ) {
        if remaining == 0 {
            out.push(current.clone());
            return;
        }
        if at >= pool.len() {
            return;
        }
        let (rank, available) = pool[at];
        for take in 0..=available.min(remaining) {
            for _ in 0..take {
                current.push(rank);
            }
            recurse(pool, at + 1, remaining - take, current, out);
            for _ in 0..take {
                current.pop();
            }
        }
    }

    let mut out = Vec::new();
    recurse(pool, 0, size, &mut Vec::new(), &mut out);
    out
}

/// All combinations of `choose` distinct ranks.
fn rank_combinations(ranks: &[Card], choose: usize) -> Vec<Vec<Card>> {
    fn recurse(
        ranks: &[Card],
        at: usize,
        remaining: usize,
        current: &mut Vec<Card>,
        out: &mut Vec<Vec<Card>>,
    ) {
        if remaining == 0 {
            out.push(current.clone());
            return;
        }
        if ranks.len() - at < remaining {
            return;
        }
        current.push(ranks[at]);
        recurse(ranks, at + 1, remaining - 1, current, out);
        current.pop();
        recurse(ranks, at + 1, remaining, current, out);
    }

    let mut out = Vec::new();
    if choose <= ranks.len() {
        recurse(ranks, 0, choose, &mut Vec::new(), &mut out);
    }
    out
}

/// Visits every window of consecutive sequence ranks whose multiplicity in
/// the hand is at least `copies`, for window widths in
/// `min_width..=max_width`.
fn run_windows(
    groups: &[(Card, usize)],
    copies: usize,
    min_width: usize,
    max_width: usize,
    mut visit: impl FnMut(&[Card]),
) {
    let eligible: Vec<Card> = groups
        .iter()
        .filter(|&&(rank, count)| count >= copies && rank.is_sequence_rank())
        .map(|&(rank, _)| rank)
        .collect();

    let mut start = 0;
    while start < eligible.len() {
        let mut end = start + 1;
        while end < eligible.len()
            && eligible[end].value() == eligible[end - 1].value() + 1
        {
            end += 1;
        }
        let chain = &eligible[start..end];
        for width in min_width..=max_width.min(chain.len()) {
            for window in chain.windows(width) {
                visit(window);
            }
        }
        start = end;
    }
}
