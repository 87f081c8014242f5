use crate::model::card::Card;
use core::fmt;

/// Every recognized play shape. The set is closed; anything else is a
/// malformed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Single,
    Pair,
    Trio,
    TrioWithSingle,
    TrioWithPair,
    Sequence,
    SequencePair,
    AirplaneNoWing,
    AirplaneSmallWing,
    AirplaneBigWing,
    FourWithTwoSingles,
    FourWithTwoPairs,
    Bomb,
    Rocket,
}

impl Category {
    /// Bombs and the rocket bypass the same-category rule.
    pub const fn is_bomb(self) -> bool {
        matches!(self, Category::Bomb | Category::Rocket)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Single => "single",
            Category::Pair => "pair",
            Category::Trio => "trio",
            Category::TrioWithSingle => "trio with single",
            Category::TrioWithPair => "trio with pair",
            Category::Sequence => "sequence",
            Category::SequencePair => "sequence of pairs",
            Category::AirplaneNoWing => "airplane",
            Category::AirplaneSmallWing => "airplane with single wings",
            Category::AirplaneBigWing => "airplane with pair wings",
            Category::FourWithTwoSingles => "four with two singles",
            Category::FourWithTwoPairs => "four with two pairs",
            Category::Bomb => "bomb",
            Category::Rocket => "rocket",
        };
        f.write_str(label)
    }
}

/// A classified play: category, the rank that decides comparisons, and the
/// card count. Derived from the card multiset alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combo {
    pub category: Category,
    pub primary: Card,
    pub len: usize,
}

impl Combo {
    pub const fn new(category: Category, primary: Card, len: usize) -> Self {
        Self {
            category,
            primary,
            len,
        }
    }

    /// The comparison rule. Rocket beats everything; a bomb beats anything
    /// except the rocket and a bomb of equal or higher rank; every other
    /// category beats only the same category at the same card count, by
    /// primary rank.
    pub fn beats(&self, target: &Combo) -> bool {
        if self.category == Category::Rocket {
            return true;
        }
        if target.category == Category::Rocket {
            return false;
        }
        if self.category == Category::Bomb {
            return if target.category == Category::Bomb {
                self.primary > target.primary
            } else {
                true
            };
        }
        if target.category == Category::Bomb {
            return false;
        }
        self.category == target.category
            && self.len == target.len
            && self.primary > target.primary
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} ({} cards)", self.category, self.primary, self.len)
    }
}

/// Rank multiplicities in ascending rank order.
pub(crate) fn rank_groups(cards: &[Card]) -> Vec<(Card, usize)> {
    let mut sorted = cards.to_vec();
    sorted.sort();
    let mut groups: Vec<(Card, usize)> = Vec::new();
    for card in sorted {
        match groups.last_mut() {
            Some((rank, count)) if *rank == card => *count += 1,
            _ => groups.push((card, 1)),
        }
    }
    groups
}

fn consecutive_sequence_ranks(ranks: &[(Card, usize)]) -> bool {
    ranks.iter().all(|&(rank, _)| rank.is_sequence_rank())
        && ranks
            .windows(2)
            .all(|pair| pair[1].0.value() == pair[0].0.value() + 1)
}

/// Classifies a card multiset, or `None` when the cards form no recognized
/// combination. The result depends only on the multiset of ranks; input
/// order is irrelevant. The empty slice is the pass and is not a combo.
pub fn classify(cards: &[Card]) -> Option<Combo> {
    if cards.is_empty() {
        return None;
    }
    let groups = rank_groups(cards);
    let len = cards.len();

    match len {
        1 => return Some(Combo::new(Category::Single, groups[0].0, 1)),
        2 => {
            if groups.len() == 1 {
                return Some(Combo::new(Category::Pair, groups[0].0, 2));
            }
            if groups[0].0 == Card::BlackJoker && groups[1].0 == Card::RedJoker {
                return Some(Combo::new(Category::Rocket, Card::RedJoker, 2));
            }
            return None;
        }
        3 => {
            if groups.len() == 1 {
                return Some(Combo::new(Category::Trio, groups[0].0, 3));
            }
            return None;
        }
        4 => {
            if groups.len() == 1 {
                return Some(Combo::new(Category::Bomb, groups[0].0, 4));
            }
            if let Some(&(rank, _)) = groups.iter().find(|&&(_, count)| count == 3) {
                return Some(Combo::new(Category::TrioWithSingle, rank, 4));
            }
            return None;
        }
        _ => {}
    }

    if len == 5 && groups.len() == 2 {
        if let Some(&(rank, _)) = groups.iter().find(|&&(_, count)| count == 3) {
            return Some(Combo::new(Category::TrioWithPair, rank, 5));
        }
    }

    if let Some(combo) = classify_uniform_run(&groups, len) {
        return Some(combo);
    }

    if len == 6 {
        if let Some(&(rank, _)) = groups.iter().find(|&&(_, count)| count == 4) {
            return Some(Combo::new(Category::FourWithTwoSingles, rank, 6));
        }
    }

    if len == 8 {
        // Highest quad whose leftovers form two clean pairs wins the
        // quad-vs-airplane ambiguity.
        for &(rank, count) in groups.iter().rev() {
            if count == 4
                && groups
                    .iter()
                    .all(|&(other, c)| other == rank || c == 2)
            {
                return Some(Combo::new(Category::FourWithTwoPairs, rank, 8));
            }
        }
    }

    if len % 4 == 0 {
        if let Some(combo) = classify_airplane_small(&groups, len) {
            return Some(combo);
        }
    }

    if len % 5 == 0 {
        if let Some(combo) = classify_airplane_big(&groups, len) {
            return Some(combo);
        }
    }

    None
}

/// Runs whose every rank appears the same number of times: sequences,
/// sequences of pairs, and wingless airplanes.
fn classify_uniform_run(groups: &[(Card, usize)], len: usize) -> Option<Combo> {
    if !consecutive_sequence_ranks(groups) {
        return None;
    }
    let primary = groups.last()?.0;
    if groups.iter().all(|&(_, count)| count == 1) && len >= 5 {
        return Some(Combo::new(Category::Sequence, primary, len));
    }
    if groups.iter().all(|&(_, count)| count == 2) && groups.len() >= 3 {
        return Some(Combo::new(Category::SequencePair, primary, len));
    }
    if groups.iter().all(|&(_, count)| count == 3) && groups.len() >= 2 {
        return Some(Combo::new(Category::AirplaneNoWing, primary, len));
    }
    None
}

/// Ranks that can anchor a trio run, ascending.
fn trio_run_ranks(groups: &[(Card, usize)]) -> Vec<Card> {
    groups
        .iter()
        .filter(|&&(rank, count)| count >= 3 && rank.is_sequence_rank())
        .map(|&(rank, _)| rank)
        .collect()
}

/// `wings` trios + `wings` single attachments. Any leftover cards serve as
/// wings, so any consecutive trio window of the right width qualifies; the
/// highest window decides the primary rank.
fn classify_airplane_small(groups: &[(Card, usize)], len: usize) -> Option<Combo> {
    let wings = len / 4;
    if wings < 2 {
        return None;
    }
    let ranks = trio_run_ranks(groups);
    highest_consecutive_window(&ranks, wings)
        .map(|primary| Combo::new(Category::AirplaneSmallWing, primary, len))
}

/// `wings` trios + `wings` pair attachments; every non-trio leftover must be
/// exactly one pair of a distinct rank.
fn classify_airplane_big(groups: &[(Card, usize)], len: usize) -> Option<Combo> {
    let wings = len / 5;
    if wings < 2 {
        return None;
    }
    let ranks = trio_run_ranks(groups);
    let mut best: Option<Card> = None;
    for start in 0..ranks.len().saturating_sub(wings - 1) {
        let window = &ranks[start..start + wings];
        if !window
            .windows(2)
            .all(|pair| pair[1].value() == pair[0].value() + 1)
        {
            continue;
        }
        let clean = groups.iter().all(|&(rank, count)| {
            let leftover = if window.contains(&rank) { count - 3 } else { count };
            leftover == 0 || leftover == 2
        });
        if clean {
            best = Some(window[wings - 1]);
        }
    }
    best.map(|primary| Combo::new(Category::AirplaneBigWing, primary, len))
}

fn highest_consecutive_window(ranks: &[Card], width: usize) -> Option<Card> {
    if ranks.len() < width {
        return None;
    }
    let mut best = None;
    for window in ranks.windows(width) {
        let consecutive = window
            .windows(2)
            .all(|pair| pair[1].value() == pair[0].value() + 1);
        if consecutive {
            best = Some(window[width - 1]);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::{Category, classify};
    use crate::model::card::Card;

    fn cards(encoded: &str) -> Vec<Card> {
        encoded
            .chars()
            .map(|ch| Card::from_char(ch).expect("test card"))
            .collect()
    }

    fn check(encoded: &str, category: Category, primary: Card) {
        let combo = classify(&cards(encoded))
            .unwrap_or_else(|| panic!("{encoded} should classify"));
        assert_eq!(combo.category, category, "{encoded}");
        assert_eq!(combo.primary, primary, "{encoded}");
        assert_eq!(combo.len, encoded.len(), "{encoded}");
    }

    fn rejected(encoded: &str) {
        assert_eq!(classify(&cards(encoded)), None, "{encoded} must be rejected");
    }

    #[test]
    fn simple_shapes() {
        check("7", Category::Single, Card::Seven);
        check("D", Category::Single, Card::RedJoker);
        check("99", Category::Pair, Card::Nine);
        check("QQQ", Category::Trio, Card::Queen);
        check("5555", Category::Bomb, Card::Five);
        check("XD", Category::Rocket, Card::RedJoker);
        check("8883", Category::TrioWithSingle, Card::Eight);
        check("888JJ", Category::TrioWithPair, Card::Eight);
    }

    #[test]
    fn kicker_shapes_reject_wrong_counts() {
        rejected("89");
        rejected("889");
        rejected("8899");
        rejected("888X9");
        rejected("8888J");
    }

    #[test]
    fn sequences_require_five_consecutive_low_ranks() {
        check("34567", Category::Sequence, Card::Seven);
        check("3456789TJQKA", Category::Sequence, Card::Ace);
        rejected("3456");
        rejected("34568");
        rejected("TJQKA2");
        rejected("JQKA2");
        rejected("QKAXD");
    }

    #[test]
    fn sequence_pairs_and_airplanes() {
        check("334455", Category::SequencePair, Card::Five);
        check("TTJJQQKK", Category::SequencePair, Card::King);
        rejected("3344");
        rejected("334466");
        rejected("AA22");
        check("777888", Category::AirplaneNoWing, Card::Eight);
        check("777888999", Category::AirplaneNoWing, Card::Nine);
        rejected("777999");
        rejected("AAA222");
    }

    #[test]
    fn airplane_wings() {
        check("77788834", Category::AirplaneSmallWing, Card::Eight);
        check("777888TT", Category::AirplaneSmallWing, Card::Eight);
        check("7778884455", Category::AirplaneBigWing, Card::Eight);
        rejected("777888344");
        rejected("77788899445");
    }

    #[test]
    fn four_with_attachments() {
        check("444456", Category::FourWithTwoSingles, Card::Four);
        check("444455", Category::FourWithTwoSingles, Card::Four);
        check("4444XD", Category::FourWithTwoSingles, Card::Four);
        check("44445566", Category::FourWithTwoPairs, Card::Four);
        rejected("4444567");
    }

    #[test]
    fn len_eight_ambiguity_pins() {
        // Quad plus two clean pairs wins over the airplane reading.
        check("44446677", Category::FourWithTwoPairs, Card::Four);
        // Two quads cannot split into quad + two pairs; the trio run
        // reading with leftover single wings applies instead.
        check("33334444", Category::AirplaneSmallWing, Card::Four);
    }

    #[test]
    fn classification_ignores_input_order() {
        let mut shuffled = cards("34567");
        shuffled.reverse();
        assert_eq!(classify(&shuffled), classify(&cards("34567")));

        let mut wing = cards("77788834");
        wing.swap(0, 7);
        wing.swap(2, 5);
        assert_eq!(classify(&wing), classify(&cards("77788834")));

        let mut bad = cards("34568");
        bad.reverse();
        assert_eq!(classify(&bad), None);
    }

    #[test]
    fn empty_input_is_not_a_combo() {
        assert_eq!(classify(&[]), None);
    }

    #[test]
    fn rocket_beats_everything() {
        let rocket = classify(&cards("XD")).unwrap();
        let bomb = classify(&cards("2222")).unwrap();
        let single = classify(&cards("A")).unwrap();
        assert!(rocket.beats(&bomb));
        assert!(rocket.beats(&single));
        assert!(!bomb.beats(&rocket));
        assert!(!single.beats(&rocket));
    }

    #[test]
    fn bombs_bypass_category_and_compare_by_rank() {
        let bomb_fives = classify(&cards("5555")).unwrap();
        let bomb_aces = classify(&cards("AAAA")).unwrap();
        let sequence = classify(&cards("34567")).unwrap();
        assert!(bomb_fives.beats(&sequence));
        assert!(bomb_aces.beats(&bomb_fives));
        assert!(!bomb_fives.beats(&bomb_aces));
        assert!(!sequence.beats(&bomb_fives));
    }

    #[test]
    fn same_category_needs_same_length_and_higher_primary() {
        let low = classify(&cards("34567")).unwrap();
        let high = classify(&cards("45678")).unwrap();
        let longer = classify(&cards("456789")).unwrap();
        assert!(high.beats(&low));
        assert!(!low.beats(&high));
        assert!(!longer.beats(&low));

        let pair = classify(&cards("88")).unwrap();
        let trio = classify(&cards("999")).unwrap();
        assert!(!trio.beats(&pair));
    }

    #[test]
    fn twos_allowed_in_fixed_shapes() {
        check("22", Category::Pair, Card::Two);
        check("222", Category::Trio, Card::Two);
        check("2223", Category::TrioWithSingle, Card::Two);
        check("2222", Category::Bomb, Card::Two);
    }
}
