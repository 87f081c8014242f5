use core::fmt;

/// A Dou Dizhu card, identified by rank alone; suits never matter.
///
/// Discriminants follow the conventional numeric encoding: 3..=14 for the
/// suited ranks 3 through Ace, 17 for the 2, 20 and 30 for the jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum Card {
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
    Two = 17,
    BlackJoker = 20,
    RedJoker = 30,
}

impl Card {
    pub const ORDERED: [Card; 15] = [
        Card::Three,
        Card::Four,
        Card::Five,
        Card::Six,
        Card::Seven,
        Card::Eight,
        Card::Nine,
        Card::Ten,
        Card::Jack,
        Card::Queen,
        Card::King,
        Card::Ace,
        Card::Two,
        Card::BlackJoker,
        Card::RedJoker,
    ];

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            3 => Some(Card::Three),
            4 => Some(Card::Four),
            5 => Some(Card::Five),
            6 => Some(Card::Six),
            7 => Some(Card::Seven),
            8 => Some(Card::Eight),
            9 => Some(Card::Nine),
            10 => Some(Card::Ten),
            11 => Some(Card::Jack),
            12 => Some(Card::Queen),
            13 => Some(Card::King),
            14 => Some(Card::Ace),
            17 => Some(Card::Two),
            20 => Some(Card::BlackJoker),
            30 => Some(Card::RedJoker),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Single-character encoding used by the textual move format.
    pub const fn char(self) -> char {
        match self {
            Card::Three => '3',
            Card::Four => '4',
            Card::Five => '5',
            Card::Six => '6',
            Card::Seven => '7',
            Card::Eight => '8',
            Card::Nine => '9',
            Card::Ten => 'T',
            Card::Jack => 'J',
            Card::Queen => 'Q',
            Card::King => 'K',
            Card::Ace => 'A',
            Card::Two => '2',
            Card::BlackJoker => 'X',
            Card::RedJoker => 'D',
        }
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '3' => Some(Card::Three),
            '4' => Some(Card::Four),
            '5' => Some(Card::Five),
            '6' => Some(Card::Six),
            '7' => Some(Card::Seven),
            '8' => Some(Card::Eight),
            '9' => Some(Card::Nine),
            'T' => Some(Card::Ten),
            'J' => Some(Card::Jack),
            'Q' => Some(Card::Queen),
            'K' => Some(Card::King),
            'A' => Some(Card::Ace),
            '2' => Some(Card::Two),
            'X' => Some(Card::BlackJoker),
            'D' => Some(Card::RedJoker),
            _ => None,
        }
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Card::BlackJoker | Card::RedJoker)
    }

    /// Whether the rank may appear inside a sequence or airplane run.
    /// Runs span 3 through Ace; 2s and jokers never chain.
    pub const fn is_sequence_rank(self) -> bool {
        self.value() <= Card::Ace.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// Renders a card slice as the concatenated single-character encoding.
pub fn render_cards(cards: &[Card]) -> String {
    cards.iter().map(|card| card.char()).collect()
}

#[cfg(test)]
mod tests {
    use super::{Card, render_cards};

    #[test]
    fn from_value_maps_every_rank() {
        for card in Card::ORDERED {
            assert_eq!(Card::from_value(card.value()), Some(card));
        }
        assert_eq!(Card::from_value(15), None);
        assert_eq!(Card::from_value(2), None);
    }

    #[test]
    fn char_roundtrip() {
        for card in Card::ORDERED {
            assert_eq!(Card::from_char(card.char()), Some(card));
        }
        assert_eq!(Card::from_char('t'), None);
        assert_eq!(Card::from_char('n'), None);
    }

    #[test]
    fn jokers_and_twos_never_chain() {
        assert!(Card::Ace.is_sequence_rank());
        assert!(!Card::Two.is_sequence_rank());
        assert!(!Card::BlackJoker.is_sequence_rank());
        assert!(!Card::RedJoker.is_sequence_rank());
    }

    #[test]
    fn ordering_follows_values() {
        assert!(Card::Ace < Card::Two);
        assert!(Card::Two < Card::BlackJoker);
        assert!(Card::BlackJoker < Card::RedJoker);
    }

    #[test]
    fn render_concatenates_chars() {
        let cards = [Card::Ten, Card::Jack, Card::Two, Card::RedJoker];
        assert_eq!(render_cards(&cards), "TJ2D");
    }
}
