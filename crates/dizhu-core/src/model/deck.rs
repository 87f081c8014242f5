use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::seat::Seat;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::fmt;

pub const DECK_SIZE: usize = 54;

/// The 54-card Dou Dizhu deck: four copies of every rank 3 through 2 plus
/// one of each joker.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for card in Card::ORDERED {
            let copies = if card.is_joker() { 1 } else { 4 };
            for _ in 0..copies {
                cards.push(card);
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The deterministic partition of a shuffled deck: the landlord takes the
/// first 17 cards plus the reserved three, the farmers take 17 each.
#[derive(Debug, Clone)]
pub struct Deal {
    hands: [Hand; 3],
    reserved: Vec<Card>,
}

impl Deal {
    pub fn from_deck(deck: &Deck) -> Result<Self, DealError> {
        let cards = deck.cards();
        if cards.len() != DECK_SIZE {
            return Err(DealError::Imbalance);
        }

        let mut reserved = cards[17..20].to_vec();
        reserved.sort();

        let hands = [
            Hand::with_cards(cards[..20].to_vec()),
            Hand::with_cards(cards[20..37].to_vec()),
            Hand::with_cards(cards[37..54].to_vec()),
        ];

        let deal = Self { hands, reserved };
        deal.check_partition()?;
        Ok(deal)
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    /// The three bonus cards, also present in the landlord's hand.
    pub fn reserved(&self) -> &[Card] {
        &self.reserved
    }

    pub fn into_parts(self) -> ([Hand; 3], Vec<Card>) {
        (self.hands, self.reserved)
    }

    /// The three hands must reproduce the deck composition exactly, and the
    /// reserved cards must all sit in the landlord's hand. A violation is a
    /// dealing bug, not a recoverable condition.
    fn check_partition(&self) -> Result<(), DealError> {
        for card in Card::ORDERED {
            let held: usize = self.hands.iter().map(|hand| hand.count_of(card)).sum();
            let expected = if card.is_joker() { 1 } else { 4 };
            if held != expected {
                return Err(DealError::Imbalance);
            }
        }
        let landlord = &self.hands[Seat::Landlord.index()];
        for &card in &self.reserved {
            let reserved_copies = self.reserved.iter().filter(|&&c| c == card).count();
            if landlord.count_of(card) < reserved_copies {
                return Err(DealError::Imbalance);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealError {
    Imbalance,
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::Imbalance => {
                write!(f, "dealt hands do not partition the 54-card deck")
            }
        }
    }
}

impl std::error::Error for DealError {}
