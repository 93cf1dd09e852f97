use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cards::{Card, PokerCard, PokerRank, Suit};
use crate::config::{ConfigError, PokerConfig};
use crate::messages::unknown_value;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("{}", unknown_value("deck type", .0))]
    UnknownDeckType(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Which concrete deck a [`Deck`] was built as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckType {
    Poker,
}

impl DeckType {
    pub const ALL: [DeckType; 1] = [DeckType::Poker];

    pub const fn name(self) -> &'static str {
        match self {
            DeckType::Poker => "poker",
        }
    }
}

impl fmt::Display for DeckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeckType {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        DeckType::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| DeckError::UnknownDeckType(s.to_string()))
    }
}

/// Construction policy of a concrete deck variant.
pub trait CreateDeck: Sized {
    type Config: Default;

    fn create(config: &Self::Config) -> Self;

    fn create_default() -> Self {
        Self::create(&Self::Config::default())
    }
}

/// An ordered stack of cards. The top of the deck is the last card.
///
/// Cards are sorted ascending by [`Card::order`] on construction, so an
/// unshuffled deck deals its strongest card first.
#[derive(Debug, Clone)]
pub struct Deck<C> {
    cards: Vec<C>,
    deck_type: DeckType,
    init_card_count: usize,
}

impl<C: Card> Deck<C> {
    pub fn new(mut cards: Vec<C>, deck_type: DeckType) -> Self {
        cards.sort_by_key(|c| c.order());
        let init_card_count = cards.len();
        Self { cards, deck_type, init_card_count }
    }

    pub fn deck_type(&self) -> DeckType {
        self.deck_type
    }

    /// Cards in stacking order; the last one is dealt next.
    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    /// Number of cards the deck was built with.
    pub fn initial_card_count(&self) -> usize {
        self.init_card_count
    }

    /// Shuffle using the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffle using the provided RNG.
    ///
    /// Two cards are always swapped. Larger decks get one random transposition
    /// per remaining card, with both positions drawn independently. This is not
    /// a uniform permutation and any card may stay where it was.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.cards.len();
        match n {
            0 | 1 => {}
            2 => self.cards.swap(0, 1),
            _ => {
                for _ in 0..n {
                    let a = rng.random_range(0..n);
                    let b = rng.random_range(0..n);
                    self.cards.swap(a, b);
                }
            }
        }
        log::trace!("shuffled {} deck, {} cards", self.deck_type, n);
    }

    /// Deal the top card, or `None` once the deck is empty.
    pub fn deal_one_card(&mut self) -> Option<C> {
        let card = self.cards.pop();
        if card.is_none() {
            log::trace!("deal from empty {} deck", self.deck_type);
        }
        card
    }

    /// Deal up to `n` cards from the top, stopping early if the deck runs out.
    pub fn deal(&mut self, n: usize) -> Vec<C> {
        (0..n).map_while(|_| self.deal_one_card()).collect()
    }

    /// The card that would be dealt next.
    pub fn peek(&self) -> Option<&C> {
        self.cards.last()
    }

    pub fn cards_dealt(&self) -> usize {
        self.init_card_count - self.cards.len()
    }

    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A standard 52-card poker deck, or any subset of poker cards.
pub type PokerDeck = Deck<PokerCard>;

impl Deck<PokerCard> {
    pub fn from_cards(cards: Vec<PokerCard>) -> Self {
        Self::new(cards, DeckType::Poker)
    }

    /// A full ace-high deck.
    ///
    /// ```
    /// use deck_rs::deck::PokerDeck;
    ///
    /// let deck = PokerDeck::standard();
    /// assert_eq!(deck.cards_remaining(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::create_default()
    }
}

impl CreateDeck for Deck<PokerCard> {
    type Config = PokerConfig;

    /// One card per rank in each suit.
    fn create(config: &PokerConfig) -> Self {
        let mut cards = Vec::with_capacity(Suit::ALL.len() * PokerRank::ALL.len());
        for suit in Suit::ALL {
            for rank in PokerRank::ALL {
                cards.push(PokerCard::from_rank(rank, suit, config.ace_high));
            }
        }
        log::debug!("building poker deck: {} cards, ace_high={}", cards.len(), config.ace_high);
        Self::from_cards(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn two_hearts() -> Vec<PokerCard> {
        vec![
            PokerCard::new("3", "Three", Suit::Hearts, 3),
            PokerCard::new("2", "Two", Suit::Hearts, 2),
        ]
    }

    #[test]
    fn from_cards_sorts_and_tags_poker() {
        let deck = PokerDeck::from_cards(two_hearts());
        assert_eq!(deck.cards.len(), 2);
        assert_eq!(deck.cards[0].id(), "2");
        assert_eq!(deck.deck_type(), DeckType::Poker);
        assert_eq!(PokerDeck::from_cards(Vec::new()).deck_type(), DeckType::Poker);
    }

    #[test]
    fn standard_deck_has_13_ranks_per_suit() {
        let deck = PokerDeck::standard();
        assert_eq!(deck.cards.len(), 52);

        let mut per_suit: HashMap<Suit, HashSet<&str>> = HashMap::new();
        for card in &deck.cards {
            per_suit.entry(card.suit()).or_default().insert(card.id());
        }
        assert_eq!(per_suit.len(), 4);
        assert!(per_suit.values().all(|ids| ids.len() == 13));
    }

    #[test]
    fn standard_deck_is_sorted_ascending() {
        let deck = PokerDeck::standard();
        assert!(deck.cards.windows(2).all(|w| w[0].order() <= w[1].order()));
    }

    #[test]
    fn shuffle_full_deck_moves_something() {
        let mut deck = PokerDeck::standard();
        let before = deck.cards.clone();
        deck.shuffle_seeded(42);
        assert_ne!(before, deck.cards);
        assert_eq!(deck.cards_remaining(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = PokerDeck::standard();
        let mut d2 = PokerDeck::standard();
        d1.shuffle_seeded(7);
        d2.shuffle_seeded(7);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn shuffle_two_cards_swaps_them() {
        let mut deck = PokerDeck::standard();
        deck.deal(50);
        let before = deck.cards.clone();
        deck.shuffle();
        assert_eq!(before[0], deck.cards[1]);
        assert_eq!(before[1], deck.cards[0]);
    }

    #[test]
    fn shuffle_empty_and_single_are_noops() {
        let mut empty = PokerDeck::from_cards(Vec::new());
        empty.shuffle();
        assert!(empty.is_empty());

        let mut single = PokerDeck::from_cards(vec![PokerCard::new("2", "Two", Suit::Clubs, 2)]);
        let before = single.cards.clone();
        single.shuffle();
        assert_eq!(before, single.cards);
    }

    #[test]
    fn unshuffled_deck_deals_ace_first() {
        let mut deck = PokerDeck::standard();
        let card = deck.deal_one_card().unwrap();
        assert_eq!(card.id(), "A");
        assert_eq!(card.order(), 14);
    }

    #[test]
    fn ace_low_deck_deals_king_first() {
        let mut deck = PokerDeck::create(&PokerConfig::default().with_ace_high(false));
        assert_eq!(deck.peek().map(|c| c.id()), Some("K"));
        assert_eq!(deck.deal_one_card().unwrap().id(), "K");
    }

    #[test]
    fn counts_track_deals() {
        let mut deck = PokerDeck::standard();
        assert_eq!(deck.cards_dealt(), 0);
        assert_eq!(deck.cards_remaining(), 52);
        assert!(!deck.is_empty());

        deck.deal_one_card();
        assert_eq!(deck.cards_dealt(), 1);
        assert_eq!(deck.cards_remaining(), 51);
        assert!(!deck.is_empty());
        assert_eq!(deck.initial_card_count(), 52);
    }

    #[test]
    fn deal_stops_at_empty() {
        let mut deck = PokerDeck::from_cards(two_hearts());
        let dealt = deck.deal(5);
        assert_eq!(dealt.len(), 2);
        assert!(deck.is_empty());
        assert!(deck.deal_one_card().is_none());
        assert!(deck.peek().is_none());
        assert_eq!(deck.cards_dealt(), 2);
    }

    #[test]
    fn deck_type_round_trips_through_name() {
        assert_eq!("Poker".parse::<DeckType>().unwrap(), DeckType::Poker);
        assert_eq!(DeckType::Poker.to_string(), "poker");
        let err = "tarot".parse::<DeckType>().unwrap_err();
        assert_eq!(err, DeckError::UnknownDeckType("tarot".to_string()));
    }
}
