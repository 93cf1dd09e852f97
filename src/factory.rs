//! Single dispatch point from a deck type to a built deck.
//!
//! Adding a deck variant means adding a [`DeckType`], a config section in
//! [`DeckConfig`], a [`CreateDeck`] impl, and an arm in each match below.

use std::fmt;

use rand::Rng;

use crate::cards::{Card, CardCompare, PokerCard};
use crate::config::DeckConfig;
use crate::deck::{CreateDeck, DeckError, DeckType, PokerDeck};

/// A card dealt from an [`AnyDeck`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyCard {
    Poker(PokerCard),
}

impl AnyCard {
    pub fn as_poker(&self) -> Option<&PokerCard> {
        match self {
            AnyCard::Poker(card) => Some(card),
        }
    }
}

impl Card for AnyCard {
    fn id(&self) -> &str {
        match self {
            AnyCard::Poker(card) => card.id(),
        }
    }

    fn order(&self) -> i32 {
        match self {
            AnyCard::Poker(card) => card.order(),
        }
    }

    fn user_friendly_name(&self) -> String {
        match self {
            AnyCard::Poker(card) => card.user_friendly_name(),
        }
    }

    fn compare(&self, other: &Self) -> CardCompare {
        match (self, other) {
            (AnyCard::Poker(a), AnyCard::Poker(b)) => a.compare(b),
        }
    }
}

impl fmt::Display for AnyCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyCard::Poker(card) => fmt::Display::fmt(card, f),
        }
    }
}

/// A deck of any supported variant, as returned by [`DeckFactory`].
#[derive(Debug, Clone)]
pub enum AnyDeck {
    Poker(PokerDeck),
}

impl AnyDeck {
    pub fn deck_type(&self) -> DeckType {
        match self {
            AnyDeck::Poker(deck) => deck.deck_type(),
        }
    }

    pub fn shuffle(&mut self) {
        match self {
            AnyDeck::Poker(deck) => deck.shuffle(),
        }
    }

    pub fn shuffle_seeded(&mut self, seed: u64) {
        match self {
            AnyDeck::Poker(deck) => deck.shuffle_seeded(seed),
        }
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self {
            AnyDeck::Poker(deck) => deck.shuffle_with(rng),
        }
    }

    pub fn deal_one_card(&mut self) -> Option<AnyCard> {
        match self {
            AnyDeck::Poker(deck) => deck.deal_one_card().map(AnyCard::Poker),
        }
    }

    pub fn cards_dealt(&self) -> usize {
        match self {
            AnyDeck::Poker(deck) => deck.cards_dealt(),
        }
    }

    pub fn cards_remaining(&self) -> usize {
        match self {
            AnyDeck::Poker(deck) => deck.cards_remaining(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AnyDeck::Poker(deck) => deck.is_empty(),
        }
    }

    pub fn as_poker(&self) -> Option<&PokerDeck> {
        match self {
            AnyDeck::Poker(deck) => Some(deck),
        }
    }

    pub fn into_poker(self) -> Option<PokerDeck> {
        match self {
            AnyDeck::Poker(deck) => Some(deck),
        }
    }
}

impl From<PokerDeck> for AnyDeck {
    fn from(deck: PokerDeck) -> Self {
        AnyDeck::Poker(deck)
    }
}

pub struct DeckFactory;

impl DeckFactory {
    /// Build a deck of the given type from its section of `config`.
    ///
    /// ```
    /// use deck_rs::config::{DeckConfig, PokerConfig};
    /// use deck_rs::deck::DeckType;
    /// use deck_rs::factory::DeckFactory;
    ///
    /// let config = DeckConfig::from(PokerConfig::default().with_ace_high(false));
    /// let mut deck = DeckFactory::create(DeckType::Poker, &config);
    /// assert_eq!(deck.cards_remaining(), 52);
    /// assert_eq!(deck.deal_one_card().unwrap().to_string(), "King of Diamonds");
    /// ```
    pub fn create(deck_type: DeckType, config: &DeckConfig) -> AnyDeck {
        log::debug!("creating {deck_type} deck");
        match deck_type {
            DeckType::Poker => AnyDeck::Poker(PokerDeck::create(&config.poker)),
        }
    }

    /// Like [`DeckFactory::create`], selecting the deck type by name.
    ///
    /// ```
    /// use deck_rs::config::DeckConfig;
    /// use deck_rs::factory::DeckFactory;
    ///
    /// let err = DeckFactory::create_by_name("tarot", &DeckConfig::default()).unwrap_err();
    /// assert!(err.to_string().contains("tarot"));
    /// ```
    pub fn create_by_name(name: &str, config: &DeckConfig) -> Result<AnyDeck, DeckError> {
        let deck_type: DeckType = name.parse()?;
        Ok(Self::create(deck_type, config))
    }
}
