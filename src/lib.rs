//! deck-rs: playing cards and decks of cards
//!
//! Goals:
//! - A generic [`cards::Card`] capability with a standard poker card on top
//! - Decks that shuffle in place and deal from the top until empty
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: build, shuffle and deal a poker deck
//! ```
//! use deck_rs::cards::Card;
//! use deck_rs::config::DeckConfig;
//! use deck_rs::deck::DeckType;
//! use deck_rs::factory::DeckFactory;
//!
//! let mut deck = DeckFactory::create(DeckType::Poker, &DeckConfig::default());
//! deck.shuffle();
//!
//! let mut dealt = 0;
//! while let Some(card) = deck.deal_one_card() {
//!     assert!(!card.user_friendly_name().is_empty());
//!     dealt += 1;
//! }
//! assert_eq!(dealt, 52);
//! assert!(deck.is_empty());
//! ```
//!
//! Logging goes through the `log` facade; install any logger to see deck
//! construction at `debug` and shuffles at `trace`.

pub mod cards;
pub mod config;
pub mod deck;
pub mod factory;
pub mod messages;

pub use cards::{Card, CardCompare, CardError, CardFace, PokerCard, PokerRank, Suit};
pub use config::{ConfigError, DeckConfig, PokerConfig};
pub use deck::{CreateDeck, Deck, DeckError, DeckType, PokerDeck};
pub use factory::{AnyCard, AnyDeck, DeckFactory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
