use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::messages::{required_field_missing, unknown_value};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("{}", required_field_missing(.0))]
    RequiredFieldMissing(&'static str),
    #[error("{}", unknown_value("suit", .0))]
    UnknownSuit(String),
    #[error("{}", unknown_value("rank", .0))]
    UnknownRank(String),
}

/// Outcome of comparing one card against another by strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardCompare {
    Win,
    Draw,
    Lose,
}

impl From<Ordering> for CardCompare {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => CardCompare::Win,
            Ordering::Equal => CardCompare::Draw,
            Ordering::Less => CardCompare::Lose,
        }
    }
}

/// Capabilities shared by every kind of card a [`Deck`](crate::deck::Deck) can hold.
///
/// `order` is the card's strength. Decks sort on it at construction and
/// [`Card::compare`] ranks on it, so it must not change after the card is built.
pub trait Card {
    /// Short display token, unique per rank but not per physical card.
    fn id(&self) -> &str;

    /// Strength used for sorting and comparison.
    fn order(&self) -> i32;

    fn user_friendly_name(&self) -> String;

    /// Ranks `self` against `other` on [`Card::order`] alone.
    ///
    /// ```
    /// use deck_rs::cards::{Card, CardCompare, PokerCard, Suit};
    ///
    /// let five = PokerCard::new("5", "Five", Suit::Spades, 5);
    /// let ten = PokerCard::new("10", "Ten", Suit::Spades, 10);
    /// assert_eq!(five.compare(&ten), CardCompare::Lose);
    /// assert_eq!(ten.compare(&five), CardCompare::Win);
    /// ```
    fn compare(&self, other: &Self) -> CardCompare
    where
        Self: Sized,
    {
        CardCompare::from(self.order().cmp(&other.order()))
    }
}

/// A plain card: identity, display name and strength, nothing else.
///
/// ```
/// use deck_rs::cards::{Card, CardFace};
///
/// let card = CardFace::new("testid", "testname").with_order(10);
/// assert_eq!(card.id(), "testid");
/// assert_eq!(card.user_friendly_name(), "testname");
/// assert_eq!(card.order(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardFace {
    id: String,
    name: String,
    order: i32,
}

impl CardFace {
    /// A card with order 0.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), order: 0 }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Like [`CardFace::new`] but rejects an empty id or name.
    pub fn try_new(
        id: impl Into<String>,
        name: impl Into<String>,
        order: i32,
    ) -> Result<Self, CardError> {
        let (id, name) = (id.into(), name.into());
        if id.trim().is_empty() {
            return Err(CardError::RequiredFieldMissing("id"));
        }
        if name.trim().is_empty() {
            return Err(CardError::RequiredFieldMissing("name"));
        }
        Ok(Self { id, name, order })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Card for CardFace {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn user_friendly_name(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The four French suits. Declaration order carries no strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Spades,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Clubs, Suit::Diamonds];

    /// Plural English name, as used in "Two of Spades".
    pub const fn plural_name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural_name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Accepts the suit letter or its singular/plural name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "heart" | "hearts" => Ok(Suit::Hearts),
            "s" | "spade" | "spades" => Ok(Suit::Spades),
            "c" | "club" | "clubs" => Ok(Suit::Clubs),
            "d" | "diamond" | "diamonds" => Ok(Suit::Diamonds),
            _ => Err(CardError::UnknownSuit(s.to_string())),
        }
    }
}

/// The thirteen ranks of a poker deck, Two through Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokerRank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl PokerRank {
    pub const ALL: [PokerRank; 13] = [
        PokerRank::Two,
        PokerRank::Three,
        PokerRank::Four,
        PokerRank::Five,
        PokerRank::Six,
        PokerRank::Seven,
        PokerRank::Eight,
        PokerRank::Nine,
        PokerRank::Ten,
        PokerRank::Jack,
        PokerRank::Queen,
        PokerRank::King,
        PokerRank::Ace,
    ];

    /// The card id token: `"2"` through `"10"`, then `"J"`, `"Q"`, `"K"`, `"A"`.
    pub const fn id(self) -> &'static str {
        match self {
            PokerRank::Two => "2",
            PokerRank::Three => "3",
            PokerRank::Four => "4",
            PokerRank::Five => "5",
            PokerRank::Six => "6",
            PokerRank::Seven => "7",
            PokerRank::Eight => "8",
            PokerRank::Nine => "9",
            PokerRank::Ten => "10",
            PokerRank::Jack => "J",
            PokerRank::Queen => "Q",
            PokerRank::King => "K",
            PokerRank::Ace => "A",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PokerRank::Two => "Two",
            PokerRank::Three => "Three",
            PokerRank::Four => "Four",
            PokerRank::Five => "Five",
            PokerRank::Six => "Six",
            PokerRank::Seven => "Seven",
            PokerRank::Eight => "Eight",
            PokerRank::Nine => "Nine",
            PokerRank::Ten => "Ten",
            PokerRank::Jack => "Jack",
            PokerRank::Queen => "Queen",
            PokerRank::King => "King",
            PokerRank::Ace => "Ace",
        }
    }

    /// Strength of the rank. Pips count their face value, Jack..King are
    /// 11..13, and the Ace is 14 when `ace_high` and 1 otherwise.
    pub const fn order(self, ace_high: bool) -> i32 {
        match self {
            PokerRank::Two => 2,
            PokerRank::Three => 3,
            PokerRank::Four => 4,
            PokerRank::Five => 5,
            PokerRank::Six => 6,
            PokerRank::Seven => 7,
            PokerRank::Eight => 8,
            PokerRank::Nine => 9,
            PokerRank::Ten => 10,
            PokerRank::Jack => 11,
            PokerRank::Queen => 12,
            PokerRank::King => 13,
            PokerRank::Ace if ace_high => 14,
            PokerRank::Ace => 1,
        }
    }
}

impl fmt::Display for PokerRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PokerRank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        PokerRank::ALL
            .into_iter()
            .find(|r| r.id().eq_ignore_ascii_case(t) || r.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| CardError::UnknownRank(s.to_string()))
    }
}

/// A card from a standard poker deck.
///
/// ```
/// use deck_rs::cards::{Card, PokerCard, Suit};
///
/// let card = PokerCard::new("2", "Two", Suit::Spades, 2);
/// assert_eq!(card.user_friendly_name(), "Two of Spades");
/// assert!(!card.is_face_value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PokerCard {
    face: CardFace,
    suit: Suit,
}

impl PokerCard {
    pub fn new(id: impl Into<String>, name: impl Into<String>, suit: Suit, order: i32) -> Self {
        Self { face: CardFace::new(id, name).with_order(order), suit }
    }

    pub fn try_new(
        id: impl Into<String>,
        name: impl Into<String>,
        suit: Suit,
        order: i32,
    ) -> Result<Self, CardError> {
        Ok(Self { face: CardFace::try_new(id, name, order)?, suit })
    }

    pub fn from_rank(rank: PokerRank, suit: Suit, ace_high: bool) -> Self {
        Self::new(rank.id(), rank.name(), suit, rank.order(ace_high))
    }

    pub const fn suit(&self) -> Suit {
        self.suit
    }

    pub fn face(&self) -> &CardFace {
        &self.face
    }

    /// True for Ace, Jack, Queen and King, whatever the Ace's order.
    pub fn is_face_value(&self) -> bool {
        matches!(self.face.id.as_str(), "A" | "J" | "Q" | "K")
    }
}

impl Card for PokerCard {
    fn id(&self) -> &str {
        &self.face.id
    }

    fn order(&self) -> i32 {
        self.face.order
    }

    fn user_friendly_name(&self) -> String {
        format!("{} of {}", self.face.name, self.suit.plural_name())
    }
}

impl fmt::Display for PokerCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face.name, self.suit)
    }
}
