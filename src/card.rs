//! Card types and naming tables.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::CardError;
use crate::player::PlayerNumber;

const SUIT_WORDS: [&str; 4] = ["clubs", "diamonds", "hearts", "spades"];

const RANK_WORDS: [&str; 13] = [
    "ace", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "jack",
    "queen", "king",
];

/// Number of cards per deck, jokers excluded.
pub const DECK_SIZE: usize = 52;

/// Highest rank code of a regular card (king).
pub const MAX_RANK: u8 = 13;

/// Card suit, identified by its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    /// The joker "suit" (code 0).
    Joker = 0,
    /// Clubs (code 1).
    Clubs = 1,
    /// Diamonds (code 2).
    Diamonds = 2,
    /// Hearts (code 3).
    Hearts = 3,
    /// Spades (code 4).
    Spades = 4,
}

impl Suit {
    /// The four regular suits in code order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Resolves a suit code.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for codes above 4.
    pub const fn from_code(code: u8) -> Result<Self, CardError> {
        match code {
            0 => Ok(Self::Joker),
            1 => Ok(Self::Clubs),
            2 => Ok(Self::Diamonds),
            3 => Ok(Self::Hearts),
            4 => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit(code)),
        }
    }

    /// Returns the numeric code of the suit.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase word used in card names, or `""` for jokers.
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::Joker => "",
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }

    /// Returns whether the suit is clubs or spades.
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Clubs | Self::Spades)
    }

    /// Returns whether the suit is diamonds or hearts.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Diamonds | Self::Hearts)
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<Suit> for u8 {
    fn from(suit: Suit) -> Self {
        suit.code()
    }
}

/// How a card derives its name from its codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardNaming {
    /// One label per code: `Card::new(1, 1)` is `"ace-of-clubs"`.
    #[default]
    Standard,
    /// Reproduces the historical fall-through lookup where every regular suit
    /// names as `"spades"` and every regular rank as `"king"`.
    ///
    /// Only useful for matching names produced by older data.
    Legacy,
}

impl CardNaming {
    /// Derives the card name for a suit/rank code pair.
    ///
    /// Codes outside the known ranges contribute an empty segment. The pair
    /// `(0, 0)` is always `"joker"`.
    #[must_use]
    pub fn name(self, suit: u8, rank: u8) -> String {
        if suit == 0 && rank == 0 {
            return String::from("joker");
        }
        let (r, s) = match self {
            Self::Standard => (rank_word(rank), suit_word(suit)),
            Self::Legacy => (
                if (1..=MAX_RANK).contains(&rank) { "king" } else { "" },
                if (1..=4).contains(&suit) { "spades" } else { "" },
            ),
        };
        format!("{r}-of-{s}")
    }
}

fn suit_word(code: u8) -> &'static str {
    usize::from(code)
        .checked_sub(1)
        .and_then(|i| SUIT_WORDS.get(i))
        .copied()
        .unwrap_or("")
}

fn rank_word(code: u8) -> &'static str {
    usize::from(code)
        .checked_sub(1)
        .and_then(|i| RANK_WORDS.get(i))
        .copied()
        .unwrap_or("")
}

/// A playing card or joker.
///
/// Suit and rank are kept as raw codes (suit 0 = joker, 1..=4 = clubs,
/// diamonds, hearts, spades; rank 0 for jokers, 1..=13 otherwise). Codes are
/// not validated by [`Card::new`] or the setters; use [`Card::try_new`] when
/// the input is untrusted.
///
/// Cards compare equal when their suit and rank codes match. Name, owner and
/// the scoring attributes are ignored, so removing a card from a hand removes
/// the first card with the same codes.
#[derive(Debug, Clone)]
pub struct Card {
    suit: u8,
    rank: u8,
    name: String,
    owned_by: Option<PlayerNumber>,
    point_value: Option<u32>,
    rank_value: Option<f32>,
}

impl Card {
    /// Creates a card and derives its name with [`CardNaming::Standard`].
    ///
    /// ```
    /// use trickcards::Card;
    ///
    /// assert_eq!(Card::new(1, 1).name(), "ace-of-clubs");
    /// assert_eq!(Card::new(0, 0).name(), "joker");
    /// ```
    #[must_use]
    pub fn new(suit: u8, rank: u8) -> Self {
        Self::with_naming(suit, rank, CardNaming::Standard)
    }

    /// Creates a card whose name is derived with the given naming mode.
    #[must_use]
    pub fn with_naming(suit: u8, rank: u8, naming: CardNaming) -> Self {
        Self {
            suit,
            rank,
            name: naming.name(suit, rank),
            owned_by: None,
            point_value: None,
            rank_value: None,
        }
    }

    /// Creates a card after checking that the codes form a real card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for an unknown suit code, and
    /// [`CardError::InvalidRank`] when the rank does not fit the suit (jokers
    /// must have rank 0, regular suits rank 1..=13).
    pub fn try_new(suit: u8, rank: u8) -> Result<Self, CardError> {
        let valid = match Suit::from_code(suit)? {
            Suit::Joker => rank == 0,
            _ => (1..=MAX_RANK).contains(&rank),
        };
        if valid {
            Ok(Self::new(suit, rank))
        } else {
            Err(CardError::InvalidRank { suit, rank })
        }
    }

    /// Creates a joker.
    #[must_use]
    pub fn joker() -> Self {
        Self::new(0, 0)
    }

    /// Returns the suit code.
    #[must_use]
    pub const fn suit(&self) -> u8 {
        self.suit
    }

    /// Sets the suit code. The name is left unchanged.
    pub const fn set_suit(&mut self, suit: u8) {
        self.suit = suit;
    }

    /// Returns the rank code.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Sets the rank code. The name is left unchanged.
    pub const fn set_rank(&mut self, rank: u8) {
        self.rank = rank;
    }

    /// Returns the card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overrides the card name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the number of the player the card was last assigned to.
    #[must_use]
    pub const fn owned_by(&self) -> Option<PlayerNumber> {
        self.owned_by
    }

    /// Records or clears the owning player. Hands do not update this.
    pub const fn set_owned_by(&mut self, owner: Option<PlayerNumber>) {
        self.owned_by = owner;
    }

    /// Returns the point value, if one was assigned.
    #[must_use]
    pub const fn point_value(&self) -> Option<u32> {
        self.point_value
    }

    /// Assigns or clears the point value.
    pub const fn set_point_value(&mut self, value: Option<u32>) {
        self.point_value = value;
    }

    /// Returns the rank value, if one was assigned.
    #[must_use]
    pub const fn rank_value(&self) -> Option<f32> {
        self.rank_value
    }

    /// Assigns or clears the rank value.
    pub const fn set_rank_value(&mut self, value: Option<f32>) {
        self.rank_value = value;
    }

    /// Returns the typed suit, or `None` for an unknown suit code.
    #[must_use]
    pub fn suit_kind(&self) -> Option<Suit> {
        Suit::from_code(self.suit).ok()
    }

    /// Returns whether the card is a joker (suit code 0).
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.suit == 0
    }

    /// Returns whether the card is a club or a spade.
    #[must_use]
    pub const fn is_black(&self) -> bool {
        matches!(self.suit, 1 | 4)
    }

    /// Returns whether the card is a diamond or a heart.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        matches!(self.suit, 2 | 3)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::joker()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
