//! Player attributes and hand operations.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use log::trace;

use crate::card::Card;
use crate::hand::Hand;

/// Seat number identifying a player.
pub type PlayerNumber = u32;

/// A player at the table.
///
/// The teammate is stored as a [`PlayerNumber`], not as an owned player; use
/// [`Roster`](crate::Roster) to resolve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    number: PlayerNumber,
    name: String,
    bid: i32,
    teammate: Option<PlayerNumber>,
    hand: Hand,
}

impl Player {
    /// Creates a player named `"Player <number>"` with an empty hand.
    #[must_use]
    pub fn new(number: PlayerNumber) -> Self {
        Self::with_name(number, format!("Player {number}"))
    }

    /// Creates a player with the given name and an empty hand.
    #[must_use]
    pub fn with_name(number: PlayerNumber, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            bid: 0,
            teammate: None,
            hand: Hand::new(),
        }
    }

    /// Returns the player number.
    #[must_use]
    pub const fn number(&self) -> PlayerNumber {
        self.number
    }

    /// Sets the player number.
    pub const fn set_number(&mut self, number: PlayerNumber) {
        self.number = number;
    }

    /// Returns the player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the player name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the current bid.
    #[must_use]
    pub const fn bid(&self) -> i32 {
        self.bid
    }

    /// Sets the current bid.
    pub const fn set_bid(&mut self, bid: i32) {
        self.bid = bid;
    }

    /// Returns the teammate's number, if linked.
    #[must_use]
    pub const fn teammate(&self) -> Option<PlayerNumber> {
        self.teammate
    }

    /// Sets or clears the teammate link on this player only.
    ///
    /// The link is not mirrored; [`Roster::pair`](crate::Roster::pair) sets
    /// both sides.
    pub const fn set_teammate(&mut self, teammate: Option<PlayerNumber>) {
        self.teammate = teammate;
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the hand for in-place mutation.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Replaces the hand.
    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    /// Takes the hand, leaving an empty one behind.
    pub fn take_hand(&mut self) -> Hand {
        core::mem::take(&mut self.hand)
    }

    /// Appends one card to the hand.
    pub fn add_card(&mut self, card: Card) {
        trace!("player {} adds {}", self.number, card);
        self.hand.push(card);
    }

    /// Appends every card to the hand, keeping their order.
    ///
    /// Used for the initial deal, picking up the cat, and receiving passed
    /// cards alike.
    pub fn extend_hand<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        let before = self.hand.len();
        self.hand.extend(cards);
        trace!(
            "player {} takes {} cards, holds {}",
            self.number,
            self.hand.len() - before,
            self.hand.len()
        );
    }

    /// Removes the first card equal to `card` from the hand.
    ///
    /// Returns `None` and leaves the hand unchanged when the card is not held.
    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        let removed = self.hand.remove_one(card);
        if removed.is_none() {
            trace!("player {} does not hold {}", self.number, card);
        }
        removed
    }

    /// Removes every occurrence of each listed card from the hand.
    ///
    /// Cards that are not held are ignored. Returns the number removed.
    pub fn remove_cards(&mut self, cards: &[Card]) -> usize {
        let removed = self.hand.remove_all(cards);
        trace!("player {} removes {} cards", self.number, removed);
        removed
    }

    /// Discards one card while trimming the dealt hand down to playing size.
    ///
    /// Same contract as [`Player::remove_card`].
    pub fn discard_card(&mut self, card: &Card) -> Option<Card> {
        trace!("player {} discards {}", self.number, card);
        self.remove_card(card)
    }

    /// Lays a card down for the current trick.
    ///
    /// The first equal card is removed from the hand and `card` is returned.
    /// Playing a card that is no longer held returns it without touching the
    /// hand.
    pub fn play_card(&mut self, card: Card) -> Card {
        trace!("player {} plays {}", self.number, card);
        self.hand.remove_one(&card);
        card
    }
}

impl Default for Player {
    /// Player 0 with an empty hand.
    fn default() -> Self {
        Self::new(0)
    }
}
