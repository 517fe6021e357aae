//! Ordered hand of cards.

extern crate alloc;

use alloc::vec::Vec;
use core::slice;

use crate::card::Card;

/// The cards currently held by a player.
///
/// Cards keep insertion order and duplicates are allowed. Removal never
/// fails: removing a card that is not held leaves the hand unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Appends a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first card equal to `card` and returns it.
    ///
    /// Returns `None` and leaves the hand untouched when no such card is held.
    pub fn remove_one(&mut self, card: &Card) -> Option<Card> {
        let index = self.position(card)?;
        Some(self.cards.remove(index))
    }

    /// Removes every card equal to any card in `cards`.
    ///
    /// Returns the number of cards removed.
    pub fn remove_all(&mut self, cards: &[Card]) -> usize {
        let before = self.cards.len();
        self.cards.retain(|held| !cards.contains(held));
        before - self.cards.len()
    }

    /// Returns whether a card equal to `card` is held.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the index of the first card equal to `card`.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|held| held == card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Consumes the hand and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
