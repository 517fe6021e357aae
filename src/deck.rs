//! Deck construction and seeded shuffling.

extern crate alloc;

use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, MAX_RANK, Suit};
use crate::options::DeckOptions;

/// An ordered pile of cards for a driver to distribute.
///
/// The deck only builds and orders cards. How they reach player hands is up
/// to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled deck.
    ///
    /// Each deck contributes clubs, diamonds, hearts, then spades, ace to
    /// king; jokers come last.
    #[must_use]
    pub fn new(options: &DeckOptions) -> Self {
        let mut cards = Vec::with_capacity(options.card_count());

        for _ in 0..options.decks {
            for suit in Suit::ALL {
                for rank in 1..=MAX_RANK {
                    cards.push(Card::with_naming(suit.code(), rank, options.naming));
                }
            }
        }
        for _ in 0..options.jokers {
            cards.push(Card::with_naming(0, 0, options.naming));
        }

        debug!(
            "built {} cards from {} decks and {} jokers",
            cards.len(),
            options.decks,
            options.jokers
        );
        Self { cards }
    }

    /// Builds a deck and shuffles it with the given seed.
    #[must_use]
    pub fn shuffled(options: &DeckOptions, seed: u64) -> Self {
        let mut deck = Self::new(options);
        deck.shuffle(seed);
        deck
    }

    /// Shuffles the deck. The same seed always yields the same order.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
        debug!("shuffled {} cards with seed {seed}", self.cards.len());
    }

    /// Splits the deck at `at`, returning the cards from `at` onward.
    ///
    /// An `at` past the end returns an empty block.
    #[must_use]
    pub fn split_off(&mut self, at: usize) -> Vec<Card> {
        let at = at.min(self.cards.len());
        self.cards.split_off(at)
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
