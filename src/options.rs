//! Deck configuration options.

use crate::card::CardNaming;

/// Configuration options for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use trickcards::DeckOptions;
///
/// let options = DeckOptions::default().with_decks(2).with_jokers(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of 52-card decks.
    pub decks: u8,
    /// Number of jokers added after the regular cards.
    pub jokers: u8,
    /// How card names are derived.
    pub naming: CardNaming,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            naming: CardNaming::Standard,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use trickcards::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use trickcards::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the naming mode.
    #[must_use]
    pub const fn with_naming(mut self, naming: CardNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Returns the number of cards a deck built with these options holds.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.decks as usize * crate::card::DECK_SIZE + self.jokers as usize
    }
}
