//! Card and player hand models for trick-taking games, with optional
//! `no_std` support.
//!
//! The crate provides a [`Card`] value type that derives its display name
//! from a suit/rank code pair, and a [`Player`] that owns a [`Hand`] and
//! exposes the add, discard and play operations a game driver calls while a
//! round unfolds. [`Deck`] builds seeded, reproducible decks and [`Roster`]
//! resolves teammate links between players.
//!
//! # Example
//!
//! ```
//! use trickcards::{Card, Player};
//!
//! let mut player = Player::new(1);
//! player.add_card(Card::new(1, 1));
//! player.add_card(Card::new(3, 12));
//!
//! let played = player.play_card(Card::new(1, 1));
//! assert_eq!(played.name(), "ace-of-clubs");
//! assert_eq!(player.hand().len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod player;
pub mod roster;
pub mod sync;

// Re-export main types
pub use card::{Card, CardNaming, DECK_SIZE, MAX_RANK, Suit};
pub use deck::Deck;
pub use error::{CardError, RosterError};
pub use hand::Hand;
pub use options::DeckOptions;
pub use player::{Player, PlayerNumber};
pub use roster::Roster;
pub use sync::SharedPlayer;
