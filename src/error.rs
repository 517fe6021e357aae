//! Error types for card and roster operations.

use thiserror::Error;

use crate::player::PlayerNumber;

/// Errors that can occur when building a validated card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit code is not 0..=4.
    #[error("invalid suit code {0}")]
    InvalidSuit(u8),
    /// Rank code does not fit the suit.
    #[error("invalid rank {rank} for suit {suit}")]
    InvalidRank {
        /// The suit code.
        suit: u8,
        /// The rejected rank code.
        rank: u8,
    },
}

/// Errors that can occur when managing a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Player not found.
    #[error("player {0} not found")]
    PlayerNotFound(PlayerNumber),
    /// A player with this number is already seated.
    #[error("player {0} is already seated")]
    DuplicatePlayer(PlayerNumber),
    /// A player cannot be their own teammate.
    #[error("player {0} cannot be their own teammate")]
    SelfTeammate(PlayerNumber),
}
