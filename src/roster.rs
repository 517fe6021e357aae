//! Seating table that owns players and resolves teammate links.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use log::debug;

use crate::error::RosterError;
use crate::player::{Player, PlayerNumber};

/// Players at a table, in seating order.
///
/// Teammates reference each other by number, so a mutual link never forms an
/// ownership cycle.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Player numbers in seating order.
    seats: Vec<PlayerNumber>,
    /// Players by number.
    players: HashMap<PlayerNumber, Player>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats a player after the current last seat.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicatePlayer`] if the number is taken.
    pub fn add(&mut self, player: Player) -> Result<(), RosterError> {
        let number = player.number();
        if self.players.contains_key(&number) {
            return Err(RosterError::DuplicatePlayer(number));
        }
        self.seats.push(number);
        self.players.insert(number, player);
        debug!("seated player {number}");
        Ok(())
    }

    /// Removes a player and clears any teammate link pointing at them.
    pub fn remove(&mut self, number: PlayerNumber) -> Option<Player> {
        let player = self.players.remove(&number)?;
        self.seats.retain(|&seat| seat != number);
        for other in self.players.values_mut() {
            if other.teammate() == Some(number) {
                other.set_teammate(None);
            }
        }
        debug!("removed player {number}");
        Some(player)
    }

    /// Returns the player with the given number.
    #[must_use]
    pub fn get(&self, number: PlayerNumber) -> Option<&Player> {
        self.players.get(&number)
    }

    /// Returns the player with the given number for mutation.
    pub fn get_mut(&mut self, number: PlayerNumber) -> Option<&mut Player> {
        self.players.get_mut(&number)
    }

    /// Links two players as mutual teammates.
    ///
    /// Any previous partner of either player is unlinked first.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::SelfTeammate`] when `a == b` and
    /// [`RosterError::PlayerNotFound`] when either player is not seated.
    pub fn pair(&mut self, a: PlayerNumber, b: PlayerNumber) -> Result<(), RosterError> {
        if a == b {
            return Err(RosterError::SelfTeammate(a));
        }
        for number in [a, b] {
            if !self.players.contains_key(&number) {
                return Err(RosterError::PlayerNotFound(number));
            }
        }

        for number in [a, b] {
            self.unlink(number);
        }
        if let Some(player) = self.players.get_mut(&a) {
            player.set_teammate(Some(b));
        }
        if let Some(player) = self.players.get_mut(&b) {
            player.set_teammate(Some(a));
        }
        debug!("paired players {a} and {b}");
        Ok(())
    }

    /// Clears the teammate link of `number` on both sides.
    fn unlink(&mut self, number: PlayerNumber) {
        let partner = self.players.get_mut(&number).and_then(|player| {
            let partner = player.teammate();
            player.set_teammate(None);
            partner
        });
        if let Some(partner) = partner.and_then(|p| self.players.get_mut(&p)) {
            if partner.teammate() == Some(number) {
                partner.set_teammate(None);
            }
        }
    }

    /// Returns the teammate of the given player, if linked and seated.
    #[must_use]
    pub fn teammate_of(&self, number: PlayerNumber) -> Option<&Player> {
        let teammate = self.players.get(&number)?.teammate()?;
        self.players.get(&teammate)
    }

    /// Returns the player numbers in seating order.
    #[must_use]
    pub fn numbers(&self) -> &[PlayerNumber] {
        &self.seats
    }

    /// Returns the players in seating order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.seats
            .iter()
            .filter_map(|number| self.players.get(number))
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Returns whether no players are seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}
