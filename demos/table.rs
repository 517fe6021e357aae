//! Table setup example: build a deck, seat four players, hand out cards,
//! discard down to playing size and play one trick's worth of cards.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use trickcards::{Card, Deck, DeckOptions, Player, Roster};

const DEALT: usize = 12;
const KEPT: usize = 6;

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::shuffled(&DeckOptions::default().with_jokers(1), seed);

    let mut roster = Roster::new();
    for (number, name) in [(1, "North"), (2, "East"), (3, "South"), (4, "West")] {
        if let Err(err) = roster.add(Player::with_name(number, name)) {
            println!("Seat error: {err}");
            return;
        }
    }
    if let Err(err) = roster.pair(1, 3).and_then(|()| roster.pair(2, 4)) {
        println!("Team error: {err}");
        return;
    }

    let numbers = roster.numbers().to_vec();
    for &number in &numbers {
        let block = deck.split_off(deck.len().saturating_sub(DEALT));
        if let Some(player) = roster.get_mut(number) {
            player.extend_hand(block);
        }
    }
    println!("{} cards left in the cat", deck.len());

    let mut trick: Vec<Card> = Vec::new();
    for &number in &numbers {
        let Some(player) = roster.get_mut(number) else {
            continue;
        };
        let surplus: Vec<Card> = player.hand().iter().skip(KEPT).cloned().collect();
        for card in &surplus {
            player.discard_card(card);
        }
        if let Some(lead) = player.hand().cards().first().cloned() {
            trick.push(player.play_card(lead));
        }
    }

    for player in roster.iter() {
        let partner = roster
            .teammate_of(player.number())
            .map_or("nobody", Player::name);
        let hand: Vec<String> = player.hand().iter().map(ToString::to_string).collect();
        println!(
            "{} (with {partner}) holds {}: {}",
            player.name(),
            player.hand().len(),
            hand.join(", ")
        );
    }

    let played: Vec<&str> = trick.iter().map(Card::name).collect();
    println!("Trick: {}", played.join(", "));
}
