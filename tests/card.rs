//! Card naming and predicate tests.

use trickcards::{Card, CardError, CardNaming, DECK_SIZE, Deck, DeckOptions, Suit};

#[test]
fn colour_follows_suit_for_every_regular_card() {
    for suit in 1..=4 {
        for rank in 1..=13 {
            let card = Card::new(suit, rank);
            assert_eq!(card.is_black(), suit == 1 || suit == 4, "{card}");
            assert_eq!(card.is_red(), suit == 2 || suit == 3, "{card}");
            assert!(card.is_black() != card.is_red(), "{card}");
            assert!(!card.is_joker(), "{card}");
        }
    }
}

#[test]
fn joker_is_named_and_colourless() {
    let joker = Card::new(0, 0);
    assert!(joker.is_joker());
    assert!(!joker.is_black());
    assert!(!joker.is_red());
    assert_eq!(joker.name(), "joker");
    assert_eq!(joker, Card::joker());
}

#[test]
fn standard_names_use_one_label_per_code() {
    assert_eq!(Card::new(1, 1).name(), "ace-of-clubs");
    assert_eq!(Card::new(2, 10).name(), "ten-of-diamonds");
    assert_eq!(Card::new(3, 12).name(), "queen-of-hearts");
    assert_eq!(Card::new(4, 13).name(), "king-of-spades");
    assert_eq!(Card::new(4, 7).to_string(), "seven-of-spades");
}

#[test]
fn legacy_names_collapse_to_king_of_spades() {
    assert_eq!(
        Card::with_naming(1, 1, CardNaming::Legacy).name(),
        "king-of-spades"
    );
    assert_eq!(
        Card::with_naming(3, 5, CardNaming::Legacy).name(),
        "king-of-spades"
    );
    assert_eq!(Card::with_naming(0, 0, CardNaming::Legacy).name(), "joker");
    assert_eq!(Card::with_naming(9, 2, CardNaming::Legacy).name(), "king-of-");
}

#[test]
fn out_of_range_codes_leave_empty_segments() {
    assert_eq!(Card::new(7, 1).name(), "ace-of-");
    assert_eq!(Card::new(2, 20).name(), "-of-diamonds");
    assert_eq!(Card::new(0, 5).name(), "five-of-");
    assert!(Card::new(0, 5).is_joker());
    assert_eq!(Card::new(7, 1).suit_kind(), None);
}

#[test]
fn validated_constructor_rejects_bad_codes() {
    assert_eq!(Card::try_new(5, 1).unwrap_err(), CardError::InvalidSuit(5));
    assert_eq!(
        Card::try_new(1, 0).unwrap_err(),
        CardError::InvalidRank { suit: 1, rank: 0 }
    );
    assert_eq!(
        Card::try_new(0, 3).unwrap_err(),
        CardError::InvalidRank { suit: 0, rank: 3 }
    );
    assert_eq!(Card::try_new(3, 11).unwrap().name(), "jack-of-hearts");
    assert!(Card::try_new(0, 0).unwrap().is_joker());
}

#[test]
fn suit_codes_round_trip_through_typed_suit() {
    assert_eq!(Suit::from_code(0), Ok(Suit::Joker));
    assert_eq!(Suit::try_from(4), Ok(Suit::Spades));
    assert_eq!(u8::from(Suit::Diamonds), 2);
    assert_eq!(Suit::Hearts.word(), "hearts");
    assert!(Suit::Clubs.is_black());
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Joker.is_black() && !Suit::Joker.is_red());
    assert_eq!(Card::new(2, 4).suit_kind(), Some(Suit::Diamonds));
}

#[test]
fn setters_do_not_rename() {
    let mut card = Card::new(1, 1);
    card.set_suit(3);
    card.set_rank(13);
    assert_eq!(card.suit(), 3);
    assert_eq!(card.rank(), 13);
    assert!(card.is_red());
    assert_eq!(card.name(), "ace-of-clubs");

    card.set_name("king-of-hearts");
    assert_eq!(card.name(), "king-of-hearts");
}

#[test]
fn scoring_attributes_start_unset() {
    let mut card = Card::new(3, 5);
    assert_eq!(card.point_value(), None);
    assert_eq!(card.rank_value(), None);

    card.set_point_value(Some(5));
    card.set_rank_value(Some(5.5));
    assert_eq!(card.point_value(), Some(5));
    assert_eq!(card.rank_value(), Some(5.5));
    assert_eq!(card.owned_by(), None);

    card.set_owned_by(Some(2));
    assert_eq!(card.owned_by(), Some(2));
}

#[test]
fn equality_ignores_everything_but_the_codes() {
    let mut card = Card::new(3, 5);
    card.set_point_value(Some(5));
    card.set_rank_value(Some(f32::NAN));
    card.set_owned_by(Some(1));
    card.set_name("renamed");

    assert_eq!(card, card.clone());
    assert_eq!(card, Card::new(3, 5));
    assert_eq!(Card::with_naming(3, 5, CardNaming::Legacy), Card::new(3, 5));
    assert_ne!(card, Card::new(3, 6));
    assert_ne!(card, Card::new(2, 5));
}

#[test]
fn default_card_is_a_joker() {
    let card = Card::default();
    assert!(card.is_joker());
    assert_eq!(card.name(), "joker");
}

#[test]
fn deck_holds_every_card_once_per_copy() {
    let deck = Deck::new(&DeckOptions::default());
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.cards()[0].name(), "ace-of-clubs");
    assert_eq!(deck.cards()[DECK_SIZE - 1].name(), "king-of-spades");
    assert!(deck.cards().iter().all(|card| !card.is_joker()));

    let options = DeckOptions::default().with_decks(2).with_jokers(2);
    let deck = Deck::new(&options);
    assert_eq!(deck.len(), options.card_count());
    assert_eq!(deck.len(), 2 * DECK_SIZE + 2);
    assert_eq!(deck.cards().iter().filter(|card| card.is_joker()).count(), 2);
    let aces_of_clubs = deck
        .cards()
        .iter()
        .filter(|card| card.name() == "ace-of-clubs")
        .count();
    assert_eq!(aces_of_clubs, 2);
}

#[test]
fn deck_uses_configured_naming() {
    let options = DeckOptions::default().with_naming(CardNaming::Legacy);
    let deck = Deck::new(&options);
    assert!(deck.cards().iter().all(|card| card.name() == "king-of-spades"));
}

#[test]
fn shuffle_is_reproducible_per_seed() {
    let options = DeckOptions::default().with_jokers(1);
    let first = Deck::shuffled(&options, 7);
    let second = Deck::shuffled(&options, 7);
    let other = Deck::shuffled(&options, 8);

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_ne!(first, Deck::new(&options));
    assert_eq!(first.len(), DECK_SIZE + 1);
}

#[test]
fn reshuffling_an_existing_deck_keeps_its_cards() {
    let options = DeckOptions::default();
    let mut deck = Deck::shuffled(&options, 3);
    let before = deck.clone();

    deck.shuffle(3);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck, before);
    for card in before.cards() {
        assert!(deck.cards().contains(card), "{card}");
    }

    let mut again = Deck::shuffled(&options, 3);
    again.shuffle(3);
    assert_eq!(deck, again);
}

#[test]
fn split_off_clamps_to_length() {
    let mut deck = Deck::new(&DeckOptions::default());
    let tail = deck.split_off(40);
    assert_eq!(tail.len(), 12);
    assert_eq!(deck.len(), 40);

    assert!(deck.split_off(100).is_empty());
    assert_eq!(deck.len(), 40);
}
