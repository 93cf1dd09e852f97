use deck_rs::cards::{Card, PokerCard, Suit};
use deck_rs::config::PokerConfig;
use deck_rs::deck::{CreateDeck, PokerDeck};
use std::collections::HashMap;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn ace_high_deck_deals_ace_first() {
    init_logger();
    let mut deck = PokerDeck::create(&PokerConfig { ace_high: true });
    let card = deck.deal_one_card().unwrap();
    assert_eq!(card.id(), "A");
    assert_eq!(card.order(), 14);
}

#[test]
fn ace_low_deck_deals_king_first() {
    init_logger();
    let mut deck = PokerDeck::create(&PokerConfig { ace_high: false });
    let card = deck.deal_one_card().unwrap();
    assert_eq!(card.id(), "K");
    assert_eq!(card.order(), 13);
    assert_eq!(deck.cards()[0].id(), "A");
}

#[test]
fn each_id_appears_once_per_suit() {
    let deck = PokerDeck::create_default();
    let mut per_id: HashMap<&str, Vec<Suit>> = HashMap::new();
    for card in deck.cards() {
        per_id.entry(card.id()).or_default().push(card.suit());
    }
    assert_eq!(per_id.len(), 13);
    for suits in per_id.values() {
        assert_eq!(suits.len(), 4);
        for suit in Suit::ALL {
            assert!(suits.contains(&suit));
        }
    }
}

#[test]
fn dealing_all_cards_empties_deck() {
    init_logger();
    let mut deck = PokerDeck::standard();
    deck.shuffle();
    for i in 0..52 {
        assert!(deck.deal_one_card().is_some(), "card {i}");
        assert_eq!(deck.cards_dealt() + deck.cards_remaining(), 52);
    }
    assert!(deck.is_empty());
    assert_eq!(deck.cards_remaining(), 0);
    assert_eq!(deck.cards_dealt(), 52);
    assert!(deck.deal_one_card().is_none());
}

#[test]
fn shuffle_after_partial_deal_keeps_remaining_cards() {
    let mut deck = PokerDeck::standard();
    let dealt = deck.deal(10);
    assert_eq!(dealt.len(), 10);

    let mut before: Vec<String> = deck.cards().iter().map(PokerCard::to_string).collect();
    deck.shuffle_seeded(11);
    let mut after: Vec<String> = deck.cards().iter().map(PokerCard::to_string).collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
    assert_eq!(deck.cards_dealt(), 10);
}

#[test]
fn shuffle_two_remaining_always_inverts() {
    let mut deck = PokerDeck::standard();
    deck.deal(50);
    for seed in 0..16 {
        let before = deck.cards().to_vec();
        deck.shuffle_seeded(seed);
        assert_eq!(deck.cards()[0], before[1]);
        assert_eq!(deck.cards()[1], before[0]);
    }
}

#[test]
fn shuffle_on_empty_deck_is_fine() {
    let mut deck = PokerDeck::standard();
    while !deck.is_empty() {
        deck.deal_one_card();
    }
    deck.shuffle();
    assert!(deck.deal_one_card().is_none());
}

#[test]
fn shuffled_full_deck_differs() {
    let mut deck = PokerDeck::standard();
    let before = deck.cards().to_vec();
    deck.shuffle();
    assert_ne!(before, deck.cards());
}
