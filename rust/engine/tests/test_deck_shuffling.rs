use std::collections::HashSet;

use holdem_engine::cards::{all_ranks, all_suits, Card};
use holdem_engine::deck::Deck;
use holdem_engine::errors::GameError;

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.reset();
    assert_eq!(deck.remaining(), 52);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    for s in all_suits() {
        for r in all_ranks() {
            assert!(set.contains(&Card::new(s, r)), "missing {:?} {:?}", r, s);
        }
    }
    assert_eq!(deck.deal(), Err(GameError::EmptyDeck));
    assert!(deck.is_empty());
}

#[test]
fn reset_restores_canonical_order_after_shuffle_and_deal() {
    let mut fresh = Deck::new_with_seed(1);
    fresh.reset();
    let canonical = fresh.cards().to_vec();

    let mut deck = Deck::new_with_seed(2);
    deck.shuffle();
    deck.deal().unwrap();
    deck.deal().unwrap();
    deck.reset();
    assert_eq!(deck.cards(), canonical.as_slice());
    deck.reset();
    assert_eq!(deck.cards(), canonical.as_slice());
}

#[test]
fn shuffle_is_a_permutation() {
    let mut deck = Deck::new_with_seed(9);
    let before: Vec<Card> = deck.cards().to_vec();
    deck.shuffle();
    let after: Vec<Card> = deck.cards().to_vec();
    assert_ne!(before, after, "shuffle should change the order");
    let mut a = before.clone();
    let mut b = after.clone();
    a.sort();
    b.sort();
    assert_eq!(a, b, "shuffle must not change the multiset of cards");
}

#[test]
fn shuffle_leaves_dealt_cards_out() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    let dealt = deck.deal().unwrap();
    deck.shuffle();
    assert_eq!(deck.remaining(), 51);
    assert!(!deck.cards().contains(&dealt));
}

#[test]
fn deal_strictly_decreases_remaining() {
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    let mut seen = HashSet::new();
    for expected in (0..52).rev() {
        let c = deck.deal().unwrap();
        assert_eq!(deck.remaining(), expected);
        assert!(seen.insert(c));
    }
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    // Compare first 10 cards
    let a: Vec<Card> = (0..10).map(|_| d1.deal().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn entropy_seeded_deck_is_complete() {
    let mut deck = Deck::new();
    deck.shuffle();
    let set: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(set.len(), 52);
}
