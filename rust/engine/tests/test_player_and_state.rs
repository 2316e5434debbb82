use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::engine::Engine;
use holdem_engine::player::{Player, PlayerStatus, STARTING_STACK};

#[test]
fn players_start_active_with_their_stack() {
    let p = Player::new("Alice", STARTING_STACK);
    assert_eq!(p.chips(), 1_000);
    assert_eq!(p.current_bet(), 0);
    assert!(p.hand().is_empty());
    assert!(p.is_active());
    assert!(!p.has_folded());
}

#[test]
fn player_receives_two_hole_cards_in_order() {
    let mut p = Player::new("Alice", STARTING_STACK);
    let a = Card::new(Suit::Spades, Rank::Ace);
    let k = Card::new(Suit::Spades, Rank::King);
    p.receive_card(a);
    p.receive_card(k);
    assert_eq!(p.hand(), &[a, k]);
}

#[test]
fn bets_conserve_chips() {
    let mut p = Player::new("Alice", 1_000);
    let before = p.chips();
    let mut wagered = 0;
    for amount in [100, 250, 0, 400, 900, 50] {
        let chips_before_call = p.chips();
        let actual = p.bet(amount);
        assert!(actual <= chips_before_call);
        assert!(actual <= amount);
        wagered += actual;
        assert_eq!(p.chips() + p.current_bet(), before);
    }
    assert_eq!(wagered, before);
    assert_eq!(p.chips(), 0);
    assert_eq!(p.status(), PlayerStatus::AllIn);
}

#[test]
fn fold_is_sticky_until_reset() {
    let mut p = Player::new("Bob", 500);
    p.fold();
    assert!(p.has_folded());
    assert!(!p.is_active());
    p.fold();
    assert!(p.has_folded());
    p.reset();
    assert!(!p.has_folded());
    assert!(p.is_active());
}

#[test]
fn reset_clears_hand_and_bet() {
    let mut p = Player::new("Bob", 500);
    p.receive_card(Card::new(Suit::Clubs, Rank::Two));
    p.bet(200);
    p.reset();
    assert!(p.hand().is_empty());
    assert_eq!(p.current_bet(), 0);
    assert_eq!(p.chips(), 300);
}

#[test]
fn busted_player_stays_out_until_refunded() {
    let mut p = Player::new("Carol", 100);
    p.bet(100);
    p.reset();
    assert_eq!(p.status(), PlayerStatus::Busted);
    assert!(!p.is_active());
    p.reset();
    assert!(!p.is_active());
    p.add_chips(250);
    p.reset();
    assert!(p.is_active());
    assert_eq!(p.chips(), 250);
}

#[test]
fn busted_seat_is_skipped_when_dealing() {
    let mut eng = Engine::new(Some(1));
    eng.add_player("Alice", 1000).unwrap();
    eng.add_player("Bob", 1000).unwrap();
    eng.add_player("Carol", 0).unwrap();
    eng.start().unwrap();
    let players = eng.players();
    assert_eq!(players[0].hand().len(), 2);
    assert_eq!(players[1].hand().len(), 2);
    assert!(players[2].hand().is_empty());
    assert_eq!(eng.deck_remaining(), 48);
}

#[test]
fn pot_only_grows_by_what_the_caller_credits() {
    let mut eng = Engine::new(Some(2));
    eng.add_player("Alice", 1000).unwrap();
    eng.add_player("Bob", 60).unwrap();
    eng.start().unwrap();
    assert_eq!(eng.pot(), 0);

    let a = eng.players_mut()[0].bet(100);
    let b = eng.players_mut()[1].bet(100);
    eng.add_to_pot(a);
    eng.add_to_pot(b);

    assert_eq!(eng.pot(), 160);
    let total: u32 = eng.players().iter().map(|p| p.chips()).sum::<u32>() + eng.pot();
    assert_eq!(total, 1060);
    assert_eq!(eng.players()[1].status(), PlayerStatus::AllIn);

    eng.new_hand().unwrap();
    assert_eq!(eng.pot(), 0);
}
