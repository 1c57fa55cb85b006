//! Round engine tests.
//!
//! Scripted players drive the engine into specific situations; random
//! players and proptest cover the invariants that must hold in any round.

use proptest::prelude::*;

use golf_rl::cards::{Card, Deck};
use golf_rl::core::{DeckSpec, GameRng, GameView, Phase1Move, Phase2Kind, Phase2Move, PlayerId, RoundConfig};
use golf_rl::players::{Player, RandomPlayer, Seat};
use golf_rl::rules::{Board, RoundPhase};

/// Replays fixed moves, then the first legal move, and records what it
/// was offered.
#[derive(Default)]
struct Scripted {
    phase1: Vec<Phase1Move>,
    phase2: Vec<Phase2Move>,
    offered1: Vec<Vec<Phase1Move>>,
    offered2: Vec<Vec<Phase2Kind>>,
}

impl Scripted {
    fn new(phase1: &[Phase1Move], phase2: &[Phase2Move]) -> Self {
        Self {
            phase1: phase1.to_vec(),
            phase2: phase2.to_vec(),
            ..Self::default()
        }
    }
}

impl Player for Scripted {
    fn name(&self) -> &str {
        "Scripted"
    }

    fn turn_phase_1(&mut self, _view: &GameView, legal: &[Phase1Move]) -> Phase1Move {
        self.offered1.push(legal.to_vec());
        if self.phase1.is_empty() {
            legal[0]
        } else {
            self.phase1.remove(0)
        }
    }

    fn turn_phase_2(&mut self, _card: Card, _view: &GameView, legal: &[Phase2Kind]) -> Phase2Move {
        self.offered2.push(legal.to_vec());
        if self.phase2.is_empty() {
            Phase2Move::Swap { row: 0, col: 0 }
        } else {
            self.phase2.remove(0)
        }
    }
}

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().copied().map(Card::new).collect()
}

/// Every card the board accounts for, sorted.
fn all_cards(board: &Board<'_>) -> Vec<Card> {
    let mut all: Vec<Card> = board
        .hands()
        .iter()
        .flat_map(|hand| hand.cards().iter().copied())
        .chain(board.deck().draw_pile())
        .chain(board.deck().discard_pile().iter().copied())
        .chain(board.card_in_hand())
        .collect();
    all.sort();
    all
}

/// A knock on the first turn gives the other player exactly one more turn.
#[test]
fn test_knock_termination_two_players() {
    let mut knocker = Scripted::new(&[Phase1Move::Knock], &[]);
    let mut other = Scripted::new(&[], &[]);
    {
        let seats = vec![Seat::Basic(&mut knocker), Seat::Basic(&mut other)];
        let mut board = Board::new(seats, RoundConfig::default(), GameRng::new(1)).unwrap();
        let scores = board.play_game().unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(board.turn(), 2);
    }
    assert_eq!(knocker.offered1.len(), 1);
    assert_eq!(other.offered1.len(), 1);
    assert!(!other.offered1[0].contains(&Phase1Move::Knock));
}

/// Both players try to knock; only the first one can.
#[test]
fn test_second_knock_not_offered() {
    let mut first = Scripted::new(&[Phase1Move::Knock], &[]);
    let mut second = Scripted::new(&[], &[]);
    {
        let seats = vec![Seat::Basic(&mut first), Seat::Basic(&mut second)];
        let mut board = Board::new(seats, RoundConfig::default(), GameRng::new(2)).unwrap();
        board.play_game().unwrap();
    }
    assert_eq!(
        first.offered1[0],
        vec![Phase1Move::FaceUpCard, Phase1Move::FaceDownCard, Phase1Move::Knock]
    );
    assert_eq!(second.offered1[0], vec![Phase1Move::FaceUpCard, Phase1Move::FaceDownCard]);
}

/// With three players, a knock on turn 1 leaves turns 2 and 3 to play.
#[test]
fn test_knock_termination_three_players() {
    let mut a = Scripted::new(&[], &[]);
    let mut b = Scripted::new(&[Phase1Move::Knock], &[]);
    let mut c = Scripted::new(&[], &[]);
    {
        let seats = vec![Seat::Basic(&mut a), Seat::Basic(&mut b), Seat::Basic(&mut c)];
        let mut board = Board::new(seats, RoundConfig::default(), GameRng::new(3)).unwrap();
        board.play_game().unwrap();
        assert_eq!(board.turn(), 4);
    }
    assert_eq!(a.offered1.len(), 2);
    assert_eq!(b.offered1.len(), 1);
    assert_eq!(c.offered1.len(), 1);
}

/// Phase-2 legal sets depend on where the card came from.
#[test]
fn test_phase2_legal_sets() {
    let mut up = Scripted::new(&[Phase1Move::FaceUpCard], &[]);
    let mut down = Scripted::new(&[Phase1Move::FaceDownCard, Phase1Move::Knock], &[Phase2Move::ReturnToDeck]);
    {
        let seats = vec![Seat::Basic(&mut up), Seat::Basic(&mut down)];
        let mut board = Board::new(seats, RoundConfig::default(), GameRng::new(4)).unwrap();
        board.play_game().unwrap();
    }
    assert_eq!(up.offered2[0], vec![Phase2Kind::Swap]);
    assert_eq!(down.offered2[0], vec![Phase2Kind::Swap, Phase2Kind::ReturnToDeck]);
}

/// A face-up swap is visible to opponents; a face-down swap is not.
#[test]
fn test_swap_visibility() {
    // Up card 9; dealt alternately into [1, 2, 3, 4] and [5, 6, 7, 8]; draw 0, 11, ...
    let deck = Deck::from_piles(cards(&[9, 1, 5, 2, 6, 3, 7, 4, 8, 0, 11, 12, 10]), vec![]);
    let mut a = Scripted::new(
        &[Phase1Move::FaceUpCard, Phase1Move::Knock],
        &[Phase2Move::Swap { row: 1, col: 1 }],
    );
    let mut b = Scripted::new(&[Phase1Move::FaceDownCard, Phase1Move::FaceDownCard], &[Phase2Move::Swap { row: 1, col: 0 }]);

    let seats = vec![Seat::Basic(&mut a), Seat::Basic(&mut b)];
    let mut board = Board::with_deck(seats, RoundConfig::default(), deck, GameRng::new(0)).unwrap();
    for _ in 0..5 {
        board.step().unwrap();
    }
    // a took the 9 into (1, 1), b drew the 0 into (1, 0)
    assert_eq!(board.phase(), RoundPhase::TurnPhase1(PlayerId(0)));

    let for_b = board.get_state_for_player(PlayerId(1));
    assert_eq!(for_b.opponents[0].raw_cards, vec![None, None, None, Some(Card::new(9))]);
    assert_eq!(for_b.own.raw_cards[1], Some(Card::new(0)));

    let for_a = board.get_state_for_player(PlayerId(0));
    assert_eq!(for_a.own.raw_cards, vec![Some(Card::new(1)), None, Some(Card::new(3)), Some(Card::new(9))]);
    assert!(for_a.opponents[0].raw_cards.iter().all(Option::is_none));

    // Displaced cards went to the discard pile, newest on top
    assert_eq!(for_a.deck_up.iter().copied().collect::<Vec<_>>(), cards(&[4, 6]));
}

/// Returning a face-down card puts it straight on the discard pile.
#[test]
fn test_return_to_deck() {
    let deck = Deck::from_piles(cards(&[9, 1, 5, 2, 6, 3, 7, 4, 8, 0, 11]), vec![]);
    let mut a = Scripted::new(&[Phase1Move::FaceDownCard], &[Phase2Move::ReturnToDeck]);
    let mut b = Scripted::new(&[], &[]);

    let seats = vec![Seat::Basic(&mut a), Seat::Basic(&mut b)];
    let mut board = Board::with_deck(seats, RoundConfig::default(), deck, GameRng::new(0)).unwrap();
    board.step().unwrap();
    board.step().unwrap();
    assert_eq!(board.card_in_hand(), Some(Card::new(0)));
    board.step().unwrap();

    assert_eq!(board.deck().top_discard(), Some(Card::new(0)));
    assert_eq!(board.hands()[0].cards(), cards(&[1, 2, 3, 4]).as_slice());
    assert_eq!(board.phase(), RoundPhase::TurnPhase1(PlayerId(1)));
}

/// Emptying the draw pile reshuffles everything under the top discard.
#[test]
fn test_reshuffle_when_draw_empties() {
    // One column per hand: up 5, hands [1, 2] and [3, 4], draw [7, 8]
    let deck = Deck::from_piles(cards(&[5, 1, 3, 2, 4, 7, 8]), vec![]);
    let config = RoundConfig::new(1).with_deck(DeckSpec { ranks: 13, copies: 1 });
    let mut a = Scripted::new(&[Phase1Move::FaceDownCard], &[Phase2Move::ReturnToDeck]);
    let mut b = Scripted::new(&[Phase1Move::FaceDownCard], &[Phase2Move::Swap { row: 0, col: 0 }]);

    let seats = vec![Seat::Basic(&mut a), Seat::Basic(&mut b)];
    let mut board = Board::with_deck(seats, config, deck, GameRng::new(0)).unwrap();
    for _ in 0..3 {
        board.step().unwrap();
    }
    assert_eq!(board.deck().draw_len(), 1);
    assert_eq!(board.deck().discard_len(), 2);

    board.step().unwrap();
    board.step().unwrap();

    // b swapped the 8 for its 3, which stays face up on its own
    assert_eq!(board.deck().discard_pile().iter().copied().collect::<Vec<_>>(), cards(&[3]));
    let mut draw: Vec<Card> = board.deck().draw_pile().collect();
    draw.sort();
    assert_eq!(draw, cards(&[5, 7]));
    assert_eq!(board.hands()[1].cards(), cards(&[8, 4]).as_slice());
}

/// The face-down option disappears while the draw pile is empty.
#[test]
fn test_face_down_needs_draw_pile() {
    // Dealing uses up the whole draw pile: up 5, hands [1, 2] and [3, 4]
    let deck = Deck::from_piles(cards(&[5, 1, 3, 2, 4]), vec![]);
    let mut a = Scripted::new(&[], &[]);
    let mut b = Scripted::new(&[Phase1Move::Knock], &[]);
    {
        let seats = vec![Seat::Basic(&mut a), Seat::Basic(&mut b)];
        let mut board = Board::with_deck(seats, RoundConfig::new(1), deck, GameRng::new(0)).unwrap();
        board.play_game().unwrap();
        assert_eq!(board.deck().draw_len(), 0);
    }
    assert_eq!(a.offered1[0], vec![Phase1Move::FaceUpCard, Phase1Move::Knock]);
    assert_eq!(b.offered1[0], vec![Phase1Move::FaceUpCard, Phase1Move::Knock]);
    assert_eq!(a.offered1[1], vec![Phase1Move::FaceUpCard]);
}

/// Opponents are listed in seat order starting after the requester.
#[test]
fn test_opponent_order() {
    // Up 12; hands [1, 1, 2, 2], [3, 3, 4, 4], [5, 5, 6, 6]
    let deck = Deck::from_piles(cards(&[12, 1, 3, 5, 1, 3, 5, 2, 4, 6, 2, 4, 6, 7, 7, 8]), vec![]);
    let mut a = Scripted::new(&[Phase1Move::FaceUpCard], &[Phase2Move::Swap { row: 0, col: 0 }]);
    let mut b = Scripted::new(&[], &[]);
    let mut c = Scripted::new(&[], &[]);

    let seats = vec![Seat::Basic(&mut a), Seat::Basic(&mut b), Seat::Basic(&mut c)];
    let mut board = Board::with_deck(seats, RoundConfig::default(), deck, GameRng::new(0)).unwrap();
    for _ in 0..3 {
        board.step().unwrap();
    }

    // Everyone saw the 12 go into a's first slot
    let for_b = board.get_state_for_player(PlayerId(1));
    assert_eq!(for_b.own.raw_cards[0], Some(Card::new(3)));
    assert_eq!(for_b.opponents.len(), 2);
    assert!(for_b.opponents[0].raw_cards.iter().all(Option::is_none));
    assert_eq!(for_b.opponents[1].raw_cards[0], Some(Card::new(12)));

    let for_c = board.get_state_for_player(PlayerId(2));
    assert_eq!(for_c.opponents[0].raw_cards[0], Some(Card::new(12)));
    assert_eq!(for_c.deck_up.iter().copied().collect::<Vec<_>>(), cards(&[1]));
}

/// Two random players always finish with scores in range.
#[test]
fn test_random_rounds_finish() {
    for seed in 0..50 {
        let mut a = RandomPlayer::with_seed(seed);
        let mut b = RandomPlayer::with_seed(seed + 1000);
        let seats = vec![Seat::Basic(&mut a), Seat::Basic(&mut b)];
        let mut board = Board::new(seats, RoundConfig::new(2), GameRng::new(seed)).unwrap();

        let scores = board.play_game().unwrap();
        assert_eq!(scores.len(), 2);
        assert!(scores.iter().all(|&s| s <= 40), "seed {seed}: {scores:?}");
        assert_eq!(board.phase(), RoundPhase::RoundOver);
    }
}

/// Larger tables and wider hands play out too.
#[test]
fn test_four_players_three_columns() {
    let mut players: Vec<RandomPlayer> = (0..4).map(RandomPlayer::with_seed).collect();
    let seats = players.iter_mut().map(|p| Seat::Basic(p as &mut dyn Player)).collect();
    let mut board = Board::new(seats, RoundConfig::new(3), GameRng::new(77)).unwrap();

    let scores = board.play_game().unwrap();
    assert_eq!(scores.len(), 4);
    assert!(scores.iter().all(|&s| s <= 60));
}

proptest! {
    /// No card is created or lost at any point of a round.
    #[test]
    fn prop_card_conservation(seed in any::<u64>(), num_cols in 1usize..4) {
        let mut a = RandomPlayer::with_seed(seed);
        let mut b = RandomPlayer::with_seed(seed.wrapping_add(1));
        let seats = vec![Seat::Basic(&mut a), Seat::Basic(&mut b)];
        let config = RoundConfig::new(num_cols);
        let mut expected = config.deck.full_deck();
        expected.sort();

        let mut board = Board::new(seats, config, GameRng::new(seed)).unwrap();
        board.step().unwrap();
        while board.phase() != RoundPhase::RoundOver {
            prop_assert_eq!(all_cards(&board), expected.clone());
            board.step().unwrap();
        }
        prop_assert_eq!(all_cards(&board), expected);
    }

    /// Reshuffling keeps the pile total and the top discard.
    #[test]
    fn prop_reshuffle_preserves_piles(ranks in prop::collection::vec(0u8..13, 2..40), seed in any::<u64>()) {
        let discard = cards(&ranks);
        let top = *discard.last().unwrap();
        let mut deck = Deck::from_piles(vec![], discard.clone());

        prop_assert!(deck.reshuffle_if_empty(&mut GameRng::new(seed)));
        prop_assert_eq!(deck.len(), discard.len());
        prop_assert_eq!(deck.discard_len(), 1);
        prop_assert_eq!(deck.top_discard(), Some(top));

        let mut before = discard[..discard.len() - 1].to_vec();
        let mut after: Vec<Card> = deck.draw_pile().collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }
}
