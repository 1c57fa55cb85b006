//! Built-in players inside real rounds.

use golf_rl::core::{GameRng, RoundConfig};
use golf_rl::players::{Contestant, Player, ProbabilisticConfig, ProbabilisticPlayer, RandomPlayer, Seat};
use golf_rl::rules::Board;

fn play(first: &mut dyn Player, second: &mut dyn Player, seed: u64) -> Vec<u32> {
    let seats = vec![Seat::Basic(first), Seat::Basic(second)];
    let config = RoundConfig::default().with_turn_limit(500);
    let mut board = Board::new(seats, config, GameRng::new(seed)).unwrap();
    board.play_game().unwrap()
}

/// The probabilistic player only ever returns legal moves.
#[test]
fn test_probabilistic_rounds_complete() {
    let mut heuristic = ProbabilisticPlayer::default();
    for seed in 0..30 {
        let mut random = RandomPlayer::with_seed(seed);
        let scores = play(&mut heuristic, &mut random, seed);
        assert_eq!(scores.len(), 2);
        assert!(scores.iter().all(|&s| s <= 40));
    }
}

/// Over many rounds the heuristic scores lower than random play.
#[test]
fn test_probabilistic_outscores_random() {
    let mut heuristic = ProbabilisticPlayer::default();
    let (mut ours, mut theirs) = (0u32, 0u32);

    for seed in 0..100 {
        let mut random = RandomPlayer::with_seed(seed + 500);
        // Alternate who moves first
        if seed % 2 == 0 {
            let scores = play(&mut heuristic, &mut random, seed);
            ours += scores[0];
            theirs += scores[1];
        } else {
            let scores = play(&mut random, &mut heuristic, seed);
            ours += scores[1];
            theirs += scores[0];
        }
    }
    assert!(ours < theirs, "heuristic {ours} vs random {theirs}");
}

/// Two heuristic players against each other still end their rounds.
#[test]
fn test_probabilistic_mirror_match() {
    let mut a = ProbabilisticPlayer::default();
    let mut b = ProbabilisticPlayer::new(ProbabilisticConfig::default().with_min_distance(4.0));
    for seed in 0..10 {
        let scores = play(&mut a, &mut b, seed);
        assert_eq!(scores.len(), 2);
    }
}

/// Seats and contestants report the wrapped player's name.
#[test]
fn test_names() {
    let mut random = RandomPlayer::with_seed(0);
    let seat = Seat::Basic(&mut random);
    assert_eq!(seat.name(), "Random Player");

    let mut contestant = Contestant::basic(ProbabilisticPlayer::default());
    assert_eq!(contestant.name(), "Probabilistic Player");
    assert!(contestant.as_trainable().is_none());
    assert_eq!(contestant.seat().name(), "Probabilistic Player");
}

/// Random play is reproducible from its seeds.
#[test]
fn test_random_play_is_seeded() {
    let run = || {
        let mut a = RandomPlayer::with_seed(9);
        let mut b = RandomPlayer::with_seed(10);
        play(&mut a, &mut b, 11)
    };
    assert_eq!(run(), run());
}

/// Three seats with a heuristic among random players.
#[test]
fn test_three_player_table() {
    let mut heuristic = ProbabilisticPlayer::default();
    let mut r1 = RandomPlayer::with_seed(1);
    let mut r2 = RandomPlayer::with_seed(2);
    let seats = vec![Seat::Basic(&mut r1), Seat::Basic(&mut heuristic), Seat::Basic(&mut r2)];
    let mut board = Board::new(seats, RoundConfig::default(), GameRng::new(4)).unwrap();

    let scores = board.play_game().unwrap();
    assert_eq!(scores.len(), 3);
}
