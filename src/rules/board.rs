//! The round engine.
//!
//! A [`Board`] owns the deck and every hand for one round and drives the
//! seated players through an explicit state machine:
//!
//! ```text
//! Dealing -> TurnPhase1(p) -> TurnPhase2(p) -> TurnPhase1(next) -> ... -> RoundOver
//! ```
//!
//! A knock skips phase 2. The round ends once every other player has had one
//! more turn after the first knock, i.e. when
//! `turn - knock_turn >= player_count`.
//!
//! Players only ever see a freshly built [`GameView`]; the only way they
//! change the round is the move they return. Moves outside the legal set end
//! the round with [`GolfError::IllegalMove`], and every trainable seat is
//! told to drop its pending decision.
//!
//! Trainable seats get `update_weights` ahead of each of their decisions
//! (reward 0) and once more when the round ends, carrying
//! `best other score - own score`.

use tracing::{debug, info};

use crate::cards::{Card, Deck, Hand, Viewpoint};
use crate::core::{
    GameRng, GameView, GolfError, LegalMoves, Phase1Move, Phase1Set, Phase2Kind, Phase2Move,
    Phase2Set, PlayerId, PlayerMap, Result, RoundConfig,
};
use crate::players::Seat;

/// Log at `info` when the round is verbose, `debug` otherwise.
macro_rules! narrate {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            info!($($arg)+)
        } else {
            debug!($($arg)+)
        }
    };
}

/// Where a round is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Nothing dealt yet.
    Dealing,
    /// `player` chooses how to draw, or knocks.
    TurnPhase1(PlayerId),
    /// `player` holds `card`, drawn from the face-up pile if `face_up`.
    TurnPhase2 {
        player: PlayerId,
        card: Card,
        face_up: bool,
    },
    RoundOver,
}

pub struct Board<'a> {
    seats: Vec<Seat<'a>>,
    config: RoundConfig,
    rng: GameRng,
    /// Replaced by a shuffled full deck at dealing unless stacked.
    deck: Deck,
    stacked: bool,
    /// Empty until dealt.
    hands: PlayerMap<Hand>,
    phase: RoundPhase,
    turn: usize,
    knock_turn: Option<usize>,
    scores: Option<Vec<u32>>,
}

impl<'a> Board<'a> {
    /// Seat `seats` in order for a round under `config`.
    ///
    /// Fails with `InvalidConfiguration` when the round cannot be dealt.
    pub fn new(seats: Vec<Seat<'a>>, config: RoundConfig, rng: GameRng) -> Result<Self> {
        config.validate(seats.len())?;
        Ok(Self {
            seats,
            config,
            rng,
            deck: Deck::default(),
            stacked: false,
            hands: PlayerMap::from_vec(Vec::new()),
            phase: RoundPhase::Dealing,
            turn: 0,
            knock_turn: None,
            scores: None,
        })
    }

    /// Like [`Board::new`] but deals from `deck` as given instead of a
    /// shuffled full deck. The first draw card is turned up, then cards are
    /// dealt one at a time round the table starting with seat 0, so with two
    /// players seat 0 gets the 1st, 3rd, 5th... dealt card.
    pub fn with_deck(seats: Vec<Seat<'a>>, config: RoundConfig, deck: Deck, rng: GameRng) -> Result<Self> {
        let needed = seats.len() * config.hand_size() + 1;
        if deck.draw_len() < needed {
            return Err(GolfError::InvalidConfiguration(format!(
                "stacked draw pile has {} cards, {needed} needed to deal",
                deck.draw_len()
            )));
        }
        let mut board = Self::new(seats, config, rng)?;
        board.deck = deck;
        board.stacked = true;
        Ok(board)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Hands in seat order; empty before dealing.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        self.hands.as_slice()
    }

    /// Turns completed so far.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub fn has_knocked(&self) -> bool {
        self.knock_turn.is_some()
    }

    /// Final scores in seat order, once the round is over.
    #[must_use]
    pub fn scores(&self) -> Option<&[u32]> {
        self.scores.as_deref()
    }

    /// The card drawn in phase 1 and not yet placed.
    #[must_use]
    pub fn card_in_hand(&self) -> Option<Card> {
        match self.phase {
            RoundPhase::TurnPhase2 { card, .. } => Some(card),
            _ => None,
        }
    }

    /// Projection of the current round for `player`: their own hand as they
    /// see it, every other hand as an opponent sees it (seat order starting
    /// after `player`), and the discard pile.
    ///
    /// # Panics
    ///
    /// If `player` is not seated at this board.
    #[must_use]
    pub fn get_state_for_player(&self, player: PlayerId) -> GameView {
        let n = self.player_count();
        assert!(player.index() < n, "{player} is not seated");

        let hand_view = |index: usize, viewpoint| {
            self.hands
                .as_slice()
                .get(index)
                .map(|hand: &Hand| hand.view(viewpoint))
                .unwrap_or_default()
        };

        GameView {
            own: hand_view(player.index(), Viewpoint::Owner),
            opponents: (1..n)
                .map(|offset| hand_view((player.index() + offset) % n, Viewpoint::Opponent))
                .collect(),
            deck_up: self.deck.discard_pile().clone(),
            has_knocked: self.has_knocked(),
            deck: self.config.deck,
        }
    }

    /// Phase-1 moves currently open to the acting player.
    #[must_use]
    pub fn phase1_legal(&self) -> Phase1Set {
        let mut legal = Phase1Set::new();
        if self.deck.discard_len() > 0 {
            legal.push(Phase1Move::FaceUpCard);
        }
        if self.deck.draw_len() > 0 {
            legal.push(Phase1Move::FaceDownCard);
        }
        if !self.has_knocked() {
            legal.push(Phase1Move::Knock);
        }
        legal
    }

    /// Phase-2 kinds for a card drawn face up (`face_up`) or face down.
    #[must_use]
    pub fn phase2_legal(face_up: bool) -> Phase2Set {
        let mut legal = Phase2Set::new();
        legal.push(Phase2Kind::Swap);
        if !face_up {
            legal.push(Phase2Kind::ReturnToDeck);
        }
        legal
    }

    /// Play the round to the end and return the scores in seat order.
    pub fn play_game(&mut self) -> Result<Vec<u32>> {
        while self.phase != RoundPhase::RoundOver {
            self.step()?;
        }
        Ok(self.scores.clone().unwrap_or_default())
    }

    /// Advance the state machine by one transition.
    ///
    /// On error the round stays where it was and trainable seats get
    /// [`Trainable::reset_round`](crate::players::Trainable::reset_round).
    pub fn step(&mut self) -> Result<()> {
        let result = self.advance();
        if let Err(err) = &result {
            narrate!(self.config.verbose, %err, "round aborted");
            self.abort();
        }
        result
    }

    fn advance(&mut self) -> Result<()> {
        match self.phase {
            RoundPhase::Dealing => self.deal(),
            RoundPhase::TurnPhase1(player) => self.play_phase1(player),
            RoundPhase::TurnPhase2 {
                player,
                card,
                face_up,
            } => self.play_phase2(player, card, face_up),
            RoundPhase::RoundOver => Ok(()),
        }
    }

    fn deal(&mut self) -> Result<()> {
        if !self.stacked {
            self.deck = Deck::shuffled(&self.config.deck, &mut self.rng);
        }

        let hand_size = self.config.hand_size();
        let Some(up) = self.deck.turn_up() else {
            return Err(GolfError::InvalidConfiguration("no card to turn up".into()));
        };

        let n = self.player_count();
        let dealt = self
            .deck
            .deal(hand_size * n)
            .ok_or_else(|| GolfError::InvalidConfiguration("deck ran out while dealing".into()))?;

        // One card at a time round the table
        let mut piles = vec![Vec::with_capacity(hand_size); n];
        for (i, card) in dealt.into_iter().enumerate() {
            piles[i % n].push(card);
        }
        let hands = piles.into_iter().map(Hand::new).collect::<Result<Vec<_>>>()?;
        self.hands = PlayerMap::from_vec(hands);

        narrate!(self.config.verbose, face_up = %up, players = self.player_count(), "dealt round");
        self.phase = RoundPhase::TurnPhase1(PlayerId(0));
        Ok(())
    }

    fn play_phase1(&mut self, player: PlayerId) -> Result<()> {
        let legal = self.phase1_legal();
        let view = self.get_state_for_player(player);
        let seat = &mut self.seats[player.index()];

        if let Some(learner) = seat.as_trainable() {
            learner.update_weights(&view, None, 0.0, &LegalMoves::Phase1(legal.clone()));
        }

        let choice = seat.turn_phase_1(&view, &legal);
        if !legal.contains(&choice) {
            return Err(GolfError::IllegalMove {
                player,
                description: format!("{choice:?} not in {:?}", legal.as_slice()),
            });
        }
        narrate!(self.config.verbose, turn = self.turn, %player, ?choice, "phase 1");

        let (card, face_up) = match choice {
            Phase1Move::Knock => {
                self.knock_turn = Some(self.turn);
                narrate!(self.config.verbose, %player, "knocked");
                return self.end_turn(player);
            }
            Phase1Move::FaceUpCard => (self.deck.take_face_up(), true),
            Phase1Move::FaceDownCard => (self.deck.draw_face_down(), false),
        };

        // Legal sets only offer piles that have cards
        let card = card.ok_or_else(|| GolfError::IllegalMove {
            player,
            description: format!("{choice:?} from an empty pile"),
        })?;
        self.phase = RoundPhase::TurnPhase2 {
            player,
            card,
            face_up,
        };
        Ok(())
    }

    fn play_phase2(&mut self, player: PlayerId, card: Card, face_up: bool) -> Result<()> {
        let legal = Self::phase2_legal(face_up);
        let view = self.get_state_for_player(player);
        let seat = &mut self.seats[player.index()];

        if let Some(learner) = seat.as_trainable() {
            learner.update_weights(&view, Some(card), 0.0, &LegalMoves::Phase2(legal.clone()));
        }

        let choice = seat.turn_phase_2(card, &view, &legal);
        if !legal.contains(&choice.kind()) {
            return Err(GolfError::IllegalMove {
                player,
                description: format!("{choice:?} not in {:?}", legal.as_slice()),
            });
        }

        match choice {
            Phase2Move::Swap { row, col } => {
                let hand = &mut self.hands[player];
                let old = hand
                    .swap(row, col, card, face_up)
                    .map_err(|err| GolfError::IllegalMove {
                        player,
                        description: err.to_string(),
                    })?;
                self.deck.discard(old);
                narrate!(self.config.verbose, %player, %card, %old, row, col, "swapped");
            }
            Phase2Move::ReturnToDeck => {
                self.deck.discard(card);
                narrate!(self.config.verbose, %player, %card, "returned to deck");
            }
        }

        if self.deck.reshuffle_if_empty(&mut self.rng) {
            narrate!(self.config.verbose, draw = self.deck.draw_len(), "reshuffled discard pile");
        }
        self.end_turn(player)
    }

    fn end_turn(&mut self, player: PlayerId) -> Result<()> {
        self.turn += 1;

        let knock_done = self
            .knock_turn
            .is_some_and(|knock| self.turn - knock >= self.player_count());
        let limit_hit = self.config.turn_limit.is_some_and(|limit| self.turn >= limit);

        if knock_done || limit_hit {
            self.finish();
        } else {
            self.phase = RoundPhase::TurnPhase1(player.next(self.player_count()));
        }
        Ok(())
    }

    fn abort(&mut self) {
        for seat in &mut self.seats {
            if let Some(learner) = seat.as_trainable() {
                learner.reset_round();
            }
        }
    }

    fn finish(&mut self) {
        let scores: Vec<u32> = self.hands.values().map(Hand::score).collect();

        for player in PlayerId::all(self.player_count()) {
            let reward = round_reward(&scores, player);
            let view = self.get_state_for_player(player);
            if let Some(learner) = self.seats[player.index()].as_trainable() {
                learner.update_weights(&view, None, reward, &LegalMoves::Terminal);
            }
        }

        narrate!(self.config.verbose, turns = self.turn, ?scores, "round over");
        self.scores = Some(scores);
        self.phase = RoundPhase::RoundOver;
    }
}

/// End-of-round reward: the best other score minus our own, so finishing
/// lowest is positive.
#[must_use]
pub fn round_reward(scores: &[u32], player: PlayerId) -> f64 {
    let own = f64::from(scores[player.index()]);
    let best_other = scores
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != player.index())
        .map(|(_, &s)| f64::from(s))
        .reduce(f64::min)
        .unwrap_or(own);
    best_other - own
}

impl std::fmt::Debug for Board<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("players", &self.seats.iter().map(Seat::name).collect::<Vec<_>>())
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("knock_turn", &self.knock_turn)
            .finish_non_exhaustive()
    }
}
