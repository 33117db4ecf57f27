//! The turn coordinator.
//!
//! `TurnCoordinator` owns the whole game: deck, hands, table, discard pile,
//! out-of-play flags and the current `TurnPhase`. Seats never mutate
//! anything directly; they submit a [`Move`] and get a [`MoveOutcome`].
//!
//! ## Trick lifecycle
//!
//! ```text
//! Ready --throw--> Thrown --beat--> Beaten --done x N--> Finished
//!                    |  ^             |                     |
//!                    |  +---throw-----+                     v
//!                    +--take--> Beaten (taking)         Drawing --> Ready
//! ```
//!
//! A beaten trick also finishes at once when the defender's hand is empty
//! or the throw limit is reached. Settlement moves the table to the taker
//! or the discard pile, refills hands, marks seats that went out and picks
//! the next attacker.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::legality;
use super::moves::{Decision, Move, MoveKind, PendingDecision};
use super::outcome::{
    Accepted, CardLocation, GameResult, MoveOutcome, Notification, PhasePath, Rejection, Settlement,
};
use super::phase::TurnPhase;
use super::seats;
use crate::ai::{Snapshot, Strategy};
use crate::cards::{Card, Deck, Hand, SortingMode, Suit};
use crate::core::{
    deck_serves, ConfigError, EngineError, GameRng, Player, PlayerId, PlayerMap, RuleSet, DEAL_LIMIT,
    SEAT_NAMES,
};
use crate::table::{DiscardPile, Table};

/// Check result: outer `Err` is an engine fault, inner `Err` a refusal.
type Verdict = Result<Result<(), Rejection>, EngineError>;

/// Single authority over one game.
#[derive(Clone, Debug)]
pub struct TurnCoordinator {
    rules: RuleSet,
    deck: Deck,
    trump_suit: Suit,
    players: PlayerMap<Player>,
    table: Table,
    discard: DiscardPile,
    out_of_play: PlayerMap<bool>,
    places: PlayerMap<usize>,
    done_statuses: PlayerMap<bool>,
    attacker_base: PlayerId,
    thrower_base: PlayerId,
    players_said_done: usize,
    taking: bool,
    throw_limit: usize,
    phase: TurnPhase,
    jitter_rng: GameRng,
    history: Vector<Notification>,
}

impl TurnCoordinator {
    /// Start a game: shuffle, deal and pick the first attacker.
    pub fn new(rules: RuleSet, rng: GameRng) -> Result<Self, ConfigError> {
        rules.validate()?;
        let mut deck_rng = rng.for_context("deck");
        let deck = Deck::shuffled(rules.lowest_rank, &mut deck_rng);
        Self::with_deck(rules, deck, rng)
    }

    /// Start a game with an OS-seeded shuffle.
    pub fn from_entropy(rules: RuleSet) -> Result<Self, ConfigError> {
        Self::new(rules, GameRng::from_entropy())
    }

    /// Start a game from a prepared deck (bottom card first).
    ///
    /// Seats are dealt in order, `DEAL_LIMIT` cards each, from the top of
    /// the deck. The deck must reach the last seat.
    pub fn with_deck(rules: RuleSet, deck: Deck, rng: GameRng) -> Result<Self, ConfigError> {
        rules.validate()?;
        if let Some(&card) = deck.cards().iter().find(|c| c.rank < rules.lowest_rank) {
            return Err(ConfigError::RankOutOfPlay(card));
        }
        if !deck_serves(deck.len(), rules.player_count) {
            return Err(ConfigError::DeckTooSmall {
                deck: deck.len(),
                players: rules.player_count,
            });
        }

        let n = rules.player_count;
        let trump_suit = deck.trump_suit();
        let mut game = Self {
            rules,
            deck,
            trump_suit,
            players: PlayerMap::new(n, |id| Player::new(id, SEAT_NAMES[id.index()])),
            table: Table::new(),
            discard: DiscardPile::new(),
            out_of_play: PlayerMap::with_value(n, false),
            places: PlayerMap::with_value(n, 0),
            done_statuses: PlayerMap::with_value(n, false),
            attacker_base: PlayerId::new(0),
            thrower_base: PlayerId::new(0),
            players_said_done: 0,
            taking: false,
            throw_limit: DEAL_LIMIT,
            phase: TurnPhase::Drawing,
            jitter_rng: rng.for_context("discard"),
            history: Vector::new(),
        };

        for seat in PlayerId::all(n) {
            game.draw_up(seat);
        }
        game.attacker_base = game.lowest_trump_holder();
        game.thrower_base = game.attacker_base;
        game.throw_limit = game.compute_throw_limit().unwrap_or(DEAL_LIMIT);
        game.phase = TurnPhase::Ready;

        info!(
            players = n,
            trump = %trump_suit,
            deck = game.deck.len(),
            attacker = %game.attacker_base,
            "Game started"
        );
        Ok(game)
    }

    /// Replace the default seat names.
    pub fn with_names(mut self, names: Vec<String>) -> Result<Self, ConfigError> {
        if names.len() != self.rules.player_count {
            return Err(ConfigError::SeatNames {
                expected: self.rules.player_count,
                got: names.len(),
            });
        }
        for ((_, player), name) in self.players.iter_mut().zip(names) {
            player.name = name;
        }
        Ok(self)
    }

    // === Queries ===

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn trump_suit(&self) -> Suit {
        self.trump_suit
    }

    /// The face-up bottom card while the deck lasts.
    #[must_use]
    pub fn trump_card(&self) -> Option<Card> {
        self.deck.trump_card()
    }

    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn hand(&self, seat: PlayerId) -> &Hand {
        &self.players[seat].hand
    }

    #[must_use]
    pub fn hand_size(&self, seat: PlayerId) -> usize {
        self.players[seat].hand.len()
    }

    #[must_use]
    pub fn hand_sizes(&self) -> PlayerMap<usize> {
        self.players.map(|p| p.hand.len())
    }

    #[must_use]
    pub fn out_of_play(&self) -> &PlayerMap<bool> {
        &self.out_of_play
    }

    /// Finishing places; 0 while a seat is still playing.
    #[must_use]
    pub fn places(&self) -> &PlayerMap<usize> {
        &self.places
    }

    /// Places with every seat still playing ranked last.
    #[must_use]
    pub fn final_places(&self) -> PlayerMap<usize> {
        let last = self.rules.player_count;
        self.places.map(|&place| if place == 0 { last } else { place })
    }

    /// Which seats said done in the current trick.
    #[must_use]
    pub fn done_statuses(&self) -> &PlayerMap<bool> {
        &self.done_statuses
    }

    #[must_use]
    pub fn players_said_done(&self) -> usize {
        self.players_said_done
    }

    /// The defender has given up and will pick up the table.
    #[must_use]
    pub fn is_taking(&self) -> bool {
        self.taking
    }

    /// Attack cards allowed in the current trick.
    #[must_use]
    pub fn throw_limit(&self) -> usize {
        self.throw_limit
    }

    pub fn current_attacker(&self) -> Result<PlayerId, EngineError> {
        seats::attacker(&self.rules, &self.out_of_play, self.attacker_base)
    }

    pub fn current_defender(&self) -> Result<PlayerId, EngineError> {
        seats::defender(&self.rules, &self.out_of_play, self.attacker_base)
    }

    /// The defender a pass would hand the attack to.
    pub fn next_defender(&self) -> Result<PlayerId, EngineError> {
        seats::next_defender(&self.rules, &self.out_of_play, self.current_defender()?)
    }

    pub fn current_thrower(&self) -> Result<PlayerId, EngineError> {
        let defender = self.current_defender()?;
        seats::thrower(&self.rules, &self.out_of_play, self.thrower_base, defender)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        seats::is_game_over(&self.rules, &self.out_of_play)
    }

    /// How the game ended, once it has.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        if self.rules.team_play {
            let out = |i: u8| self.out_of_play[PlayerId::new(i)];
            let team = |i: u8| [PlayerId::new(i), PlayerId::new(i + 2)];
            return Some(match (out(0) && out(2), out(1) && out(3)) {
                (true, true) => GameResult::TeamDraw,
                (true, false) => GameResult::LosingTeam(team(1)),
                _ => GameResult::LosingTeam(team(0)),
            });
        }
        Some(
            self.out_of_play
                .iter()
                .find(|(_, &out)| !out)
                .map_or(GameResult::Draw, |(seat, _)| GameResult::Fool(seat)),
        )
    }

    /// Accepted moves so far.
    #[must_use]
    pub fn notifications(&self) -> &Vector<Notification> {
        &self.history
    }

    /// Accepted moves from position `cursor` on.
    pub fn notifications_since(&self, cursor: usize) -> impl Iterator<Item = &Notification> {
        self.history.iter().skip(cursor)
    }

    /// Location of every card in the game.
    #[must_use]
    pub fn card_census(&self) -> FxHashMap<Card, CardLocation> {
        let mut census = FxHashMap::default();
        census.extend(self.deck.cards().iter().map(|&c| (c, CardLocation::Deck)));
        for (seat, player) in self.players.iter() {
            census.extend(player.hand.iter().map(|&c| (c, CardLocation::Hand(seat))));
        }
        for i in 0..DEAL_LIMIT {
            census.extend(self.table.attack().get(i).map(|c| (c, CardLocation::Attack(i))));
            census.extend(self.table.defense().get(i).map(|c| (c, CardLocation::Defense(i))));
        }
        census.extend(self.discard.cards().map(|c| (c, CardLocation::Discard)));
        census
    }

    /// Number of card positions across all locations.
    ///
    /// Equals `card_census().len()` exactly when no card is duplicated.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.players.values().map(|p| p.hand.len()).sum::<usize>()
            + self.table.attack_count()
            + self.table.defense_count()
            + self.discard.len()
    }

    /// Who must act next, and how.
    pub fn pending_decision(&self) -> Result<Option<PendingDecision>, EngineError> {
        if self.is_game_over() {
            return Ok(None);
        }
        let pending = match self.phase {
            TurnPhase::Ready => PendingDecision {
                player: self.current_thrower()?,
                decision: Decision::Open,
            },
            TurnPhase::Thrown => PendingDecision {
                player: self.current_defender()?,
                decision: Decision::Defend,
            },
            TurnPhase::Beaten => PendingDecision {
                player: self.current_thrower()?,
                decision: Decision::ThrowOrDone,
            },
            _ => return Ok(None),
        };
        Ok(Some(pending))
    }

    /// Every move `seat` could make right now.
    pub fn legal_moves(&self, seat: PlayerId) -> Result<Vec<Move>, EngineError> {
        let mut candidates = vec![Move::done(), Move::take()];
        for &card in self.hand(seat).iter() {
            candidates.extend([Move::throw(card), Move::beat(card), Move::pass(card)]);
        }
        let mut legal = Vec::new();
        for mv in candidates {
            if self.check(seat, mv)?.is_ok() {
                legal.push(mv);
            }
        }
        Ok(legal)
    }

    /// Public view for `seat`'s strategy: nothing hidden is included.
    pub fn snapshot(&self, seat: PlayerId) -> Result<Snapshot<'_>, EngineError> {
        let next_defender_hand_size = if self.is_game_over() {
            0
        } else {
            self.hand_size(self.next_defender()?)
        };
        Ok(Snapshot {
            player: seat,
            rules: &self.rules,
            trump_suit: self.trump_suit,
            table: &self.table,
            cards_remaining: self.deck.len(),
            hand_sizes: self.hand_sizes(),
            next_defender_hand_size,
            legal_moves: self.legal_moves(seat)?,
        })
    }

    // === Moves ===

    /// Ask `strategy` for the pending decision and apply its move.
    ///
    /// Returns `None` when nothing is pending.
    pub fn step(&mut self, strategy: &mut dyn Strategy) -> Result<Option<MoveOutcome>, EngineError> {
        let Some(pending) = self.pending_decision()? else {
            return Ok(None);
        };
        let mv = {
            let snapshot = self.snapshot(pending.player)?;
            strategy.decide(pending.decision, &snapshot, self.hand(pending.player).cards())
        };
        self.apply_move(pending.player, mv).map(Some)
    }

    pub fn attempt_throw(&mut self, seat: PlayerId, card: Card) -> Result<MoveOutcome, EngineError> {
        self.apply_move(seat, Move::throw(card))
    }

    pub fn attempt_beat(&mut self, seat: PlayerId, card: Card) -> Result<MoveOutcome, EngineError> {
        self.apply_move(seat, Move::beat(card))
    }

    pub fn attempt_pass(&mut self, seat: PlayerId, card: Card) -> Result<MoveOutcome, EngineError> {
        self.apply_move(seat, Move::pass(card))
    }

    pub fn say_done(&mut self, seat: PlayerId) -> Result<MoveOutcome, EngineError> {
        self.apply_move(seat, Move::done())
    }

    pub fn say_take(&mut self, seat: PlayerId) -> Result<MoveOutcome, EngineError> {
        self.apply_move(seat, Move::take())
    }

    /// Reorder a seat's hand for display.
    pub fn sort_hand(&mut self, seat: PlayerId, mode: SortingMode) {
        let trump = self.trump_suit;
        self.players[seat].hand.sort(mode, trump);
    }

    /// Validate and apply a move.
    ///
    /// A refused move leaves the game untouched and is reported as
    /// `MoveOutcome::Rejected`. `Err` means the seat bookkeeping is broken.
    pub fn apply_move(&mut self, seat: PlayerId, mv: Move) -> Result<MoveOutcome, EngineError> {
        self.apply_checked(seat, mv).map_err(|err| {
            warn!(%seat, %mv, %err, "Seat resolution failed");
            err
        })
    }

    fn apply_checked(&mut self, seat: PlayerId, mv: Move) -> Result<MoveOutcome, EngineError> {
        if let Err(rejection) = self.check(seat, mv)? {
            debug!(%seat, %mv, %rejection, "Move rejected");
            return Ok(MoveOutcome::Rejected(rejection));
        }

        let mut phases = PhasePath::new();
        let notification = match (mv.kind, mv.card) {
            (MoveKind::Throw, Some(card)) => self.apply_throw(seat, card, &mut phases),
            (MoveKind::Beat, Some(card)) => self.apply_beat(seat, card, &mut phases),
            (MoveKind::Pass, Some(card)) => self.apply_pass(seat, card, &mut phases)?,
            (MoveKind::Done, _) => self.apply_done(seat),
            (MoveKind::Take, _) => self.apply_take(seat, &mut phases),
            (_, None) => return Ok(MoveOutcome::Rejected(Rejection::MissingCard)),
        };
        debug!(%seat, %mv, phase = %self.phase, "Move accepted");
        self.history.push_back(notification);

        let settlement = self.advance(&mut phases)?;
        Ok(MoveOutcome::Accepted(Accepted {
            notification,
            phases,
            settlement,
        }))
    }

    // === Legality ===

    fn check(&self, seat: PlayerId, mv: Move) -> Verdict {
        if self.is_game_over() {
            return Ok(Err(Rejection::GameOver));
        }
        if mv.kind.needs_card() && mv.card.is_none() {
            return Ok(Err(Rejection::MissingCard));
        }
        match (mv.kind, mv.card) {
            (MoveKind::Throw, Some(card)) => self.check_throw(seat, card),
            (MoveKind::Beat, Some(card)) => self.check_beat(seat, card),
            (MoveKind::Pass, Some(card)) => self.check_pass(seat, card),
            (MoveKind::Done, _) => self.check_done(seat),
            (MoveKind::Take, _) => self.check_take(seat),
            (_, None) => Ok(Err(Rejection::MissingCard)),
        }
    }

    fn check_throw(&self, seat: PlayerId, card: Card) -> Verdict {
        if !matches!(self.phase, TurnPhase::Ready | TurnPhase::Thrown | TurnPhase::Beaten) {
            return Ok(Err(Rejection::WrongPhase(self.phase)));
        }
        let thrower = self.current_thrower()?;
        if seat != thrower {
            return Ok(Err(Rejection::NotYourTurn { expected: thrower }));
        }
        let hand = self.hand(seat).cards();
        if !hand.contains(&card) {
            return Ok(Err(Rejection::CardNotInHand(card)));
        }
        if !legality::card_can_be_thrown(hand, card, &self.table) {
            return Ok(Err(Rejection::RankNotOnTable(card)));
        }
        if self.table.attack_count() >= self.throw_limit {
            return Ok(Err(Rejection::ThrowLimitReached));
        }
        if !self.taking && self.table.unbeaten_count() >= self.hand_size(self.current_defender()?) {
            return Ok(Err(Rejection::DefenderCannotCover));
        }
        Ok(Ok(()))
    }

    /// Shared checks for the defender's moves.
    fn check_defender(&self, seat: PlayerId) -> Verdict {
        if self.phase != TurnPhase::Thrown {
            return Ok(Err(Rejection::WrongPhase(self.phase)));
        }
        let defender = self.current_defender()?;
        if seat != defender {
            return Ok(Err(Rejection::NotYourTurn { expected: defender }));
        }
        if self.taking {
            return Ok(Err(Rejection::AlreadyTaking));
        }
        Ok(Ok(()))
    }

    fn check_beat(&self, seat: PlayerId, card: Card) -> Verdict {
        if let Err(rejection) = self.check_defender(seat)? {
            return Ok(Err(rejection));
        }
        let hand = self.hand(seat).cards();
        if !hand.contains(&card) {
            return Ok(Err(Rejection::CardNotInHand(card)));
        }
        if !legality::card_can_be_beaten(hand, card, &self.table, &self.rules, self.trump_suit) {
            return Ok(Err(Rejection::CannotBeat(card)));
        }
        Ok(Ok(()))
    }

    fn check_pass(&self, seat: PlayerId, card: Card) -> Verdict {
        if let Err(rejection) = self.check_defender(seat)? {
            return Ok(Err(rejection));
        }
        let hand = self.hand(seat).cards();
        if !hand.contains(&card) {
            return Ok(Err(Rejection::CardNotInHand(card)));
        }
        let next_hand = self.hand_size(self.next_defender()?);
        if !legality::card_can_be_passed(hand, card, &self.table, next_hand, &self.rules) {
            return Ok(Err(Rejection::PassNotAllowed(card)));
        }
        Ok(Ok(()))
    }

    fn check_done(&self, seat: PlayerId) -> Verdict {
        if self.phase != TurnPhase::Beaten {
            return Ok(Err(Rejection::WrongPhase(self.phase)));
        }
        let thrower = self.current_thrower()?;
        if seat != thrower {
            return Ok(Err(Rejection::NotYourTurn { expected: thrower }));
        }
        Ok(Ok(()))
    }

    fn check_take(&self, seat: PlayerId) -> Verdict {
        self.check_defender(seat)
    }

    // === Transitions ===

    fn apply_throw(&mut self, seat: PlayerId, card: Card, phases: &mut PhasePath) -> Notification {
        let held = self.players[seat].hand.remove(card);
        let slot = self.table.place_attack(card);
        debug_assert!(held && slot.is_some(), "unchecked throw of {card}");
        self.reset_done();
        self.enter(TurnPhase::Throwing, phases);
        self.enter(TurnPhase::Thrown, phases);
        if self.taking {
            self.enter(TurnPhase::Beaten, phases);
        }
        Notification::CardThrown { player: seat, card }
    }

    fn apply_beat(&mut self, seat: PlayerId, card: Card, phases: &mut PhasePath) -> Notification {
        let held = self.players[seat].hand.remove(card);
        let slot = self.table.place_defense(card);
        debug_assert!(held && slot.is_some(), "unchecked beat with {card}");
        self.reset_done();
        self.enter(TurnPhase::Beating, phases);
        if self.table.all_beaten() {
            self.enter(TurnPhase::Beaten, phases);
        } else {
            self.enter(TurnPhase::Thrown, phases);
        }
        Notification::CardBeaten { player: seat, card }
    }

    fn apply_pass(
        &mut self,
        seat: PlayerId,
        card: Card,
        phases: &mut PhasePath,
    ) -> Result<Notification, EngineError> {
        let held = self.players[seat].hand.remove(card);
        let slot = self.table.place_attack(card);
        debug_assert!(held && slot.is_some(), "unchecked pass of {card}");
        self.reset_done();

        // The passer leads; the next seat defends.
        self.attacker_base = seat;
        self.thrower_base = seat;
        let limit = self.compute_throw_limit()?;
        self.throw_limit = limit.max(self.table.attack_count());

        self.enter(TurnPhase::Throwing, phases);
        self.enter(TurnPhase::Thrown, phases);
        debug!(passer = %seat, defender = %self.current_defender()?, "Attack passed");
        Ok(Notification::CardPassed { player: seat, card })
    }

    fn apply_done(&mut self, seat: PlayerId) -> Notification {
        self.players_said_done += 1;
        self.done_statuses[seat] = true;
        self.thrower_base = self.thrower_base.offset(2, self.rules.player_count);
        Notification::Done { player: seat }
    }

    fn apply_take(&mut self, seat: PlayerId, phases: &mut PhasePath) -> Notification {
        self.taking = true;
        self.reset_done();
        self.enter(TurnPhase::Beaten, phases);
        debug!(defender = %seat, cards = self.table.attack_count(), "Defender takes");
        Notification::Take { player: seat }
    }

    /// Run the automatic transitions that follow a move.
    fn advance(&mut self, phases: &mut PhasePath) -> Result<Option<Settlement>, EngineError> {
        if self.phase != TurnPhase::Beaten {
            return Ok(None);
        }
        let defender = self.current_defender()?;
        let forced = self.hand(defender).is_empty() || self.table.attack_count() >= self.throw_limit;
        let opponents = seats::opponents_count(&self.rules, &self.out_of_play, self.attacker_base);
        if !forced && self.players_said_done < opponents {
            return Ok(None);
        }
        self.enter(TurnPhase::Finished, phases);
        self.settle(phases).map(Some)
    }

    fn settle(&mut self, phases: &mut PhasePath) -> Result<Settlement, EngineError> {
        let attacker = self.current_attacker()?;
        let defender = self.current_defender()?;
        let took = self.taking;
        let cards = self.table.clear();

        if took {
            self.players[defender].hand.extend(cards.iter().copied());
        } else {
            self.discard.discard(cards.iter().copied(), &mut self.jitter_rng);
        }
        debug!(
            %attacker,
            %defender,
            took,
            cards = cards.len(),
            "Trick finished"
        );

        self.enter(TurnPhase::Drawing, phases);
        for seat in attacker.rotation(self.rules.player_count) {
            if !self.out_of_play[seat] {
                self.draw_up(seat);
            }
        }
        let eliminated = self.mark_eliminations();

        self.players_said_done = 0;
        self.done_statuses = PlayerMap::with_value(self.rules.player_count, false);
        self.taking = false;

        let next_attacker = if self.is_game_over() {
            self.enter(TurnPhase::Finished, phases);
            info!(result = ?self.result(), "Game over");
            None
        } else {
            self.attacker_base =
                seats::next_attacker_base(&self.rules, &self.out_of_play, self.attacker_base, defender, took)?;
            self.thrower_base = self.attacker_base;
            self.throw_limit = self.compute_throw_limit()?;
            self.enter(TurnPhase::Ready, phases);
            Some(self.current_attacker()?)
        };

        Ok(Settlement {
            taker: took.then_some(defender),
            cards,
            eliminated,
            next_attacker,
            game_over: next_attacker.is_none(),
        })
    }

    // === Helpers ===

    fn enter(&mut self, phase: TurnPhase, phases: &mut PhasePath) {
        self.phase = phase;
        phases.push(phase);
    }

    fn reset_done(&mut self) {
        self.players_said_done = 0;
        for (_, done) in self.done_statuses.iter_mut() {
            *done = false;
        }
    }

    /// Draw until the hand holds `DEAL_LIMIT` cards or the deck runs out.
    fn draw_up(&mut self, seat: PlayerId) {
        while self.players[seat].hand.len() < DEAL_LIMIT {
            let Some(card) = self.deck.draw() else {
                break;
            };
            self.players[seat].hand.add(card);
        }
    }

    /// With the deck exhausted, empty-handed seats go out.
    fn mark_eliminations(&mut self) -> Vec<PlayerId> {
        if !self.deck.is_empty() {
            return Vec::new();
        }
        let newly_out: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|(seat, p)| !self.out_of_play[*seat] && p.hand.is_empty())
            .map(|(seat, _)| seat)
            .collect();
        // Seats leaving together are placed one at a time in seat order.
        for &seat in &newly_out {
            self.out_of_play[seat] = true;
            let place = self.out_of_play.count_where(|&out| out);
            self.places[seat] = place;
            debug!(%seat, place, "Seat out of play");
        }
        newly_out
    }

    fn compute_throw_limit(&self) -> Result<usize, EngineError> {
        let defender = self.current_defender()?;
        let cap = self.rules.discard_cap(self.discard.is_empty());
        Ok(cap.min(self.hand_size(defender)))
    }

    /// Holder of the lowest trump, or seat 0 if nobody has one.
    fn lowest_trump_holder(&self) -> PlayerId {
        self.players
            .iter()
            .flat_map(|(seat, p)| p.hand.iter().map(move |c| (seat, *c)))
            .filter(|(_, c)| c.suit == self.trump_suit)
            .min_by_key(|(_, c)| c.rank)
            .map_or(PlayerId::new(0), |(seat, _)| seat)
    }
}
