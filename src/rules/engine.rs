//! The match engine.
//!
//! `Match` owns the deck, the RNG and the seated players, and is the only
//! thing that mutates them. Callers seat players, start the match, then
//! submit bets one at a time; each bet is resolved completely (card draw,
//! effect, revolver spin, termination check) before `resolve_bet` returns.
//!
//! ## Turn order
//!
//! In versus mode the turn counter alternates seats: odd turns belong to
//! the first player, even turns to the second. A Double-Turn grant lets
//! the receiving player play again right after their next bet, after
//! which alternation continues from the other seat. `resolve_bet` does
//! not enforce turn order; `current_player` tells the caller whose turn
//! it is.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::{Card, Deck};
use crate::coin::Side;
use crate::core::{GameError, GameMode, GameRng, ModeConfig, Player, PlayerId, Result};
use crate::effects::EffectResolver;
use crate::revolver::Revolver;

use super::{BetDirection, BetResult, MatchIntro, MatchResult, MatchState};

/// Turn number of the first bet.
const FIRST_TURN: u32 = 1;

/// One game session, from seating players to the last bet.
#[derive(Clone, Debug)]
pub struct Match {
    config: ModeConfig,
    state: MatchState,
    players: SmallVec<[Player; 2]>,
    deck: Option<Deck>,
    current_card: Option<Card>,
    turn: u32,
    /// Shifts the seat parity after a Double-Turn grant.
    turn_offset: u32,
    rng: GameRng,
}

/// Builder for creating a `Match`.
///
/// ```
/// use deathdraw::core::GameMode;
/// use deathdraw::rules::MatchBuilder;
///
/// let mut game = MatchBuilder::new()
///     .mode(GameMode::Classic)
///     .seed(42)
///     .build()
///     .unwrap();
/// game.add_player("A").unwrap();
/// game.add_player("B").unwrap();
/// let intro = game.start().unwrap();
/// assert_eq!(intro.player_names, vec!["A", "B"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    config: ModeConfig,
    seed: Option<u64>,
    cards: Option<Vec<Card>>,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preset mode.
    pub fn mode(mut self, mode: GameMode) -> Self {
        self.config = mode.config();
        self
    }

    /// Use a custom mode configuration.
    pub fn config(mut self, config: ModeConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the match RNG. Unseeded matches draw a seed from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the standard deck with these cards, drawn in order.
    pub fn deck(mut self, cards: Vec<Card>) -> Self {
        self.cards = Some(cards);
        self
    }

    /// Validate the configuration and create the match.
    pub fn build(self) -> Result<Match> {
        self.config.validate()?;

        if let Some(cards) = &self.cards {
            if cards.is_empty() {
                return Err(GameError::Configuration(
                    "prearranged deck must hold at least one card".to_string(),
                ));
            }
            if !self.config.allows_two_player_effects() {
                if let Some(kind) = cards
                    .iter()
                    .filter_map(Card::effect)
                    .find(|kind| kind.requires_opponent())
                {
                    return Err(GameError::Configuration(format!(
                        "prearranged deck holds {kind}, which needs two players"
                    )));
                }
            }
        }

        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let deck = self
            .cards
            .map(|cards| Deck::from_cards(cards, rng.for_context("deck")));

        Ok(Match {
            config: self.config,
            state: MatchState::NotStarted,
            players: SmallVec::new(),
            deck,
            current_card: None,
            turn: FIRST_TURN,
            turn_offset: 0,
            rng,
        })
    }
}

impl Match {
    /// Create an unseeded match for a preset mode.
    pub fn new(mode: GameMode) -> Result<Self> {
        MatchBuilder::new().mode(mode).build()
    }

    /// Create a seeded match for a preset mode.
    pub fn with_seed(mode: GameMode, seed: u64) -> Result<Self> {
        MatchBuilder::new().mode(mode).seed(seed).build()
    }

    // === Setup ===

    /// Seat a player.
    ///
    /// The player starts at the mode's lives with a revolver holding the
    /// mode's initial bullets.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId> {
        self.ensure_state(MatchState::NotStarted, "add a player")?;

        if name.trim().is_empty() {
            return Err(GameError::InvalidName);
        }
        let capacity = self.config.player_count();
        if self.players.len() >= capacity {
            return Err(GameError::RosterFull { capacity });
        }

        let id = PlayerId::new(self.players.len() as u8);
        let revolver = Revolver::with_bullets(self.config.initial_bullets)?;
        let player = Player::new(id, name, self.config.initial_lives, revolver)?;

        debug!(player = %id, name = player.name(), "player seated");
        self.players.push(player);
        Ok(id)
    }

    /// Start the match: build the deck and reveal the first card.
    pub fn start(&mut self) -> Result<MatchIntro> {
        self.ensure_state(MatchState::NotStarted, "start the match")?;

        let required = self.config.player_count();
        if self.players.len() < required {
            return Err(GameError::RosterIncomplete {
                required,
                present: self.players.len(),
            });
        }

        let deck = match self.deck.take() {
            Some(deck) => deck,
            None => Deck::standard(
                self.config.effect_probability,
                self.config.allows_two_player_effects(),
                self.rng.for_context("deck"),
            )?,
        };
        // The deck stays in place if the first draw fails
        let first_card = self.deck.insert(deck).draw()?;

        self.current_card = Some(first_card);
        self.state = MatchState::InProgress;

        info!(
            mode = %self.config.name,
            players = self.players.len(),
            first_card = %first_card,
            "match started"
        );

        Ok(MatchIntro {
            mode_description: self.config.description(),
            player_names: self.players.iter().map(|p| p.name().to_string()).collect(),
            first_card,
        })
    }

    // === Play ===

    /// Resolve a bet, calling heads if an effect needs a coin toss.
    pub fn resolve_bet(&mut self, player: PlayerId, direction: BetDirection) -> Result<BetResult> {
        self.resolve_bet_with_call(player, direction, Side::Heads)
    }

    /// Resolve a bet by `player` on the next card.
    ///
    /// The drawn card becomes the visible card whatever the outcome. A
    /// winning bet on an effect card resolves the effect, with `call` as
    /// the player's coin call. A losing bet costs a life outright in solo
    /// mode (and ends the run), or spins the player's revolver in versus
    /// mode.
    ///
    /// A bet either resolves completely or fails without changing the
    /// match.
    pub fn resolve_bet_with_call(
        &mut self,
        player: PlayerId,
        direction: BetDirection,
        call: Side,
    ) -> Result<BetResult> {
        self.ensure_state(MatchState::InProgress, "resolve a bet")?;
        let previous_card = self.current_card.ok_or(GameError::MissingCard)?;
        let index = self.seat_index(player)?;

        let checkpoint = (self.deck.clone(), self.players.clone(), self.rng.clone());
        let result = self.play_bet(player, index, previous_card, direction, call);
        if result.is_err() {
            (self.deck, self.players, self.rng) = checkpoint;
            self.current_card = Some(previous_card);
        }
        result
    }

    fn play_bet(
        &mut self,
        player: PlayerId,
        index: usize,
        previous_card: Card,
        direction: BetDirection,
        call: Side,
    ) -> Result<BetResult> {
        let deck = self.deck.as_mut().ok_or(GameError::DeckExhausted)?;
        let new_card = deck.draw()?;
        self.current_card = Some(new_card);

        let hit = direction.wins(&previous_card, &new_card);
        let solo = self.config.solo;
        let (actor, opponent) =
            actor_and_opponent(&mut self.players, index).ok_or(GameError::UnknownPlayer(player))?;

        let mut chamber_fired = false;
        let mut effect = None;

        if hit {
            actor.record_hit();
            if new_card.has_effect() {
                effect = Some(EffectResolver::resolve(
                    new_card.effect(),
                    actor,
                    opponent,
                    call,
                    &mut self.rng,
                )?);
            }
        } else {
            actor.record_miss();
            if solo {
                actor.lose_life();
                chamber_fired = true;
            } else {
                chamber_fired = actor.revolver().fire_and_check(&mut self.rng);
                if chamber_fired {
                    actor.lose_life();
                    actor.revolver_mut().set_bullet_count(1)?;
                } else {
                    actor.revolver_mut().load();
                }
            }
        }

        let player_name = actor.name().to_string();
        let remaining_lives = actor.lives();

        debug!(
            player = %player,
            %direction,
            previous = %previous_card,
            drawn = %new_card,
            hit,
            chamber_fired,
            remaining_lives,
            "bet resolved"
        );

        if (solo && !hit) || self.players.iter().any(|p| !p.is_alive()) {
            self.finish();
        }
        self.advance_turn(index);

        Ok(BetResult {
            player,
            player_name,
            hit,
            chamber_fired,
            remaining_lives,
            previous_card,
            new_card,
            direction,
            effect,
            is_solo: solo,
            state: self.state,
        })
    }

    fn finish(&mut self) {
        self.state = MatchState::Finished;
        info!(turns = self.turn, result = ?self.result(), "match finished");
    }

    /// Move the counter on by one and apply any pending extra turn of the
    /// player who just bet.
    fn advance_turn(&mut self, index: usize) {
        self.turn += 1;
        if self.config.solo {
            return;
        }
        if self.players[index].take_extra_turn() {
            // Make the new turn land on the same seat
            let natural = self.seat_for_turn(self.turn);
            if natural != index {
                self.turn_offset ^= 1;
            }
            debug!(player = %self.players[index].id(), turn = self.turn, "extra turn");
        }
    }

    fn seat_for_turn(&self, turn: u32) -> usize {
        ((turn - FIRST_TURN + self.turn_offset) % 2) as usize
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// The visible card bets are made against.
    #[must_use]
    pub fn current_card(&self) -> Option<Card> {
        self.current_card
    }

    /// Turn counter, starting at 1 and advancing once per resolved bet.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn
    }

    /// Whose turn it is. `None` until every seat is filled.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        if self.players.len() < self.config.player_count() {
            return None;
        }
        if self.config.solo {
            return self.players.first().map(Player::id);
        }
        self.players.get(self.seat_for_turn(self.turn)).map(Player::id)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// The other seated player, if any.
    #[must_use]
    pub fn opponent_of(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() != id)
    }

    #[must_use]
    pub fn mode(&self) -> &ModeConfig {
        &self.config
    }

    #[must_use]
    pub fn is_solo(&self) -> bool {
        self.config.solo
    }

    /// Seed of the match RNG. Feeding it back through `MatchBuilder::seed`
    /// replays the match, including unseeded ones.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The deck, for previews. `None` before start unless prearranged.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    /// Up to `n` upcoming cards, without drawing them.
    #[must_use]
    pub fn peek_next(&self, n: usize) -> Vec<Card> {
        self.deck.as_ref().map(|d| d.peek_next(n)).unwrap_or_default()
    }

    /// How the match ended. `None` while it is still running.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        if self.state != MatchState::Finished {
            return None;
        }
        if self.config.solo {
            return self.players.first().map(|p| MatchResult::RunOver {
                player: p.id(),
                streak: p.best_streak(),
            });
        }
        let mut alive = self.players.iter().filter(|p| p.is_alive());
        match (alive.next(), alive.next()) {
            (Some(winner), None) => Some(MatchResult::Winner(winner.id())),
            _ => None,
        }
    }

    /// The surviving player of a finished versus match.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.result()? {
            MatchResult::Winner(id) => Some(id),
            MatchResult::RunOver { .. } => None,
        }
    }

    fn ensure_state(&self, expected: MatchState, action: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::InvalidStateTransition {
                state: self.state,
                action,
            })
        }
    }

    fn seat_index(&self, id: PlayerId) -> Result<usize> {
        if id.index() < self.players.len() {
            Ok(id.index())
        } else {
            Err(GameError::UnknownPlayer(id))
        }
    }
}

/// Borrow the acting player and the other seat at the same time.
fn actor_and_opponent(
    players: &mut [Player],
    index: usize,
) -> Option<(&mut Player, Option<&mut Player>)> {
    if index >= players.len() {
        return None;
    }
    let (before, from) = players.split_at_mut(index);
    let (actor, after) = from.split_first_mut()?;
    let opponent = before.first_mut().or_else(|| after.first_mut());
    Some((actor, opponent))
}
