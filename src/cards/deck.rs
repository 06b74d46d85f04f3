//! Draw and discard piles.
//!
//! The deck never loses or duplicates a card: every card is always in
//! exactly one of the two piles. A drawn card moves to the discard pile
//! immediately, and an empty draw pile is refilled by shuffling the
//! discard pile back in, so a match can draw forever.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, Result};
use crate::effects::EffectKind;

use super::card::{Card, Suit, MAX_VALUE, MIN_VALUE};

/// Cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// A deck split into draw and discard piles.
///
/// Both piles are plain vectors. The top of the draw pile is the last
/// element, so drawing is a `pop`.
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    rng: GameRng,
}

impl Deck {
    /// Build a deck whose draw order is exactly `cards` (first element is
    /// drawn first). Reshuffles use `rng`.
    pub fn from_cards(cards: Vec<Card>, rng: GameRng) -> Self {
        let mut draw_pile = cards;
        draw_pile.reverse();
        Self {
            draw_pile,
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Build a shuffled 52-card deck with a fraction of cards carrying
    /// effects.
    ///
    /// Exactly `round(52 * effect_probability)` cards get an effect, each
    /// picked uniformly (with repetition) from the pool allowed by
    /// `allow_two_player_effects`. The deck is shuffled again afterwards
    /// so effect cards do not sit at predictable positions.
    pub fn standard(
        effect_probability: f64,
        allow_two_player_effects: bool,
        mut rng: GameRng,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&effect_probability) {
            return Err(GameError::Configuration(format!(
                "effect probability {} outside 0.0..=1.0",
                effect_probability
            )));
        }

        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
        for suit in Suit::ALL {
            for value in MIN_VALUE..=MAX_VALUE {
                cards.push(Card::new(value, suit)?);
            }
        }

        rng.shuffle(&mut cards);

        let pool = EffectKind::pool(allow_two_player_effects);
        let effect_count = effect_card_target(effect_probability);
        // Each card is visited once, so no effect slot is assigned twice
        for card in cards.iter_mut().take(effect_count) {
            if let Some(&effect) = rng.choose(pool) {
                card.assign_effect(effect);
            }
        }

        rng.shuffle(&mut cards);

        tracing::debug!(effect_count, allow_two_player_effects, "standard deck built");

        Ok(Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
            rng,
        })
    }

    /// Draw the next card, reshuffling the discard pile in when the draw
    /// pile is empty.
    pub fn draw(&mut self) -> Result<Card> {
        if self.draw_pile.is_empty() {
            self.reshuffle();
        }
        let card = self.draw_pile.pop().ok_or(GameError::DeckExhausted)?;
        self.discard_pile.push(card);
        Ok(card)
    }

    /// Up to `n` upcoming cards in draw order, without drawing them.
    #[must_use]
    pub fn peek_next(&self, n: usize) -> Vec<Card> {
        self.draw_pile.iter().rev().take(n).copied().collect()
    }

    fn reshuffle(&mut self) {
        tracing::debug!(cards = self.discard_pile.len(), "reshuffling discard pile into draw pile");
        self.draw_pile.append(&mut self.discard_pile);
        self.rng.shuffle(&mut self.draw_pile);
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards across both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cards across both piles that carry an effect.
    #[must_use]
    pub fn effect_card_count(&self) -> usize {
        self.cards().filter(|c| c.has_effect()).count()
    }

    /// Every card in the deck: draw pile (top first), then discard pile.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile.iter().rev().chain(self.discard_pile.iter())
    }
}

/// Number of effect cards a standard deck gets for `probability`.
#[must_use]
pub fn effect_card_target(probability: f64) -> usize {
    (STANDARD_DECK_SIZE as f64 * probability).round() as usize
}

/// Snapshot of a deck's piles, for inspection and persistence by callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    /// Draw pile, next card first.
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
}

impl From<&Deck> for DeckSnapshot {
    fn from(deck: &Deck) -> Self {
        Self {
            draw_pile: deck.draw_pile.iter().rev().copied().collect(),
            discard_pile: deck.discard_pile.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn faces(cards: &[Card]) -> HashSet<(u8, Suit)> {
        cards.iter().map(Card::face).collect()
    }

    #[test]
    fn test_standard_deck_universe() {
        let deck = Deck::standard(0.15, true, GameRng::new(42)).unwrap();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.draw_pile_len(), 52);
        assert_eq!(deck.discard_pile_len(), 0);

        let all: Vec<Card> = deck.cards().copied().collect();
        assert_eq!(faces(&all).len(), 52);
    }

    #[test]
    fn test_effect_count() {
        for (p, expected) in [(0.0, 0), (0.05, 3), (0.15, 8), (0.20, 10), (1.0, 52)] {
            let deck = Deck::standard(p, true, GameRng::new(7)).unwrap();
            assert_eq!(deck.effect_card_count(), expected, "p = {}", p);
        }
    }

    #[test]
    fn test_solo_pool_excludes_two_player_effects() {
        let deck = Deck::standard(1.0, false, GameRng::new(9)).unwrap();
        for card in deck.cards() {
            let effect = card.effect().expect("every card should carry an effect");
            assert!(!effect.requires_opponent());
        }
    }

    #[test]
    fn test_invalid_probability() {
        assert!(matches!(
            Deck::standard(-0.1, true, GameRng::new(1)),
            Err(GameError::Configuration(_))
        ));
        assert!(matches!(
            Deck::standard(1.01, true, GameRng::new(1)),
            Err(GameError::Configuration(_))
        ));
    }

    #[test]
    fn test_from_cards_preserves_order() {
        let cards = vec![
            Card::new(7, Suit::Hearts).unwrap(),
            Card::new(10, Suit::Clubs).unwrap(),
            Card::new(2, Suit::Spades).unwrap(),
        ];
        let mut deck = Deck::from_cards(cards.clone(), GameRng::new(1));

        assert_eq!(deck.peek_next(2), cards[..2].to_vec());
        for expected in &cards {
            assert_eq!(deck.draw().unwrap(), *expected);
        }
        assert_eq!(deck.draw_pile_len(), 0);
        assert_eq!(deck.discard_pile_len(), 3);
    }

    #[test]
    fn test_draw_moves_card_to_discard() {
        let mut deck = Deck::standard(0.0, true, GameRng::new(42)).unwrap();
        let card = deck.draw().unwrap();
        assert_eq!(deck.draw_pile_len(), 51);
        assert_eq!(deck.discard_pile_len(), 1);
        assert_eq!(deck.len(), 52);
        assert_eq!(DeckSnapshot::from(&deck).discard_pile, vec![card]);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let deck = Deck::standard(0.1, true, GameRng::new(42)).unwrap();
        let before = DeckSnapshot::from(&deck);

        let peeked = deck.peek_next(5);
        assert_eq!(peeked.len(), 5);
        assert_eq!(DeckSnapshot::from(&deck), before);
        assert_eq!(peeked, before.draw_pile[..5].to_vec());

        // Asking for more than remain returns what is there
        assert_eq!(deck.peek_next(100).len(), 52);
    }

    #[test]
    fn test_reshuffle_on_empty() {
        let mut deck = Deck::standard(0.15, true, GameRng::new(42)).unwrap();

        let first: Vec<Card> = (0..52).map(|_| deck.draw().unwrap()).collect();
        assert_eq!(faces(&first).len(), 52);
        assert_eq!(deck.draw_pile_len(), 0);

        let second: Vec<Card> = (0..52).map(|_| deck.draw().unwrap()).collect();
        assert_eq!(faces(&second).len(), 52);
        assert_eq!(deck.len(), 52);
        // Effects travel with their cards
        assert_eq!(deck.effect_card_count(), 8);
    }

    #[test]
    fn test_exhausted_deck() {
        let mut deck = Deck::from_cards(Vec::new(), GameRng::new(1));
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(GameError::DeckExhausted));
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = Deck::standard(0.2, true, GameRng::new(5)).unwrap();
        let b = Deck::standard(0.2, true, GameRng::new(5)).unwrap();
        assert_eq!(DeckSnapshot::from(&a), DeckSnapshot::from(&b));
    }

    #[test]
    fn test_snapshot_serde() {
        let deck = Deck::standard(0.2, true, GameRng::new(5)).unwrap();
        let snapshot = DeckSnapshot::from(&deck);
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: DeckSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
