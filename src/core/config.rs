//! Match configuration.
//!
//! A match is configured by a `ModeConfig`:
//! - starting (and maximum) lives per player
//! - bullets preloaded in each revolver
//! - fraction of the deck that carries special effects
//! - solo (one player) or versus (two players)
//!
//! `GameMode` names the built-in presets. Custom modes go through
//! `ModeConfig::new`, which validates every field.

use serde::{Deserialize, Serialize};

use crate::revolver::CAPACITY;

use super::error::{GameError, Result};

/// Built-in mode presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// 3 lives, 1 bullet, 15% effect cards.
    Classic,
    /// 5 lives, 2 bullets, 20% effect cards.
    Overload,
    /// 1 life, 6 bullets, 5% effect cards.
    SuddenDeath,
    /// One player; a single miss ends the run.
    Solo,
}

impl GameMode {
    /// All presets, in menu order.
    pub const ALL: [GameMode; 4] = [
        GameMode::Classic,
        GameMode::Overload,
        GameMode::SuddenDeath,
        GameMode::Solo,
    ];

    /// Configuration for this preset.
    #[must_use]
    pub fn config(self) -> ModeConfig {
        match self {
            GameMode::Classic => ModeConfig::preset("Classic", 3, 1, 0.15, false),
            GameMode::Overload => ModeConfig::preset("Overload", 5, 2, 0.20, false),
            GameMode::SuddenDeath => ModeConfig::preset("Sudden Death", 1, 6, 0.05, false),
            GameMode::Solo => ModeConfig::preset("Solo", 1, 1, 0.0, true),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.config().description())
    }
}

/// Parameters of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
    /// Display name of the mode.
    pub name: String,

    /// Lives each player starts with; also the maximum.
    pub initial_lives: u32,

    /// Bullets loaded into each revolver when a player is seated.
    pub initial_bullets: usize,

    /// Fraction of the 52 cards that carry an effect, in `0.0..=1.0`.
    pub effect_probability: f64,

    /// One player instead of two.
    pub solo: bool,
}

impl ModeConfig {
    fn preset(name: &str, lives: u32, bullets: usize, effects: f64, solo: bool) -> Self {
        Self {
            name: name.to_string(),
            initial_lives: lives,
            initial_bullets: bullets,
            effect_probability: effects,
            solo,
        }
    }

    /// Create a validated custom mode.
    pub fn new(
        name: impl Into<String>,
        initial_lives: u32,
        initial_bullets: usize,
        effect_probability: f64,
        solo: bool,
    ) -> Result<Self> {
        let config = Self {
            name: name.into(),
            initial_lives,
            initial_bullets,
            effect_probability,
            solo,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GameError::Configuration("mode name must not be empty".to_string()));
        }
        if self.initial_lives == 0 {
            return Err(GameError::Configuration(
                "initial lives must be at least 1".to_string(),
            ));
        }
        if self.initial_bullets > CAPACITY {
            return Err(GameError::Configuration(format!(
                "initial bullets {} exceed revolver capacity {}",
                self.initial_bullets, CAPACITY
            )));
        }
        if !(0.0..=1.0).contains(&self.effect_probability) {
            return Err(GameError::Configuration(format!(
                "effect probability {} outside 0.0..=1.0",
                self.effect_probability
            )));
        }
        Ok(())
    }

    /// Seats required before the match can start.
    #[must_use]
    pub fn player_count(&self) -> usize {
        if self.solo {
            1
        } else {
            2
        }
    }

    /// Whether effects that need a second player may appear in the deck.
    #[must_use]
    pub fn allows_two_player_effects(&self) -> bool {
        !self.solo
    }

    /// One-line summary shown when a match starts.
    #[must_use]
    pub fn description(&self) -> String {
        if self.solo {
            format!("{} mode (one chance: a single miss ends the run)", self.name)
        } else {
            format!(
                "{} mode ({} {}, {} {}, {:.0}% special cards)",
                self.name,
                self.initial_lives,
                if self.initial_lives == 1 { "life" } else { "lives" },
                self.initial_bullets,
                if self.initial_bullets == 1 { "bullet" } else { "bullets" },
                self.effect_probability * 100.0
            )
        }
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        GameMode::Classic.config()
    }
}

impl From<GameMode> for ModeConfig {
    fn from(mode: GameMode) -> Self {
        mode.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let classic = GameMode::Classic.config();
        assert_eq!(classic.initial_lives, 3);
        assert_eq!(classic.initial_bullets, 1);
        assert_eq!(classic.effect_probability, 0.15);
        assert_eq!(classic.player_count(), 2);

        let solo = GameMode::Solo.config();
        assert!(solo.solo);
        assert_eq!(solo.player_count(), 1);
        assert!(!solo.allows_two_player_effects());

        for mode in GameMode::ALL {
            assert!(mode.config().validate().is_ok());
        }
    }

    #[test]
    fn test_description() {
        assert_eq!(
            GameMode::Classic.config().description(),
            "Classic mode (3 lives, 1 bullet, 15% special cards)"
        );
        assert_eq!(
            GameMode::SuddenDeath.to_string(),
            "Sudden Death mode (1 life, 6 bullets, 5% special cards)"
        );
    }

    #[test]
    fn test_custom_validation() {
        assert!(ModeConfig::new("Custom", 4, 3, 0.5, false).is_ok());
        assert!(matches!(
            ModeConfig::new("Custom", 0, 1, 0.1, false),
            Err(GameError::Configuration(_))
        ));
        assert!(matches!(
            ModeConfig::new("Custom", 3, 7, 0.1, false),
            Err(GameError::Configuration(_))
        ));
        assert!(matches!(
            ModeConfig::new("Custom", 3, 1, 1.5, false),
            Err(GameError::Configuration(_))
        ));
        assert!(matches!(
            ModeConfig::new("  ", 3, 1, 0.1, false),
            Err(GameError::Configuration(_))
        ));
    }

    #[test]
    fn test_config_serde() {
        let config = GameMode::Overload.config();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ModeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
