//! Six-chamber cylinder.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, Result};

/// Number of chambers in every revolver.
pub const CAPACITY: usize = 6;

/// Fixed-capacity chamber array.
///
/// Loading and unloading always scan from chamber 0, so a cylinder with
/// `k` bullets set through `set_bullet_count` has chambers `0..k` loaded.
///
/// ```
/// use deathdraw::core::GameRng;
/// use deathdraw::revolver::Revolver;
///
/// let revolver = Revolver::with_bullets(6).unwrap();
/// let mut rng = GameRng::new(1);
/// assert!(revolver.fire_and_check(&mut rng));
/// assert_eq!(revolver.bullet_count(), 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revolver {
    chambers: [bool; CAPACITY],
}

impl Revolver {
    /// Create an empty revolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a revolver with `bullets` chambers loaded.
    pub fn with_bullets(bullets: usize) -> Result<Self> {
        let mut revolver = Self::new();
        revolver.set_bullet_count(bullets)?;
        Ok(revolver)
    }

    /// Spin the cylinder and report whether the chosen chamber is loaded.
    ///
    /// The chamber stays loaded afterwards.
    pub fn fire_and_check(&self, rng: &mut GameRng) -> bool {
        let chamber = rng.gen_range_usize(0..CAPACITY);
        let loaded = self.chambers[chamber];
        tracing::debug!(chamber, loaded, bullets = self.bullet_count(), "revolver fired");
        loaded
    }

    /// Load the first empty chamber. Returns `false` when already full.
    pub fn load(&mut self) -> bool {
        match self.chambers.iter_mut().find(|c| !**c) {
            Some(chamber) => {
                *chamber = true;
                true
            }
            None => false,
        }
    }

    /// Empty the first loaded chamber. Returns `false` when already empty.
    pub fn unload(&mut self) -> bool {
        match self.chambers.iter_mut().find(|c| **c) {
            Some(chamber) => {
                *chamber = false;
                true
            }
            None => false,
        }
    }

    /// Clear the cylinder, then load `bullets` chambers in order.
    pub fn set_bullet_count(&mut self, bullets: usize) -> Result<()> {
        if bullets > CAPACITY {
            return Err(GameError::BulletCountOutOfRange {
                requested: bullets,
                capacity: CAPACITY,
            });
        }
        self.empty();
        for chamber in self.chambers.iter_mut().take(bullets) {
            *chamber = true;
        }
        Ok(())
    }

    /// Clear every chamber.
    pub fn empty(&mut self) {
        self.chambers = [false; CAPACITY];
    }

    #[must_use]
    pub fn bullet_count(&self) -> usize {
        self.chambers.iter().filter(|&&c| c).count()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bullet_count() == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.bullet_count() == CAPACITY
    }

    /// Chance, in percent, that the next spin lands on a loaded chamber.
    #[must_use]
    pub fn impact_probability(&self) -> f64 {
        self.bullet_count() as f64 / CAPACITY as f64 * 100.0
    }

    /// Chamber occupancy, index 0 first.
    #[must_use]
    pub fn chambers(&self) -> &[bool; CAPACITY] {
        &self.chambers
    }
}

impl std::fmt::Display for Revolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Revolver [{}/{} bullets]", self.bullet_count(), CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let r = Revolver::new();
        assert!(r.is_empty());
        assert!(!r.is_full());
        assert_eq!(r.capacity(), 6);
        assert_eq!(r.impact_probability(), 0.0);
    }

    #[test]
    fn test_load_scans_from_first_chamber() {
        let mut r = Revolver::new();
        assert!(r.load());
        assert!(r.load());
        assert_eq!(r.chambers(), &[true, true, false, false, false, false]);

        for _ in 0..4 {
            assert!(r.load());
        }
        assert!(r.is_full());
        assert!(!r.load());
        assert_eq!(r.bullet_count(), 6);
    }

    #[test]
    fn test_unload_scans_from_first_chamber() {
        let mut r = Revolver::with_bullets(3).unwrap();
        assert!(r.unload());
        assert_eq!(r.chambers(), &[false, true, true, false, false, false]);

        assert!(r.unload());
        assert!(r.unload());
        assert!(!r.unload());
        assert!(r.is_empty());
    }

    #[test]
    fn test_set_bullet_count() {
        let mut r = Revolver::new();
        for k in 0..=CAPACITY {
            r.set_bullet_count(k).unwrap();
            assert_eq!(r.bullet_count(), k);
        }

        r.set_bullet_count(4).unwrap();
        r.set_bullet_count(1).unwrap();
        assert_eq!(r.chambers(), &[true, false, false, false, false, false]);
    }

    #[test]
    fn test_set_bullet_count_out_of_range() {
        let mut r = Revolver::with_bullets(2).unwrap();
        assert_eq!(
            r.set_bullet_count(7),
            Err(GameError::BulletCountOutOfRange { requested: 7, capacity: 6 })
        );
        // Unchanged on error
        assert_eq!(r.bullet_count(), 2);
    }

    #[test]
    fn test_fire_does_not_clear_chambers() {
        let r = Revolver::with_bullets(3).unwrap();
        let before = *r.chambers();
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            r.fire_and_check(&mut rng);
        }

        assert_eq!(r.chambers(), &before);
    }

    #[test]
    fn test_fire_extremes() {
        let mut rng = GameRng::new(42);
        let empty = Revolver::new();
        let full = Revolver::with_bullets(CAPACITY).unwrap();

        for _ in 0..50 {
            assert!(!empty.fire_and_check(&mut rng));
            assert!(full.fire_and_check(&mut rng));
        }
    }

    #[test]
    fn test_fire_can_hit_same_loaded_chamber_repeatedly() {
        let r = Revolver::with_bullets(1).unwrap();
        let mut rng = GameRng::new(3);

        let hits = (0..600).filter(|_| r.fire_and_check(&mut rng)).count();
        // Expected ~100 of 600; loose bounds
        assert!(hits > 50 && hits < 150, "hits = {}", hits);
    }

    #[test]
    fn test_impact_probability() {
        let r = Revolver::with_bullets(3).unwrap();
        assert_eq!(r.impact_probability(), 50.0);
        assert_eq!(Revolver::with_bullets(6).unwrap().impact_probability(), 100.0);
    }

    #[test]
    fn test_display() {
        let r = Revolver::with_bullets(2).unwrap();
        assert_eq!(r.to_string(), "Revolver [2/6 bullets]");
    }
}
