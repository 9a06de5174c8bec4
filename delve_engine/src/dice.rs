//! Dice Module
//!
//! All randomness in the engine goes through the [`Dice`] trait so a session can be
//! replayed with a fixed seed, or driven roll-by-roll in tests with [`ScriptedDice`].

use std::collections::VecDeque;

use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the engine's random draws.
pub trait Dice {
    /// Roll a ten-sided die, returning a face in `1..=10`.
    fn decile(&mut self) -> u8;
    /// Pick an index into `weights` in proportion to its weight, or `None` if nothing can be drawn.
    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize>;
}

/// Decide whether something with the given `chance` happens.
///
/// The die face is scaled to one of {0.1, ..., 1.0} and the action happens when that
/// value is at or below `chance`.
pub fn will_happen(dice: &mut dyn Dice, chance: f64) -> bool {
    let roll = f64::from(dice.decile()) * 0.1;
    roll <= chance
}

/// `Dice` backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandDice<R: Rng> {
    rng: R,
}
impl<R: Rng> RandDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}
impl RandDice<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}
impl<R: Rng> Dice for RandDice<R> {
    fn decile(&mut self) -> u8 {
        self.rng.random_range(1..=10u8)
    }

    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        WeightedIndex::new(weights).ok().map(|dist| dist.sample(&mut self.rng))
    }
}

/// `Dice` that replays fixed results.
///
/// Deciles come from the supplied queue; once it runs dry the last face repeats
/// (a 10 if none was ever given). Weighted picks come from their own queue and fall
/// back to the first entry with a positive weight.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    deciles: VecDeque<u8>,
    last: u8,
    picks: VecDeque<usize>,
}
impl ScriptedDice {
    pub fn new(deciles: impl IntoIterator<Item = u8>) -> Self {
        Self {
            deciles: deciles.into_iter().map(|d| d.clamp(1, 10)).collect(),
            last: 10,
            picks: VecDeque::new(),
        }
    }

    /// Always roll the same face.
    pub fn always(face: u8) -> Self {
        Self::new([face])
    }

    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks = picks.into_iter().collect();
        self
    }
}
impl Dice for ScriptedDice {
    fn decile(&mut self) -> u8 {
        if let Some(face) = self.deciles.pop_front() {
            self.last = face;
        }
        self.last
    }

    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        self.picks
            .pop_front()
            .filter(|idx| *idx < weights.len())
            .or_else(|| weights.iter().position(|w| *w > 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_dice_stay_in_range_and_repeat() {
        let mut a = RandDice::seeded(7);
        let mut b = RandDice::seeded(7);
        for _ in 0..200 {
            let face = a.decile();
            assert!((1..=10).contains(&face));
            assert_eq!(face, b.decile());
        }
    }

    #[test]
    fn weighted_index_skips_zero_weights() {
        let mut dice = RandDice::seeded(3);
        for _ in 0..50 {
            assert_eq!(dice.weighted_index(&[0.0, 2.0, 0.0]), Some(1));
        }
        assert_eq!(dice.weighted_index(&[]), None);
    }

    #[test]
    fn will_happen_compares_scaled_roll() {
        assert!(will_happen(&mut ScriptedDice::always(1), 0.1));
        assert!(will_happen(&mut ScriptedDice::always(9), 0.9));
        assert!(!will_happen(&mut ScriptedDice::always(10), 0.9));
        assert!(will_happen(&mut ScriptedDice::always(10), 1.0));
        assert!(!will_happen(&mut ScriptedDice::always(1), 0.0));
    }

    #[test]
    fn scripted_dice_repeat_last_face() {
        let mut dice = ScriptedDice::new([3, 4]);
        assert_eq!(dice.decile(), 3);
        assert_eq!(dice.decile(), 4);
        assert_eq!(dice.decile(), 4);
        assert_eq!(ScriptedDice::new([]).decile(), 10);
    }
}
