//! Dice rolling and hit counting.

use smallvec::SmallVec;

use crate::core::RandomSource;

/// Faces rolled for one attack. Eight dice fit without allocating.
pub type Rolls = SmallVec<[u8; 8]>;

/// Roll `count` dice with `sides` faces each.
pub fn roll_dice(rng: &mut dyn RandomSource, count: u32, sides: u8) -> Rolls {
    (0..count).map(|_| rng.roll_die(sides)).collect()
}

/// Number of faces at or above `threshold`.
///
/// ```
/// use summoner_tactics::combat::count_hits;
///
/// assert_eq!(count_hits(&[5, 1], 3), 1);
/// assert_eq!(count_hits(&[2, 2, 6], 2), 3);
/// ```
#[must_use]
pub fn count_hits(rolls: &[u8], threshold: u8) -> u32 {
    rolls.iter().filter(|&&face| face >= threshold).count() as u32
}
