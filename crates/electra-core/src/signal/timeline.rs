//! Mark/space timeline builder.
//!
//! # What is a mark/space timeline? (for beginners)
//!
//! An IR LED driver is given a flat list of durations in microseconds.  The
//! first entry is how long to emit the modulated carrier (a *mark*), the
//! second how long to stay dark (a *space*), the third is a mark again, and
//! so on:
//!
//! ```text
//! index:     0      1      2     3
//!         ┌──────┐      ┌─────┐
//!         │ mark │space │mark │ space
//! ────────┘      └──────┘     └───────
//! ```
//!
//! Encoders rarely think in whole elements.  A Manchester `1` is "space then
//! mark"; if the previous bit ended with a space, the two spaces must fuse
//! into one longer space.  [`Timeline`] does that bookkeeping: adding a
//! duration of the level that is already current *extends* the last element,
//! adding the other level starts a new one.
//!
//! # Invariants
//!
//! - Even indices are marks, odd indices are spaces.
//! - Index 0 is always a mark.  When the very first operation is a space, a
//!   zero-length mark is inserted in front of it.
//! - [`Timeline::append`] produces exactly what the individual add operations
//!   would have produced against the receiver, so a leading zero-length mark
//!   of the appended timeline disappears.

/// Signal level of one timeline element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Carrier on.
    Mark,
    /// Carrier off.
    Space,
}

impl Level {
    /// Level of the element stored at `index` in a timeline.
    pub fn at(index: usize) -> Self {
        if index % 2 == 0 {
            Level::Mark
        } else {
            Level::Space
        }
    }
}

/// An ordered, strictly alternating sequence of mark/space durations in µs.
///
/// # Examples
///
/// ```rust
/// use electra_core::Timeline;
///
/// let mut timeline = Timeline::new();
/// timeline.add_mark(500);
/// timeline.add_mark(500); // same level: merged
/// timeline.add_space(250);
/// assert_eq!(timeline.as_slice(), &[1000, 250]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Timeline {
    durations: Vec<u32>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `duration` µs of carrier.
    pub fn add_mark(&mut self, duration: u32) {
        self.add(Level::Mark, duration);
    }

    /// Appends `duration` µs of silence.
    pub fn add_space(&mut self, duration: u32) {
        self.add(Level::Space, duration);
    }

    /// Appends `duration` µs at the given level, merging with the last element
    /// when the level does not change.
    pub fn add(&mut self, level: Level, duration: u32) {
        match self.current_level() {
            Some(current) if current == level => {
                if let Some(last) = self.durations.last_mut() {
                    *last = last.saturating_add(duration);
                }
            }
            Some(_) => self.durations.push(duration),
            None => {
                if level == Level::Space {
                    // Index 0 must be a mark.
                    self.durations.push(0);
                }
                self.durations.push(duration);
            }
        }
    }

    /// Appends every element of `other` as if its add operations had been
    /// issued against `self`.
    ///
    /// A zero-length leading mark in `other` only exists to keep its own
    /// index 0 a mark, so it is dropped and the space behind it merges into
    /// the current element of `self` when that is a space.
    pub fn append(&mut self, other: &Timeline) {
        for (index, &duration) in other.durations.iter().enumerate() {
            if index == 0 && duration == 0 {
                continue;
            }
            self.add(Level::at(index), duration);
        }
    }

    /// Level of the last element, or `None` for an empty timeline.
    pub fn current_level(&self) -> Option<Level> {
        self.durations.len().checked_sub(1).map(Level::at)
    }

    /// The durations, marks at even indices and spaces at odd indices.
    pub fn as_slice(&self) -> &[u32] {
        &self.durations
    }

    /// Consumes the timeline and returns its durations.
    pub fn into_vec(self) -> Vec<u32> {
        self.durations
    }

    /// Number of elements (marks plus spaces).
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Returns `true` if nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Total airtime of the timeline in µs.
    pub fn total_duration(&self) -> u64 {
        self.durations.iter().map(|&d| u64::from(d)).sum()
    }
}

impl From<Vec<u32>> for Timeline {
    /// Wraps a literal duration list.  The list is taken as-is: index 0 is a
    /// mark, whatever its value.
    fn from(durations: Vec<u32>) -> Self {
        Self { durations }
    }
}

impl<const N: usize> From<[u32; N]> for Timeline {
    fn from(durations: [u32; N]) -> Self {
        Self {
            durations: durations.to_vec(),
        }
    }
}

impl FromIterator<u32> for Timeline {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            durations: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[u32]> for Timeline {
    fn as_ref(&self) -> &[u32] {
        &self.durations
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_first_mark_starts_the_timeline() {
        // Arrange
        let mut timeline = Timeline::new();

        // Act
        timeline.add_mark(560);

        // Assert
        assert_eq!(timeline.as_slice(), &[560]);
        assert_eq!(timeline.current_level(), Some(Level::Mark));
    }

    #[test]
    fn test_first_space_inserts_zero_mark() {
        let mut timeline = Timeline::new();
        timeline.add_space(992);
        assert_eq!(timeline.as_slice(), &[0, 992]);
        assert_eq!(timeline.current_level(), Some(Level::Space));
    }

    #[test]
    fn test_same_level_is_merged() {
        // Arrange
        let mut timeline = Timeline::new();

        // Act
        timeline.add_mark(100);
        timeline.add_mark(200);
        timeline.add_space(50);
        timeline.add_space(25);
        timeline.add_mark(10);

        // Assert
        assert_eq!(timeline.as_slice(), &[300, 75, 10]);
    }

    #[test]
    fn test_append_merges_across_the_boundary() {
        // Arrange – receiver ends on a space, other starts with a real mark
        let mut head = Timeline::from([2976, 2976]);
        let tail = Timeline::from([992, 992]);

        // Act
        head.append(&tail);

        // Assert
        assert_eq!(head.as_slice(), &[2976, 2976, 992, 992]);
    }

    #[test]
    fn test_append_drops_zero_placeholder_and_merges_space() {
        // Arrange – other was built starting with a space
        let mut head = Timeline::from([2976, 2976]);
        let mut tail = Timeline::new();
        tail.add_space(992);
        tail.add_mark(992);

        // Act
        head.append(&tail);

        // Assert
        assert_eq!(head.as_slice(), &[2976, 3968, 992]);
    }

    #[test]
    fn test_append_to_empty_keeps_placeholder() {
        let mut head = Timeline::new();
        head.append(&Timeline::from([0, 500, 100]));
        assert_eq!(head.as_slice(), &[0, 500, 100]);
    }

    #[test]
    fn test_append_empty_is_a_no_op() {
        let mut head = Timeline::from([1, 2, 3]);
        head.append(&Timeline::new());
        assert_eq!(head.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_append_equals_direct_adds() {
        // Arrange – the same random operations, once direct and once split
        // into two timelines joined with append
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let ops: Vec<(Level, u32)> = (0..500)
            .map(|_| {
                let level = if rng.random_bool(0.5) {
                    Level::Mark
                } else {
                    Level::Space
                };
                (level, rng.random_range(1..=4000))
            })
            .collect();

        for split in [0, 1, 2, 137, 250, 499, 500] {
            let mut direct = Timeline::new();
            for &(level, duration) in &ops {
                direct.add(level, duration);
            }

            let mut first = Timeline::new();
            let mut second = Timeline::new();
            for &(level, duration) in &ops[..split] {
                first.add(level, duration);
            }
            for &(level, duration) in &ops[split..] {
                second.add(level, duration);
            }

            // Act
            first.append(&second);

            // Assert
            assert_eq!(first, direct, "split at {split}");
        }
    }

    #[test]
    fn test_alternation_invariant_holds_for_random_operations() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(42);
        let mut timeline = Timeline::new();
        let mut mark_total = 0u64;
        let mut space_total = 0u64;

        // Act
        for _ in 0..1000 {
            let duration: u32 = rng.random_range(1..=2000);
            if rng.random_ratio(1, 3) {
                timeline.add_space(duration);
                space_total += u64::from(duration);
            } else {
                timeline.add_mark(duration);
                mark_total += u64::from(duration);
            }
        }

        // Assert – nothing lost, nothing duplicated
        let marks: u64 = timeline.as_slice().iter().step_by(2).map(|&d| u64::from(d)).sum();
        let spaces: u64 = timeline.as_slice().iter().skip(1).step_by(2).map(|&d| u64::from(d)).sum();
        assert_eq!(marks, mark_total);
        assert_eq!(spaces, space_total);

        // Assert – only index 0 may be empty, which rules out unmerged neighbours
        assert!(timeline.as_slice().iter().skip(1).all(|&d| d > 0));
    }

    #[test]
    fn test_total_duration_sums_every_element() {
        let timeline = Timeline::from([9000, 4500, 560]);
        assert_eq!(timeline.total_duration(), 14_060);
        assert_eq!(timeline.len(), 3);
        assert!(!timeline.is_empty());
    }

    #[test]
    fn test_level_at_alternates() {
        assert_eq!(Level::at(0), Level::Mark);
        assert_eq!(Level::at(1), Level::Space);
        assert_eq!(Level::at(42), Level::Mark);
        assert_eq!(Timeline::new().current_level(), None);
    }
}
