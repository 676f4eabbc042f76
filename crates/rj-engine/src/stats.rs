//! Resist and use scores plus elapsed time.
//!
//! Both scores live in `0..=100`. Resist is the player's resistance to
//! relapse and is lost at zero; the use score is the urge to use and is
//! a danger sign when high.

use std::fmt;

use rj_core::InitialValues;

/// Lowest value a score can take.
pub const STAT_MIN: i32 = 0;
/// Highest value a score can take.
pub const STAT_MAX: i32 = 100;
/// Resist at or below this is shown as a warning.
pub const RESIST_DANGER: i32 = 20;
/// Use at or above this is shown as a warning.
pub const USE_DANGER: i32 = 80;

/// A score clamped to `STAT_MIN..=STAT_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTrack {
    current: i32,
}

impl StatTrack {
    /// Create a track, clamping `value` into range.
    pub fn new(value: i32) -> Self {
        Self {
            current: value.clamp(STAT_MIN, STAT_MAX),
        }
    }

    /// Current value.
    pub fn value(&self) -> i32 {
        self.current
    }

    /// Apply a delta and return the new value.
    ///
    /// A positive delta on a full track is ignored. Everything else is
    /// added and clamped.
    pub fn apply_delta(&mut self, delta: i32) -> i32 {
        if self.is_full() && delta > 0 {
            return self.current;
        }
        self.current = self.current.saturating_add(delta).clamp(STAT_MIN, STAT_MAX);
        self.current
    }

    /// Whether the track is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= STAT_MAX
    }

    /// Whether the track is at its minimum.
    pub fn is_empty(&self) -> bool {
        self.current <= STAT_MIN
    }
}

impl Default for StatTrack {
    fn default() -> Self {
        Self::new(STAT_MAX)
    }
}

impl fmt::Display for StatTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, STAT_MAX)
    }
}

/// The numeric state of a playthrough.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Resistance to relapse.
    pub resist: StatTrack,
    /// Urge to use.
    pub urge: StatTrack,
    time: i64,
}

impl Stats {
    /// Stats with the given scores, clamped, and elapsed hours.
    pub fn new(resist: i32, urge: i32, time: i64) -> Self {
        Self {
            resist: StatTrack::new(resist),
            urge: StatTrack::new(urge),
            time: time.max(0),
        }
    }

    /// Starting stats, honouring any overrides from the journey.
    pub fn from_initial(values: Option<&InitialValues>) -> Self {
        let resist = values.and_then(|v| v.resist).unwrap_or(STAT_MAX);
        let urge = values.and_then(|v| v.urge).unwrap_or(STAT_MAX);
        Self::new(resist, urge, 0)
    }

    /// Hours elapsed.
    pub fn time(&self) -> i64 {
        self.time
    }

    /// Advance the clock. Negative values wind it back, never below zero.
    pub fn advance_time(&mut self, hours: i64) -> i64 {
        self.time = self.time.saturating_add(hours).max(0);
        self.time
    }

    /// Whether resist has reached zero.
    pub fn is_relapsed(&self) -> bool {
        self.resist.is_empty()
    }

    /// Whether resist is low enough to warn about.
    pub fn resist_critical(&self) -> bool {
        self.resist.value() <= RESIST_DANGER
    }

    /// Whether the urge is high enough to warn about.
    pub fn urge_critical(&self) -> bool {
        self.urge.value() >= USE_DANGER
    }

    /// Elapsed time as `5h` or `2d 5h`.
    pub fn time_display(&self) -> String {
        format_hours(self.time)
    }
}

/// Format a number of hours as `5h`, or `2d 5h` from one day upward.
pub fn format_hours(hours: i64) -> String {
    if hours >= 24 {
        format!("{}d {}h", hours / 24, hours % 24)
    } else {
        format!("{hours}h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_clamps() {
        assert_eq!(StatTrack::new(150).value(), 100);
        assert_eq!(StatTrack::new(-3).value(), 0);
        assert_eq!(StatTrack::default().value(), 100);
    }

    #[test]
    fn positive_delta_at_ceiling_is_ignored() {
        let mut t = StatTrack::new(100);
        assert_eq!(t.apply_delta(5), 100);
        assert_eq!(t.apply_delta(-10), 90);
        assert_eq!(t.apply_delta(25), 100);
    }

    #[test]
    fn delta_clamps_to_floor() {
        let mut t = StatTrack::new(10);
        assert_eq!(t.apply_delta(-15), 0);
        assert!(t.is_empty());
        assert_eq!(t.apply_delta(-15), 0);
        assert_eq!(t.apply_delta(7), 7);
    }

    #[test]
    fn extreme_deltas() {
        let mut t = StatTrack::new(50);
        assert_eq!(t.apply_delta(i32::MAX), 100);
        assert_eq!(t.apply_delta(i32::MIN), 0);
    }

    #[test]
    fn initial_values_override() {
        let stats = Stats::from_initial(Some(&InitialValues {
            resist: Some(40),
            urge: None,
            unlocked_tools: None,
        }));
        assert_eq!(stats.resist.value(), 40);
        assert_eq!(stats.urge.value(), 100);
        assert_eq!(stats.time(), 0);

        let stats = Stats::from_initial(None);
        assert_eq!(stats.resist.value(), 100);
        assert_eq!(stats.urge.value(), 100);
    }

    #[test]
    fn time_never_negative() {
        let mut stats = Stats::default();
        assert_eq!(stats.advance_time(5), 5);
        assert_eq!(stats.advance_time(-2), 3);
        assert_eq!(stats.advance_time(-10), 0);
    }

    #[test]
    fn warning_thresholds() {
        let mut stats = Stats::from_initial(None);
        assert!(!stats.resist_critical());
        assert!(stats.urge_critical());

        stats.resist.apply_delta(-80);
        stats.urge.apply_delta(-21);
        assert!(stats.resist_critical());
        assert!(!stats.urge_critical());
    }

    #[test]
    fn explicit_stats_are_clamped() {
        let stats = Stats::new(120, -5, -3);
        assert_eq!(stats.resist.value(), 100);
        assert_eq!(stats.urge.value(), 0);
        assert_eq!(stats.time(), 0);
        assert!(stats.resist.is_full());
        assert_eq!(stats.resist.to_string(), "100/100");
        assert_eq!(Stats::new(15, 90, 30).time_display(), "1d 6h");
    }

    #[test]
    fn hours_format() {
        assert_eq!(format_hours(0), "0h");
        assert_eq!(format_hours(23), "23h");
        assert_eq!(format_hours(24), "1d 0h");
        assert_eq!(format_hours(53), "2d 5h");
    }

    proptest! {
        #[test]
        fn stays_in_range(
            start in -200i32..300,
            deltas in proptest::collection::vec(any::<i32>(), 0..32),
        ) {
            let mut t = StatTrack::new(start);
            for delta in deltas {
                let v = t.apply_delta(delta);
                prop_assert!((STAT_MIN..=STAT_MAX).contains(&v));
            }
        }

        #[test]
        fn ceiling_does_not_block_decrease(up in 1i32..1000, down in 1i32..=100) {
            let mut t = StatTrack::new(STAT_MAX);
            prop_assert_eq!(t.apply_delta(up), STAT_MAX);
            prop_assert_eq!(t.apply_delta(-down), STAT_MAX - down);
        }
    }
}
