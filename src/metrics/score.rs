//! Completion-percentage → severity tier mapping.

use std::fmt;

/// Three-level classification of a day's completion percentage. Derived
/// at render time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    Good,
    Warning,
    Bad,
}

impl ScoreTier {
    /// Classify a 0..=100 completion percentage. Fixed thresholds with
    /// inclusive lower bounds: >= 80 Good, >= 50 Warning, else Bad.
    ///
    /// Scores come from a less-trusted external source, so out-of-range
    /// values are clamped to the nearest bound rather than rejected.
    pub fn for_score(score: i64) -> Self {
        let score = score.clamp(0, 100);
        if score >= 80 {
            Self::Good
        } else if score >= 50 {
            Self::Warning
        } else {
            Self::Bad
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Bad => "Bad",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(ScoreTier::for_score(80), ScoreTier::Good);
        assert_eq!(ScoreTier::for_score(79), ScoreTier::Warning);
        assert_eq!(ScoreTier::for_score(50), ScoreTier::Warning);
        assert_eq!(ScoreTier::for_score(49), ScoreTier::Bad);
        assert_eq!(ScoreTier::for_score(100), ScoreTier::Good);
        assert_eq!(ScoreTier::for_score(0), ScoreTier::Bad);
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(ScoreTier::for_score(150), ScoreTier::for_score(100));
        assert_eq!(ScoreTier::for_score(-5), ScoreTier::for_score(0));
    }
}
