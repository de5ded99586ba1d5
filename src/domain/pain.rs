use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light severity band for a 0-10 pain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PainBand {
    Low,
    Moderate,
    High,
}

impl PainBand {
    /// Classify a pain score into its band.
    ///
    /// Boundaries: `<= 3` low, `4..=5` moderate, `>= 6` high. Input is
    /// assumed pre-validated to 0-10 by the caller; scores above 10 are not
    /// clamped and fall into the high band.
    pub fn from_score(pain: u8) -> Self {
        if pain <= 3 {
            PainBand::Low
        } else if pain <= 5 {
            PainBand::Moderate
        } else {
            PainBand::High
        }
    }

    /// Fixed display token, used identically wherever pain is rendered.
    pub fn traffic_light(&self) -> &'static str {
        match self {
            PainBand::Low => "\u{1F7E2}",      // green circle
            PainBand::Moderate => "\u{1F7E1}", // yellow circle
            PainBand::High => "\u{1F534}",     // red circle
        }
    }
}

impl fmt::Display for PainBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PainBand::Low => write!(f, "low"),
            PainBand::Moderate => write!(f, "moderate"),
            PainBand::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_partition_the_scale_at_3_4_and_5_6() {
        assert_eq!(PainBand::from_score(0), PainBand::Low);
        assert_eq!(PainBand::from_score(3), PainBand::Low);
        assert_eq!(PainBand::from_score(4), PainBand::Moderate);
        assert_eq!(PainBand::from_score(5), PainBand::Moderate);
        assert_eq!(PainBand::from_score(6), PainBand::High);
        assert_eq!(PainBand::from_score(10), PainBand::High);
    }

    #[test]
    fn out_of_range_scores_are_not_clamped() {
        assert_eq!(PainBand::from_score(11), PainBand::High);
        assert_eq!(PainBand::from_score(u8::MAX), PainBand::High);
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(PainBand::from_score(2).traffic_light(), "\u{1F7E2}");
        assert_eq!(PainBand::from_score(5).traffic_light(), "\u{1F7E1}");
        assert_eq!(PainBand::from_score(8).traffic_light(), "\u{1F534}");
    }
}
