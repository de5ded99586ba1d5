use crate::domain::analysis::{TrendDirection, TrendSummary};
use crate::domain::pain::PainBand;

/// Display values for the trend summary cards.
pub struct TrendCards {
    pub sessions: String,
    pub max_volume: String,
    pub average_pain: String,
    pub average_band: Option<PainBand>,
    pub direction: TrendDirection,
    pub direction_label: String,
}

impl TrendCards {
    pub fn from_summary(summary: &TrendSummary) -> Self {
        let max_volume = summary
            .max_volume
            .map(|v| format!("{:.1} kg", v))
            .unwrap_or_else(|| "—".to_string());

        let (average_pain, average_band) = match summary.average_pain_during {
            Some(avg) => (
                format!("{:.1}/10", avg),
                // Band of the rounded average, for the card accent only.
                Some(PainBand::from_score(avg.round() as u8)),
            ),
            None => ("—".to_string(), None),
        };

        let direction_label = match summary.direction {
            TrendDirection::Improving => "Improving".to_string(),
            TrendDirection::Stable => "Stable".to_string(),
            TrendDirection::Worsening => "Worsening".to_string(),
            TrendDirection::InsufficientData => "N/A".to_string(),
        };

        Self {
            sessions: summary.session_count.to_string(),
            max_volume,
            average_pain,
            average_band,
            direction: summary.direction,
            direction_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_renders_placeholders() {
        let cards = TrendCards::from_summary(&TrendSummary {
            session_count: 0,
            max_volume: None,
            average_pain_during: None,
            direction: TrendDirection::InsufficientData,
        });
        assert_eq!(cards.sessions, "0");
        assert_eq!(cards.max_volume, "—");
        assert_eq!(cards.average_pain, "—");
        assert_eq!(cards.direction_label, "N/A");
    }

    #[test]
    fn average_band_follows_rounded_average() {
        let cards = TrendCards::from_summary(&TrendSummary {
            session_count: 6,
            max_volume: Some(480.0),
            average_pain_during: Some(3.6),
            direction: TrendDirection::Improving,
        });
        assert_eq!(cards.average_band, Some(PainBand::Moderate));
        assert_eq!(cards.max_volume, "480.0 kg");
    }
}
