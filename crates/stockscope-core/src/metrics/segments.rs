use serde::{Deserialize, Serialize};

/// Placeholder revenue split: (name, share of revenue, growth percent).
pub const SEGMENT_SPLITS: [(&str, f64, f64); 3] = [
    ("Products", 0.55, 5.2),
    ("Services", 0.30, 8.5),
    ("Other", 0.15, 3.1),
];

/// Illustrative business segment. Not sourced from segment reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    /// Billions, one decimal.
    pub value: f64,
    pub growth: f64,
}

/// Split revenue (in billions) into the fixed placeholder segments.
///
/// Zero, negative or non-finite revenue produces no segments.
pub fn synthesize_segments(latest_revenue_billions: f64) -> Vec<Segment> {
    if !latest_revenue_billions.is_finite() || latest_revenue_billions <= 0.0 {
        return Vec::new();
    }

    SEGMENT_SPLITS
        .iter()
        .map(|&(name, share, growth)| Segment {
            name: name.to_owned(),
            value: round_one_decimal(latest_revenue_billions * share),
            growth,
        })
        .collect()
}

/// Treemap color category for a growth percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthBand {
    Strong,
    Good,
    Slow,
    Decline,
}

impl GrowthBand {
    pub const fn color(self) -> &'static str {
        match self {
            Self::Strong => "#15803d",
            Self::Good => "#4ade80",
            Self::Slow => "#facc15",
            Self::Decline => "#ef4444",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong growth",
            Self::Good => "good growth",
            Self::Slow => "slow growth",
            Self::Decline => "decline",
        }
    }
}

/// Piecewise band: >= 15 strong, >= 5 good, >= -5 slow, otherwise decline.
pub fn growth_color_band(growth_percent: f64) -> GrowthBand {
    if growth_percent >= 15.0 {
        GrowthBand::Strong
    } else if growth_percent >= 5.0 {
        GrowthBand::Good
    } else if growth_percent >= -5.0 {
        GrowthBand::Slow
    } else {
        GrowthBand::Decline
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_revenue_into_three_segments() {
        let segments = synthesize_segments(10.0);
        let values = segments.iter().map(|s| s.value).collect::<Vec<_>>();
        assert_eq!(values, vec![5.5, 3.0, 1.5]);
        assert_eq!(values.iter().sum::<f64>(), 10.0);
        assert_eq!(segments[1].growth, 8.5);
    }

    #[test]
    fn rounds_to_one_decimal() {
        let segments = synthesize_segments(391.04);
        assert_eq!(segments[0].value, 215.1);
        assert_eq!(segments[1].value, 117.3);
        assert_eq!(segments[2].value, 58.7);
    }

    #[test]
    fn no_segments_without_revenue() {
        assert!(synthesize_segments(0.0).is_empty());
        assert!(synthesize_segments(-3.0).is_empty());
        assert!(synthesize_segments(f64::NAN).is_empty());
    }

    #[test]
    fn bands_are_piecewise() {
        assert_eq!(growth_color_band(15.0), GrowthBand::Strong);
        assert_eq!(growth_color_band(14.99), GrowthBand::Good);
        assert_eq!(growth_color_band(5.0), GrowthBand::Good);
        assert_eq!(growth_color_band(4.9), GrowthBand::Slow);
        assert_eq!(growth_color_band(-5.0), GrowthBand::Slow);
        assert_eq!(growth_color_band(-5.01), GrowthBand::Decline);
        assert_ne!(GrowthBand::Strong.color(), GrowthBand::Good.color());
    }
}
