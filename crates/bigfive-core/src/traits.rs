//! Big Five (OCEAN) personality trait modeling and scoring.

use serde::{Deserialize, Serialize};

/// Score at or above which a trait counts as High.
pub const HIGH_BAND_THRESHOLD: f64 = 65.0;

/// Score at or below which a trait counts as Low.
pub const LOW_BAND_THRESHOLD: f64 = 45.0;

/// Individual Big Five trait enumeration.
///
/// The declaration order is the model output order and is preserved
/// everywhere scores are iterated or reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitName {
    Extraversion,
    Neuroticism,
    Agreeableness,
    Conscientiousness,
    Openness,
}

impl TraitName {
    /// All traits in the fixed reporting order.
    pub const ALL: [TraitName; 5] = [
        TraitName::Extraversion,
        TraitName::Neuroticism,
        TraitName::Agreeableness,
        TraitName::Conscientiousness,
        TraitName::Openness,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TraitName::Extraversion => "Extraversion",
            TraitName::Neuroticism => "Neuroticism",
            TraitName::Agreeableness => "Agreeableness",
            TraitName::Conscientiousness => "Conscientiousness",
            TraitName::Openness => "Openness",
        }
    }

    /// Question id prefix for this trait's ten items.
    pub fn item_prefix(&self) -> &'static str {
        match self {
            TraitName::Extraversion => "EXT",
            TraitName::Neuroticism => "EST",
            TraitName::Agreeableness => "AGR",
            TraitName::Conscientiousness => "CSN",
            TraitName::Openness => "OPN",
        }
    }

    /// Parse a display name back into a trait.
    pub fn from_name(name: &str) -> Option<Self> {
        TraitName::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Score band derived from a trait percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    High,
    Low,
    Balanced,
}

impl ScoreBand {
    /// Bucket a percentage: >= 65 High, <= 45 Low, otherwise Balanced.
    pub fn from_percentage(score: f64) -> Self {
        if score >= HIGH_BAND_THRESHOLD {
            ScoreBand::High
        } else if score <= LOW_BAND_THRESHOLD {
            ScoreBand::Low
        } else {
            ScoreBand::Balanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::High => "High",
            ScoreBand::Low => "Low",
            ScoreBand::Balanced => "Balanced",
        }
    }

    /// Lowercase key used in serialized payloads.
    pub fn key(&self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Low => "low",
            ScoreBand::Balanced => "balanced",
        }
    }
}

/// Five trait percentages in [`TraitName::ALL`] order.
///
/// Percentages are nominally 0-100 but are NOT clamped: the underlying
/// model is a regressor, so out-of-range values are possible and pass
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitScores {
    percentages: [f64; 5],
}

impl TraitScores {
    pub fn new(percentages: [f64; 5]) -> Self {
        Self { percentages }
    }

    pub fn get(&self, trait_name: TraitName) -> f64 {
        self.percentages[trait_name as usize]
    }

    /// (trait, percentage) pairs in the fixed reporting order.
    pub fn pairs(&self) -> [(TraitName, f64); 5] {
        let mut out = [(TraitName::Extraversion, 0.0); 5];
        for (i, t) in TraitName::ALL.into_iter().enumerate() {
            out[i] = (t, self.percentages[i]);
        }
        out
    }

    /// The trait with the highest percentage.
    pub fn dominant(&self) -> (TraitName, f64) {
        self.pairs()
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((TraitName::Extraversion, 0.0))
    }

    pub fn band(&self, trait_name: TraitName) -> ScoreBand {
        ScoreBand::from_percentage(self.get(trait_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_order_is_fixed() {
        let names: Vec<_> = TraitName::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "Extraversion",
                "Neuroticism",
                "Agreeableness",
                "Conscientiousness",
                "Openness"
            ]
        );
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_percentage(65.0), ScoreBand::High);
        assert_eq!(ScoreBand::from_percentage(64.9), ScoreBand::Balanced);
        assert_eq!(ScoreBand::from_percentage(50.0), ScoreBand::Balanced);
        assert_eq!(ScoreBand::from_percentage(45.0), ScoreBand::Low);
        assert_eq!(ScoreBand::from_percentage(45.1), ScoreBand::Balanced);
    }

    #[test]
    fn test_dominant_trait() {
        let scores = TraitScores::new([60.0, 40.0, 55.0, 70.0, 30.0]);
        let (t, s) = scores.dominant();
        assert_eq!(t, TraitName::Conscientiousness);
        assert_eq!(s, 70.0);
    }

    #[test]
    fn test_scores_are_not_clamped() {
        let scores = TraitScores::new([120.0, -10.0, 50.0, 50.0, 50.0]);
        assert_eq!(scores.get(TraitName::Extraversion), 120.0);
        assert_eq!(scores.get(TraitName::Neuroticism), -10.0);
    }

    #[test]
    fn test_from_name_round_trip() {
        for t in TraitName::ALL {
            assert_eq!(TraitName::from_name(t.name()), Some(t));
        }
        assert_eq!(TraitName::from_name("Charisma"), None);
    }
}
