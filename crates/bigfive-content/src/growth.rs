//! Growth tips keyed by (trait, score band).

use serde::Serialize;

use bigfive_core::{ScoreBand, TraitName, TraitScores};

/// Fallback when a name-keyed lookup does not match a known trait.
pub const GENERIC_TIP: &str = "Keep exploring your potential.";

/// Growth tip for one trait at one score band.
pub fn growth_tip(trait_name: TraitName, band: ScoreBand) -> &'static str {
    match (trait_name, band) {
        (TraitName::Openness, ScoreBand::High) => {
            "Your mind is a universe of infinite possibilities. Your challenge is \
             execution. Pick just one of your brilliant ideas and commit to finishing \
             it before starting the next one."
        }
        (TraitName::Openness, ScoreBand::Low) => {
            "You are the anchor of reality and tradition. To expand your horizons, \
             break one routine this week. Take a different route to work, watch a \
             documentary on a weird topic, or eat a cuisine you've never tried."
        }
        (TraitName::Openness, ScoreBand::Balanced) => {
            "You are the bridge between the visionary and the pragmatist. You have the \
             unique ability to take a radical idea and make it work in the real world. \
             Use this to lead teams effectively."
        }
        (TraitName::Conscientiousness, ScoreBand::High) => {
            "Your drive for perfection is impressive but exhausting. Remember that \
             'done' is often better than 'perfect.' Schedule one hour this week \
             specifically for doing absolutely nothing productive."
        }
        (TraitName::Conscientiousness, ScoreBand::Low) => {
            "You are a master of adaptability and improvisation. To reduce chaos, \
             anchor your day with just one 'keystone habit', like making your bed \
             every morning, to build a foundation of order."
        }
        (TraitName::Conscientiousness, ScoreBand::Balanced) => {
            "You have the rare gift of flexible discipline. You can hustle when \
             deadlines approach but know how to relax when the work is done. Keep \
             protecting that work-life boundary."
        }
        (TraitName::Extraversion, ScoreBand::High) => {
            "You shine brightest when connected to others. However, constant \
             stimulation can mask your inner voice. Spend 30 minutes alone in nature \
             or silence to reconnect with who you are when no one is watching."
        }
        (TraitName::Extraversion, ScoreBand::Low) => {
            "You possess a rich and complex inner world. Don't let your best thoughts \
             stay hidden. Challenge yourself to voice one opinion in a meeting or \
             group chat this week, even if it feels uncomfortable."
        }
        (TraitName::Extraversion, ScoreBand::Balanced) => {
            "You are the ultimate social chameleon (The Ambivert). You can lead a \
             party or enjoy a book. Your growth lies in recognizing your current \
             energy level and honoring it without guilt."
        }
        (TraitName::Agreeableness, ScoreBand::High) => {
            "Your empathy is a superpower, but don't let it become a weakness. You \
             likely over-commit to help others. Practice the '24-hour rule': wait one \
             full day before saying 'Yes' to any new request."
        }
        (TraitName::Agreeableness, ScoreBand::Low) => {
            "You are a truth-teller who values facts over feelings. Your logic is \
             sound, but delivery matters. Before critiquing someone, start by \
             validating their effort or perspective to ensure they actually hear you."
        }
        (TraitName::Agreeableness, ScoreBand::Balanced) => {
            "You are a fair but firm negotiator. You understand people's needs but \
             don't let them walk all over you. You are perfectly suited for conflict \
             resolution and management roles."
        }
        (TraitName::Neuroticism, ScoreBand::High) => {
            "You feel the world deeply and spot risks others miss. Your anxiety is \
             often just overactive creativity. When you spiral into 'what if' \
             scenarios, force yourself to write down three 'what if things go right' \
             scenarios."
        }
        (TraitName::Neuroticism, ScoreBand::Low) => {
            "You are the calm eye of the storm. Your stability is comforting, but be \
             careful not to dismiss others' stress as irrational. Practice saying, 'I \
             can see why that upsets you,' even if you don't feel it yourself."
        }
        (TraitName::Neuroticism, ScoreBand::Balanced) => {
            "You possess high emotional intelligence. You are aware of danger and \
             stress, but you don't let it paralyze you. Trust your gut instincts; \
             they are likely calibrated correctly."
        }
    }
}

/// Name-keyed lookup for callers holding loose trait names, degrading
/// to [`GENERIC_TIP`] rather than erroring.
pub fn growth_tip_by_name(trait_name: &str, band: ScoreBand) -> &'static str {
    match TraitName::from_name(trait_name) {
        Some(t) => growth_tip(t, band),
        None => GENERIC_TIP,
    }
}

/// One trait's slice of the growth plan.
#[derive(Debug, Clone, Serialize)]
pub struct GrowthEntry {
    pub trait_name: TraitName,
    pub score: f64,
    pub band: ScoreBand,
    pub tip: &'static str,
}

/// Build the per-trait growth plan in the fixed trait order.
pub fn growth_plan(scores: &TraitScores) -> Vec<GrowthEntry> {
    scores
        .pairs()
        .into_iter()
        .map(|(trait_name, score)| {
            let band = ScoreBand::from_percentage(score);
            GrowthEntry {
                trait_name,
                score,
                band,
                tip: growth_tip(trait_name, band),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_score_gets_balanced_tip() {
        let scores = TraitScores::new([50.0; 5]);
        let plan = growth_plan(&scores);
        assert_eq!(plan.len(), 5);
        assert!(plan.iter().all(|e| e.band == ScoreBand::Balanced));
    }

    #[test]
    fn test_plan_preserves_trait_order() {
        let scores = TraitScores::new([70.0, 30.0, 50.0, 65.0, 45.0]);
        let plan = growth_plan(&scores);
        let names: Vec<_> = plan.iter().map(|e| e.trait_name).collect();
        assert_eq!(names, TraitName::ALL.to_vec());
        assert_eq!(plan[0].band, ScoreBand::High);
        assert_eq!(plan[1].band, ScoreBand::Low);
        assert_eq!(plan[4].band, ScoreBand::Low);
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(growth_tip_by_name("Charisma", ScoreBand::High), GENERIC_TIP);
        assert_ne!(
            growth_tip_by_name("Openness", ScoreBand::High),
            GENERIC_TIP
        );
    }

    #[test]
    fn test_tips_are_deterministic() {
        for t in TraitName::ALL {
            for band in [ScoreBand::High, ScoreBand::Low, ScoreBand::Balanced] {
                assert_eq!(growth_tip(t, band), growth_tip(t, band));
                assert!(!growth_tip(t, band).is_empty());
            }
        }
    }
}
