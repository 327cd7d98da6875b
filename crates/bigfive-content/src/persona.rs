//! Career persona resolution.
//!
//! A persona is a static descriptive bundle selected from the dominant
//! trait when it meets the high-score threshold; anything less resolves
//! to the Balanced persona.

use serde::Serialize;

use bigfive_core::{TraitName, TraitScores, HIGH_BAND_THRESHOLD};

/// Static descriptive bundle for a dominant trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub title: &'static str,
    pub description: &'static str,
    pub careers: &'static [&'static str],
}

const OPENNESS: Persona = Persona {
    title: "The Innovator",
    description: "You thrive on new ideas, creativity, and abstract thinking. You dislike \
                  routine and prefer environments that allow you to explore possibilities \
                  and solve complex problems.",
    careers: &[
        "UX/UI Designer",
        "Research Scientist",
        "Creative Director",
        "Entrepreneur",
        "Architect",
        "Writer/Author",
    ],
};

const CONSCIENTIOUSNESS: Persona = Persona {
    title: "The Strategist",
    description: "You are organized, dependable, and disciplined. You excel in roles that \
                  require attention to detail, planning, and execution. You are the one who \
                  gets things done on time and to a high standard.",
    careers: &[
        "Project Manager",
        "Accountant/Auditor",
        "Software Engineer",
        "Surgeon",
        "Legal Counsel",
        "Operations Manager",
    ],
};

const EXTRAVERSION: Persona = Persona {
    title: "The Connector",
    description: "You draw energy from interacting with others. You are persuasive, \
                  enthusiastic, and action-oriented. You excel in dynamic environments \
                  where communication and leadership are key.",
    careers: &[
        "Sales Manager",
        "Public Relations Specialist",
        "Event Planner",
        "Politician",
        "Teacher/Educator",
        "Recruiter",
    ],
};

const AGREEABLENESS: Persona = Persona {
    title: "The Diplomat",
    description: "You are cooperative, empathetic, and people-oriented. You value harmony \
                  and are driven to help others. You thrive in supportive roles where \
                  emotional intelligence is a superpower.",
    careers: &[
        "Human Resources Manager",
        "Social Worker",
        "Nurse/Healthcare",
        "Counselor/Therapist",
        "Non-Profit Manager",
        "Customer Success",
    ],
};

const NEUROTICISM: Persona = Persona {
    title: "The Sentinel",
    description: "You are sensitive to risks and details that others miss. While you may \
                  experience stress more intensely, this makes you excellent at spotting \
                  errors, anticipating problems, and ensuring quality.",
    careers: &[
        "Quality Assurance Analyst",
        "Risk Manager",
        "Archivist/Librarian",
        "Data Analyst",
        "Safety Inspector",
        "Editor",
    ],
};

const BALANCED: Persona = Persona {
    title: "The Adaptable Professional",
    description: "Your personality is well-balanced, meaning you can adapt to a wide \
                  variety of situations. You can be social when needed but focus deeply \
                  when required. You are a versatile asset to any team.",
    careers: &[
        "General Manager",
        "Consultant",
        "Administrator",
        "Product Manager",
        "Communications Officer",
    ],
};

/// Persona for a single trait taken as dominant.
pub fn persona_for(trait_name: TraitName) -> &'static Persona {
    match trait_name {
        TraitName::Openness => &OPENNESS,
        TraitName::Conscientiousness => &CONSCIENTIOUSNESS,
        TraitName::Extraversion => &EXTRAVERSION,
        TraitName::Agreeableness => &AGREEABLENESS,
        TraitName::Neuroticism => &NEUROTICISM,
    }
}

/// Fallback persona when no trait stands out.
pub fn balanced_persona() -> &'static Persona {
    &BALANCED
}

/// Resolve the persona from a full score set: the dominant trait's
/// persona when its percentage meets the high threshold, otherwise
/// the Balanced persona.
pub fn resolve_persona(scores: &TraitScores) -> &'static Persona {
    let (trait_name, score) = scores.dominant();
    if score >= HIGH_BAND_THRESHOLD {
        persona_for(trait_name)
    } else {
        balanced_persona()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_openness_resolves_innovator() {
        let scores = TraitScores::new([50.0, 40.0, 55.0, 60.0, 70.0]);
        assert_eq!(resolve_persona(&scores).title, "The Innovator");
    }

    #[test]
    fn test_no_standout_resolves_balanced() {
        let scores = TraitScores::new([60.0, 55.0, 50.0, 58.0, 52.0]);
        assert_eq!(resolve_persona(&scores).title, "The Adaptable Professional");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let scores = TraitScores::new([65.0, 40.0, 40.0, 40.0, 40.0]);
        assert_eq!(resolve_persona(&scores).title, "The Connector");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let scores = TraitScores::new([67.3, 45.0, 30.0, 62.0, 81.0]);
        let first = resolve_persona(&scores);
        for _ in 0..10 {
            assert_eq!(resolve_persona(&scores), first);
        }
    }

    #[test]
    fn test_every_trait_has_a_persona() {
        for t in TraitName::ALL {
            let persona = persona_for(t);
            assert!(!persona.title.is_empty());
            assert!(!persona.careers.is_empty());
        }
    }
}
