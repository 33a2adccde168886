//! The ATS checklist as an ordered rule table.
//!
//! Rules are evaluated in table order. Each returns the points it awards and,
//! when the check is failed or only partially met, one fixed recommendation.
//! Recommendation priority is therefore the table order.

use crate::ats::signals::TextSignals;

pub const MSG_CONTACT: &str = "Add complete contact information (email and phone number)";
pub const MSG_SUMMARY: &str = "Include a compelling professional summary at the top";
pub const MSG_EXPERIENCE_MISSING: &str =
    "Add your work experience with specific dates and achievements";
pub const MSG_EXPERIENCE_MORE: &str =
    "Add more work experience entries to strengthen your profile";
pub const MSG_EDUCATION: &str = "Include your educational background";
pub const MSG_SKILLS_MISSING: &str = "Add a comprehensive skills section with relevant keywords";
pub const MSG_SKILLS_MORE: &str =
    "Expand your skills section to at least 8 relevant skills, separated by commas or bullets";
pub const MSG_LINKS: &str = "Include LinkedIn, GitHub, or portfolio links";
pub const MSG_CERTIFICATIONS: &str = "Add relevant certifications or professional courses";
pub const MSG_ACTION_VERBS: &str =
    "Start your bullet points with strong action verbs such as led, built, or improved";
pub const MSG_QUANTIFIED: &str =
    "Quantify your achievements with numbers, percentages, or dollar amounts";
pub const MSG_TOO_SHORT: &str = "Your resume looks too short; aim for at least 200 words";
pub const MSG_TOO_LONG: &str = "Your resume looks too long; keep it under 800 words";

pub const MIN_WORDS: usize = 200;
pub const MAX_WORDS: usize = 800;
pub const MIN_ACTION_VERBS: usize = 5;
pub const MIN_QUANTIFIED_RESULTS: usize = 3;
pub const EDUCATION_BONUS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    ContactInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Links,
    Certifications,
    ActionVerbs,
    QuantifiedResults,
    Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub points: u32,
    pub recommendation: Option<&'static str>,
}

impl Outcome {
    const fn pass(points: u32) -> Self {
        Self {
            points,
            recommendation: None,
        }
    }

    const fn fail(message: &'static str) -> Self {
        Self {
            points: 0,
            recommendation: Some(message),
        }
    }

    const fn partial(points: u32, message: &'static str) -> Self {
        Self {
            points,
            recommendation: Some(message),
        }
    }
}

pub struct Rule {
    pub check: Check,
    evaluate: fn(&TextSignals) -> Outcome,
}

impl Rule {
    pub fn evaluate(&self, signals: &TextSignals) -> Outcome {
        (self.evaluate)(signals)
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        check: Check::ContactInfo,
        evaluate: contact_info,
    },
    Rule {
        check: Check::Summary,
        evaluate: summary,
    },
    Rule {
        check: Check::Experience,
        evaluate: experience,
    },
    Rule {
        check: Check::Education,
        evaluate: education,
    },
    Rule {
        check: Check::Skills,
        evaluate: skills,
    },
    Rule {
        check: Check::Links,
        evaluate: links,
    },
    Rule {
        check: Check::Certifications,
        evaluate: certifications,
    },
    Rule {
        check: Check::ActionVerbs,
        evaluate: action_verbs,
    },
    Rule {
        check: Check::QuantifiedResults,
        evaluate: quantified_results,
    },
    Rule {
        check: Check::Length,
        evaluate: length,
    },
];

fn contact_info(s: &TextSignals) -> Outcome {
    if s.has_contact_info() {
        Outcome::pass(15)
    } else {
        Outcome::fail(MSG_CONTACT)
    }
}

fn summary(s: &TextSignals) -> Outcome {
    if s.has_summary {
        Outcome::pass(15)
    } else {
        Outcome::fail(MSG_SUMMARY)
    }
}

// One detected entry earns partial credit and still asks for more.
fn experience(s: &TextSignals) -> Outcome {
    match s.experience_count() {
        0 => Outcome::fail(MSG_EXPERIENCE_MISSING),
        1 => Outcome::partial(15, MSG_EXPERIENCE_MORE),
        _ => Outcome::pass(20),
    }
}

fn education(s: &TextSignals) -> Outcome {
    if !s.has_education_section {
        return Outcome::fail(MSG_EDUCATION);
    }
    let bonus = if s.degree_levels.len() >= 2 {
        EDUCATION_BONUS
    } else {
        0
    };
    Outcome::pass(15 + bonus)
}

fn skills(s: &TextSignals) -> Outcome {
    if !s.has_skills_section {
        return Outcome::fail(MSG_SKILLS_MISSING);
    }
    match s.skill_items {
        n if n >= 8 => Outcome::pass(20),
        n if n >= 5 => Outcome::partial(15, MSG_SKILLS_MORE),
        0 => Outcome::fail(MSG_SKILLS_MORE),
        _ => Outcome::partial(10, MSG_SKILLS_MORE),
    }
}

fn links(s: &TextSignals) -> Outcome {
    if s.has_links {
        Outcome::pass(10)
    } else {
        Outcome::fail(MSG_LINKS)
    }
}

fn certifications(s: &TextSignals) -> Outcome {
    if s.has_certifications {
        Outcome::pass(5)
    } else {
        Outcome::fail(MSG_CERTIFICATIONS)
    }
}

fn action_verbs(s: &TextSignals) -> Outcome {
    if s.action_verbs.len() >= MIN_ACTION_VERBS {
        Outcome::pass(5)
    } else {
        Outcome::fail(MSG_ACTION_VERBS)
    }
}

fn quantified_results(s: &TextSignals) -> Outcome {
    if s.quantified_results >= MIN_QUANTIFIED_RESULTS {
        Outcome::pass(5)
    } else {
        Outcome::fail(MSG_QUANTIFIED)
    }
}

fn length(s: &TextSignals) -> Outcome {
    if s.word_count < MIN_WORDS {
        Outcome::fail(MSG_TOO_SHORT)
    } else if s.word_count > MAX_WORDS {
        Outcome::fail(MSG_TOO_LONG)
    } else {
        Outcome::pass(0)
    }
}
