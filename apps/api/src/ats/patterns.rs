//! Keyword vocabularies and text predicates behind the ATS checklist.
//!
//! Keyword checks are case-insensitive substring matches over the whole
//! document, not tokenized lookups. Callers pass the lowercased text to the
//! `*_lower` helpers so a document is only lowercased once per scoring call.

use regex::Regex;
use std::sync::LazyLock;

pub const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "profile", "about"];

pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "professional experience",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "education",
    "degree",
    "university",
    "college",
    "bachelor",
    "master",
    "phd",
];

/// Degree levels counted towards the education bonus.
pub const DEGREE_LEVELS: &[&str] = &["bachelor", "master", "phd", "doctorate"];

pub const SKILLS_KEYWORDS: &[&str] = &[
    "skills",
    "technical skills",
    "competencies",
    "expertise",
    "proficiencies",
];

pub const LINK_KEYWORDS: &[&str] = &["linkedin.com", "github.com", "portfolio", "website"];

pub const CERTIFICATION_KEYWORDS: &[&str] =
    &["certification", "certificate", "certified", "credential"];

pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "developed",
    "managed",
    "led",
    "created",
    "improved",
    "increased",
    "reduced",
    "implemented",
    "designed",
    "built",
];

/// Generic job-related terms reported back as keyword matches. Not scored.
pub const JOB_KEYWORDS: &[&str] = &[
    "project",
    "team",
    "client",
    "strategic",
    "analysis",
    "development",
    "management",
    "communication",
    "leadership",
];

/// Characters that must follow the first summary keyword, counted from the
/// start of the keyword itself. The check passes only when strictly more
/// characters remain.
pub const SUMMARY_MIN_TRAILING_CHARS: usize = 100;

const SKILL_BULLETS: &[char] = &['•', '·', '-'];

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+[0-9]{1,3}[-.]?)?\(?[0-9]{3}\)?[-.]?[0-9]{3}[-.]?[0-9]{4}").unwrap()
});

static SUMMARY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)summary|objective|profile|about").unwrap());

static YEAR_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]{4}\s*[-–]\s*(?:[0-9]{4}|present|current)").unwrap()
});

// The span ends at a blank line or at a newline followed by an uppercase
// letter; only the keyword itself is matched case-insensitively.
static SKILLS_SECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)(?i:skills|technical skills|competencies|expertise|proficiencies)[:\s]+(.*?)(?:\n\n|\n[A-Z])",
    )
    .unwrap()
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static QUANTIFIED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]+%|\$[0-9]+|increased by [0-9]+|reduced by [0-9]+").unwrap()
});

pub fn contains_any_lower(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text_lower.contains(kw))
}

/// Keywords from `vocabulary` found in the text, in vocabulary order.
pub fn matched_keywords_lower(text_lower: &str, vocabulary: &[&'static str]) -> Vec<&'static str> {
    vocabulary
        .iter()
        .copied()
        .filter(|kw| text_lower.contains(kw))
        .collect()
}

pub fn has_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    PHONE_PATTERN.is_match(text)
}

/// True when a summary keyword occurs and more than
/// [`SUMMARY_MIN_TRAILING_CHARS`] characters follow the start of its first
/// occurrence. Position-sensitive, unlike every other check.
pub fn has_summary_content(text: &str) -> bool {
    SUMMARY_PATTERN
        .find(text)
        .map(|m| text[m.start()..].chars().count() > SUMMARY_MIN_TRAILING_CHARS)
        .unwrap_or(false)
}

/// Number of `YYYY-YYYY` / `YYYY-present` / `YYYY-current` ranges anywhere in the text.
pub fn count_year_ranges(text: &str) -> usize {
    YEAR_RANGE_PATTERN.find_iter(text).count()
}

/// Number of skill items in the first skills section, or `None` when no
/// bounded section could be located.
///
/// Items are `max(commas + 1, bullet characters)` within the captured span.
pub fn skills_item_count(text: &str) -> Option<usize> {
    let span = SKILLS_SECTION_PATTERN.captures(text)?.get(1)?.as_str();
    let commas = span.matches(',').count();
    let bullets = span.chars().filter(|c| SKILL_BULLETS.contains(c)).count();
    Some((commas + 1).max(bullets))
}

pub fn count_quantified_results(text: &str) -> usize {
    QUANTIFIED_PATTERN.find_iter(text).count()
}

/// Pieces left after splitting on whitespace runs. Leading or trailing
/// whitespace adds an empty piece, so `""` counts 1 and `" a "` counts 3.
pub fn word_count(text: &str) -> usize {
    WHITESPACE_RUN.split(text).count()
}
