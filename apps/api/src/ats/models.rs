use serde::{Deserialize, Serialize};

/// Signals extracted from a resume document. Every field is derived from the
/// text alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub has_contact_info: bool,
    pub has_summary: bool,
    pub experience_count: usize,
    pub education_count: usize,
    pub skills_count: usize,
    pub has_links: bool,
    pub has_certifications: bool,
    pub word_count: usize,
    /// Generic job-related terms found, in vocabulary order. Not scored.
    pub keyword_matches: Vec<String>,
    #[serde(default)]
    pub action_verb_count: usize,
    #[serde(default)]
    pub quantified_results: usize,
}

/// Output of one scoring call. Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Clamped to 0..=100.
    pub score: u32,
    pub analysis: AnalysisResult,
    /// At most five, in checklist order.
    pub recommendations: Vec<String>,
}
