use crate::ats::models::AnalysisResult;
use crate::ats::patterns::{
    contains_any_lower, count_quantified_results, count_year_ranges, has_email, has_phone,
    has_summary_content, matched_keywords_lower, skills_item_count, word_count, ACTION_VERBS,
    CERTIFICATION_KEYWORDS, DEGREE_LEVELS, EDUCATION_KEYWORDS, EXPERIENCE_KEYWORDS,
    JOB_KEYWORDS, LINK_KEYWORDS, SKILLS_KEYWORDS, SUMMARY_KEYWORDS,
};

/// Raw per-check signals, computed once per document and shared by every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSignals {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_summary: bool,
    pub has_experience_section: bool,
    pub year_ranges: usize,
    pub has_education_section: bool,
    pub degree_levels: Vec<&'static str>,
    pub has_skills_section: bool,
    /// 0 when the section keyword exists but no bounded span was found.
    pub skill_items: usize,
    pub has_links: bool,
    pub has_certifications: bool,
    pub action_verbs: Vec<&'static str>,
    pub quantified_results: usize,
    pub job_keywords: Vec<&'static str>,
    pub word_count: usize,
}

impl TextSignals {
    pub fn extract(text: &str) -> Self {
        let lower = text.to_lowercase();

        let has_skills_section = contains_any_lower(&lower, SKILLS_KEYWORDS);
        let skill_items = if has_skills_section {
            skills_item_count(text).unwrap_or(0)
        } else {
            0
        };

        Self {
            has_email: has_email(text),
            has_phone: has_phone(text),
            has_summary: contains_any_lower(&lower, SUMMARY_KEYWORDS) && has_summary_content(text),
            has_experience_section: contains_any_lower(&lower, EXPERIENCE_KEYWORDS),
            year_ranges: count_year_ranges(text),
            has_education_section: contains_any_lower(&lower, EDUCATION_KEYWORDS),
            degree_levels: matched_keywords_lower(&lower, DEGREE_LEVELS),
            has_skills_section,
            skill_items,
            has_links: contains_any_lower(&lower, LINK_KEYWORDS),
            has_certifications: contains_any_lower(&lower, CERTIFICATION_KEYWORDS),
            action_verbs: matched_keywords_lower(&lower, ACTION_VERBS),
            quantified_results: count_quantified_results(text),
            job_keywords: matched_keywords_lower(&lower, JOB_KEYWORDS),
            word_count: word_count(text),
        }
    }

    pub fn has_contact_info(&self) -> bool {
        self.has_email && self.has_phone
    }

    /// Detected jobs. A section keyword without any dated range still counts
    /// as one entry.
    pub fn experience_count(&self) -> usize {
        if self.has_experience_section {
            self.year_ranges.max(1)
        } else {
            0
        }
    }

    /// 1 when any education keyword appears. Degree levels only feed the bonus.
    pub fn education_count(&self) -> usize {
        usize::from(self.has_education_section)
    }

    pub fn to_analysis(&self) -> AnalysisResult {
        AnalysisResult {
            has_contact_info: self.has_contact_info(),
            has_summary: self.has_summary,
            experience_count: self.experience_count(),
            education_count: self.education_count(),
            skills_count: self.skill_items,
            has_links: self.has_links,
            has_certifications: self.has_certifications,
            word_count: self.word_count,
            keyword_matches: self.job_keywords.iter().map(|k| k.to_string()).collect(),
            action_verb_count: self.action_verbs.len(),
            quantified_results: self.quantified_results,
        }
    }
}
