//! Instant estimate over builder form fields, used for live feedback while a
//! resume is being edited. Simpler weighting than the text scorer and no
//! recommendations.

use crate::ats::scorer::MAX_SCORE;
use crate::models::resume::StructuredResume;

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_SKILLS: usize = 5;

/// Order-insensitive checklist sum over the structured resume, clamped to 100.
pub fn estimate(resume: &StructuredResume) -> u32 {
    let info = &resume.personal_info;

    let checks: [(bool, u32); 7] = [
        (is_present(&info.email) && is_present(&info.phone), 15),
        (info.summary.chars().count() > MIN_SUMMARY_CHARS, 15),
        (resume.experience.iter().any(|e| is_present(&e.company)), 20),
        (resume.education.iter().any(|e| is_present(&e.institution)), 15),
        (
            resume.skills.iter().filter(|s| is_present(s)).count() >= MIN_SKILLS,
            20,
        ),
        (is_present(&info.linkedin) || is_present(&info.github), 10),
        (resume.certifications.iter().any(|c| is_present(&c.name)), 5),
    ];

    let total: u32 = checks
        .iter()
        .filter(|(passed, _)| *passed)
        .map(|(_, points)| points)
        .sum();
    total.min(MAX_SCORE)
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo,
    };

    fn contact_only() -> StructuredResume {
        StructuredResume {
            personal_info: PersonalInfo {
                email: "jane@example.com".to_string(),
                phone: "555-123-4567".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        assert_eq!(estimate(&StructuredResume::default()), 0);
    }

    #[test]
    fn test_email_and_phone_only_scores_15() {
        assert_eq!(estimate(&contact_only()), 15);
    }

    #[test]
    fn test_email_without_phone_scores_zero() {
        let mut resume = contact_only();
        resume.personal_info.phone = "   ".to_string();
        assert_eq!(estimate(&resume), 0);
    }

    #[test]
    fn test_summary_must_exceed_50_chars() {
        let mut resume = StructuredResume::default();
        resume.personal_info.summary = "x".repeat(50);
        assert_eq!(estimate(&resume), 0);
        resume.personal_info.summary = "x".repeat(51);
        assert_eq!(estimate(&resume), 15);
    }

    #[test]
    fn test_any_experience_with_company_counts() {
        let resume = StructuredResume {
            experience: vec![
                ExperienceEntry::default(),
                ExperienceEntry {
                    company: "Acme".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(estimate(&resume), 20);
    }

    #[test]
    fn test_blank_skills_are_ignored() {
        let mut resume = StructuredResume {
            skills: vec!["Rust", "Go", "", "SQL", " ", "Kafka"]
                .into_iter()
                .map(String::from)
                .collect(),
            ..Default::default()
        };
        assert_eq!(estimate(&resume), 0);
        resume.skills.push("Redis".to_string());
        assert_eq!(estimate(&resume), 20);
    }

    #[test]
    fn test_complete_resume_clamps_at_100() {
        let resume = StructuredResume {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-123-4567".to_string(),
                github: "github.com/jane".to_string(),
                summary: "Backend engineer with a decade of experience in payments and reliability."
                    .to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                ..Default::default()
            }],
            education: vec![EducationEntry {
                institution: "State University".to_string(),
                ..Default::default()
            }],
            skills: ["Rust", "Go", "SQL", "Kafka", "Redis"]
                .into_iter()
                .map(String::from)
                .collect(),
            certifications: vec![CertificationEntry {
                name: "CKA".to_string(),
                ..Default::default()
            }],
        };
        assert_eq!(estimate(&resume), 100);
    }

    #[test]
    fn test_section_order_is_irrelevant() {
        let first = ExperienceEntry {
            company: "Acme".to_string(),
            ..Default::default()
        };
        let a = StructuredResume {
            experience: vec![first.clone(), ExperienceEntry::default()],
            ..Default::default()
        };
        let b = StructuredResume {
            experience: vec![ExperienceEntry::default(), first],
            ..Default::default()
        };
        assert_eq!(estimate(&a), estimate(&b));
    }
}
