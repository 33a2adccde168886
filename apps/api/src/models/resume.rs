use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// A resume as authored in the builder form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredResume {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<CertificationEntry>,
}

impl StructuredResume {
    /// Checks the fields a stored resume cannot do without.
    pub fn validate(&self) -> Result<(), String> {
        if self.personal_info.full_name.trim().is_empty() {
            return Err("personalInfo.fullName is required".to_string());
        }
        if self.personal_info.email.trim().is_empty() {
            return Err("personalInfo.email is required".to_string());
        }
        Ok(())
    }

    /// Flattens the form into plain resume text with conventional section
    /// headings, so stored resumes can go through the text scorer.
    pub fn to_resume_text(&self) -> String {
        let info = &self.personal_info;
        let mut text = String::new();

        push_line(&mut text, &info.full_name);
        let contact: Vec<&str> = [&info.email, &info.phone, &info.location]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        push_line(&mut text, &contact.join(" | "));
        push_line(&mut text, &info.linkedin);
        push_line(&mut text, &info.github);

        if !info.summary.trim().is_empty() {
            text.push_str(&format!("\nSummary\n{}\n", info.summary.trim()));
        }

        let experience: Vec<_> = self
            .experience
            .iter()
            .filter(|e| !e.company.trim().is_empty() || !e.position.trim().is_empty())
            .collect();
        if !experience.is_empty() {
            text.push_str("\nExperience\n");
            for entry in experience {
                let end = if entry.current {
                    "Present"
                } else {
                    entry.end_date.trim()
                };
                text.push_str(&format!(
                    "{}, {}, {} - {}\n",
                    entry.position.trim(),
                    entry.company.trim(),
                    entry.start_date.trim(),
                    end
                ));
                push_line(&mut text, &entry.description);
            }
        }

        let education: Vec<_> = self
            .education
            .iter()
            .filter(|e| !e.institution.trim().is_empty())
            .collect();
        if !education.is_empty() {
            text.push_str("\nEducation\n");
            for entry in education {
                text.push_str(&format!(
                    "{} in {}, {} {}\n",
                    entry.degree.trim(),
                    entry.field.trim(),
                    entry.institution.trim(),
                    entry.graduation_date.trim()
                ));
            }
        }

        let skills: Vec<&str> = self
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if !skills.is_empty() {
            // Blank line after the list closes the skills span for the text scorer.
            text.push_str(&format!("\nSkills: {}\n\n", skills.join(", ")));
        }

        let certifications: Vec<_> = self
            .certifications
            .iter()
            .filter(|c| !c.name.trim().is_empty())
            .collect();
        if !certifications.is_empty() {
            text.push_str("\nCertifications\n");
            for cert in certifications {
                text.push_str(&format!(
                    "{}, {} {}\n",
                    cert.name.trim(),
                    cert.issuer.trim(),
                    cert.date.trim()
                ));
            }
        }

        text
    }
}

fn push_line(text: &mut String, line: &str) {
    let line = line.trim();
    if !line.is_empty() {
        text.push_str(line);
        text.push('\n');
    }
}

/// Presentation template chosen for a resume. Rendering happens client-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Creative,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Creative => "creative",
        }
    }
}

/// Request body for creating or replacing a resume.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumePayload {
    #[serde(flatten)]
    pub resume: StructuredResume,
    #[serde(default)]
    pub template: Template,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub data: Json<StructuredResume>,
    pub template: String,
    pub ats_score: i32,
    pub is_public: bool,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
