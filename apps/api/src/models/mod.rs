pub mod ats_score;
pub mod resume;
