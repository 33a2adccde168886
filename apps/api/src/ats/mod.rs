// ATS scoring engine.
// `score` checks free resume text against a fixed-weight checklist;
// `estimate` is the lightweight variant over builder form fields.
// Both are pure and synchronous. `handlers` and `store` wrap them for the
// HTTP API and the `ats_scores` table.

pub mod handlers;
pub mod models;
pub mod patterns;
pub mod rules;
pub mod scorer;
pub mod signals;
pub mod store;
pub mod structured;

pub use models::{AnalysisResult, ScoreResult};
pub use scorer::score;
pub use structured::estimate;
