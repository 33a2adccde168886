use tracing::{debug, trace};

use crate::ats::models::ScoreResult;
use crate::ats::rules::RULES;
use crate::ats::signals::TextSignals;

pub const MAX_SCORE: u32 = 100;
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Scores free resume text against the ATS checklist.
///
/// Total over every input, the empty string included: the result always has a
/// score in `0..=100` and at most five recommendations, in checklist order.
pub fn score(text: &str) -> ScoreResult {
    let signals = TextSignals::extract(text);

    let mut total = 0u32;
    let mut recommendations = Vec::new();
    for rule in RULES {
        let outcome = rule.evaluate(&signals);
        total += outcome.points;
        if let Some(message) = outcome.recommendation {
            trace!(check = ?rule.check, points = outcome.points, "Check not fully met");
            recommendations.push(message.to_string());
        }
    }
    recommendations.truncate(MAX_RECOMMENDATIONS);

    let score = total.min(MAX_SCORE);
    debug!(
        score,
        raw_total = total,
        word_count = signals.word_count,
        "Scored resume text"
    );

    ScoreResult {
        score,
        analysis: signals.to_analysis(),
        recommendations,
    }
}
