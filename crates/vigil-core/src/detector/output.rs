//! Compliance checker for model-generated replies.
//!
//! Scans the reply (never the user's message) for medical-boundary
//! leakage: medical keywords appearing verbatim, diagnostic phrasing, and
//! treatment recommendations. There is no threshold; any single hit from
//! any tier is a violation.

use crate::moderation::{Action, ModerationResult};
use crate::policy::{Category, PolicyTable, OUTPUT_VIOLATION_CONFIDENCE};

/// Checks a model reply for medical advice the system must not give.
pub(crate) fn check_output(policy: &PolicyTable, reply: &str) -> ModerationResult {
    let reply_lower = reply.to_lowercase();
    let mut violations = Vec::new();

    for keyword in policy.medical().keywords.matches(&reply_lower) {
        violations.push(format!("medical:{}", keyword));
    }

    for pattern in policy.diagnosis_patterns().matches(&reply_lower) {
        violations.push(format!("diagnosis_pattern:{}", pattern));
    }

    for pattern in policy.treatment_patterns().matches(&reply_lower) {
        violations.push(format!("treatment_pattern:{}", pattern));
    }

    if !violations.is_empty() {
        let reason = format!(
            "Model output contains medical advice or diagnosis: {}",
            violations.join(", ")
        );
        return ModerationResult::intervene(
            Action::SafeFallback,
            violations,
            reason,
            OUTPUT_VIOLATION_CONFIDENCE,
            policy.template(Category::Medical),
        );
    }

    ModerationResult::allow("Model output is appropriate", 1.0)
}
