//! Harmful-content detector over named sub-categories.
//!
//! Unlike the crisis/medical scorer there is no pattern tier and no volume
//! escalation: the first keyword hit within a sub-category records that
//! sub-category's name, and confidence saturates at
//! [`HARMFUL_MATCH_CONFIDENCE`] however many sub-categories fire.

use crate::moderation::{Action, ModerationResult};
use crate::policy::{Category, PolicyTable, SafetyMode, HARMFUL_MATCH_CONFIDENCE};

/// Checks for violence, illegal-activity, and harassment language.
pub(crate) fn check_harmful(policy: &PolicyTable, text: &str, mode: SafetyMode) -> ModerationResult {
    let text_lower = text.to_lowercase();
    let mut triggered = Vec::new();
    let mut confidence: f32 = 0.0;

    for group in policy.harmful() {
        // First hit decides the group; remaining keywords are skipped.
        if group.keywords.is_match(&text_lower) {
            triggered.push(group.name.clone());
            confidence = confidence.max(HARMFUL_MATCH_CONFIDENCE);
        }
    }

    let threshold = policy.threshold(mode, Category::Harmful);
    if confidence >= threshold {
        return ModerationResult::intervene(
            Action::Block,
            triggered.clone(),
            format!(
                "Harmful content detected in categories: {} with confidence {:.2}",
                triggered.join(", "),
                confidence
            ),
            confidence,
            policy.template(Category::Harmful),
        );
    }

    ModerationResult::allow("No harmful content detected", confidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyConfig;

    fn table() -> PolicyTable {
        PolicyTable::new(PolicyConfig::supportive_defaults()).unwrap()
    }

    #[test]
    fn blocks_single_group_match() {
        let result = check_harmful(&table(), "I am going to threaten him", SafetyMode::Balanced);
        assert!(result.should_block());
        assert_eq!(result.tags, vec!["harassment"]);
        assert_eq!(result.confidence, HARMFUL_MATCH_CONFIDENCE);
    }

    #[test]
    fn multiple_groups_saturate_confidence() {
        let result = check_harmful(
            &table(),
            "he told me to steal and threaten them",
            SafetyMode::Balanced,
        );
        assert!(result.should_block());
        // Confidence stays at the saturation point no matter how many
        // sub-categories fire.
        assert_eq!(result.confidence, HARMFUL_MATCH_CONFIDENCE);
        assert!(result.tags.iter().any(|t| t == "illegal"));
        assert!(result.tags.iter().any(|t| t == "harassment"));
    }

    #[test]
    fn group_name_recorded_once_per_group() {
        // Two keywords from the same group still record the group name once.
        let result = check_harmful(&table(), "bully and harass everyone", SafetyMode::Balanced);
        assert!(result.should_block());
        assert_eq!(result.tags, vec!["harassment"]);
    }

    #[test]
    fn group_names_keep_scan_order() {
        let result = check_harmful(
            &table(),
            "they hurt people and steal things",
            SafetyMode::Balanced,
        );
        assert_eq!(result.tags, vec!["violence", "illegal"]);
    }

    #[test]
    fn permissive_mode_allows_but_keeps_score() {
        // The permissive harmful cutoff (0.8) sits above the saturation
        // confidence, so harmful content passes with its score intact.
        let result = check_harmful(&table(), "he told me to steal", SafetyMode::Permissive);
        assert!(result.is_allow());
        assert_eq!(result.confidence, HARMFUL_MATCH_CONFIDENCE);
        assert!(result.tags.is_empty());
    }

    #[test]
    fn strict_mode_blocks_same_text() {
        let result = check_harmful(&table(), "he told me to steal", SafetyMode::Strict);
        assert!(result.should_block());
    }

    #[test]
    fn clean_text_allows_with_zero_confidence() {
        let result = check_harmful(&table(), "thank you for listening", SafetyMode::Balanced);
        assert!(result.is_allow());
        assert_eq!(result.confidence, 0.0);
        assert!(result.tags.is_empty());
    }
}
