//! Shared scorer for the crisis and medical categories.
//!
//! Both categories use the same two-tier scheme: literal keywords lift
//! confidence to at least [`KEYWORD_CONFIDENCE`], regex patterns to at
//! least [`PATTERN_CONFIDENCE`], and more than
//! [`EVIDENCE_VOLUME_THRESHOLD`] recorded matches force
//! [`EVIDENCE_VOLUME_CONFIDENCE`] regardless of which rules fired. The
//! final confidence is compared against the (mode, category) threshold
//! with `>=`.

use crate::moderation::{Action, ModerationResult};
use crate::policy::{
    Category, CategoryRules, PolicyTable, SafetyMode, EVIDENCE_VOLUME_CONFIDENCE,
    EVIDENCE_VOLUME_THRESHOLD, KEYWORD_CONFIDENCE, PATTERN_CONFIDENCE,
};

/// Checks for imminent self-harm or suicide risk.
///
/// This is the highest-priority check and always runs first; a trigger
/// produces a hard block with the crisis template.
pub(crate) fn check_crisis(policy: &PolicyTable, text: &str, mode: SafetyMode) -> ModerationResult {
    let (tags, confidence) = score(policy.crisis(), text);
    let threshold = policy.threshold(mode, Category::Crisis);

    if confidence >= threshold {
        let mut all_tags = vec![Category::Crisis.as_str().to_string()];
        all_tags.extend(tags);
        return ModerationResult::intervene(
            Action::Block,
            all_tags,
            format!("Crisis indicators detected with confidence {:.2}", confidence),
            confidence,
            policy.template(Category::Crisis),
        );
    }

    ModerationResult::allow("No crisis indicators detected", confidence)
}

/// Checks for requests for diagnosis, medication, or treatment guidance.
///
/// Medical requests redirect with the medical template rather than
/// blocking outright.
pub(crate) fn check_medical(policy: &PolicyTable, text: &str, mode: SafetyMode) -> ModerationResult {
    let (tags, confidence) = score(policy.medical(), text);
    let threshold = policy.threshold(mode, Category::Medical);

    if confidence >= threshold {
        let mut all_tags = vec![Category::Medical.as_str().to_string()];
        all_tags.extend(tags);
        return ModerationResult::intervene(
            Action::SafeFallback,
            all_tags,
            format!(
                "Medical request indicators detected with confidence {:.2}",
                confidence
            ),
            confidence,
            policy.template(Category::Medical),
        );
    }

    ModerationResult::allow("No medical requests detected", confidence)
}

/// Scores `text` against one category's keyword and pattern rules.
///
/// Returns the recorded match tags and the running confidence. Confidence
/// only ever rises as evidence accumulates.
fn score(rules: &CategoryRules, text: &str) -> (Vec<String>, f32) {
    let text_lower = text.to_lowercase();
    let mut tags = Vec::new();
    let mut confidence: f32 = 0.0;

    for keyword in rules.keywords.matches(&text_lower) {
        tags.push(keyword.to_string());
        confidence = confidence.max(KEYWORD_CONFIDENCE);
    }

    for pattern in rules.patterns.matches(&text_lower) {
        tags.push(format!("pattern:{}", pattern));
        confidence = confidence.max(PATTERN_CONFIDENCE);
    }

    if tags.len() > EVIDENCE_VOLUME_THRESHOLD {
        confidence = confidence.max(EVIDENCE_VOLUME_CONFIDENCE);
    }

    (tags, confidence)
}
