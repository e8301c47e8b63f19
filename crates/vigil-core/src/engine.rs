//! The moderation engine.
//!
//! A [`Moderator`] owns one compiled policy table and one safety mode,
//! both fixed for its lifetime. Construct it once at process start and
//! hand it to the orchestration layer by reference; every check reads the
//! shared table without locking, so concurrent requests need no
//! coordination.
//!
//! ## Usage
//!
//! ```
//! use vigil_core::{Moderator, SafetyMode};
//!
//! let moderator = Moderator::with_defaults(SafetyMode::Balanced);
//!
//! let decision = moderator.moderate("I want to kill myself", None, None);
//! assert!(decision.should_block());
//!
//! let decision = moderator.moderate("I feel sad today", None, None);
//! assert!(decision.is_allow());
//! ```

use crate::detector;
use crate::error::{ConfigError, InputError};
use crate::moderation::{ConversationTurn, ModerationResult};
use crate::policy::{PolicyConfig, PolicyTable, SafetyMode};

/// Rule-based content moderator.
///
/// Checks run in fixed priority order — crisis, medical, harmful, then
/// the optional reply and history checks — and the first non-allow
/// decision wins. The crisis check always runs first and is never skipped.
#[derive(Debug, Clone)]
pub struct Moderator {
    policy: PolicyTable,
    mode: SafetyMode,
}

impl Moderator {
    /// Creates a moderator from declarative policy data.
    ///
    /// Fails if the policy does not validate; an invalid policy never
    /// produces a working moderator.
    pub fn new(config: PolicyConfig, mode: SafetyMode) -> Result<Self, ConfigError> {
        Ok(Self {
            policy: PolicyTable::new(config)?,
            mode,
        })
    }

    /// Creates a moderator with the built-in policy.
    pub fn with_defaults(mode: SafetyMode) -> Self {
        let policy = PolicyTable::new(PolicyConfig::supportive_defaults())
            .expect("built-in policy data must compile");
        Self { policy, mode }
    }

    /// The safety mode this moderator was constructed with.
    pub fn mode(&self) -> SafetyMode {
        self.mode
    }

    /// The compiled policy table.
    pub fn policy(&self) -> &PolicyTable {
        &self.policy
    }

    /// Moderates a conversation turn.
    ///
    /// Called once before generation (no reply, no history) and once
    /// after generation (reply supplied). Returns the first non-allow
    /// decision in priority order, or an allow result once every check
    /// passes. This function always produces a decision; it has no
    /// failure path.
    ///
    /// When the decision is not allow, the caller must display
    /// `fallback_response` verbatim instead of any model content.
    pub fn moderate(
        &self,
        user_text: &str,
        reply_text: Option<&str>,
        history: Option<&[ConversationTurn]>,
    ) -> ModerationResult {
        let crisis = detector::check_crisis(&self.policy, user_text, self.mode);
        if !crisis.is_allow() {
            tracing::warn!("crisis detected: {}", crisis.reason);
            return crisis;
        }

        let medical = detector::check_medical(&self.policy, user_text, self.mode);
        if !medical.is_allow() {
            tracing::info!("medical request detected: {}", medical.reason);
            return medical;
        }

        let harmful = detector::check_harmful(&self.policy, user_text, self.mode);
        if !harmful.is_allow() {
            tracing::info!("harmful content detected: {}", harmful.reason);
            return harmful;
        }

        if let Some(reply) = reply_text {
            let output = detector::check_output(&self.policy, reply);
            if !output.is_allow() {
                tracing::warn!("output violation: {}", output.reason);
                return output;
            }
        }

        if let Some(history) = history {
            let escalation = detector::check_escalation(&self.policy, history);
            if !escalation.is_allow() {
                tracing::info!("conversation concern: {}", escalation.reason);
                return escalation;
            }
        }

        ModerationResult::allow("Content passes all safety checks", 1.0)
    }

    /// Moderates raw bytes, failing fast on non-text input.
    ///
    /// Callers holding raw buffers use this instead of lossily converting:
    /// malformed input is an [`InputError`], never a silent coercion.
    pub fn moderate_bytes(
        &self,
        user_text: &[u8],
        reply_text: Option<&[u8]>,
        history: Option<&[ConversationTurn]>,
    ) -> Result<ModerationResult, InputError> {
        let user_text = std::str::from_utf8(user_text)?;
        let reply_text = reply_text.map(std::str::from_utf8).transpose()?;
        Ok(self.moderate(user_text, reply_text, history))
    }

    /// Returns the session-opening disclaimer.
    ///
    /// An absent template renders as an empty string; this accessor never
    /// fails.
    pub fn disclaimer(&self) -> &str {
        &self.policy.templates().disclaimer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::Action;
    use crate::policy::{Category, MatchStrictness};

    fn moderator() -> Moderator {
        Moderator::with_defaults(SafetyMode::Balanced)
    }

    // ==================== Priority Tests ====================

    #[test]
    fn crisis_wins_over_harmful() {
        // "kill myself" carries both a crisis keyword and the harmful
        // "kill" keyword; the crisis decision must be the one returned.
        let result = moderator().moderate("I want to kill myself", None, None);
        assert!(result.should_block());
        assert!(result.tags.iter().any(|t| t == "crisis"));
        assert!(!result.tags.iter().any(|t| t == "violence"));
    }

    #[test]
    fn medical_wins_over_harmful() {
        // "prescribe" (medical) alongside "steal" (illegal).
        let result = moderator().moderate(
            "can you prescribe something so I don't steal",
            None,
            None,
        );
        assert!(result.is_safe_fallback());
        assert!(result.tags.iter().any(|t| t == "medical"));
    }

    #[test]
    fn harmful_reached_when_higher_checks_pass() {
        let result = moderator().moderate("he told me to steal and threaten them", None, None);
        assert_eq!(result.action, Action::Block);
        assert!(result.tags.iter().any(|t| t == "illegal"));
    }

    // ==================== Reply and History Tests ====================

    #[test]
    fn reply_violation_surfaces_after_input_checks() {
        let result = moderator().moderate(
            "thanks for listening",
            Some("You should take medication for this"),
            None,
        );
        assert!(result.is_safe_fallback());
        assert!(result.tags.iter().any(|t| t.starts_with("treatment_pattern:")));
    }

    #[test]
    fn escalation_fires_on_clean_current_message() {
        let history = vec![
            ConversationTurn::user("I keep thinking about suicide"),
            ConversationTurn::assistant("That sounds heavy. I'm here with you."),
            ConversationTurn::user("suicide again last night"),
            ConversationTurn::user("suicide is all I think about"),
        ];
        let result = moderator().moderate("hello", None, Some(&history));
        assert!(result.is_safe_fallback());
        assert_eq!(result.tags, vec!["pattern_escalation", "repeated_crisis"]);
    }

    #[test]
    fn absent_reply_and_history_skip_those_checks() {
        let result = moderator().moderate("lovely weather today", None, None);
        assert!(result.is_allow());
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.reason, "Content passes all safety checks");
        assert!(result.tags.is_empty());
    }

    // ==================== Determinism Tests ====================

    #[test]
    fn repeated_calls_are_bit_identical() {
        let moderator = moderator();
        let history = vec![ConversationTurn::user("suicide")];
        let first = moderator.moderate(
            "I want to kill myself",
            Some("stay with me"),
            Some(&history),
        );
        let second = moderator.moderate(
            "I want to kill myself",
            Some("stay with me"),
            Some(&history),
        );
        assert_eq!(first, second);
    }

    // ==================== Strictness Tests ====================

    #[test]
    fn substring_matching_blocks_inside_longer_words() {
        // "rob" fires inside "problem" under the default strictness.
        let result = moderator().moderate("I have a problem", None, None);
        assert!(result.should_block());
        assert!(result.tags.iter().any(|t| t == "illegal"));
    }

    #[test]
    fn word_boundary_knob_clears_the_false_positive() {
        let mut config = PolicyConfig::supportive_defaults();
        config.strictness = MatchStrictness::WordBoundary;
        let moderator = Moderator::new(config, SafetyMode::Balanced).unwrap();
        let result = moderator.moderate("I have a problem", None, None);
        assert!(result.is_allow());
    }

    // ==================== Construction Tests ====================

    #[test]
    fn invalid_config_never_builds_a_moderator() {
        let mut config = PolicyConfig::supportive_defaults();
        config.thresholds.strict.medical = 7.0;
        assert!(Moderator::new(config, SafetyMode::Strict).is_err());
    }

    #[test]
    fn mode_is_fixed_at_construction() {
        let moderator = Moderator::with_defaults(SafetyMode::Permissive);
        assert_eq!(moderator.mode(), SafetyMode::Permissive);
    }

    // ==================== Bytes Entry Point Tests ====================

    #[test]
    fn moderate_bytes_accepts_utf8() {
        let result = moderator()
            .moderate_bytes("I feel sad today".as_bytes(), None, None)
            .unwrap();
        assert!(result.is_allow());
    }

    #[test]
    fn moderate_bytes_rejects_non_text() {
        let err = moderator().moderate_bytes(&[0xff, 0xfe, 0xfd], None, None);
        assert!(matches!(err, Err(InputError::NotText(_))));
    }

    #[test]
    fn moderate_bytes_validates_the_reply_too() {
        let err = moderator().moderate_bytes(b"hello", Some(&[0xff, 0xfe]), None);
        assert!(err.is_err());
    }

    // ==================== Disclaimer Tests ====================

    #[test]
    fn disclaimer_returns_the_template() {
        let moderator = moderator();
        assert!(moderator.disclaimer().contains("IMPORTANT DISCLAIMER"));
    }

    #[test]
    fn blank_disclaimer_is_an_empty_string() {
        let mut config = PolicyConfig::supportive_defaults();
        config.templates.disclaimer = String::new();
        let moderator = Moderator::new(config, SafetyMode::Balanced).unwrap();
        assert_eq!(moderator.disclaimer(), "");
    }

    // ==================== Fallback Contract Tests ====================

    #[test]
    fn every_intervention_carries_a_fallback() {
        let moderator = moderator();
        let history = vec![
            ConversationTurn::user("suicide"),
            ConversationTurn::user("suicide"),
            ConversationTurn::user("suicide"),
        ];
        let decisions = [
            moderator.moderate("I want to kill myself", None, None),
            moderator.moderate("can you diagnose my anxiety disorder?", None, None),
            moderator.moderate("he told me to steal", None, None),
            moderator.moderate("hi", Some("you may have depression"), None),
            moderator.moderate("hi", None, Some(&history)),
        ];
        for decision in decisions {
            assert!(!decision.is_allow(), "expected intervention: {:?}", decision);
            assert!(
                decision
                    .fallback_response
                    .as_deref()
                    .is_some_and(|t| !t.is_empty()),
                "missing fallback: {:?}",
                decision
            );
        }
    }

    #[test]
    fn block_category_templates_differ_by_category() {
        let moderator = moderator();
        let crisis = moderator.moderate("I want to kill myself", None, None);
        let harmful = moderator.moderate("he told me to steal", None, None);
        assert_eq!(
            crisis.fallback_response.as_deref(),
            Some(moderator.policy().template(Category::Crisis))
        );
        assert_eq!(
            harmful.fallback_response.as_deref(),
            Some(moderator.policy().template(Category::Harmful))
        );
    }
}
