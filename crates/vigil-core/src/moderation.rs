//! Moderation decisions returned by the engine.
//!
//! A [`ModerationResult`] is produced fresh for every check. Non-allow
//! results always carry a fallback response; the host is expected to show
//! it verbatim in place of any model-generated content.

use serde::{Deserialize, Serialize};

/// Action to take on a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Allow the content through unchanged.
    #[default]
    Allow,
    /// Refuse outright; no model content may be shown.
    Block,
    /// Replace the model content with a canned fallback response.
    SafeFallback,
}

impl Action {
    /// Returns a human-readable name for this action.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Allow => "Allow",
            Action::Block => "Block",
            Action::SafeFallback => "Safe Fallback",
        }
    }
}

/// Result of a moderation check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResult {
    /// The action to take.
    pub action: Action,
    /// Labels describing what matched: category names, matched keywords,
    /// and `pattern:`-prefixed regex hits.
    pub tags: Vec<String>,
    /// Human-readable explanation of the decision.
    pub reason: String,
    /// Confidence in the decision (0.0 to 1.0).
    pub confidence: f32,
    /// Response to show instead of model content when action is not Allow.
    pub fallback_response: Option<String>,
}

impl ModerationResult {
    /// Creates an allow result with the given reason and computed confidence.
    ///
    /// The confidence of an allow result is kept rather than discarded so
    /// callers can inspect how close a check came to triggering.
    pub fn allow(reason: impl Into<String>, confidence: f32) -> Self {
        Self {
            action: Action::Allow,
            tags: Vec::new(),
            reason: reason.into(),
            confidence: confidence.clamp(0.0, 1.0),
            fallback_response: None,
        }
    }

    /// Creates a non-allow result carrying the fallback response to display.
    pub fn intervene(
        action: Action,
        tags: Vec<String>,
        reason: impl Into<String>,
        confidence: f32,
        fallback_response: impl Into<String>,
    ) -> Self {
        debug_assert!(action != Action::Allow, "intervene requires a non-allow action");
        Self {
            action,
            tags,
            reason: reason.into(),
            confidence: confidence.clamp(0.0, 1.0),
            fallback_response: Some(fallback_response.into()),
        }
    }

    /// Returns true if the action is Allow.
    pub fn is_allow(&self) -> bool {
        self.action == Action::Allow
    }

    /// Returns true if the action is Block.
    pub fn should_block(&self) -> bool {
        self.action == Action::Block
    }

    /// Returns true if the action is SafeFallback.
    pub fn is_safe_fallback(&self) -> bool {
        self.action == Action::SafeFallback
    }
}

/// A single turn of conversation history supplied by the caller.
///
/// The engine retains no memory between calls; callers furnish whatever
/// history they want considered on each invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Role that produced the turn ("user", "assistant", ...).
    pub role: String,
    /// Text content of the turn.
    pub content: String,
}

impl ConversationTurn {
    /// Creates a new conversation turn.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Returns true if this turn was authored by the end user.
    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Action Tests ====================

    #[test]
    fn action_names() {
        assert_eq!(Action::Allow.name(), "Allow");
        assert_eq!(Action::Block.name(), "Block");
        assert_eq!(Action::SafeFallback.name(), "Safe Fallback");
    }

    #[test]
    fn action_default_is_allow() {
        assert_eq!(Action::default(), Action::Allow);
    }

    #[test]
    fn action_serialization() {
        assert_eq!(
            serde_json::to_string(&Action::SafeFallback).unwrap(),
            "\"safe_fallback\""
        );
        assert_eq!(serde_json::to_string(&Action::Block).unwrap(), "\"block\"");
    }

    // ==================== ModerationResult Tests ====================

    #[test]
    fn allow_result_has_no_fallback() {
        let result = ModerationResult::allow("No indicators detected", 0.4);
        assert!(result.is_allow());
        assert!(result.tags.is_empty());
        assert_eq!(result.confidence, 0.4);
        assert!(result.fallback_response.is_none());
    }

    #[test]
    fn intervene_result_carries_fallback() {
        let result = ModerationResult::intervene(
            Action::Block,
            vec!["crisis".to_string()],
            "Crisis indicators detected",
            0.85,
            "Please reach out for help.",
        );
        assert!(result.should_block());
        assert_eq!(
            result.fallback_response.as_deref(),
            Some("Please reach out for help.")
        );
    }

    #[test]
    fn confidence_is_clamped() {
        let result = ModerationResult::allow("ok", 1.5);
        assert_eq!(result.confidence, 1.0);

        let result = ModerationResult::allow("ok", -0.5);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn result_serialization_round_trip() {
        let result = ModerationResult::intervene(
            Action::SafeFallback,
            vec!["medical".to_string(), "diagnose".to_string()],
            "Medical request indicators detected",
            0.7,
            "Please consult a professional.",
        );
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: ModerationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }

    // ==================== ConversationTurn Tests ====================

    #[test]
    fn turn_constructors_set_roles() {
        assert!(ConversationTurn::user("hello").is_user());
        assert!(!ConversationTurn::assistant("hi there").is_user());
        assert!(!ConversationTurn::new("system", "prompt").is_user());
    }
}
