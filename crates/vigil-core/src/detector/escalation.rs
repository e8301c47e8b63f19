//! Escalation checker over conversation history.
//!
//! A single message can fall under the per-message crisis threshold while
//! the trend across turns is concerning. This check counts (user turn,
//! crisis keyword) occurrences across the supplied history; a turn
//! containing two different crisis keywords counts twice. The engine
//! keeps no state of its own; callers furnish the history every call.

use crate::moderation::{Action, ConversationTurn, ModerationResult};
use crate::policy::{Category, PolicyTable, ESCALATION_CONFIDENCE, ESCALATION_SIGNAL_FLOOR};

/// Checks the conversation history for a repeated-crisis pattern.
///
/// Triggers a redirect rather than a hard block: a pattern of concerning
/// language warrants steering toward help, not an abrupt refusal.
pub(crate) fn check_escalation(
    policy: &PolicyTable,
    history: &[ConversationTurn],
) -> ModerationResult {
    let mut crisis_signals = 0usize;

    for turn in history.iter().filter(|turn| turn.is_user()) {
        let content_lower = turn.content.to_lowercase();
        crisis_signals += policy.crisis().keywords.matches(&content_lower).len();
    }

    if crisis_signals >= ESCALATION_SIGNAL_FLOOR {
        return ModerationResult::intervene(
            Action::SafeFallback,
            vec!["pattern_escalation".to_string(), "repeated_crisis".to_string()],
            "Escalating crisis pattern detected",
            ESCALATION_CONFIDENCE,
            policy.template(Category::Crisis),
        );
    }

    ModerationResult::allow("Conversation pattern is safe", 1.0)
}
