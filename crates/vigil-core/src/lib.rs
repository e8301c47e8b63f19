//! Vigil core — rule-based content moderation for conversational support
//! systems.
//!
//! The engine inspects user input, model output, and conversation history
//! and decides whether to allow, block, or substitute a canned response.
//! Checks run in fixed priority order (crisis, medical, harmful, then the
//! reply and history checks) and the first non-allow decision wins.
//!
//! The policy table — keyword lists, regex patterns, the mode-by-category
//! threshold matrix, and response templates — is declarative data,
//! validated and compiled once at construction and shared read-only by
//! every check afterwards.
//!
//! ```
//! use vigil_core::{ConversationTurn, Moderator, SafetyMode};
//!
//! let moderator = Moderator::with_defaults(SafetyMode::Balanced);
//!
//! // Pre-generation: only the user's message is available.
//! let decision = moderator.moderate("Can you diagnose my anxiety disorder?", None, None);
//! assert!(decision.is_safe_fallback());
//!
//! // Post-generation: the model reply is checked too.
//! let decision = moderator.moderate(
//!     "I slept badly",
//!     Some("That sounds rough. What kept you up?"),
//!     None,
//! );
//! assert!(decision.is_allow());
//! ```

mod detector;
pub mod engine;
pub mod error;
pub mod moderation;
pub mod policy;

pub use engine::Moderator;
pub use error::{ConfigError, InputError};
pub use moderation::{Action, ConversationTurn, ModerationResult};
pub use policy::{
    Category, CategoryThresholds, HarmfulGroup, MatchStrictness, PolicyConfig, PolicyTable,
    ResponseTemplates, SafetyMode, ThresholdMatrix,
};
