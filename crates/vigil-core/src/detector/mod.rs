//! Detection passes run by the moderation engine.
//!
//! Each detector is a pure function over the shared policy table: same
//! input, same table, same result, with no state retained between calls.

mod category;
mod escalation;
mod harmful;
mod output;

pub(crate) use category::{check_crisis, check_medical};
pub(crate) use escalation::check_escalation;
pub(crate) use harmful::check_harmful;
pub(crate) use output::check_output;
