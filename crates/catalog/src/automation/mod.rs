//! Failures raised while running automations.
//!
//! These are [`AutomationError`](coverline_automation::AutomationError)s: most
//! derive their detail lines from the data bag; ones whose bag carries raw
//! identifiers or provider payloads keep details hand-written.

pub mod providers;
pub mod rules;
