//! `coverline-automation`: errors raised from rule/workflow execution.
//!
//! An [`AutomationError`] is an ordinary [`coverline_core::Error`] whose detail
//! lines can be derived from its data bag, so automation authors describe a
//! failure once (as structured data) and still get a readable list.

pub mod derive;
pub mod error;
pub mod fields;
pub mod humanize;

pub use derive::DetailDeriver;
pub use error::{AutomationError, AutomationErrorBuilder};
pub use fields::{ConfigError, TitleCaseFields};
pub use humanize::{humanize_label, title_case_value, titleize};
