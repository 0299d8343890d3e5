//! `coverline-catalog` is the error catalog of the quoting/policy backend.
//!
//! One module per category, each holding:
//! - a `codes` module with every [`ErrorCode`] the category may emit, and
//! - free factory functions building the error for one business situation.
//!
//! Codes are namespaced by [`Category::prefix`]. The grouping is organizational
//! only; the factories are plain functions over their own parameters.

pub mod automation;
pub mod category;
pub mod document;
pub mod organisation;
pub mod payment;
pub mod policy;
pub mod quote;
pub mod user;

pub use category::Category;

use coverline_core::ErrorCode;

/// Every code in the catalog, grouped by category in [`Category::ALL`] order.
pub fn all_codes() -> impl Iterator<Item = &'static ErrorCode> {
    Category::ALL.into_iter().flat_map(|category| category.codes().iter())
}

/// Category whose code list contains `code`.
pub fn category_of(code: &ErrorCode) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|category| category.codes().contains(code))
}
