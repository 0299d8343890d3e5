//! Catalog taxonomy.

use serde::{Deserialize, Serialize};

use coverline_core::ErrorCode;

/// Error category; each one owns a code namespace.
///
/// Nested namespaces (`policy.renewal`, `automation.providers`) are categories of
/// their own so that a code always belongs to exactly one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Quote,
    Policy,
    PolicyRenewal,
    Payment,
    User,
    Organisation,
    Document,
    AutomationProviders,
    AutomationRules,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Quote,
        Category::Policy,
        Category::PolicyRenewal,
        Category::Payment,
        Category::User,
        Category::Organisation,
        Category::Document,
        Category::AutomationProviders,
        Category::AutomationRules,
    ];

    /// Code namespace, e.g. `"policy.renewal"`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Category::Quote => "quote",
            Category::Policy => "policy",
            Category::PolicyRenewal => "policy.renewal",
            Category::Payment => "payment",
            Category::User => "user",
            Category::Organisation => "organisation",
            Category::Document => "document",
            Category::AutomationProviders => "automation.providers",
            Category::AutomationRules => "automation.rules",
        }
    }

    pub fn codes(self) -> &'static [ErrorCode] {
        match self {
            Category::Quote => &crate::quote::codes::ALL,
            Category::Policy => &crate::policy::codes::ALL,
            Category::PolicyRenewal => &crate::policy::renewal::codes::ALL,
            Category::Payment => &crate::payment::codes::ALL,
            Category::User => &crate::user::codes::ALL,
            Category::Organisation => &crate::organisation::codes::ALL,
            Category::Document => &crate::document::codes::ALL,
            Category::AutomationProviders => &crate::automation::providers::codes::ALL,
            Category::AutomationRules => &crate::automation::rules::codes::ALL,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_codes_under_its_prefix() {
        for category in Category::ALL {
            assert!(!category.codes().is_empty(), "{category} has no codes");
            for code in category.codes() {
                assert!(
                    code.is_within(category.prefix()),
                    "{code} is outside the {category} namespace"
                );
            }
        }
    }

    #[test]
    fn nested_namespaces_do_not_leak_into_parents() {
        for code in Category::Policy.codes() {
            assert!(!code.is_within(Category::PolicyRenewal.prefix()), "{code}");
        }
    }

    #[test]
    fn category_of_finds_owner() {
        let code = &crate::policy::renewal::codes::NO_POLICY_EXISTS;
        assert_eq!(crate::category_of(code), Some(Category::PolicyRenewal));

        let unknown = ErrorCode::new("unknown.code");
        assert_eq!(crate::category_of(&unknown), None);
    }
}
