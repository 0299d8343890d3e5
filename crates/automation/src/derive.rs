//! Data bag → detail lines.

use coverline_core::{Data, Value};

use crate::fields::TitleCaseFields;
use crate::humanize::{humanize_label, title_case_value};

/// Derives human-readable detail lines from a data bag.
///
/// For each entry, in insertion order:
/// 1. `null` values are skipped;
/// 2. string values of allow-listed keys are title-cased in place (no
///    characters added or dropped), every other value uses
///    its natural representation (strings raw, numbers/booleans as written,
///    arrays/objects as compact JSON);
/// 3. the line reads `"{humanized key}: {value}"`.
///
/// Derivation is total: it never fails for any bag.
#[derive(Debug, Clone, Copy)]
pub struct DetailDeriver<'a> {
    fields: &'a TitleCaseFields,
}

impl<'a> DetailDeriver<'a> {
    pub fn new(fields: &'a TitleCaseFields) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'a TitleCaseFields {
        self.fields
    }

    /// Line for one entry, `None` for a `null` value.
    pub fn line(&self, key: &str, value: &Value) -> Option<String> {
        let rendered = match value {
            Value::Null => return None,
            Value::String(s) if self.fields.contains(key) => title_case_value(s),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Some(format!("{}: {}", humanize_label(key), rendered))
    }

    pub fn derive(&self, data: &Data) -> Vec<String> {
        data.iter()
            .filter_map(|(key, value)| self.line(key, value))
            .collect()
    }

    /// Derived lines followed by `explicit`. Without a bag, `explicit` is
    /// returned unchanged.
    pub fn merge(&self, data: Option<&Data>, explicit: Option<Vec<String>>) -> Option<Vec<String>> {
        let Some(data) = data else {
            return explicit;
        };

        let mut lines = self.derive(data);
        lines.extend(explicit.into_iter().flatten());
        Some(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverline_core::data;
    use proptest::prelude::*;
    use serde_json::json;

    fn deriver_lines(data: &Data) -> Vec<String> {
        let fields = TitleCaseFields::builtin();
        DetailDeriver::new(&fields).derive(data)
    }

    #[test]
    fn labels_keys_and_keeps_plain_values() {
        let lines = deriver_lines(&data! {
            "organisationId" => "7d3c",
            "policyNumber" => "POL-1",
        });
        assert_eq!(lines, vec!["Organisation ID: 7d3c", "Policy Number: POL-1"]);
    }

    #[test]
    fn title_cases_allow_listed_string_values() {
        let lines = deriver_lines(&data! {
            "environment" => "production",
            "EntityEnvironment" => "sandbox",
            "feature" => "quoteBuilder",
            "product" => "home contents",
        });
        assert_eq!(
            lines,
            vec![
                "Environment: Production",
                "Entity Environment: Sandbox",
                "Feature: QuoteBuilder",
                "Product: home contents",
            ]
        );
    }

    #[test]
    fn title_casing_keeps_separators_in_values() {
        let lines = deriver_lines(&data! {
            "environment" => "pre-production",
            "entityEnvironment" => "eu-west-2",
            "feature" => "quote.builder v2.1",
        });
        assert_eq!(
            lines,
            vec![
                "Environment: Pre-Production",
                "Entity Environment: Eu-West-2",
                "Feature: Quote.Builder V2.1",
            ]
        );
    }

    #[test]
    fn allow_listed_non_string_values_are_not_title_cased() {
        let lines = deriver_lines(&data! { "feature" => json!(["a", "b"]), "environment" => 3 });
        assert_eq!(lines, vec![r#"Feature: ["a","b"]"#, "Environment: 3"]);
    }

    #[test]
    fn nulls_are_skipped() {
        let lines = deriver_lines(&data! {
            "customerId" => Option::<&str>::None,
            "policyNumber" => "POL-1",
        });
        assert_eq!(lines, vec!["Policy Number: POL-1"]);
    }

    #[test]
    fn non_string_values_use_natural_representation() {
        let lines = deriver_lines(&data! {
            "retryCount" => 3,
            "premium" => 12.5,
            "autoRenew" => false,
            "limits" => json!({ "max": 10 }),
        });
        assert_eq!(
            lines,
            vec![
                "Retry Count: 3",
                "Premium: 12.5",
                "Auto Renew: false",
                r#"Limits: {"max":10}"#,
            ]
        );
    }

    #[test]
    fn injected_fields_replace_the_allow_list() {
        let fields = TitleCaseFields::empty().with_field("region").unwrap();
        let deriver = DetailDeriver::new(&fields);
        let lines = deriver.derive(&data! { "region" => "north west", "environment" => "production" });
        assert_eq!(lines, vec!["Region: North West", "Environment: production"]);
    }

    #[test]
    fn merge_appends_explicit_details_after_derived_lines() {
        let fields = TitleCaseFields::builtin();
        let deriver = DetailDeriver::new(&fields);
        let bag = data! { "quoteId" => "q-9" };

        let merged = deriver.merge(Some(&bag), Some(vec!["Contact support.".to_string()]));
        assert_eq!(
            merged,
            Some(vec!["Quote ID: q-9".to_string(), "Contact support.".to_string()])
        );
    }

    #[test]
    fn merge_without_data_passes_explicit_through() {
        let fields = TitleCaseFields::builtin();
        let deriver = DetailDeriver::new(&fields);
        assert_eq!(deriver.merge(None, None), None);
        assert_eq!(
            deriver.merge(None, Some(vec!["x".to_string()])),
            Some(vec!["x".to_string()])
        );
        assert_eq!(deriver.merge(Some(&Data::new()), None), Some(Vec::new()));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: merged length = non-null entries + explicit details, in that order.
        #[test]
        fn merged_details_count_and_order(
            entries in prop::collection::vec(
                ("[a-z][A-Za-z]{0,12}", prop::option::of("[a-z ]{0,12}")),
                0..8,
            ),
            explicit in prop::collection::vec("[A-Za-z .]{1,20}", 0..4),
        ) {
            let mut bag = Data::new();
            for (key, value) in &entries {
                bag.insert(key.clone(), value.clone().map(Value::from).unwrap_or(Value::Null));
            }
            let non_null = bag.values().filter(|v| !v.is_null()).count();

            let fields = TitleCaseFields::builtin();
            let merged = DetailDeriver::new(&fields)
                .merge(Some(&bag), Some(explicit.clone()))
                .unwrap();

            prop_assert_eq!(merged.len(), non_null + explicit.len());
            prop_assert_eq!(&merged[non_null..], &explicit[..]);
        }
    }
}
