//! Structured, machine-readable context attached to an error.

use serde::Serialize;

pub use serde_json::Value;

/// Insertion-ordered key → JSON value bag.
pub type Data = serde_json::Map<String, Value>;

/// Convert any serializable value into a data-bag value.
///
/// Never fails: a value that cannot be represented as JSON is recorded as `null`
/// (which detail derivation skips).
pub fn data_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "data value is not representable as JSON; recording null");
        Value::Null
    })
}

/// Build an ordered [`Data`] bag.
///
/// ```
/// use coverline_core::data;
///
/// let bag = data! {
///     "organisationId" => "org-42",
///     "retryCount" => 3,
/// };
/// assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["organisationId", "retryCount"]);
/// ```
#[macro_export]
macro_rules! data {
    () => {
        $crate::Data::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut data = $crate::Data::new();
        $(
            data.insert(::std::string::String::from($key), $crate::data_value(&$value));
        )+
        data
    }};
}
