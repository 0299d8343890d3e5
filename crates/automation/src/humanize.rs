//! Identifier → prose transforms used to label detail lines.

/// Split a programmatic identifier into words.
///
/// Word boundaries are lower→upper and digit→upper transitions
/// (`policyNumber`, `address2Line`), the last capital of an acronym run that is
/// followed by lowercase (`HTMLParser` → `HTML`, `Parser`), and any
/// non-alphanumeric character (`customer_id`, `entity-type`).
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // `current` is non-empty only when the previous char was alphanumeric.
        if !current.is_empty() && starts_word(chars[i - 1], c, chars.get(i + 1).copied()) {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn starts_word(prev: char, c: char, next: Option<char>) -> bool {
    if !c.is_uppercase() {
        return false;
    }
    if prev.is_lowercase() || prev.is_numeric() {
        return true;
    }
    prev.is_uppercase() && next.is_some_and(char::is_lowercase)
}

/// Capitalize a single word; words without lowercase letters (acronyms such as
/// `UAT`, `ID`) are kept as written.
fn title_case_word(word: &str) -> String {
    if word.chars().count() > 1 && !word.chars().any(char::is_lowercase) {
        return word.to_string();
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Title-case free text or an identifier: `"production"` → `"Production"`,
/// `"quoteBuilder"` → `"Quote Builder"`.
pub fn titleize(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| title_case_word(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title-case a display value without rewriting it: the first letter of each
/// word is uppercased and every other character, separator and space is kept.
///
/// A word starts at the beginning of the value or after any non-alphanumeric
/// character, so `"eu-west-2"` → `"Eu-West-2"` and `"quote.builder v2.1"` →
/// `"Quote.Builder V2.1"`.
pub fn title_case_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}

/// Label for a data-bag key: [`titleize`], then every standalone word `id`
/// (any casing) becomes `ID`.
///
/// Only whole words are touched, so `acid` stays `Acid` and `idempotencyKey`
/// becomes `Idempotency Key`.
pub fn humanize_label(key: &str) -> String {
    split_words(key)
        .iter()
        .map(|w| {
            if w.eq_ignore_ascii_case("id") {
                "ID".to_string()
            } else {
                title_case_word(w)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
