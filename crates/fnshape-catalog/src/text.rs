//! Null-tolerant text shapes.
//!
//! Absent input never raises: containment tests return false, length
//! returns 0, and trim passes the absent value through unchanged. Parse
//! failures fail soft to 0.

use fnshape_core::shape::{FnBiFunction, FnBiPredicate, FnFunction, FnPredicate, FnToIntFunction};

/// Tests whether the text contains `needle`.
///
/// Absent text fails the test instead of raising.
///
/// # Example
///
/// ```
/// use fnshape_catalog::text;
/// use fnshape_core::Predicate;
///
/// let has_needle = text::contains("Mohamed");
/// assert!(has_needle.test(&Some("Mohamed Ali".to_string())));
/// assert!(!has_needle.test(&None));
/// ```
pub fn contains(
    needle: impl Into<String>,
) -> FnPredicate<impl Fn(&Option<String>) -> bool + Send + Sync> {
    let needle = needle.into();
    FnPredicate::new(move |text: &Option<String>| {
        text.as_deref()
            .is_some_and(|text| text.contains(needle.as_str()))
    })
}

/// Tests whether the first text contains the second.
///
/// If either operand is absent the test fails instead of raising.
pub fn contains_pair(
) -> FnBiPredicate<impl Fn(&Option<String>, &Option<String>) -> bool + Send + Sync> {
    FnBiPredicate::new(
        |text: &Option<String>, part: &Option<String>| match (text.as_deref(), part.as_deref()) {
            (Some(text), Some(part)) => text.contains(part),
            _ => false,
        },
    )
}

/// Returns the text length; absent text has length 0.
pub fn length() -> FnFunction<impl Fn(&Option<String>) -> usize + Send + Sync> {
    FnFunction::new(|text: &Option<String>| text.as_deref().map_or(0, str::len))
}

/// Trims surrounding whitespace; absent text passes through unchanged.
pub fn trim() -> FnFunction<impl Fn(&Option<String>) -> Option<String> + Send + Sync> {
    FnFunction::new(|text: &Option<String>| text.as_deref().map(|text| text.trim().to_string()))
}

/// Joins two texts with the given separator.
pub fn concat_with(
    separator: impl Into<String>,
) -> FnBiFunction<impl Fn(&String, &String) -> String + Send + Sync> {
    let separator = separator.into();
    FnBiFunction::new(move |first: &String, second: &String| {
        format!("{}{}{}", first, separator, second)
    })
}

/// Parses the text as an integer, failing soft to 0.
///
/// # Example
///
/// ```
/// use fnshape_catalog::text;
/// use fnshape_core::ToIntFunction;
///
/// let parse = text::parse_or_zero();
/// assert_eq!(parse.apply("123"), 123);
/// assert_eq!(parse.apply("x"), 0);
/// ```
pub fn parse_or_zero() -> FnToIntFunction<impl Fn(&str) -> i64 + Send + Sync> {
    FnToIntFunction::new(|text: &str| text.parse::<i64>().unwrap_or(0))
}
