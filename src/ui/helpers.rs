//! Shared rendering utilities.

/// Uppercases the first character of a name for display.
///
/// The API's names are lowercase (`"pikachu"`, `"special-attack"`); the
/// screen shows them capitalized, like the original design did with its
/// capitalize text transform. Only the first character changes.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;
    use test_case::test_case;

    #[test_case("pikachu", "Pikachu")]
    #[test_case("special-attack", "Special-attack")]
    #[test_case("", "")]
    #[test_case("X", "X")]
    fn capitalize_cases(input: &str, expected: &str) {
        assert_eq!(capitalize(input), expected);
    }
}
