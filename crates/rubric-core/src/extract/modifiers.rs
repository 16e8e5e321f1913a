use std::collections::BTreeSet;

use crate::rubric::Modifier;

/// Header words that mark every criterion of a question as bonus
const BONUS_WORDS: [&str; 2] = ["bonus", "optional"];

/// Key prefix marking a criterion as numeric-only
const NUMERICAL_PREFIX: &str = "raw";

pub fn is_bonus_header(header: &str) -> bool {
    let lowered = header.to_lowercase();
    BONUS_WORDS.iter().any(|word| lowered.contains(word))
}

pub fn is_numerical_key(key: &str) -> bool {
    key.starts_with(NUMERICAL_PREFIX)
}

/// Modifiers for one criterion; the header and key checks are independent
pub fn classify(header: &str, key: &str) -> BTreeSet<Modifier> {
    let mut modifiers = BTreeSet::new();
    if is_bonus_header(header) {
        modifiers.insert(Modifier::Bonus);
    }
    if is_numerical_key(key) {
        modifiers.insert(Modifier::Numerical);
    }
    modifiers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_header_case_insensitive() {
        assert!(is_bonus_header("BONUS question"));
        assert!(is_bonus_header("Part 3 (Optional)"));
        assert!(!is_bonus_header("Question 1"));
    }

    #[test]
    fn test_numerical_prefix() {
        assert!(is_numerical_key("raw_style"));
        assert!(is_numerical_key("raw"));
        assert!(!is_numerical_key("drawing"));
        assert!(!is_numerical_key("Raw_style"));
    }

    #[test]
    fn test_classify_both() {
        let modifiers = classify("Bonus", "raw_points");
        assert_eq!(
            modifiers.into_iter().collect::<Vec<_>>(),
            vec![Modifier::Bonus, Modifier::Numerical]
        );
    }

    #[test]
    fn test_classify_none() {
        assert!(classify("Question 1", "style").is_empty());
    }
}
