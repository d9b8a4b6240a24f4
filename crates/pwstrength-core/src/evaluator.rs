//! Character-class scoring.
//!
//! Each rule is a membership scan over the candidate's characters. Rules are
//! evaluated independently and never short-circuit one another.

use tracing::debug;

use crate::model::{Assessment, Rule};

/// Minimum number of characters for the length rule.
pub const MIN_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Score a candidate against every rule.
///
/// Any string is valid input. The empty string scores 0 and fails all four
/// rules.
pub fn evaluate(candidate: &str) -> Assessment {
    let failed: Vec<Rule> = Rule::ALL
        .into_iter()
        .filter(|&rule| !check(rule, candidate))
        .collect();
    let score = (Rule::ALL.len() - failed.len()) as u8;

    debug!(score, failed = failed.len(), "evaluated candidate");

    Assessment { score, failed }
}

/// Whether `candidate` satisfies a single rule.
pub fn check(rule: Rule, candidate: &str) -> bool {
    match rule {
        Rule::Length => candidate.chars().count() >= MIN_LENGTH,
        Rule::CaseMix => {
            candidate.chars().any(|c| c.is_ascii_uppercase())
                && candidate.chars().any(|c| c.is_ascii_lowercase())
        }
        Rule::Digit => candidate.chars().any(|c| c.is_ascii_digit()),
        Rule::Special => candidate.chars().any(|c| SPECIAL_CHARS.contains(&c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tier;

    #[test]
    fn empty_fails_everything() {
        let a = evaluate("");
        assert_eq!(a.score, 0);
        assert_eq!(a.failed, Rule::ALL.to_vec());
        assert_eq!(a.deficiencies().len(), 4);
        assert_eq!(a.tier(), Tier::Weak);
    }

    #[test]
    fn lowercase_only_meets_length() {
        let a = evaluate("password");
        assert_eq!(a.score, 1);
        assert_eq!(a.failed, vec![Rule::CaseMix, Rule::Digit, Rule::Special]);
        assert_eq!(a.tier(), Tier::Weak);
    }

    #[test]
    fn missing_special_is_moderate() {
        let a = evaluate("Password1");
        assert_eq!(a.score, 3);
        assert_eq!(
            a.deficiencies(),
            vec!["Password should contain at least one special character (!@#$%^&*)."]
        );
        assert_eq!(a.tier(), Tier::Moderate);
    }

    #[test]
    fn all_rules_is_strong() {
        let a = evaluate("P@ssw0rd");
        assert_eq!(a.score, 4);
        assert!(a.deficiencies().is_empty());
        assert_eq!(a.tier(), Tier::Strong);
    }

    #[test]
    fn deficiencies_follow_rule_order() {
        let a = evaluate("abc");
        assert_eq!(
            a.deficiencies(),
            vec![
                "Password should be at least 8 characters long.",
                "Password should contain both uppercase and lowercase letters (A-Z, a-z).",
                "Password should contain at least one number (0-9).",
                "Password should contain at least one special character (!@#$%^&*).",
            ]
        );
    }

    #[test]
    fn rules_do_not_short_circuit() {
        // Too short, but every other class is present.
        let a = evaluate("aB3!");
        assert_eq!(a.score, 3);
        assert_eq!(a.failed, vec![Rule::Length]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 7 chars, 14 bytes.
        assert!(!check(Rule::Length, "ééééééé"));
        assert!(check(Rule::Length, "éééééééé"));
    }

    #[test]
    fn only_ascii_classes_count() {
        assert!(!check(Rule::CaseMix, "ÀÉÎõü"));
        assert!(!check(Rule::Digit, "٣٤٥"));
        assert!(!check(Rule::Special, "-_+=~?"));
        assert!(check(Rule::Special, "x^y"));
    }

    #[test]
    fn whitespace_is_scored() {
        let a = evaluate("        ");
        assert_eq!(a.score, 1);
        assert!(a.satisfies(Rule::Length));
    }

    #[test]
    fn every_special_char_is_accepted() {
        for &c in SPECIAL_CHARS {
            let candidate = format!("Abcdefg1{c}");
            assert_eq!(evaluate(&candidate).score, 4, "special char {c}");
        }
    }

    #[test]
    fn evaluate_is_idempotent() {
        let first = evaluate("Tr0ub4dor&3");
        let second = evaluate("Tr0ub4dor&3");
        assert_eq!(first, second);
    }

    #[test]
    fn long_input_is_scored() {
        let candidate = "aA1!".repeat(10_000);
        assert_eq!(evaluate(&candidate).score, 4);
    }
}
