use serde::Serialize;

use super::generator::SYMBOLS;

/// Heuristic strength of a password, 0-100
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    pub score: u32,
    pub length: usize,
    pub classes: u32, // lower, upper, digit, symbol
    pub details: Vec<String>,
}

pub fn analyze_strength(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let mut details = Vec::new();

    let length_points = if length >= 16 {
        details.push("Good length".to_string());
        25
    } else if length >= 12 {
        details.push("Okay length".to_string());
        15
    } else {
        details.push("Too short".to_string());
        5
    };

    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| SYMBOLS.contains(c));

    let classes = [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|&&present| present)
        .count() as u32;
    details.push(format!("Character variety: {} types", classes));

    StrengthReport {
        score: (length_points + classes * 15).min(100),
        length,
        classes,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_single_class() {
        let report = analyze_strength("abc");
        assert_eq!(report.score, 20); // 5 + 15
        assert_eq!(report.details[0], "Too short");
    }

    #[test]
    fn test_okay_length() {
        let report = analyze_strength("abcdefGH1234");
        assert_eq!(report.length, 12);
        assert_eq!(report.classes, 3);
        assert_eq!(report.score, 60); // 15 + 45
    }

    #[test]
    fn test_strong_password() {
        let report = analyze_strength("Abcdefgh1234!@#$");
        assert_eq!(report.classes, 4);
        assert_eq!(report.score, 85); // 25 + 60
        assert_eq!(report.details[1], "Character variety: 4 types");
    }

    #[test]
    fn test_empty_password() {
        let report = analyze_strength("");
        assert_eq!(report.score, 5);
        assert_eq!(report.classes, 0);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let report = analyze_strength("ééééééééééééééé"); // 15 chars, 30 bytes
        assert_eq!(report.length, 15);
        assert_eq!(report.details[0], "Okay length");
    }

    #[test]
    fn test_unknown_symbol_not_counted() {
        let report = analyze_strength("password~");
        assert_eq!(report.classes, 1);
    }
}
