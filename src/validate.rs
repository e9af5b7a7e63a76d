//! Input validation shared by the auth and application handlers.

pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const COMMENT_MAX_LENGTH: usize = 150;
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;
pub const EXAM_SCORE_MIN: i32 = 1;
pub const EXAM_SCORE_MAX: i32 = 999;

/// Minimal shape check, mirrors the `x@y.z` rule the registration form uses.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains(char::is_whitespace)
        }
        _ => false,
    }
}

pub fn is_valid_rating(rating: i32) -> bool {
    (RATING_MIN..=RATING_MAX).contains(&rating)
}

pub fn is_valid_exam_score(score: i32) -> bool {
    (EXAM_SCORE_MIN..=EXAM_SCORE_MAX).contains(&score)
}

/// Normalize a Russian phone number to `+7(XXX)XXXXXXX`.
///
/// Accepts `8XXXXXXXXXX`, `7XXXXXXXXXX` and bare ten-digit forms with any
/// punctuation in between. Returns `None` when the digits cannot form a
/// valid number.
pub fn normalize_phone_number(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let national = match digits.len() {
        11 if digits.starts_with('8') || digits.starts_with('7') => digits[1..].to_string(),
        10 => digits,
        _ => return None,
    };

    Some(format!("+7({}){}", &national[..3], &national[3..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_phone_formats() {
        assert_eq!(
            normalize_phone_number("89161234567").as_deref(),
            Some("+7(916)1234567")
        );
        assert_eq!(
            normalize_phone_number("+7 (916) 123-45-67").as_deref(),
            Some("+7(916)1234567")
        );
        assert_eq!(
            normalize_phone_number("9161234567").as_deref(),
            Some("+7(916)1234567")
        );
    }

    #[test]
    fn rejects_malformed_phones() {
        assert_eq!(normalize_phone_number("12345"), None);
        assert_eq!(normalize_phone_number("591612345678"), None);
        assert_eq!(normalize_phone_number(""), None);
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("student@example.com"));
        assert!(is_valid_email("a.b@uni.edu"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("nodot@localhost"));
    }

    #[test]
    fn rating_and_score_bounds() {
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(0));
        assert!(!is_valid_rating(6));
        assert!(is_valid_exam_score(310));
        assert!(!is_valid_exam_score(0));
        assert!(!is_valid_exam_score(1000));
    }
}
