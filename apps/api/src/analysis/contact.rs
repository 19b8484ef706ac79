use once_cell::sync::Lazy;
use regex::Regex;

/// Ten contiguous digits bounded by word boundaries.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{10}\b").unwrap());

/// Minimal email shape: a word/dot/dash run, "@", a word run, ".", a word run.
/// A lightweight heuristic rather than real address validation; false
/// positives and negatives are accepted.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[\w.-]+?@\w+?\.\w+?\b").unwrap());

pub const MISSING_CONTACT: &str = "Missing contact information (phone number or email).";

/// Fires when either a phone number or an email address is absent.
pub fn check(content: &str) -> Option<String> {
    if PHONE_RE.is_match(content) && EMAIL_RE.is_match(content) {
        None
    } else {
        Some(MISSING_CONTACT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_present_passes() {
        assert_eq!(check("Call 1234567890 or mail a@b.co"), None);
    }

    #[test]
    fn test_missing_phone_fires() {
        let finding = check("Reach me at jane@example.com").unwrap();
        assert_eq!(finding, MISSING_CONTACT);
    }

    #[test]
    fn test_missing_email_fires() {
        assert!(check("Phone: 9876543210").is_some());
    }

    #[test]
    fn test_empty_content_fires() {
        assert!(check("").is_some());
    }

    #[test]
    fn test_hyphenated_phone_not_recognized() {
        // The heuristic wants ten contiguous digits; formatted numbers fail it.
        assert!(check("555-123-4567 a@b.co").is_some());
    }

    #[test]
    fn test_eleven_digit_run_not_recognized() {
        assert!(check("12345678901 a@b.co").is_some());
    }
}
