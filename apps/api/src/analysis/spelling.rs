use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::allowlist::Allowlist;
use crate::spellcheck::SpellCorrector;

/// Misspelled tokens shown in the finding message; further tokens still make
/// the check fire but are dropped from the text.
const MAX_REPORTED: usize = 5;

pub const SPELLING_PREFIX: &str = "Spelling errors found: ";

/// Collects misspelled tokens and renders at most one finding.
///
/// Tokens come from Unicode word segmentation; only tokens made entirely of
/// alphabetic characters are eligible, so numerals, emails, and mixed tokens
/// are automatically exempt. Eligible tokens are exempted when the allowlist
/// knows them; the rest are misspelled when the corrector's suggestion for
/// the lowercased token is absent or differs from it. Both the allowlist
/// lookup and the corrector comparison are case-folded, so "January" and
/// "january" behave identically.
pub fn check(
    content: &str,
    allowlist: &Allowlist,
    corrector: &dyn SpellCorrector,
) -> Option<String> {
    let misspelled = misspelled_tokens(content, allowlist, corrector);
    if misspelled.is_empty() {
        return None;
    }
    let shown = misspelled
        .iter()
        .take(MAX_REPORTED)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("{SPELLING_PREFIX}{shown}"))
}

/// Misspelled tokens in encounter order, original casing, duplicates kept.
fn misspelled_tokens(
    content: &str,
    allowlist: &Allowlist,
    corrector: &dyn SpellCorrector,
) -> Vec<String> {
    content
        .unicode_words()
        .filter(|token| token.chars().all(char::is_alphabetic))
        .filter(|token| !allowlist.contains(token))
        .filter(|token| {
            let folded = token.to_lowercase();
            corrector.suggest(&folded).as_deref() != Some(folded.as_str())
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spellcheck::EditDistanceCorrector;

    fn corrector() -> EditDistanceCorrector {
        EditDistanceCorrector::new()
    }

    #[test]
    fn test_clean_text_passes() {
        let allowlist = Allowlist::new();
        let text = "My education is extensive and my work experience is strong";
        assert_eq!(check(text, &allowlist, &corrector()), None);
    }

    #[test]
    fn test_misspellings_listed_in_encounter_order() {
        let allowlist = Allowlist::new();
        let finding = check("I recieve the managment report", &allowlist, &corrector()).unwrap();
        assert_eq!(finding, "Spelling errors found: recieve, managment");
    }

    #[test]
    fn test_message_truncated_to_five_tokens() {
        let allowlist = Allowlist::new();
        let text = "recieve managment experiance acheive calender seperately definately";
        let finding = check(text, &allowlist, &corrector()).unwrap();
        assert_eq!(
            finding,
            "Spelling errors found: recieve, managment, experiance, acheive, calender"
        );
    }

    #[test]
    fn test_duplicates_kept() {
        let allowlist = Allowlist::new();
        let finding = check("teh teh", &allowlist, &corrector()).unwrap();
        assert_eq!(finding, "Spelling errors found: teh, teh");
    }

    #[test]
    fn test_allowlisted_term_exempt() {
        // "Kubernetes" is not a dictionary word; only the allowlist saves it.
        let allowlist = Allowlist::new();
        let text = "Kubernetes experience since January";
        assert_eq!(check(text, &allowlist, &corrector()), None);
    }

    #[test]
    fn test_allowlist_exemption_is_case_insensitive() {
        let allowlist = Allowlist::new();
        assert_eq!(check("kubernetes in january", &allowlist, &corrector()), None);
    }

    #[test]
    fn test_non_alphabetic_tokens_exempt() {
        let allowlist = Allowlist::new();
        let text = "abc123 user@example.com 1234567890 v2";
        assert_eq!(check(text, &allowlist, &corrector()), None);
    }

    #[test]
    fn test_empty_content_passes() {
        let allowlist = Allowlist::new();
        assert_eq!(check("", &allowlist, &corrector()), None);
    }
}
