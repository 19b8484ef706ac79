/// Section names every resume is expected to carry, in reporting order.
pub const REQUIRED_HEADINGS: &[&str] = &["Education", "Experience", "Skills"];

pub const HEADINGS_PREFIX: &str = "Missing section headings: ";

/// Case-insensitive substring containment, not heading-structure detection:
/// any occurrence of the word anywhere in the text counts as present.
pub fn check(content: &str) -> Option<String> {
    let folded = content.to_lowercase();
    let missing: Vec<&str> = REQUIRED_HEADINGS
        .iter()
        .copied()
        .filter(|heading| !folded.contains(&heading.to_lowercase()))
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!("{HEADINGS_PREFIX}{}", missing.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_headings_present_passes() {
        assert_eq!(check("Education Experience Skills"), None);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(check("EDUCATION experience SkIlLs"), None);
    }

    #[test]
    fn test_missing_headings_listed_in_order() {
        let finding = check("my education is listed above").unwrap();
        assert_eq!(finding, "Missing section headings: Experience, Skills");
    }

    #[test]
    fn test_empty_content_lists_all_three() {
        let finding = check("").unwrap();
        assert_eq!(
            finding,
            "Missing section headings: Education, Experience, Skills"
        );
    }

    #[test]
    fn test_embedded_occurrence_counts() {
        // Substring containment: "reeducation" satisfies "Education".
        assert_eq!(check("reeducation experience skills"), None);
    }
}
