//! Resume analysis: extract the document's text, then run the three
//! heuristic checks against it in fixed order.

pub mod allowlist;
pub mod contact;
pub mod headings;
pub mod spelling;

use std::path::Path;

use crate::analysis::allowlist::Allowlist;
use crate::extraction::{extract_text, DocumentFormat};
use crate::spellcheck::SpellCorrector;

/// Upper bound on findings returned to the client.
const MAX_MISTAKES: usize = 3;

/// Runs the full analysis for the document at `path`.
///
/// Never fails: extraction degrades to empty content, and empty content
/// simply makes the contact and headings checks fire. Check order is fixed
/// (contact, spelling, headings); checks that find nothing are omitted
/// rather than leaving a gap.
pub fn analyze_resume(
    path: &Path,
    format: DocumentFormat,
    allowlist: &Allowlist,
    corrector: &dyn SpellCorrector,
) -> Vec<String> {
    let content = extract_text(path, format);

    let mut mistakes = Vec::new();
    if let Some(finding) = contact::check(&content) {
        mistakes.push(finding);
    }
    if let Some(finding) = spelling::check(&content, allowlist, corrector) {
        mistakes.push(finding);
    }
    if let Some(finding) = headings::check(&content) {
        mistakes.push(finding);
    }
    mistakes.truncate(MAX_MISTAKES);
    mistakes
}
