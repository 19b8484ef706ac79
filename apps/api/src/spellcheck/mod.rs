//! Dictionary-backed spell correction.
//!
//! The analyzer only needs one capability: "suggest the best correction for a
//! token". That capability is a trait so any dictionary backend can be swapped
//! in without touching the checks. The default backend is
//! `EditDistanceCorrector`, a word-frequency dictionary with candidate
//! generation at edit distance 1 and 2.
//!
//! Carried in `AppState` as `Arc<dyn SpellCorrector>`.

use std::collections::HashMap;

use strsim::jaro_winkler;

/// Word-frequency dictionary embedded at compile time.
/// One `word count` pair per line, lowercase, most frequent words first.
const DICTIONARY: &str = include_str!("../../assets/dictionary.txt");

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Suggests corrections for single tokens.
///
/// Callers pass lowercase tokens. `Some(token)` means the token is already a
/// known word; `Some(other)` is the best correction; `None` means the backend
/// has no candidate at all.
pub trait SpellCorrector: Send + Sync {
    fn suggest(&self, token: &str) -> Option<String>;
}

/// Default corrector: frequency dictionary plus edit-distance candidates.
///
/// An unknown token's candidates are every dictionary word within edit
/// distance 1 (deletes, transposes, replaces, inserts over `a..z`); distance 2
/// is tried only when distance 1 yields nothing. The winner is the candidate
/// with the highest corpus frequency, ties broken by Jaro-Winkler similarity
/// to the input.
pub struct EditDistanceCorrector {
    frequencies: HashMap<String, u64>,
}

impl EditDistanceCorrector {
    pub fn new() -> Self {
        Self::from_dictionary(DICTIONARY)
    }

    /// Builds a corrector from `word count` lines. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn from_dictionary(text: &str) -> Self {
        let mut frequencies = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            let (Some(word), Some(count)) = (parts.next(), parts.next()) else {
                continue;
            };
            if let Ok(count) = count.parse::<u64>() {
                frequencies.insert(word.to_string(), count);
            }
        }
        Self { frequencies }
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    fn known(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    /// Picks the best dictionary word out of `candidates`: highest frequency
    /// wins, ties go to the candidate closest to the original token.
    fn best_match<I>(&self, token: &str, candidates: I) -> Option<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut best: Option<(String, u64, f64)> = None;
        for candidate in candidates {
            let Some(&frequency) = self.frequencies.get(&candidate) else {
                continue;
            };
            let similarity = jaro_winkler(token, &candidate);
            let better = match &best {
                Some((_, best_freq, best_sim)) => {
                    frequency > *best_freq || (frequency == *best_freq && similarity > *best_sim)
                }
                None => true,
            };
            if better {
                best = Some((candidate, frequency, similarity));
            }
        }
        best.map(|(word, _, _)| word)
    }
}

impl Default for EditDistanceCorrector {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellCorrector for EditDistanceCorrector {
    fn suggest(&self, token: &str) -> Option<String> {
        if self.known(token) {
            return Some(token.to_string());
        }
        let distance_one = edits1(token);
        if let Some(best) = self.best_match(token, distance_one.iter().cloned()) {
            return Some(best);
        }
        self.best_match(token, distance_one.iter().flat_map(|edit| edits1(edit)))
    }
}

/// Every string at edit distance 1 from `word`.
fn edits1(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut edits = Vec::with_capacity(2 * n + 2 * 26 * (n + 1));

    // deletes
    for i in 0..n {
        let mut edit: String = chars[..i].iter().collect();
        edit.extend(&chars[i + 1..]);
        edits.push(edit);
    }
    // transposes
    for i in 0..n.saturating_sub(1) {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        edits.push(swapped.into_iter().collect());
    }
    // replaces
    for i in 0..n {
        for c in ALPHABET.chars() {
            if c == chars[i] {
                continue;
            }
            let mut replaced = chars.clone();
            replaced[i] = c;
            edits.push(replaced.iter().collect());
        }
    }
    // inserts
    for i in 0..=n {
        for c in ALPHABET.chars() {
            let mut edit: String = chars[..i].iter().collect();
            edit.push(c);
            edit.extend(&chars[i..]);
            edits.push(edit);
        }
    }

    edits
}
