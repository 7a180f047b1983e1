//! Title case detection and protection
//!
//! BibTeX styles re-case titles, so words that must keep their
//! capitalization (proper nouns, acronyms) are wrapped in braces. Whether
//! wrapping is wanted depends on whether the provider returned the title
//! in sentence case or already in title case; `detect_title_case` decides
//! that with a majority heuristic.

use lazy_static::lazy_static;
use regex::Regex;

/// Protection mode for titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProtectMode {
    /// Protect iff the title is not detected as already title-cased.
    #[default]
    Auto,
    /// Assume sentence case; protect every capitalized word.
    Always,
    /// Leave the title as returned, protecting only known proper nouns.
    Never,
}

/// Words that must never be re-cased by a downstream style, protected in
/// every mode.
const PROTECTED_WORDS: &[&str] = &[
    "Schrödinger",
    "Hamiltonian",
    "Lindblad",
    "Bloch",
    "Rydberg",
    "Markovian",
    "Gaussian",
];

/// Words commonly left lowercase in title case; they carry no evidence
/// either way.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "nor", "for", "yet", "so", "as", "at", "by", "in",
    "of", "on", "to", "up", "via", "with", "from", "into", "onto", "over", "under",
];

lazy_static! {
    /// A word carrying a capital letter. Match context supplies the
    /// "not at string start, not already braced" conditions the regex
    /// engine cannot express without lookaround.
    static ref RX_CAPITAL_WORD: Regex = Regex::new(r"\w*[A-Z]\w+").unwrap();

    static ref RX_PROTECTED: Vec<Regex> = PROTECTED_WORDS
        .iter()
        .map(|word| Regex::new(&format!(r"\b{}\b", regex::escape(word))).unwrap())
        .collect();
}

/// Decide whether a title is already in title case.
///
/// Skips the first word, short words (three letters or fewer), function
/// words, and known protected words; the rest vote title-cased (first
/// letter upper, rest lower) vs other-cased. Title case wins only on a
/// majority with more than two title-cased words, so short titles never
/// trigger a false positive.
pub fn detect_title_case(title: &str) -> bool {
    let mut title_cased = 0usize;
    let mut other_cased = 0usize;
    for word in title.split_whitespace().skip(1) {
        let core = word.trim_matches(|c: char| !c.is_alphanumeric());
        let letters: Vec<char> = core.chars().filter(|c| c.is_alphabetic()).collect();
        if letters.len() <= 3 {
            continue;
        }
        if FUNCTION_WORDS.contains(&core.to_lowercase().as_str()) {
            continue;
        }
        if PROTECTED_WORDS.contains(&core) {
            continue;
        }
        if letters[0].is_uppercase() && letters[1..].iter().all(|c| c.is_lowercase()) {
            title_cased += 1;
        } else {
            other_cased += 1;
        }
    }
    title_cased > other_cased && title_cased > 2
}

/// Protect case-sensitive substrings of a title.
///
/// Embedded newlines become escaped line breaks. In `Always` mode, or in
/// `Auto` mode when the title is judged sentence-case, every word
/// carrying a capital letter is brace-wrapped (leftmost first, skipping
/// the string-initial word and spans already braced). Known proper nouns
/// are wrapped regardless of mode.
pub fn protect(title: &str, mode: ProtectMode) -> String {
    let mut result = title.replace('\n', "\\\\");
    let wrap_capitals = match mode {
        ProtectMode::Always => true,
        ProtectMode::Never => false,
        ProtectMode::Auto => !detect_title_case(&result),
    };
    if wrap_capitals {
        result = brace_matches(&result, &RX_CAPITAL_WORD);
    }
    for rx in RX_PROTECTED.iter() {
        result = brace_matches(&result, rx);
    }
    result
}

/// Wrap every match of `rx` in braces, skipping matches at the start of
/// the string and matches already enclosed in braces.
fn brace_matches(s: &str, rx: &Regex) -> String {
    let mut result = String::with_capacity(s.len() + 16);
    let mut pos = 0;
    for m in rx.find_iter(s) {
        let preceded_by_brace = s[..m.start()].ends_with('{');
        let followed_by_brace = s[m.end()..].starts_with('}');
        result.push_str(&s[pos..m.start()]);
        if m.start() == 0 || preceded_by_brace || followed_by_brace {
            result.push_str(m.as_str());
        } else {
            result.push('{');
            result.push_str(m.as_str());
            result.push('}');
        }
        pos = m.end();
    }
    result.push_str(&s[pos..]);
    result
}
