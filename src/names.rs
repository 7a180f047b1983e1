//! Person name parsing and normalization
//!
//! Decomposes a free-text name into (von, last, jr, first) parts and
//! renders either a canonical "Last, First" display form or an
//! ASCII-folded fragment for cite key generation.

use lazy_static::lazy_static;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// Particles that are absorbed into the last name span when they precede
/// it in the comma-free "First von Last" form.
const PARTICLES: &[&str] = &[
    "von", "van", "de", "der", "den", "di", "da", "del", "la", "le", "du",
];

lazy_static! {
    /// Conventional ASCII spellings applied before the general
    /// transliteration, for names where the two diverge (German umlauts
    /// conventionally expand to a trailing `e`).
    static ref ASCII_OVERRIDES: Vec<(&'static str, &'static str)> = vec![
        ("Kühn", "Kuehn"),
        ("Glück", "Glueck"),
        ("Jäger", "Jaeger"),
    ];

    /// Single-character replacements for letters and marks that NFKD
    /// decomposition cannot reduce to ASCII.
    static ref FOLD: HashMap<char, &'static str> = {
        let mut m = HashMap::new();
        m.insert('ø', "o");
        m.insert('Ø', "O");
        m.insert('æ', "ae");
        m.insert('Æ', "AE");
        m.insert('œ', "oe");
        m.insert('Œ', "OE");
        m.insert('ß', "ss");
        m.insert('ð', "d");
        m.insert('Ð', "D");
        m.insert('þ', "th");
        m.insert('Þ', "Th");
        m.insert('đ', "d");
        m.insert('Đ', "D");
        m.insert('ł', "l");
        m.insert('Ł', "L");
        m.insert('ı', "i");
        m.insert('¯', "-");
        m
    };
}

/// A parsed person name. Each part is an ordered token sequence; `last`
/// is non-empty whenever the input string was non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    pub first: Vec<String>,
    pub von: Vec<String>,
    pub last: Vec<String>,
    pub jr: Vec<String>,
}

impl PersonName {
    /// Parse a raw name string.
    ///
    /// Supported forms: "First Last", "First von Last",
    /// "von Last, First" and "von Last, Jr, First". In the comma-free
    /// form the final token is the last name; a particle run before it
    /// extends the last name span.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        let name = match parts.len() {
            1 => Self::parse_no_comma(parts[0]),
            2 => {
                let (von, last) = split_von_last(parts[0]);
                Self {
                    first: tokens(parts[1]),
                    von,
                    last,
                    jr: Vec::new(),
                }
            }
            _ => {
                let (von, last) = split_von_last(parts[0]);
                Self {
                    first: tokens(parts[2]),
                    von,
                    last,
                    jr: tokens(parts[1]),
                }
            }
        };
        if name.last.is_empty() {
            // Degenerate comma form like ", John": fall back to the
            // comma-free reading of whatever tokens are present, so the
            // last name stays non-empty for non-empty input.
            let fallback = raw.replace(',', " ");
            let mut name = Self::parse_no_comma(fallback.trim());
            if name.last.is_empty() {
                name.last = vec![raw.to_string()];
            }
            return name;
        }
        name
    }

    fn parse_no_comma(raw: &str) -> Self {
        let words = tokens(raw);
        if words.len() <= 1 {
            return Self {
                last: words,
                ..Self::default()
            };
        }
        // von span: first through last particle token before the final word
        let particle_indices: Vec<usize> = words[..words.len() - 1]
            .iter()
            .enumerate()
            .filter(|(_, w)| PARTICLES.contains(&w.to_lowercase().as_str()) && w.chars().next().is_some_and(char::is_lowercase))
            .map(|(i, _)| i)
            .collect();
        match (particle_indices.first(), particle_indices.last()) {
            (Some(&start), Some(&end)) => Self {
                first: words[..start].to_vec(),
                von: words[start..=end].to_vec(),
                last: words[end + 1..].to_vec(),
                jr: Vec::new(),
            },
            _ => Self {
                first: words[..words.len() - 1].to_vec(),
                von: Vec::new(),
                last: words[words.len() - 1..].to_vec(),
                jr: Vec::new(),
            },
        }
    }

    /// Canonical "von Last, Jr, First" display form, with empty segments
    /// omitted so that no orphan separators appear.
    pub fn display(&self) -> String {
        let mut name = self.von.join(" ");
        if !name.is_empty() && !self.last.is_empty() {
            name.push(' ');
        }
        name.push_str(&self.last.join(" "));
        let mut segments = vec![name];
        if !self.jr.is_empty() {
            segments.push(self.jr.join(" "));
        }
        if !self.first.is_empty() {
            segments.push(self.first.join(" "));
        }
        segments.retain(|s| !s.is_empty());
        segments.join(", ")
    }

    /// ASCII fragment of von + last for cite key generation: overrides
    /// applied first, then the general transliteration, then internal
    /// whitespace removed.
    pub fn key_fragment(&self) -> String {
        let mut joined = self.von.join(" ");
        if !joined.is_empty() && !self.last.is_empty() {
            joined.push(' ');
        }
        joined.push_str(&self.last.join(" "));
        ascii_name_fragment(&joined)
    }
}

/// ASCII fragment of an already-extracted name span: the override table
/// applied before the general transliteration, internal whitespace
/// removed. Use this for provider records whose `family` field is the
/// full last name; re-parsing such a span would misread its leading
/// tokens as given names.
pub fn ascii_name_fragment(name: &str) -> String {
    let mut name = name.to_string();
    for (from, to) in ASCII_OVERRIDES.iter() {
        if name.contains(from) {
            name = name.replace(from, to);
        }
    }
    ascii_fold(&name).split_whitespace().collect()
}

fn tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// Split "von Last" into its particle run and last name tokens. The last
/// token always belongs to the last name.
fn split_von_last(s: &str) -> (Vec<String>, Vec<String>) {
    let words = tokens(s);
    if words.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let mut split = 0;
    while split < words.len() - 1
        && PARTICLES.contains(&words[split].to_lowercase().as_str())
        && words[split].chars().next().is_some_and(char::is_lowercase)
    {
        split += 1;
    }
    (words[..split].to_vec(), words[split..].to_vec())
}

/// Transliterate to ASCII: fold-table replacements first, then NFKD
/// decomposition with non-ASCII marks dropped.
pub(crate) fn ascii_fold(s: &str) -> String {
    let expanded: String = s
        .chars()
        .map(|c| match FOLD.get(&c) {
            Some(rep) => (*rep).to_string(),
            None => c.to_string(),
        })
        .collect();
    expanded
        .nfkd()
        .filter(|c| c.is_ascii() && !c.is_control())
        .collect()
}

/// Sentence-case a string: first character uppercased, the rest lowered.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
    }
}

/// Capitalize every word, lowering the remaining letters. Used for the
/// uppercase repair of garbled all-caps records.
pub(crate) fn capitalize_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }
    result
}
