//! Cite key generation
//!
//! Keys are `<first author last name><journal initials><year>`, e.g.
//! `SorensenPRA2018`. Every part is optional; a record with none of them
//! yields an empty key. Collision handling across multiple keys is the
//! caller's concern.

use crate::journals::{self, Journal};
use crate::names::ascii_fold;

/// Generate a cite key from the first author's last name, the journal,
/// and the publication year.
///
/// The journal contributes its initials, always derived from the display
/// name even when a macro token is passed. The result carries no
/// whitespace and no non-ASCII bytes.
pub fn generate(first_author: Option<&str>, journal: Option<&Journal>, year: Option<i32>) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(author) = first_author {
        parts.push(author.to_string());
    }
    if let Some(journal) = journal {
        parts.push(journals::initials(journal));
    }
    if let Some(year) = year {
        parts.push(year.to_string());
    }
    ascii_fold(&parts.concat()).split_whitespace().collect()
}
