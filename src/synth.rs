//! Entry synthesis
//!
//! Maps a source record's type tag to one of the three entry shapes,
//! runs each field through the normalizers, and assembles the final
//! entry. The provider type tag is the only required field; everything
//! else degrades to an omitted field.

use tracing::{debug, warn};

use crate::citekey;
use crate::entry::{Entry, EntryType, FieldNameCase, FieldValue};
use crate::error::SynthesisError;
use crate::journals::{self, Journal};
use crate::names::{ascii_name_fragment, capitalize_first, PersonName};
use crate::protect::{protect, ProtectMode};
use crate::record::{CrossrefWork, EprintRecord, Record};

/// Per-call synthesis options.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisOptions {
    /// Repair records with all-uppercase authors or titles by simple
    /// word capitalization. Takes precedence over `protect_mode`.
    pub fix_uppercase: bool,
    /// Title protection mode.
    pub protect_mode: ProtectMode,
    /// Casing of emitted field names.
    pub field_name_case: FieldNameCase,
    /// Emit macro tokens for known journals.
    pub use_journal_macros: bool,
    /// Dump the raw record through the diagnostics channel.
    pub debug_record: bool,
}

impl SynthesisOptions {
    pub fn new() -> Self {
        Self {
            fix_uppercase: false,
            protect_mode: ProtectMode::Auto,
            field_name_case: FieldNameCase::Capitalized,
            use_journal_macros: true,
            debug_record: false,
        }
    }
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Synthesize an entry from a full record, honoring the diagnostic dump
/// switch.
pub fn synthesize(record: &Record, options: &SynthesisOptions) -> Result<Entry, SynthesisError> {
    if options.debug_record {
        debug!(target: "bibsynth::record", "{}", record.debug_dump());
    }
    synthesize_work(&record.work, options)
}

/// Synthesize an entry from an already extracted work record.
pub fn synthesize_work(
    work: &CrossrefWork,
    options: &SynthesisOptions,
) -> Result<Entry, SynthesisError> {
    let record_type = work.record_type.clone().unwrap_or_default();
    let entry_type = match record_type.as_str() {
        "journal-article" => EntryType::Article,
        "proceedings-article" => EntryType::InProceedings,
        "book-chapter" => EntryType::InCollection,
        _ => return Err(SynthesisError::UnsupportedType { record_type }),
    };

    let author = work.author_names(options.fix_uppercase).map(FieldValue::Literal);
    let title = work.first_title().map(|t| {
        if options.fix_uppercase {
            FieldValue::Literal(capitalize_first(t))
        } else {
            FieldValue::Literal(protect(t, options.protect_mode))
        }
    });
    let year = work.year();
    let year_field = year.map(|y| FieldValue::Literal(y.to_string()));
    let doi = work.doi.clone().map(FieldValue::Literal);
    // The family field is already the full last name; fold it directly
    // instead of re-parsing, which would misread a particle surname
    let first_author = work
        .first_author_family()
        .map(|family| ascii_name_fragment(&capitalize_first(family)));

    let mut entry;
    match entry_type {
        EntryType::Article => {
            let journal = select_journal(work, options.use_journal_macros);
            let cite_key = citekey::generate(first_author.as_deref(), journal.as_ref(), year);
            entry = Entry::new(entry_type, cite_key);
            entry.push_field("author", author);
            entry.push_field("title", title);
            entry.push_field("journal", journal.map(FieldValue::from));
            entry.push_field("year", year_field);
            entry.push_field("doi", doi);
            entry.push_field("pages", work.pages(false).map(FieldValue::Literal));
            entry.push_field("volume", work.volume.clone().map(FieldValue::Literal));
            entry.push_field("number", work.issue.clone().map(FieldValue::Literal));
        }
        EntryType::InProceedings => {
            let booktitle = work.journal_candidates().first().map(|s| s.to_string());
            let conference = booktitle.clone().map(Journal::Name);
            let cite_key = citekey::generate(first_author.as_deref(), conference.as_ref(), year);
            entry = Entry::new(entry_type, cite_key);
            entry.push_field("author", author);
            entry.push_field("title", title);
            entry.push_field("booktitle", booktitle.map(FieldValue::Literal));
            entry.push_field("year", year_field);
            entry.push_field("doi", doi);
            entry.push_field("pages", work.pages(true).map(FieldValue::Literal));
            entry.push_field(
                "address",
                work.event_location().map(|l| FieldValue::Literal(l.to_string())),
            );
            entry.push_field(
                "editor",
                work.editor_names(options.fix_uppercase).map(FieldValue::Literal),
            );
        }
        EntryType::InCollection => {
            let cite_key = citekey::generate(first_author.as_deref(), None, year);
            let booktitle = work.journal_candidates().first().map(|s| s.to_string());
            entry = Entry::new(entry_type, cite_key);
            entry.push_field("author", author);
            entry.push_field("title", title);
            entry.push_field("booktitle", booktitle.map(FieldValue::Literal));
            entry.push_field("year", year_field);
            entry.push_field("doi", doi);
            entry.push_field("pages", work.pages(true).map(FieldValue::Literal));
            entry.push_field(
                "editor",
                work.editor_names(options.fix_uppercase).map(FieldValue::Literal),
            );
            entry.push_field("publisher", work.publisher.clone().map(FieldValue::Literal));
            entry.push_field("volume", work.volume.clone().map(FieldValue::Literal));
        }
    }
    Ok(entry)
}

/// Synthesize an article entry for an arXiv e-print.
pub fn synthesize_eprint(record: &EprintRecord, options: &SynthesisOptions) -> Entry {
    let names: Vec<PersonName> = record.authors.iter().map(|a| PersonName::parse(a)).collect();
    let mut cite_key = names
        .first()
        .map(|n| citekey::generate(Some(&n.key_fragment()), None, None))
        .unwrap_or_default();
    cite_key.push_str(&record.id.replace('/', "."));

    let author = if names.is_empty() {
        None
    } else if options.fix_uppercase {
        Some(
            names
                .iter()
                .map(|n| crate::names::capitalize_words(&n.display()))
                .collect::<Vec<_>>()
                .join(" and "),
        )
    } else {
        Some(
            names
                .iter()
                .map(PersonName::display)
                .collect::<Vec<_>>()
                .join(" and "),
        )
    };
    let title = record.title.as_deref().map(|t| {
        if options.fix_uppercase {
            capitalize_first(t)
        } else {
            protect(t, options.protect_mode)
        }
    });

    let mut entry = Entry::new(EntryType::Article, cite_key);
    entry.push_field("author", author.map(FieldValue::Literal));
    entry.push_field("title", title.map(FieldValue::Literal));
    entry.push_field(
        "journal",
        Some(FieldValue::Literal(format!("arXiv:{}", record.id))),
    );
    entry.push_field(
        "year",
        record.year.map(|y| FieldValue::Literal(y.to_string())),
    );
    entry.push_field(
        "url",
        Some(FieldValue::Literal(format!(
            "https://doi.org/10.48550/arXiv.{}",
            record.id
        ))),
    );
    entry
}

/// Pick the journal for an article record.
///
/// With macros enabled, the first name candidate with a known macro
/// wins; a missing macro is reported as a warning before falling back to
/// the first literal candidate.
fn select_journal(work: &CrossrefWork, use_macros: bool) -> Option<Journal> {
    let candidates = work.journal_candidates();
    if use_macros {
        for name in &candidates {
            if let Some(token) = journals::macro_for(name) {
                return Some(Journal::Macro(token.to_string()));
            }
        }
        if !candidates.is_empty() {
            warn!("no journal macro for {}", candidates.join(", "));
        }
    }
    candidates.first().map(|name| Journal::Name(name.to_string()))
}
