//! bibsynth-core: record-to-BibTeX entry synthesis
//!
//! This library turns a single bibliographic metadata record (a Crossref
//! work or an arXiv e-print) into a formatted BibTeX entry:
//! - Journal macro resolution and initials (journal abbreviation tables)
//! - Person name parsing and normalization
//! - Title case detection and protection of proper nouns
//! - Cite key generation (author + journal initials + year)
//! - Entry synthesis and serialization for article, inproceedings,
//!   and incollection records
//!
//! Network retrieval of the record is out of scope; callers hand the raw
//! response body (or an already extracted record) to this crate.

pub mod citekey;
pub mod entry;
pub mod error;
pub mod journals;
pub mod names;
pub mod protect;
pub mod query;
pub mod record;
pub mod synth;

// Re-export main types for convenience
pub use entry::{Entry, EntryType, FieldNameCase, FieldValue};
pub use error::SynthesisError;
pub use journals::Journal;
pub use names::PersonName;
pub use protect::ProtectMode;
pub use query::QueryKind;
pub use record::{CrossrefWork, EprintRecord, Record};
pub use synth::{synthesize, synthesize_eprint, synthesize_work, SynthesisOptions};
