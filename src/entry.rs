//! Synthesized BibTeX entry model and serialization

use crate::journals::Journal;
use crate::names::capitalize_first;

/// The three entry shapes the synthesizer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Article,
    InProceedings,
    InCollection,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::InProceedings => "inproceedings",
            Self::InCollection => "incollection",
        }
    }
}

/// A field value: macro tokens serialize bare, literals brace-wrapped.
/// The distinction is carried as a type, never inferred from content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Literal(String),
    Macro(String),
}

impl From<Journal> for FieldValue {
    fn from(journal: Journal) -> Self {
        match journal {
            Journal::Macro(token) => FieldValue::Macro(token),
            Journal::Name(name) => FieldValue::Literal(name),
        }
    }
}

/// Casing applied uniformly to every emitted field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldNameCase {
    /// `Author = {...}` (first letter capitalized)
    #[default]
    Capitalized,
    /// `author = {...}`
    Lowercase,
}

/// A synthesized entry: type, cite key, and an ordered field list.
/// Immutable once produced; fields keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub entry_type: EntryType,
    pub cite_key: String,
    fields: Vec<(&'static str, FieldValue)>,
}

impl Entry {
    pub fn new(entry_type: EntryType, cite_key: String) -> Self {
        Self {
            entry_type,
            cite_key,
            fields: Vec::new(),
        }
    }

    /// Append a field; a `None` value is omitted entirely.
    pub(crate) fn push_field(&mut self, name: &'static str, value: Option<FieldValue>) {
        if let Some(value) = value {
            self.fields.push((name, value));
        }
    }

    /// The emitted fields, in emission order.
    pub fn fields(&self) -> &[(&'static str, FieldValue)] {
        &self.fields
    }

    /// Serialize as a multi-line BibTeX database entry.
    pub fn to_bibtex(&self, case: FieldNameCase) -> String {
        let mut lines = Vec::with_capacity(self.fields.len() + 2);
        lines.push(format!("@{}{{{},", self.entry_type.as_str(), self.cite_key));
        for (name, value) in &self.fields {
            let name = match case {
                FieldNameCase::Capitalized => capitalize_first(name),
                FieldNameCase::Lowercase => name.to_lowercase(),
            };
            match value {
                FieldValue::Literal(v) => lines.push(format!("    {} = {{{}}},", name, v)),
                FieldValue::Macro(m) => lines.push(format!("    {} = {},", name, m)),
            }
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}
