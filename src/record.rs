//! Source record models
//!
//! Typed view of a Crossref work record (the envelope plus the fields the
//! synthesizer consumes) and of an arXiv e-print record. Records are
//! read-only once parsed; the raw JSON value is kept alongside the typed
//! work for the diagnostic dump.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::SynthesisError;
use crate::names::capitalize_words;

lazy_static! {
    /// Page range: start, a separator (hyphen runs, en dash, em dash),
    /// end. Anchored at the start of the field.
    static ref RX_PAGE_RANGE: Regex = Regex::new(r"^(\w+)\s*[-\u{2013}\u{2014}]+\s*(\w+)").unwrap();
}

/// An author or editor name record.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NameRecord {
    pub family: Option<String>,
    pub given: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DateParts {
    #[serde(rename = "date-parts")]
    pub date_parts: Option<Vec<Vec<i32>>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Event {
    pub location: Option<String>,
}

/// The fields of a Crossref work record consumed by the synthesizer.
/// Every field is optional; absence never fails synthesis.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CrossrefWork {
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub author: Option<Vec<NameRecord>>,
    pub editor: Option<Vec<NameRecord>>,
    pub title: Option<Vec<String>>,
    #[serde(rename = "short-container-title")]
    pub short_container_title: Option<Vec<String>>,
    #[serde(rename = "container-title")]
    pub container_title: Option<Vec<String>>,
    pub issued: Option<DateParts>,
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "article-number")]
    pub article_number: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub event: Option<Event>,
    pub publisher: Option<String>,
}

impl CrossrefWork {
    /// Author names joined with " and ", in "Family, Given" form.
    pub fn author_names(&self, fix_uppercase: bool) -> Option<String> {
        name_list(self.author.as_deref()?, fix_uppercase)
    }

    /// Editor names joined with " and ", in "Family, Given" form.
    pub fn editor_names(&self, fix_uppercase: bool) -> Option<String> {
        name_list(self.editor.as_deref()?, fix_uppercase)
    }

    /// Family name of the first author.
    pub fn first_author_family(&self) -> Option<&str> {
        self.author.as_deref()?.first()?.family.as_deref()
    }

    /// First title entry.
    pub fn first_title(&self) -> Option<&str> {
        self.title.as_deref()?.first().map(String::as_str)
    }

    /// Publication year from the first issued date-parts entry.
    pub fn year(&self) -> Option<i32> {
        self.issued
            .as_ref()?
            .date_parts
            .as_deref()?
            .first()?
            .first()
            .copied()
    }

    /// Page or article number. An article number takes precedence over a
    /// page range. Ranges are collapsed to the start page, or normalized
    /// to `start--end` when `allow_range` is set.
    pub fn pages(&self, allow_range: bool) -> Option<String> {
        let page = self.article_number.as_deref().or(self.page.as_deref())?;
        match RX_PAGE_RANGE.captures(page) {
            Some(caps) if allow_range => Some(format!("{}--{}", &caps[1], &caps[2])),
            Some(caps) => Some(caps[1].to_string()),
            None => Some(page.to_string()),
        }
    }

    /// Location of the conference event, if any.
    pub fn event_location(&self) -> Option<&str> {
        self.event.as_ref()?.location.as_deref()
    }

    /// Journal name candidates, short container titles first.
    pub fn journal_candidates(&self) -> Vec<&str> {
        self.short_container_title
            .iter()
            .chain(self.container_title.iter())
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

fn name_list(records: &[NameRecord], fix_uppercase: bool) -> Option<String> {
    let names: Vec<String> = records
        .iter()
        .filter_map(|r| {
            let mut name = match (r.family.as_deref(), r.given.as_deref()) {
                (Some(family), Some(given)) => format!("{}, {}", family, given),
                (Some(family), None) => family.to_string(),
                (None, Some(given)) => given.to_string(),
                (None, None) => return None,
            };
            if fix_uppercase {
                name = capitalize_words(&name);
            }
            Some(name)
        })
        .collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(" and "))
    }
}

/// A Crossref record: the typed work plus the raw JSON it came from.
#[derive(Debug, Clone)]
pub struct Record {
    pub work: CrossrefWork,
    raw: Value,
}

impl Record {
    /// Extract the record from a lookup-by-identifier response
    /// (`message` is the work itself).
    pub fn from_lookup_response(json: &str) -> Result<Self, SynthesisError> {
        let message = check_response(json)?;
        Self::from_value(message)
    }

    /// Extract the first record from a bibliographic query response
    /// (`message.items` is a result list).
    pub fn from_query_response(json: &str) -> Result<Self, SynthesisError> {
        let message = check_response(json)?;
        let item = message
            .get("items")
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .cloned()
            .ok_or_else(|| SynthesisError::MalformedResponse {
                message: "query returned no items".to_string(),
            })?;
        Self::from_value(item)
    }

    /// Build a record directly from a work value, bypassing the
    /// response envelope.
    pub fn from_value(value: Value) -> Result<Self, SynthesisError> {
        let work: CrossrefWork = serde_json::from_value(value.clone())?;
        Ok(Self { work, raw: value })
    }

    /// Pretty-printed raw record for diagnostics. The `reference` list
    /// is stripped; with it the dump gets very verbose.
    pub fn debug_dump(&self) -> String {
        let mut value = self.raw.clone();
        if let Some(map) = value.as_object_mut() {
            map.remove("reference");
        }
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }
}

/// Validate the response envelope: a JSON object with `status` equal to
/// `"ok"` and a `message` payload.
fn check_response(json: &str) -> Result<Value, SynthesisError> {
    let value: Value = serde_json::from_str(json)?;
    let map = value
        .as_object()
        .ok_or_else(|| SynthesisError::MalformedResponse {
            message: format!("response is not an object: {}", value),
        })?;
    match map.get("status").and_then(Value::as_str) {
        Some("ok") => {}
        Some(status) => {
            return Err(SynthesisError::MalformedResponse {
                message: format!("query returned status {:?}", status),
            })
        }
        None => {
            return Err(SynthesisError::MalformedResponse {
                message: "response carries no status".to_string(),
            })
        }
    }
    map.get("message")
        .cloned()
        .ok_or_else(|| SynthesisError::MalformedResponse {
            message: "response carries no message".to_string(),
        })
}

/// An arXiv e-print record, as extracted from the Atom feed by the
/// (external) retrieval layer.
#[derive(Debug, Clone, Default)]
pub struct EprintRecord {
    /// arXiv identifier, e.g. `2205.15044` or `cond-mat/0411174`
    pub id: String,
    /// Author names in natural "First Last" order
    pub authors: Vec<String>,
    pub title: Option<String>,
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn work_from(json: &str) -> CrossrefWork {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_work_fields() {
        let work = work_from(
            r#"{
                "type": "journal-article",
                "author": [{"family": "Sørensen", "given": "Anders"}],
                "title": ["Atomic Schrödinger cat states"],
                "short-container-title": ["Phys. Rev. A"],
                "container-title": ["Physical Review A"],
                "issued": {"date-parts": [[2018, 4, 1]]},
                "DOI": "10.1103/physreva.97.043802",
                "volume": "97",
                "issue": "4",
                "page": "043802"
            }"#,
        );
        assert_eq!(work.record_type.as_deref(), Some("journal-article"));
        assert_eq!(work.year(), Some(2018));
        assert_eq!(work.first_author_family(), Some("Sørensen"));
        assert_eq!(
            work.journal_candidates(),
            vec!["Phys. Rev. A", "Physical Review A"]
        );
    }

    #[test_case("123-130", false, "123" ; "hyphen start only")]
    #[test_case("123-130", true, "123--130" ; "hyphen normalized")]
    #[test_case("123--130", true, "123--130" ; "double hyphen")]
    #[test_case("123 – 130", true, "123--130" ; "en dash with spaces")]
    #[test_case("123——130", true, "123--130" ; "em dash run")]
    #[test_case("R2021", true, "R2021" ; "no range")]
    fn test_pages(page: &str, allow_range: bool, expected: &str) {
        let work = CrossrefWork {
            page: Some(page.to_string()),
            ..Default::default()
        };
        assert_eq!(work.pages(allow_range).as_deref(), Some(expected));
    }

    #[test]
    fn test_article_number_precedence() {
        let work = CrossrefWork {
            page: Some("1-10".to_string()),
            article_number: Some("043802".to_string()),
            ..Default::default()
        };
        assert_eq!(work.pages(false).as_deref(), Some("043802"));
    }

    #[test]
    fn test_author_names_fix_uppercase() {
        let work = work_from(
            r#"{"author": [
                {"family": "IMAMOGLU", "given": "ATAC"},
                {"family": "ZOLLER", "given": "PETER"}
            ]}"#,
        );
        assert_eq!(
            work.author_names(true).as_deref(),
            Some("Imamoglu, Atac and Zoller, Peter")
        );
        assert_eq!(
            work.author_names(false).as_deref(),
            Some("IMAMOGLU, ATAC and ZOLLER, PETER")
        );
    }

    #[test]
    fn test_missing_fields_are_none() {
        let work = work_from("{}");
        assert!(work.author_names(false).is_none());
        assert!(work.year().is_none());
        assert!(work.pages(true).is_none());
        assert!(work.event_location().is_none());
        assert!(work.journal_candidates().is_empty());
    }

    #[test]
    fn test_lookup_response_envelope() {
        let record = Record::from_lookup_response(
            r#"{"status": "ok", "message": {"type": "journal-article"}}"#,
        )
        .unwrap();
        assert_eq!(record.work.record_type.as_deref(), Some("journal-article"));
    }

    #[test]
    fn test_query_response_envelope() {
        let record = Record::from_query_response(
            r#"{"status": "ok", "message": {"items": [{"volume": "12"}]}}"#,
        )
        .unwrap();
        assert_eq!(record.work.volume.as_deref(), Some("12"));
    }

    #[test]
    fn test_bad_status_is_malformed() {
        let err = Record::from_lookup_response(r#"{"status": "failed", "message": {}}"#)
            .unwrap_err();
        assert!(matches!(err, SynthesisError::MalformedResponse { .. }));
    }

    #[test]
    fn test_missing_status_is_malformed() {
        let err = Record::from_lookup_response(r#"{"message": {}}"#).unwrap_err();
        assert!(matches!(err, SynthesisError::MalformedResponse { .. }));
    }

    #[test]
    fn test_empty_query_items_is_malformed() {
        let err = Record::from_query_response(r#"{"status": "ok", "message": {"items": []}}"#)
            .unwrap_err();
        assert!(matches!(err, SynthesisError::MalformedResponse { .. }));
    }

    #[test]
    fn test_debug_dump_strips_references() {
        let record = Record::from_value(serde_json::json!({
            "type": "journal-article",
            "reference": [{"DOI": "10.1/1"}, {"DOI": "10.1/2"}]
        }))
        .unwrap();
        let dump = record.debug_dump();
        assert!(dump.contains("journal-article"));
        assert!(!dump.contains("reference"));
    }
}
