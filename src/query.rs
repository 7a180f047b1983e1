//! Query classification
//!
//! Decides whether a free-text query is an arXiv identifier, a DOI
//! (possibly embedded in a URL), or a free-form bibliographic query.
//! The arXiv check runs an ordered list of independent matchers (new
//! style first, then the old archive/YYMMNNN style) until one succeeds.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref RX_DOI: Regex =
        Regex::new(r"(?i)10\.\d{4,9}/[-._;()/:A-Z0-9]+").unwrap();

    pub static ref RX_ARXIV_NEW: Regex =
        Regex::new(r"(?i)arxiv.*?(\d{4}\.\d{4,}(v\d+)?)").unwrap();

    pub static ref RX_ARXIV_OLD: Regex = Regex::new(
        r"(?x)
        ((
           math-ph
          |hep-ph
          |nucl-ex
          |nucl-th
          |gr-qc
          |astro-ph
          |hep-lat
          |quant-ph
          |hep-ex
          |hep-th
          |stat
            (\.(AP|CO|ML|ME|TH))?
          |q-bio
            (\.(BM|CB|GN|MN|NC|OT|PE|QM|SC|TO))?
          |cond-mat
            (\.(dis-nn|mes-hall|mtrl-sci|other|soft|stat-mech|str-el|supr-con))?
          |cs
            (\.(AR|AI|CL|CC|CE|CG|GT|CV|CY|CR|DS|DB|DL|DM|DC|GL|GR|HC|IR|IT|LG|LO|
              MS|MA|MM|NI|NE|NA|OS|OH|PF|PL|RO|SE|SD|SC))?
          |nlin
            (\.(AO|CG|CD|SI|PS))?
          |physics
            (\.(acc-ph|ao-ph|atom-ph|atm-clus|bio-ph|chem-ph|class-ph|comp-ph|
              data-an|flu-dyn|gen-ph|geo-ph|hist-ph|ins-det|med-ph|optics|ed-ph|
              soc-ph|plasm-ph|pop-ph|space-ph))?
          |math
              (\.(AG|AT|AP|CT|CA|CO|AC|CV|DG|DS|FA|GM|GN|GT|GR|HO|IT|KT|LO|MP|MG
              |NT|NA|OA|OC|PR|QA|RT|RA|SP|ST|SG))?
        )/\d{7}(v\d+)?)"
    )
    .unwrap();
}

/// What a query string turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// An arXiv identifier (new or old style), extracted from the query
    ArxivId(String),
    /// A DOI, either the query itself or extracted from a URL
    Doi(String),
    /// A free-form bibliographic query
    FreeForm(String),
}

/// Classify a query string.
///
/// Any whitespace marks the query as free-form (unless it contains an
/// arXiv identifier); a single token is taken as a DOI when it starts
/// with `10.` or contains an embedded DOI.
pub fn classify(query: &str) -> QueryKind {
    // Ordered matchers, first success wins
    let arxiv_matchers: [&Regex; 2] = [&RX_ARXIV_NEW, &RX_ARXIV_OLD];
    for rx in arxiv_matchers {
        if let Some(caps) = rx.captures(query) {
            return QueryKind::ArxivId(caps[1].to_string());
        }
    }
    if !query.contains(' ') {
        if query.starts_with("10.") {
            return QueryKind::Doi(query.to_string());
        }
        // Handle e.g. URLs
        if let Some(m) = RX_DOI.find(query) {
            return QueryKind::Doi(m.as_str().to_string());
        }
    }
    QueryKind::FreeForm(query.to_string())
}
