//! Fixed scoping applied to NCERT curriculum searches: the query is widened
//! with curriculum terms and results are restricted to official portals.

use itertools::Itertools;

/// Domains results are restricted to for NCERT searches.
pub const NCERT_DOMAINS: &[&str] = &[
    "ncert.nic.in",
    "epathshala.nic.in",
    "cbseacademic.nic.in",
    "diksha.gov.in",
];

pub const NCERT_SEARCH_DEPTH: &str = "advanced";
pub const NCERT_MAX_RESULTS: u8 = 8;
pub const NCERT_SOURCE_TAG: &str = "ncert";

/// Widens a user query with the fixed NCERT/CBSE search terms, inserting the
/// subject when one was given.
pub fn build_ncert_query(query: &str, subject: Option<&str>) -> String {
    [Some(query), subject, Some("NCERT Class 11 CBSE")]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .join(" ")
}

pub fn ncert_domains() -> Vec<String> {
    NCERT_DOMAINS.iter().map(|d| d.to_string()).collect()
}
