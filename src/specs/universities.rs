// src/specs/universities.rs
//! Scraping *spec* for the university list page.
//!
//! Where the data lives:
//! - Every `<ul>` on the page, every `<li>` beneath it (nested lists included).
//! - The first `<a>` inside each `<li>`; its visible text is the candidate.
//!
//! Rules:
//! - Skip items with no link, and links whose text lacks `大学`.
//! - Keep only the first whitespace-delimited token (`"東京大学 本部"` → `"東京大学"`).
//!   Names that legitimately contain a space are truncated too; that is accepted.
//! - Deduplicate and order through one `BTreeSet` (code-point order).
//!
//! Non-responsibilities: no networking, no file output, no console reporting.

use std::collections::BTreeSet;

use scraper::Html;

use crate::config::consts::{HEADER, KEYWORD};
use crate::core::{html, sanitize};

pub struct UniversitiesBundle {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl UniversitiesBundle {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn extract_from_str(text: &str) -> BTreeSet<String> {
    let doc = html::parse_document(text);
    extract_names(&doc)
}

pub fn extract_names(doc: &Html) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    for ul in html::lists(doc) {
        for li in html::list_items(ul) {
            let Some(text) = html::first_link_text(li) else { continue };
            if let Some(name) = candidate_name(&text) {
                if names.insert(s!(name)) {
                    log::trace!("name: {name}");
                }
            }
        }
    }

    log::debug!("extracted {} unique names", names.len());
    names
}

/// Candidate name from one link's text, if it mentions a university.
pub fn candidate_name(link_text: &str) -> Option<&str> {
    if !sanitize::contains_keyword(link_text, KEYWORD) {
        return None;
    }
    sanitize::first_token(link_text)
}

/// Header + one single-column row per name, ascending.
pub fn into_bundle(names: BTreeSet<String>) -> UniversitiesBundle {
    UniversitiesBundle {
        headers: Some(vec![s!(HEADER)]),
        rows: names.into_iter().map(|n| vec![n]).collect(),
    }
}
