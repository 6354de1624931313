// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific extraction: where the ground truth lives in the HTML and how
//! to pull it out. A spec only extracts; it does not fetch, or decide where the
//! result is written or how it is reported.
//!
//! ```text
//! runner::run → core::net::http_get → specs::<page>::extract_* → bundle → file::write_table
//! ```
//!
//! Specs are testable offline: feed `extract_from_str` a captured or hand-written page.
pub mod universities;
