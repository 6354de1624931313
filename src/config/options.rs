// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// Options for one scrape-and-export run.
/// `Default` reproduces the fixed behavior: Wikipedia list → `universities.csv`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub source_url: String,
    pub out: PathBuf,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            source_url: s!(SOURCE_URL),
            out: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}
