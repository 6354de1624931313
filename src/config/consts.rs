// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://ja.wikipedia.org/wiki/日本の大学一覧_(五十音順)";
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Scrape
pub const KEYWORD: &str = "大学";

// Export
pub const DEFAULT_OUT_FILE: &str = "universities.csv";
pub const HEADER: &str = "University Name";
pub const CSV_SEP: char = ',';
