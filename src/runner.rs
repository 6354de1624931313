// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    config::{consts::CSV_SEP, Params},
    core::net,
    error::Result,
    file::write_table,
    progress::Progress,
    specs::universities::{self, UniversitiesBundle},
};

const STAGES: usize = 4;

/// Summary of what was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub out_path: PathBuf,
    pub count: usize,
}

impl RunSummary {
    /// The one line printed on success.
    pub fn message(&self) -> String {
        format!("{} 件の大学名を {} に保存しました。", self.count, self.out_path.display())
    }
}

/// Fetch → parse → dedupe/sort → write, once.
/// `progress` can be None (no updates) or Some(&mut impl Progress).
pub fn run(params: &Params, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STAGES);
        p.log(&format!("Fetching {}", params.source_url));
    }
    let text = net::http_get(&params.source_url)?;
    log::info!("Fetched {} bytes from {}", text.len(), params.source_url);
    if let Some(p) = progress.as_deref_mut() { p.item_done(0); }

    // reborrow with a shorter object lifetime so `progress` is usable again below
    let stages = progress.as_mut().map(|p| &mut **p as &mut dyn Progress);
    let summary = run_from_html(&text, &params.out, stages)?;

    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    Ok(summary)
}

/// Everything after the fetch: usable offline with a saved page.
pub fn run_from_html(
    text: &str,
    out: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let doc = crate::core::html::parse_document(text);
    if let Some(p) = progress.as_deref_mut() { p.item_done(1); }

    let names = universities::extract_names(&doc);
    drop(doc);
    log::info!("Extracted {} unique names", names.len());
    if let Some(p) = progress.as_deref_mut() { p.item_done(2); }

    let bundle = universities::into_bundle(names);
    let summary = export(&bundle, out)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Wrote {}", summary.out_path.display()));
        p.item_done(3);
    }
    Ok(summary)
}

pub fn export(bundle: &UniversitiesBundle, out: &Path) -> Result<RunSummary> {
    let out_path = write_table(out, &bundle.headers, &bundle.rows, CSV_SEP)?;
    log::info!("Wrote {} rows to {}", bundle.len(), out_path.display());
    Ok(RunSummary { out_path, count: bundle.len() })
}
