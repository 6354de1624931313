// src/core/html.rs
//
// Thin layer over `scraper` (html5ever). Parsing never fails: malformed
// markup is repaired the way browsers do, so the worst case is an emptier tree.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static UL: LazyLock<Selector> = LazyLock::new(|| css("ul"));
static LI: LazyLock<Selector> = LazyLock::new(|| css("li"));
static A: LazyLock<Selector> = LazyLock::new(|| css("a"));

fn css(sel: &'static str) -> Selector {
    Selector::parse(sel).expect("static selector")
}

pub fn parse_document(text: &str) -> Html {
    Html::parse_document(text)
}

/// All `<ul>` elements, document order.
pub fn lists(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.select(&UL)
}

/// All `<li>` descendants of `ul`, nested lists included.
pub fn list_items<'a>(ul: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    ul.select(&LI)
}

/// Visible text of the first `<a>` anywhere under `el`.
pub fn first_link_text(el: ElementRef<'_>) -> Option<String> {
    el.select(&A).next().map(|a| a.text().collect())
}
