// src/csv.rs
use std::io::{self, Write};

/// Row terminator: the platform's line ending.
pub const LINE_END: &str = if cfg!(windows) { "\r\n" } else { "\n" };

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one row, quoting only fields that need it. Ends with `LINE_END`.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{}", sep)?; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    w.write_all(LINE_END.as_bytes())
}
