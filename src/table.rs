// src/table.rs
use std::io::{self, Write};

use crate::error::Result;
use crate::report::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    Csv,
    Tsv,
    /// Boxed, column-aligned text for terminals.
    #[default]
    Text,
}

impl Format {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(Format::Csv),
            "tsv" => Some(Format::Tsv),
            "txt" | "text" => Some(Format::Text),
            _ => None,
        }
    }
}

/* ---------------- Delimited ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Text ---------------- */

fn widths(table: &Table) -> Vec<usize> {
    let mut w: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            let n = cell.chars().count();
            match w.get_mut(i) {
                Some(cur) => *cur = (*cur).max(n),
                None => w.push(n),
            }
        }
    }
    w
}

fn write_rule<W: Write>(w: &mut W, widths: &[usize]) -> io::Result<()> {
    write!(w, "+")?;
    for n in widths {
        write!(w, "{}+", "-".repeat(n + 2))?;
    }
    writeln!(w)
}

fn write_cells<W: Write>(w: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    write!(w, "|")?;
    for (i, n) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = n - cell.chars().count();
        write!(w, " {}{} |", cell, " ".repeat(pad))?;
    }
    writeln!(w)
}

fn write_text<W: Write>(w: &mut W, table: &Table) -> io::Result<()> {
    let widths = widths(table);
    write_rule(w, &widths)?;
    write_cells(w, &table.headers, &widths)?;
    write_rule(w, &widths)?;
    for row in &table.rows {
        write_cells(w, row, &widths)?;
    }
    write_rule(w, &widths)
}

/* ---------------- Entry points ---------------- */

pub fn write_table<W: Write>(mut w: W, table: &Table, format: Format) -> Result<()> {
    match format {
        Format::Csv | Format::Tsv => {
            let sep = if format == Format::Csv { ',' } else { '\t' };
            write_row(&mut w, &table.headers, sep)?;
            for r in &table.rows {
                write_row(&mut w, r, sep)?;
            }
        }
        Format::Text => write_text(&mut w, table)?,
    }
    w.flush()?;
    Ok(())
}

pub fn to_string(table: &Table, format: Format) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, table, format);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
