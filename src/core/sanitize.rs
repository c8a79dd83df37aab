// src/core/sanitize.rs

use crate::error::{Error, Result};

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Case-insensitive (Unicode) substring test. Names carry diacritics.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Maximal runs of ASCII digits, in order.
fn digit_runs(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_digit()).filter(|t| !t.is_empty())
}

/// Academic year from a label like "Situația școlară 2025".
/// Takes the last 4-digit token that looks like 20xx.
pub fn parse_school_year(label: &str) -> Result<i32> {
    digit_runs(label)
        .filter(|t| t.len() == 4 && t.starts_with("20"))
        .last()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| Error::Extraction(format!("no academic year in {label:?}")))
}

/// "dd.mm" → (day, month). Only shape is checked here; the calendar check
/// happens when the date is built.
pub fn parse_day_month(token: &str) -> Result<(u32, u32)> {
    let t = token.trim().trim_end_matches('.');
    let bad = || Error::InvalidDate(format!("{token:?} is not day.month"));
    let (day, month) = t.split_once('.').ok_or_else(bad)?;
    let day: u32 = day.trim().parse().map_err(|_| bad())?;
    let month: u32 = month.trim().parse().map_err(|_| bad())?;
    Ok((day, month))
}

/// First path segment of an absolute http(s) URL.
/// `https://host/parinte/acasa` → `parinte`.
pub fn landing_section(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let (_host, path) = rest.split_once('/')?;
    let end = path.find(['/', '?', '#']).unwrap_or(path.len());
    let seg = &path[..end];
    if seg.is_empty() { None } else { Some(seg) }
}

/// Does any whitespace-separated class token contain `marker`?
pub fn has_class_marker(class: &str, marker: &str) -> bool {
    class.split_whitespace().any(|tok| tok.contains(marker))
}
