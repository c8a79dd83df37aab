// src/data.rs
//
// Record types produced by a scan.
//
// - Absence / Grade: immutable values, built only by the scan loop.
// - Records: the (absences, grades) pair held by a session's cache.
// - MarkState: how a record marker on the page is classified from its
//              class attribute. The only place that knows the markers.

use chrono::NaiveDate;

use crate::config::consts::{DELETED_MARKER, MOTIVATED_MARKER};
use crate::core::sanitize::has_class_marker;

/// Anything that belongs to a subject. Grouping works over this.
pub trait Subject {
    fn subject(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Absence {
    subject: String,
    date: NaiveDate,
    is_motivated: bool,
}

impl Absence {
    pub fn new(subject: impl Into<String>, date: NaiveDate, is_motivated: bool) -> Self {
        Self { subject: subject.into(), date, is_motivated }
    }
    pub fn date(&self) -> NaiveDate { self.date }
    pub fn is_motivated(&self) -> bool { self.is_motivated }
}

impl Subject for Absence {
    fn subject(&self) -> &str { &self.subject }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grade {
    subject: String,
    date: NaiveDate,
    grade: u8,
}

impl Grade {
    pub fn new(subject: impl Into<String>, date: NaiveDate, grade: u8) -> Self {
        Self { subject: subject.into(), date, grade }
    }
    pub fn date(&self) -> NaiveDate { self.date }
    pub fn grade(&self) -> u8 { self.grade }
}

impl Subject for Grade {
    fn subject(&self) -> &str { &self.subject }
}

/// Everything one scan produced, in per-subject emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Records {
    pub absences: Vec<Absence>,
    pub grades: Vec<Grade>,
}

impl Records {
    pub fn is_empty(&self) -> bool {
        self.absences.is_empty() && self.grades.is_empty()
    }
}

/// Classification of a record marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkState {
    Motivated,
    Unmotivated,
    /// Soft-deleted on the page; never becomes a record.
    Deleted,
}

impl MarkState {
    /// Deleted wins over motivated.
    pub fn classify(class: Option<&str>) -> Self {
        let class = class.unwrap_or("");
        if has_class_marker(class, DELETED_MARKER) {
            MarkState::Deleted
        } else if has_class_marker(class, MOTIVATED_MARKER) {
            MarkState::Motivated
        } else {
            MarkState::Unmotivated
        }
    }

    pub fn is_deleted(self) -> bool { self == MarkState::Deleted }
}
