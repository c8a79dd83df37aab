// src/report.rs
//
// Tabular views over scanned records. Every function here is a pure
// projection of a `Records` value; rendering lives in `table`.

use std::collections::{BTreeMap, BTreeSet};

use crate::data::{Absence, Grade, Records, Subject};
use crate::stats;

const DATE_FMT: &str = "%Y-%m-%d";

/// Header row + body rows, all as text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: &[&str]) -> Self {
        Self { headers: headers.iter().map(|h| s!(*h)).collect(), rows: Vec::new() }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

fn yes_no(b: bool) -> String {
    s!(if b { "yes" } else { "no" })
}

/// All absences, most recent first.
pub fn absences(records: &Records) -> Table {
    let mut sorted: Vec<&Absence> = records.absences.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));

    let mut table = Table::new(&["subject", "date", "motivated?"]);
    for a in sorted {
        table.rows.push(vec![
            s!(a.subject()),
            a.date().format(DATE_FMT).to_string(),
            yes_no(a.is_motivated()),
        ]);
    }
    table
}

/// All grades, most recent first.
pub fn grades(records: &Records) -> Table {
    let mut sorted: Vec<&Grade> = records.grades.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));

    let mut table = Table::new(&["subject", "date", "grade"]);
    for g in sorted {
        table.rows.push(vec![
            s!(g.subject()),
            g.date().format(DATE_FMT).to_string(),
            g.grade().to_string(),
        ]);
    }
    table
}

/// One row per subject seen in either list, in subject order.
/// Average is 0 for a subject without grades.
pub fn per_subject(records: &Records) -> Table {
    let absences: BTreeMap<String, Vec<Absence>> = stats::group_by_subject(&records.absences);
    let grades: BTreeMap<String, Vec<Grade>> = stats::group_by_subject(&records.grades);
    let subjects: BTreeSet<&String> = absences.keys().chain(grades.keys()).collect();

    let mut table = Table::new(&["subject", "absences", "unmotivated absences", "grades", "average"]);
    for subject in subjects {
        let abs = absences.get(subject).map(Vec::as_slice).unwrap_or(&[]);
        let gs = grades.get(subject).map(Vec::as_slice).unwrap_or(&[]);
        table.rows.push(vec![
            subject.clone(),
            abs.len().to_string(),
            stats::unmotivated_count(abs).to_string(),
            gs.len().to_string(),
            stats::subject_average(gs).unwrap_or(0).to_string(),
        ]);
    }
    table
}

/// Totals and the two-stage year-wide average.
pub fn aggregates(records: &Records) -> Table {
    let mut table = Table::new(&["total absences", "unmotivated absences", "grade average"]);
    table.rows.push(vec![
        records.absences.len().to_string(),
        stats::unmotivated_count(&records.absences).to_string(),
        stats::year_average(&records.grades).map_or_else(|| s!("-"), |avg| format!("{avg:.2}")),
    ]);
    table
}

/// The reports a frontend can offer, by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Aggregates,
    Absences,
    Grades,
    Report,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Aggregates, Action::Absences, Action::Grades, Action::Report];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Aggregates => "aggregates",
            Action::Absences   => "absences",
            Action::Grades     => "grades",
            Action::Report     => "report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Action::Aggregates => "Show aggregate values. (totals, year average)",
            Action::Absences   => "Show all absences, most recent first",
            Action::Grades     => "Show all grades, most recent first",
            Action::Report     => "Show a per subject report",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn run(&self, records: &Records) -> Table {
        match self {
            Action::Aggregates => aggregates(records),
            Action::Absences   => absences(records),
            Action::Grades     => grades(records),
            Action::Report     => per_subject(records),
        }
    }
}
