// src/stats.rs
//
// Derived views over cached records. Recomputed on every call; nothing
// here is stored.

use std::collections::BTreeMap;

use crate::data::{Absence, Grade, Subject};

/// Subject → records of that subject, in original emission order.
/// Keys iterate in subject-name order.
pub fn group_by_subject<T: Subject + Clone>(records: &[T]) -> BTreeMap<String, Vec<T>> {
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by(|a, b| a.subject().cmp(b.subject())); // stable

    sorted
        .chunk_by(|a, b| a.subject() == b.subject())
        .map(|group| {
            let key = s!(group[0].subject());
            (key, group.iter().map(|r| (*r).clone()).collect())
        })
        .collect()
}

/// Mean grade rounded half-to-even. `None` for no grades.
pub fn subject_average(grades: &[Grade]) -> Option<u32> {
    if grades.is_empty() {
        return None;
    }
    let sum: u32 = grades.iter().map(|g| g.grade() as u32).sum();
    let mean = sum as f64 / grades.len() as f64;
    Some(mean.round_ties_even() as u32)
}

/// Rounded average per subject.
pub fn subject_averages(grades: &[Grade]) -> BTreeMap<String, u32> {
    group_by_subject(grades)
        .into_iter()
        .filter_map(|(subject, gs)| subject_average(&gs).map(|avg| (subject, avg)))
        .collect()
}

/// Mean of the already-rounded per-subject averages, to two decimals.
/// Not the flat mean of all grades.
pub fn year_average(grades: &[Grade]) -> Option<f64> {
    let averages = subject_averages(grades);
    if averages.is_empty() {
        return None;
    }
    let sum: u32 = averages.values().sum();
    let mean = sum as f64 / averages.len() as f64;
    Some(round2(mean))
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

pub fn unmotivated_count(absences: &[Absence]) -> usize {
    absences.iter().filter(|a| !a.is_motivated()).count()
}
