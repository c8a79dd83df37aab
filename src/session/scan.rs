// src/session/scan.rs
//
// One full pass over every subject on a dashboard.
//
// Typical call chain:
//   Session::get_data → RecordCache::get_or_try_populate → scan::run
//     run: navigate → academic year → subject list → per subject:
//          pick subject → wait for loader → read marks (Immediate) → append
//
// Any failure aborts the pass; records only leave `run` on success.

use chrono::NaiveDate;

use crate::config::consts::*;
use crate::config::SessionOptions;
use crate::core::sanitize::{contains_ci, has_class_marker, normalize_ws, parse_school_year};
use crate::core::{Driver, Element, WaitMode};
use crate::data::{Absence, Grade, MarkState, Records};
use crate::date::resolve_token;
use crate::error::{Error, Result};
use crate::progress::Progress;

/// What every mark read during one subject shares.
struct MarkContext<'a> {
    subject: &'a str,
    school_year: i32,
    today: NaiveDate,
}

pub(crate) fn run<D: Driver>(
    driver: &mut D,
    target: &str,
    options: &SessionOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Records> {
    let wait = WaitMode::Implicit(options.implicit_wait);

    advance(&mut progress, 0.0)?;
    driver.navigate(target)?;

    let label = driver.find(&xpath!(PAGE_SUBTITLE), wait)?.text()?;
    let school_year = parse_school_year(&label)?;
    let today = options.today();

    let subjects = list_subjects(driver, wait)?;
    logf!("Scanning {target}: academic year {school_year}, {} subject(s)", subjects.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(subjects.len());
    }

    let mut records = Records::default();
    for (i, subject) in subjects.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(subject);
        }
        select_subject(driver, subject, options)?;

        let ctx = MarkContext { subject, school_year, today };
        read_marks(driver, &ctx, &mut records)?;

        advance(&mut progress, (i + 1) as f64 / subjects.len() as f64)?;
    }
    if subjects.is_empty() {
        advance(&mut progress, 1.0)?;
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!(
        "Scan done: {} absence(s), {} grade(s)",
        records.absences.len(),
        records.grades.len()
    );
    Ok(records)
}

fn advance(progress: &mut Option<&mut dyn Progress>, fraction: f64) -> Result<()> {
    match progress.as_deref_mut() {
        Some(p) => p.advance(fraction),
        None => Ok(()),
    }
}

/// Subject names from the picker, minus the aggregate "all subjects" entry.
fn list_subjects<D: Driver>(driver: &mut D, wait: WaitMode) -> Result<Vec<String>> {
    let options = driver.find_all(&xpath!(SUBJECT_OPTIONS), wait)?;
    if options.is_empty() {
        return Err(Error::missing("subject selector"));
    }

    let mut subjects = Vec::with_capacity(options.len());
    for opt in &options {
        let name = normalize_ws(&opt.text()?);
        if name.is_empty() || contains_ci(&name, ALL_SUBJECTS_KEYWORD) {
            continue;
        }
        subjects.push(name);
    }
    Ok(subjects)
}

/// Switch the dashboard to `subject` and block until it has reloaded.
fn select_subject<D: Driver>(driver: &mut D, subject: &str, options: &SessionOptions) -> Result<()> {
    let wait = WaitMode::Implicit(options.implicit_wait);

    driver.find(&xpath!(SUBJECT_PICKER), wait)?.click()?;
    driver
        .find(&xpath!(SUBJECT_ITEM_TMPL.replace("{label}", subject)), wait)?
        .click()?;

    driver.wait_until(options.load_timeout, |d| {
        let Some(loader) = d.find_all(&xpath!(PRELOADER), WaitMode::Immediate)?.into_iter().next() else {
            return Ok(false);
        };
        let class = loader.attribute(CLASS_ATTR)?.unwrap_or_default();
        Ok(has_class_marker(&class, LOADED_MARKER))
    })
}

/// Read every mark on the loaded subject. A subject with no marks is fine,
/// so lookups here never wait.
fn read_marks<D: Driver>(driver: &mut D, ctx: &MarkContext<'_>, records: &mut Records) -> Result<()> {
    let mut skipped = 0usize;

    let absence_marks = driver.find_all(&xpath!(ABSENCE_MARKS), WaitMode::Immediate)?;
    let mut absences = Vec::with_capacity(absence_marks.len());
    for el in &absence_marks {
        let state = MarkState::classify(el.attribute(CLASS_ATTR)?.as_deref());
        if state.is_deleted() {
            skipped += 1;
            continue;
        }
        let date = resolve_token(&el.text()?, ctx.school_year, ctx.today)?;
        absences.push(Absence::new(ctx.subject, date, state == MarkState::Motivated));
    }

    let grade_marks = driver.find_all(&xpath!(GRADE_MARKS), WaitMode::Immediate)?;
    let mut grades = Vec::with_capacity(grade_marks.len());
    for el in &grade_marks {
        if MarkState::classify(el.attribute(CLASS_ATTR)?.as_deref()).is_deleted() {
            skipped += 1;
            continue;
        }
        let text = el.text()?;
        let (grade, day_month) = parse_grade_mark(&text)?;
        let date = resolve_token(day_month, ctx.school_year, ctx.today)?;
        grades.push(Grade::new(ctx.subject, date, grade));
    }

    logd!(
        "{}: {} absence(s), {} grade(s), {} deleted mark(s) skipped",
        ctx.subject,
        absences.len(),
        grades.len(),
        skipped
    );
    records.absences.append(&mut absences);
    records.grades.append(&mut grades);
    Ok(())
}

/// "grade/dd.mm" → (grade, "dd.mm")
pub(crate) fn parse_grade_mark(text: &str) -> Result<(u8, &str)> {
    let (grade, day_month) = text
        .trim()
        .split_once('/')
        .ok_or_else(|| Error::Extraction(format!("grade mark {text:?} has no '/'")))?;
    let grade = grade
        .trim()
        .parse()
        .map_err(|_| Error::Extraction(format!("grade mark {text:?} has no numeric grade")))?;
    Ok((grade, day_month.trim()))
}
