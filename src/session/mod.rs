// src/session/mod.rs
//! # Account sessions
//!
//! A [`Session`] is what authentication hands back: a driver that is logged
//! in, the account's [`Role`], and a [`RecordCache`] that is filled by the
//! first successful scan and then never scanned again.
//!
//! ## Typical call chain
//! ```text
//! auth::authenticate_* → Session { role: Student | Parent }
//!   (parent) select_student / set_active_student
//!   get_data → scan::run (once) → cached Records
//!   get_*_by_subject / year_average → stats over the cache
//! ```
//!
//! ## Conventions & invariants
//! - Records are never rescanned within a session. A failed scan caches
//!   nothing, so calling `get_data` again starts from scratch.
//! - On a parent account the active student can only change while the cache
//!   is still empty.
//! - Grouping and averages are recomputed from the cache on every call.

mod cache;
mod role;
mod scan;

use std::collections::BTreeMap;

use crate::config::consts::ACCOUNT_NAME;
use crate::config::SessionOptions;
use crate::core::sanitize::{contains_ci, normalize_ws};
use crate::core::{Driver, Element, WaitMode};
use crate::data::{Absence, Grade, Records};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::stats;

pub use cache::RecordCache;
pub use role::{ParentRole, Role, Student, StudentMatch};

use role::discover_students;

pub struct Session<D: Driver> {
    driver: D,
    role: Role,
    options: SessionOptions,
    cache: RecordCache,
    account_name: Option<String>,
}

impl<D: Driver> Session<D> {
    pub(crate) fn new(driver: D, role: Role, options: SessionOptions) -> Self {
        Self { driver, role, options, cache: RecordCache::default(), account_name: None }
    }

    pub fn role(&self) -> &Role { &self.role }
    pub fn options(&self) -> &SessionOptions { &self.options }
    pub fn driver(&self) -> &D { &self.driver }

    /// Hand the driver back, dropping the session.
    pub fn into_driver(self) -> D { self.driver }

    /// Records from the last successful scan, without scanning.
    pub fn cached(&self) -> Option<&Records> { self.cache.get() }

    pub fn dashboard_target(&self) -> Result<String> {
        self.role.dashboard_target(&self.options)
    }

    /// Display name of the logged-in account. Read once.
    pub fn account_name(&mut self) -> Result<&str> {
        match self.account_name {
            Some(ref name) => Ok(name.as_str()),
            None => {
                let wait = WaitMode::Implicit(self.options.implicit_wait);
                let text = self.driver.find(&xpath!(ACCOUNT_NAME), wait)?.text()?;
                let name: &String = self.account_name.insert(normalize_ws(&text));
                Ok(name.as_str())
            }
        }
    }

    /* ---------------- Records ---------------- */

    /// Cached records, scanning the dashboard on first use.
    pub fn get_data(&mut self, progress: Option<&mut dyn Progress>) -> Result<&Records> {
        let Self { driver, role, options, cache, .. } = self;
        cache.get_or_try_populate(|| {
            let target = role.dashboard_target(options)?;
            scan::run(driver, &target, options, progress)
        })
    }

    pub fn get_absences(&mut self, progress: Option<&mut dyn Progress>) -> Result<&[Absence]> {
        Ok(&self.get_data(progress)?.absences)
    }

    pub fn get_grades(&mut self, progress: Option<&mut dyn Progress>) -> Result<&[Grade]> {
        Ok(&self.get_data(progress)?.grades)
    }

    pub fn get_absences_by_subject(
        &mut self,
        progress: Option<&mut dyn Progress>,
    ) -> Result<BTreeMap<String, Vec<Absence>>> {
        Ok(stats::group_by_subject(self.get_absences(progress)?))
    }

    pub fn get_grades_by_subject(
        &mut self,
        progress: Option<&mut dyn Progress>,
    ) -> Result<BTreeMap<String, Vec<Grade>>> {
        Ok(stats::group_by_subject(self.get_grades(progress)?))
    }

    /// Two-stage year-wide average; `None` when there are no grades.
    pub fn year_average(&mut self, progress: Option<&mut dyn Progress>) -> Result<Option<f64>> {
        Ok(stats::year_average(self.get_grades(progress)?))
    }

    /* ---------------- Parent accounts ---------------- */

    /// Children on a parent account, discovered once. Empty for a student account.
    pub fn students(&mut self) -> Result<&[Student]> {
        let Self { driver, role, options, .. } = self;
        let Role::Parent(parent) = role else {
            return Ok(&[]);
        };
        match parent.students {
            Some(ref students) => Ok(students.as_slice()),
            None => {
                let found = discover_students(driver, options)?;
                let students: &Vec<Student> = parent.students.insert(found);
                Ok(students.as_slice())
            }
        }
    }

    pub fn active_student(&self) -> Option<&Student> {
        match &self.role {
            Role::Parent(p) => p.active(),
            Role::Student => None,
        }
    }

    /// Match students by case-insensitive name substring (`None` = all).
    /// A single match becomes active right away.
    pub fn select_student(&mut self, query: Option<&str>) -> Result<StudentMatch> {
        if !self.role.is_parent() {
            return Err(Error::NoActiveSelection(s!("not a parent account")));
        }

        let mut matches: Vec<Student> = self
            .students()?
            .iter()
            .filter(|s| query.is_none_or(|q| contains_ci(s.name(), q)))
            .cloned()
            .collect();

        match matches.len() {
            0 => Err(Error::NoActiveSelection(match query {
                Some(q) => format!("no student matches {q:?}"),
                None => s!("the account lists no students"),
            })),
            1 => {
                let student = matches.remove(0);
                self.set_active_student(&student)?;
                Ok(StudentMatch::Selected(student))
            }
            _ => Ok(StudentMatch::Ambiguous(matches)),
        }
    }

    /// Make `student` the one whose records `get_data` reads.
    pub fn set_active_student(&mut self, student: &Student) -> Result<()> {
        if !self.role.is_parent() {
            return Err(Error::NoActiveSelection(s!("not a parent account")));
        }
        if !self.students()?.contains(student) {
            return Err(Error::NoActiveSelection(format!(
                "{} is not on this account",
                student.name()
            )));
        }

        let populated = self.cache.is_populated();
        let Role::Parent(parent) = &mut self.role else {
            return Err(Error::NoActiveSelection(s!("not a parent account")));
        };
        if parent.active.as_ref() == Some(student) {
            return Ok(());
        }
        if populated {
            return Err(Error::SelectionLocked);
        }

        logf!("Active student: {}", student.name());
        parent.active = Some(student.clone());
        Ok(())
    }
}
