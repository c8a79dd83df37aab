// src/session/role.rs
//
// The two account shapes an authenticated session can take.
//
// - Student: one dashboard, fixed path.
// - Parent:  several children, each with its own dashboard. One must be
//            active before a scan can run.

use crate::config::consts::*;
use crate::config::SessionOptions;
use crate::core::sanitize::normalize_ws;
use crate::core::{Driver, Element, WaitMode};
use crate::error::{Error, Result};

/// A child profile on a parent account. Equal by (name, dashboard).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Student {
    name: String,
    dashboard: String,
}

impl Student {
    pub fn new(name: impl Into<String>, dashboard: impl Into<String>) -> Self {
        Self { name: name.into(), dashboard: dashboard.into() }
    }
    pub fn name(&self) -> &str { &self.name }
    /// Resolved once, at discovery.
    pub fn dashboard(&self) -> &str { &self.dashboard }
}

#[derive(Clone, Debug, Default)]
pub struct ParentRole {
    pub(crate) students: Option<Vec<Student>>,
    pub(crate) active: Option<Student>,
}

impl ParentRole {
    pub fn active(&self) -> Option<&Student> {
        self.active.as_ref()
    }
}

#[derive(Clone, Debug)]
pub enum Role {
    Student,
    Parent(ParentRole),
}

impl Role {
    pub fn is_parent(&self) -> bool {
        matches!(self, Role::Parent(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Parent(_) => "parent",
        }
    }

    /// Where the records live for this account.
    pub fn dashboard_target(&self, options: &SessionOptions) -> Result<String> {
        match self {
            Role::Student => Ok(options.student_dashboard_url()),
            Role::Parent(p) => p
                .active()
                .map(|s| s.dashboard().to_string())
                .ok_or_else(|| Error::NoActiveSelection(s!("select a student first"))),
        }
    }
}

/// Outcome of matching students by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudentMatch {
    /// Exactly one match; it is now active.
    Selected(Student),
    /// Several matches; the caller picks one with `set_active_student`.
    Ambiguous(Vec<Student>),
}

/// Read the children listed on the parent landing page.
pub(crate) fn discover_students<D: Driver>(driver: &mut D, options: &SessionOptions) -> Result<Vec<Student>> {
    driver.navigate(&options.root_url())?;
    let wait = WaitMode::Implicit(options.implicit_wait);

    let names = driver
        .find_all(&xpath!(STUDENT_ITEM), wait)?
        .iter()
        .map(|el| el.text().map(|t| normalize_ws(&t)))
        .collect::<Result<Vec<_>>>()?;

    let links = driver
        .find_all(&xpath!("{}{}", STUDENT_ITEM, STUDENT_LINK_SUFFIX), wait)?
        .iter()
        .map(|el| el.attribute(HREF_ATTR)?.ok_or_else(|| Error::missing("student dashboard link")))
        .collect::<Result<Vec<_>>>()?;

    if names.len() != links.len() {
        return Err(Error::Extraction(format!(
            "{} student names but {} dashboard links",
            names.len(),
            links.len()
        )));
    }

    let students: Vec<Student> = names
        .into_iter()
        .zip(links)
        .map(|(name, link)| Student::new(name, link))
        .collect();
    logf!("Found {} student(s) on the parent account", students.len());
    Ok(students)
}
