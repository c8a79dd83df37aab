// tests/common/mod.rs
//
// A scripted stand-in for the portal. Answers the crate's locators from an
// in-memory account, records what the pipeline did, and flips the loading
// indicator a few polls after a subject is picked.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveDate;

use edus_report::config::consts::*;
use edus_report::config::SessionOptions;
use edus_report::core::{Cookie, Driver, Element, Locator, WaitMode};
use edus_report::{Error, Result};

pub const ROOT: &str = "https://app.edus.ro";
pub const TOKEN: &str = "tok-123";
pub const USER: &str = "parent@example.com";
pub const PASS: &str = "secret";

#[derive(Clone, Debug)]
pub struct Mark {
    pub text: String,
    pub class: String,
}

/// Absence marker "dd.mm".
pub fn absence(day_month: &str, motivated: bool) -> Mark {
    let class = if motivated { "student-missing text-success" } else { "student-missing" };
    Mark { text: day_month.to_string(), class: class.to_string() }
}

/// Grade marker "g/dd.mm".
pub fn grade(g: u8, day_month: &str) -> Mark {
    Mark { text: format!("{g}/{day_month}"), class: "student-grade".to_string() }
}

pub fn deleted(mut mark: Mark) -> Mark {
    mark.class.push_str(" deleted");
    mark
}

#[derive(Clone, Debug, Default)]
pub struct SubjectPage {
    pub name: String,
    pub absences: Vec<Mark>,
    pub grades: Vec<Mark>,
}

pub fn subject(name: &str, absences: Vec<Mark>, grades: Vec<Mark>) -> SubjectPage {
    SubjectPage { name: name.to_string(), absences, grades }
}

#[derive(Clone, Debug, Default)]
pub struct Dashboard {
    pub subtitle: String,
    /// Extra picker entries that are not real subjects.
    pub extra_options: Vec<String>,
    pub subjects: Vec<SubjectPage>,
}

#[derive(Clone, Debug)]
pub enum Account {
    Student { dashboard: Dashboard },
    Parent { children: Vec<(String, String, Dashboard)> },
}

pub struct State {
    account: Account,
    logged_in: bool,
    url: String,
    pub navigations: Vec<String>,
    pub cookies: Vec<(String, String)>,
    typed: HashMap<String, String>,
    /// Dashboard currently loaded, keyed by target URL.
    dashboard: Option<Dashboard>,
    current_subject: Option<String>,
    /// Polls left before the loader reports done. `None` = never.
    loading_left: Option<u32>,
    pub polls_per_load: Option<u32>,
    pub waits: Vec<(String, WaitMode)>,
    pub landing_override: Option<String>,
    pub missing_subtitle: bool,
}

#[derive(Clone)]
pub struct Portal {
    pub state: Rc<RefCell<State>>,
}

impl Portal {
    pub fn new(account: Account) -> Self {
        Portal {
            state: Rc::new(RefCell::new(State {
                account,
                logged_in: false,
                url: String::new(),
                navigations: Vec::new(),
                cookies: Vec::new(),
                typed: HashMap::new(),
                dashboard: None,
                current_subject: None,
                loading_left: Some(0),
                polls_per_load: Some(1),
                waits: Vec::new(),
                landing_override: None,
                missing_subtitle: false,
            })),
        }
    }

    pub fn navigations(&self) -> usize {
        self.state.borrow().navigations.len()
    }

    pub fn navigated_to(&self) -> Vec<String> {
        self.state.borrow().navigations.clone()
    }

    pub fn cookies(&self) -> Vec<(String, String)> {
        self.state.borrow().cookies.clone()
    }

    pub fn wait_modes_for(&self, locator: &str) -> Vec<WaitMode> {
        self.state
            .borrow()
            .waits
            .iter()
            .filter(|(l, _)| l == locator)
            .map(|(_, w)| *w)
            .collect()
    }

    /// The loader never clears after a subject pick.
    pub fn stall_loader(&self) {
        self.state.borrow_mut().polls_per_load = None;
    }

    pub fn land_on(&self, url: &str) {
        self.state.borrow_mut().landing_override = Some(url.to_string());
    }

    pub fn drop_subtitle(&self) {
        self.state.borrow_mut().missing_subtitle = true;
    }

    pub fn log_in(&self) {
        self.state.borrow_mut().logged_in = true;
    }

    fn landing(&self) -> String {
        let st = self.state.borrow();
        if let Some(url) = &st.landing_override {
            return url.clone();
        }
        if !st.logged_in {
            return format!("{ROOT}{LOGIN_PATH}");
        }
        match st.account {
            Account::Student { .. } => format!("{ROOT}/elev/acasa"),
            Account::Parent { .. } => format!("{ROOT}/parinte/acasa"),
        }
    }

    fn dashboard_for(&self, url: &str) -> Option<Dashboard> {
        let st = self.state.borrow();
        if !st.logged_in {
            return None;
        }
        match &st.account {
            Account::Student { dashboard } if url == format!("{ROOT}{STUDENT_DASHBOARD_PATH}") => {
                Some(dashboard.clone())
            }
            Account::Parent { children } => children
                .iter()
                .find(|(_, link, _)| link == url)
                .map(|(_, _, d)| d.clone()),
            _ => None,
        }
    }

    fn el(&self, kind: Kind, text: &str, class: &str) -> FakeElement {
        FakeElement { state: Rc::clone(&self.state), kind, text: text.to_string(), class: class.to_string() }
    }

    fn lookup(&self, locator: &str) -> Vec<FakeElement> {
        let st = self.state.borrow();
        let on_dashboard = st.dashboard.clone();
        let current = st.current_subject.clone();
        let account = st.account.clone();
        let logged_in = st.logged_in;
        drop(st);

        let student_links = format!("{STUDENT_ITEM}{STUDENT_LINK_SUFFIX}");
        match locator {
            l if l == LOGIN_USERNAME || l == LOGIN_PASSWORD => {
                vec![self.el(Kind::Input(l.to_string()), "", "")]
            }
            l if l == LOGIN_SUBMIT => vec![self.el(Kind::Submit, "", "")],
            l if l == ACCOUNT_NAME && logged_in => vec![self.el(Kind::Plain, "  Popescu   Maria ", "")],
            l if l == STUDENT_ITEM && logged_in => match &account {
                Account::Parent { children } => children
                    .iter()
                    .map(|(name, _, _)| self.el(Kind::Plain, &format!(" {name} "), ""))
                    .collect(),
                _ => Vec::new(),
            },
            l if l == student_links && logged_in => match &account {
                Account::Parent { children } => children
                    .iter()
                    .map(|(_, link, _)| self.el(Kind::Link(link.clone()), "Situație școlară", ""))
                    .collect(),
                _ => Vec::new(),
            },
            l if l == PAGE_SUBTITLE => match &on_dashboard {
                Some(d) if !self.state.borrow().missing_subtitle => vec![self.el(Kind::Plain, &d.subtitle, "")],
                _ => Vec::new(),
            },
            l if l == SUBJECT_OPTIONS => match &on_dashboard {
                Some(d) => d
                    .extra_options
                    .iter()
                    .chain(d.subjects.iter().map(|s| &s.name))
                    .map(|name| self.el(Kind::Plain, name, ""))
                    .collect(),
                None => Vec::new(),
            },
            l if l == SUBJECT_PICKER && on_dashboard.is_some() => vec![self.el(Kind::Plain, "", "select2")],
            l if l == PRELOADER && on_dashboard.is_some() => vec![self.el(Kind::Loader, "", "")],
            l if l == ABSENCE_MARKS || l == GRADE_MARKS => {
                let Some(d) = &on_dashboard else { return Vec::new() };
                let Some(name) = &current else { return Vec::new() };
                let Some(page) = d.subjects.iter().find(|s| &s.name == name) else { return Vec::new() };
                let marks = if l == ABSENCE_MARKS { &page.absences } else { &page.grades };
                marks.iter().map(|m| self.el(Kind::Plain, &m.text, &m.class)).collect()
            }
            l => {
                // //li[text()='<subject>']
                let Some(d) = &on_dashboard else { return Vec::new() };
                d.subjects
                    .iter()
                    .filter(|s| SUBJECT_ITEM_TMPL.replace("{label}", &s.name) == l)
                    .map(|s| self.el(Kind::SubjectItem(s.name.clone()), &s.name, ""))
                    .collect()
            }
        }
    }
}

#[derive(Clone, Debug)]
enum Kind {
    Plain,
    Input(String),
    Submit,
    Link(String),
    SubjectItem(String),
    Loader,
}

pub struct FakeElement {
    state: Rc<RefCell<State>>,
    kind: Kind,
    text: String,
    class: String,
}

impl Element for FakeElement {
    fn text(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn attribute(&self, name: &str) -> Result<Option<String>> {
        match (&self.kind, name) {
            (Kind::Link(href), "href") => Ok(Some(href.clone())),
            (Kind::Loader, "class") => {
                let mut st = self.state.borrow_mut();
                match st.loading_left {
                    Some(0) => Ok(Some("preloader-wrapper d-none".to_string())),
                    Some(n) => {
                        st.loading_left = Some(n - 1);
                        Ok(Some("preloader-wrapper".to_string()))
                    }
                    None => Ok(Some("preloader-wrapper".to_string())),
                }
            }
            (_, "class") if !self.class.is_empty() => Ok(Some(self.class.clone())),
            _ => Ok(None),
        }
    }

    fn click(&self) -> Result<()> {
        let mut st = self.state.borrow_mut();
        match &self.kind {
            Kind::Submit => {
                let ok = st.typed.get(LOGIN_USERNAME).map(String::as_str) == Some(USER)
                    && st.typed.get(LOGIN_PASSWORD).map(String::as_str) == Some(PASS);
                st.logged_in = ok;
            }
            Kind::SubjectItem(name) => {
                st.current_subject = Some(name.clone());
                st.loading_left = st.polls_per_load;
            }
            _ => {}
        }
        Ok(())
    }

    fn send_keys(&self, text: &str) -> Result<()> {
        if let Kind::Input(locator) = &self.kind {
            self.state.borrow_mut().typed.insert(locator.clone(), text.to_string());
        }
        Ok(())
    }
}

impl Driver for Portal {
    type Element = FakeElement;

    fn navigate(&mut self, url: &str) -> Result<()> {
        let dashboard = self.dashboard_for(url);
        let resolved = if url == ROOT { self.landing() } else { url.to_string() };
        let mut st = self.state.borrow_mut();
        st.navigations.push(url.to_string());
        st.url = resolved;
        st.dashboard = dashboard;
        st.current_subject = None;
        Ok(())
    }

    fn current_url(&mut self) -> Result<String> {
        Ok(self.state.borrow().url.clone())
    }

    fn add_cookie(&mut self, cookie: &Cookie<'_>) -> Result<()> {
        let mut st = self.state.borrow_mut();
        st.cookies.push((cookie.name.to_string(), cookie.value.to_string()));
        if cookie.name == SESSION_COOKIE && cookie.value == TOKEN {
            st.logged_in = true;
        }
        Ok(())
    }

    fn find(&mut self, locator: &Locator, wait: WaitMode) -> Result<FakeElement> {
        self.state.borrow_mut().waits.push((locator.as_str().to_string(), wait));
        self.lookup(locator.as_str())
            .into_iter()
            .next()
            .ok_or_else(|| Error::Extraction(format!("{locator} not found")))
    }

    fn find_all(&mut self, locator: &Locator, wait: WaitMode) -> Result<Vec<FakeElement>> {
        self.state.borrow_mut().waits.push((locator.as_str().to_string(), wait));
        Ok(self.lookup(locator.as_str()))
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn options() -> SessionOptions {
    SessionOptions {
        base_url: ROOT.to_string(),
        load_timeout: Duration::from_millis(250),
        implicit_wait: Duration::ZERO,
        today: Some(today()),
    }
}

/// Student account: two subjects plus the aggregate picker entry.
pub fn student_dashboard() -> Dashboard {
    Dashboard {
        subtitle: "Situația școlară 2025".to_string(),
        extra_options: vec!["Toate materiile".to_string()],
        subjects: vec![
            subject(
                "Matematică",
                vec![absence("12.11", true), absence("03.02", false), deleted(absence("04.02", false))],
                vec![grade(8, "10.10"), grade(10, "20.01")],
            ),
            subject("Fizică", vec![], vec![grade(10, "05.03")]),
            subject("Educație fizică", vec![absence("15.01", false)], vec![]),
        ],
    }
}

pub fn student_account() -> Account {
    Account::Student { dashboard: student_dashboard() }
}

pub fn parent_account(names: &[&str]) -> Account {
    Account::Parent {
        children: names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                (
                    name.to_string(),
                    format!("{ROOT}/parinte/elev/{}/situatie-scolara", i + 1),
                    student_dashboard(),
                )
            })
            .collect(),
    }
}
