// src/core/driver.rs
//! The UI-driving capability the pipeline is written against.
//!
//! A backend (WebDriver session, CDP client, scripted fake) implements
//! [`Driver`] and hands out [`Element`] handles. The pipeline never asks a
//! backend to toggle a global implicit wait: every lookup states its own
//! [`WaitMode`], so the behavior of a lookup is visible at the call site.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::consts::POLL_MS;
use crate::error::{Error, Result};

/// Where to find an element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Locator {
    XPath(String),
}

impl Locator {
    pub fn as_str(&self) -> &str {
        match self {
            Locator::XPath(x) => x,
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::XPath(x) => write!(f, "xpath {x}"),
        }
    }
}

/// How long a lookup may keep retrying before giving up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitMode {
    /// Retry for up to the duration while nothing matches.
    Implicit(Duration),
    /// Answer from the page as it is right now. An empty result is meaningful.
    Immediate,
}

impl WaitMode {
    pub fn window(&self) -> Duration {
        match self {
            WaitMode::Implicit(d) => *d,
            WaitMode::Immediate => Duration::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cookie<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub path: &'a str,
}

/// A handle to one element on the current page.
pub trait Element {
    /// Rendered text.
    fn text(&self) -> Result<String>;

    /// Attribute or property value; `None` when absent.
    fn attribute(&self, name: &str) -> Result<Option<String>>;

    fn click(&self) -> Result<()>;

    /// Type into an input.
    fn send_keys(&self, text: &str) -> Result<()>;
}

pub trait Driver {
    type Element: Element;

    fn navigate(&mut self, url: &str) -> Result<()>;

    /// URL after any redirects.
    fn current_url(&mut self) -> Result<String>;

    fn add_cookie(&mut self, cookie: &Cookie<'_>) -> Result<()>;

    /// First match. No match within the wait → [`Error::Extraction`].
    fn find(&mut self, locator: &Locator, wait: WaitMode) -> Result<Self::Element>;

    /// Every match, in document order. May be empty.
    fn find_all(&mut self, locator: &Locator, wait: WaitMode) -> Result<Vec<Self::Element>>;

    /// Block until `condition` holds, polling. Elapsed → [`Error::Timeout`].
    ///
    /// Backends with native waiting may override this.
    fn wait_until<F>(&mut self, timeout: Duration, mut condition: F) -> Result<()>
    where
        Self: Sized,
        F: FnMut(&mut Self) -> Result<bool>,
    {
        let deadline = Instant::now() + timeout;
        loop {
            if condition(self)? {
                return Ok(());
            }
            let now = Instant::now();
            if now >= deadline {
                return Err(Error::Timeout(timeout));
            }
            thread::sleep(Duration::from_millis(POLL_MS).min(deadline - now));
        }
    }
}
