// src/config/options.rs
use std::time::Duration;

use chrono::NaiveDate;

use super::consts::*;

/// Runtime knobs for one account session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Portal root, without trailing slash.
    pub base_url: String,
    /// Upper bound for the loading indicator to clear after a subject switch.
    pub load_timeout: Duration,
    /// Lookup retry window used whenever an element is expected to exist.
    pub implicit_wait: Duration,
    /// Reference date for academic-year rollover. `None` → local today.
    pub today: Option<NaiveDate>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            base_url: s!(WEBSITE_URL),
            load_timeout: Duration::from_secs(WAIT_SECS),
            implicit_wait: Duration::from_secs(WAIT_SECS),
            today: None,
        }
    }
}

impl SessionOptions {
    pub fn root_url(&self) -> String {
        s!(self.base_url.trim_end_matches('/'))
    }

    pub fn login_url(&self) -> String {
        self.root_url() + LOGIN_PATH
    }

    pub fn student_dashboard_url(&self) -> String {
        self.root_url() + STUDENT_DASHBOARD_PATH
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// How to obtain an authenticated session.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// A `catalogsessionid` value lifted from a browser.
    Token(String),
    Credentials { username: String, password: String },
}

impl std::fmt::Debug for AuthMethod {
    // Secrets stay out of logs and panic messages.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMethod::Token(_) => f.write_str("Token(***)"),
            AuthMethod::Credentials { username, .. } => f
                .debug_struct("Credentials")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

impl AuthMethod {
    /// `AUTH_COOKIE` wins; otherwise both `USERNAME` and `PASSWORD` are needed.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_AUTH_COOKIE) {
            return Some(AuthMethod::Token(token));
        }
        match (lookup(ENV_USERNAME), lookup(ENV_PASSWORD)) {
            (Some(username), Some(password)) => Some(AuthMethod::Credentials { username, password }),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthMethod::Token(_) => "session token",
            AuthMethod::Credentials { .. } => "credentials",
        }
    }
}
