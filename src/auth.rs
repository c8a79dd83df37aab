// src/auth.rs
//
// Getting from a bare driver to a logged-in Session.
//
//   unauthenticated ─┬─ submit credentials ─┐
//                    └─ inject token ───────┴→ verify: landing path
//                                                ├─ /parinte/… → Parent session
//                                                ├─ /elev/…    → Student session
//                                                └─ else       → Error::Authentication
//
// No retries here; a failed verification is terminal.

use crate::config::consts::*;
use crate::config::{AuthMethod, SessionOptions};
use crate::core::sanitize::landing_section;
use crate::core::{Cookie, Driver, Element, WaitMode};
use crate::error::{Error, Result};
use crate::session::{ParentRole, Role, Session};

/// Dispatch on how the caller wants to log in.
pub fn authenticate<D: Driver>(driver: D, method: &AuthMethod, options: SessionOptions) -> Result<Session<D>> {
    logd!("Auth method: {}", method.label());
    match method {
        AuthMethod::Token(token) => authenticate_by_token(driver, token, options),
        AuthMethod::Credentials { username, password } => {
            authenticate_by_credentials(driver, username, password, options)
        }
    }
}

/// Reuse a `catalogsessionid` obtained elsewhere.
pub fn authenticate_by_token<D: Driver>(mut driver: D, token: &str, options: SessionOptions) -> Result<Session<D>> {
    logf!("Authenticating with a session token");
    driver.navigate(&options.root_url())?;

    driver.add_cookie(&Cookie { name: AUTH_TIME_COOKIE, value: AUTH_TIME_VALUE, path: COOKIE_PATH })?;
    driver.add_cookie(&Cookie { name: SESSION_COOKIE, value: token, path: COOKIE_PATH })?;

    verify(driver, options)
}

/// Fill and submit the login form.
pub fn authenticate_by_credentials<D: Driver>(
    mut driver: D,
    username: &str,
    password: &str,
    options: SessionOptions,
) -> Result<Session<D>> {
    logf!("Authenticating with credentials for {username}");
    driver.navigate(&options.login_url())?;
    let wait = WaitMode::Implicit(options.implicit_wait);

    driver.find(&xpath!(LOGIN_USERNAME), wait)?.send_keys(username)?;
    driver.find(&xpath!(LOGIN_PASSWORD), wait)?.send_keys(password)?;
    driver.find(&xpath!(LOGIN_SUBMIT), wait)?.click()?;

    verify(driver, options)
}

/// Go to the root and read where the portal put us.
fn verify<D: Driver>(mut driver: D, options: SessionOptions) -> Result<Session<D>> {
    driver.navigate(&options.root_url())?;
    let url = driver.current_url()?;

    let role = match landing_section(&url) {
        Some(PARENT_SECTION) => Role::Parent(ParentRole::default()),
        Some(STUDENT_SECTION) => Role::Student,
        _ => {
            loge!("Authentication failed, landed on {url}");
            return Err(Error::Authentication(format!("unexpected landing page {url}")));
        }
    };

    logf!("Authenticated as a {} account", role.label());
    Ok(Session::new(driver, role, options))
}
