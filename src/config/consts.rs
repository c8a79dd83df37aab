// src/config/consts.rs
//
// The portal contract. Everything here is fixed by the target site.

// Net config
pub const WEBSITE_URL: &str = "https://app.edus.ro";
pub const LOGIN_PATH: &str = "/cont/login";
pub const STUDENT_DASHBOARD_PATH: &str = "/elev/situatie-scolara";

// Landing sections (first path segment after login)
pub const PARENT_SECTION: &str = "parinte";
pub const STUDENT_SECTION: &str = "elev";

// Session cookies
pub const AUTH_TIME_COOKIE: &str = "CATALOG_AUTH_TIME";
pub const AUTH_TIME_VALUE: &str = "1";
pub const SESSION_COOKIE: &str = "catalogsessionid";
pub const COOKIE_PATH: &str = "/";

// Login form
pub const LOGIN_USERNAME: &str = "//form//input[@name='username']";
pub const LOGIN_PASSWORD: &str = "//form//input[@name='password']";
pub const LOGIN_SUBMIT: &str = "//form//input[@type='submit']";

// Account
pub const ACCOUNT_NAME: &str = "//div[contains(@class, 'user-details')]/div";
pub const STUDENT_ITEM: &str = "//img[contains(@src, 'icons/student')]/..";
pub const STUDENT_LINK_SUFFIX: &str = "/..//a[contains(@href, 'situatie-scolara')]";
pub const HREF_ATTR: &str = "href";

// Dashboard
pub const PAGE_SUBTITLE: &str = "//div[contains(@class, 'page-subtitle')]";
pub const SUBJECT_OPTIONS: &str = "//select[contains(@class, 'course-select')]/option";
pub const SUBJECT_PICKER: &str = "//span[contains(@class, 'select2')]";
pub const SUBJECT_ITEM_TMPL: &str = "//li[text()='{label}']";
pub const PRELOADER: &str = "//div[contains(@class, 'preloader-wrapper')]";
pub const ABSENCE_MARKS: &str = "//span[contains(@class, 'student-missing')]";
pub const GRADE_MARKS: &str = "//span[contains(@class, 'student-grade')]";
pub const CLASS_ATTR: &str = "class";

// Class markers
pub const LOADED_MARKER: &str = "d-none";
pub const MOTIVATED_MARKER: &str = "success";
pub const DELETED_MARKER: &str = "deleted";

// Subject picker entry aggregating every subject ("Toate materiile")
pub const ALL_SUBJECTS_KEYWORD: &str = "toate";

// Waits
pub const WAIT_SECS: u64 = 5;
pub const POLL_MS: u64 = 100;

// Logging
pub const LOG_ENV_VAR: &str = "EDUS_REPORT_LOG";

// Auth environment
pub const ENV_AUTH_COOKIE: &str = "AUTH_COOKIE";
pub const ENV_USERNAME: &str = "USERNAME";
pub const ENV_PASSWORD: &str = "PASSWORD";
