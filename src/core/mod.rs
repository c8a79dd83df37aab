// src/core/mod.rs

pub mod driver;
pub mod sanitize;

pub use driver::{Cookie, Driver, Element, Locator, WaitMode};
