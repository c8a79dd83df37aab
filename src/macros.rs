// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! xpath {
    // Locator shorthand!

    // Template + args → format!, then Locator::XPath
    ($fmt:literal, $($arg:tt)+) => {
        $crate::core::driver::Locator::XPath(::std::format!($fmt, $($arg)+))
    };
    // Any single expression → Locator::XPath
    ($expr:expr) => {
        $crate::core::driver::Locator::XPath(::std::string::String::from($expr))
    };
}
