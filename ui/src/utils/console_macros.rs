/// Browser console logging macros.
///
/// Thin wrappers over `gloo_console` that accept `format!`-style arguments,
/// since the `gloo_console` macros forward their arguments to the console as
/// JS values instead of formatting them.
#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        gloo_console::info!(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        gloo_console::warn!(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        gloo_console::error!(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        gloo_console::debug!(format!($($arg)*))
    };
}
