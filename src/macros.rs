//! Logging macros taking a category handle (or anything that derefs to a
//! [`Logger`](crate::Logger)) followed by format arguments.
//!
//! The level check happens before the arguments are formatted.

/// Log at an explicit level: `catlog::log!(NET, Level::INFO, "up {}", n)`.
#[macro_export]
macro_rules! log {
    ($category:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$category;
        let level: $crate::Level = $level;
        if logger.enabled(level) {
            logger.log(level, format_args!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! trace {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::Level::TRACE, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::Level::DEBUG, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::Level::INFO, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::Level::WARN, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($category:expr, $($arg:tt)+) => {
        $crate::log!($category, $crate::Level::ERROR, $($arg)+)
    };
}
