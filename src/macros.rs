//! Logging macros that capture the call site.
//!
//! These macros are the ergonomic front end of [`LogManager`](crate::LogManager):
//! they capture `file!()`, `line!()` and `module_path!()` automatically and
//! pack the remaining arguments into the renderable slice the manager
//! consumes.
//!
//! Building with the `disable-log` feature turns every leveled macro and
//! `log_assert!` into a literal no-op with no argument evaluation;
//! `log_print!` and `log_println!` stay active.
//!
//! # Examples
//!
//! ```
//! use debuglog::{log_info, log_warn, LogBase, LogManager};
//!
//! let mut manager = LogManager::new();
//!
//! // Arguments are rendered with the configured delimiter between them
//! log_info!(manager, "server listening on port", 8080);
//!
//! // A LogBase argument switches the numeric base for the rest of the line
//! log_warn!(manager, "bad flags", LogBase::Hex, 0x7fu8);
//! ```

/// Log at an explicit severity level.
///
/// # Examples
///
/// ```
/// # use debuglog::{log_at, LogLevel, LogManager};
/// # let mut manager = LogManager::new();
/// log_at!(manager, LogLevel::Info, "payload bytes", 512);
/// ```
#[cfg(not(feature = "disable-log"))]
#[macro_export]
macro_rules! log_at {
    ($manager:expr, $level:expr $(, $arg:expr)+ $(,)?) => {
        $manager.log(
            $level,
            file!(),
            line!(),
            module_path!(),
            &[$(&$arg as &dyn $crate::Renderable),+],
        )
    };
}

#[cfg(feature = "disable-log")]
#[macro_export]
macro_rules! log_at {
    ($manager:expr, $level:expr $(, $arg:expr)+ $(,)?) => {
        ()
    };
}

/// Log an error-level record.
///
/// # Examples
///
/// ```
/// # use debuglog::{log_error, LogManager};
/// # let mut manager = LogManager::new();
/// log_error!(manager, "sensor offline, id", 3);
/// ```
#[macro_export]
macro_rules! log_error {
    ($manager:expr $(, $arg:expr)+ $(,)?) => {
        $crate::log_at!($manager, $crate::LogLevel::Error $(, $arg)+)
    };
}

/// Log a warning-level record.
///
/// # Examples
///
/// ```
/// # use debuglog::{log_warn, LogManager};
/// # let mut manager = LogManager::new();
/// log_warn!(manager, "voltage low:", 3.21f32);
/// ```
#[macro_export]
macro_rules! log_warn {
    ($manager:expr $(, $arg:expr)+ $(,)?) => {
        $crate::log_at!($manager, $crate::LogLevel::Warn $(, $arg)+)
    };
}

/// Log an info-level record.
///
/// # Examples
///
/// ```
/// # use debuglog::{log_info, LogManager};
/// # let mut manager = LogManager::new();
/// log_info!(manager, "boot complete");
/// ```
#[macro_export]
macro_rules! log_info {
    ($manager:expr $(, $arg:expr)+ $(,)?) => {
        $crate::log_at!($manager, $crate::LogLevel::Info $(, $arg)+)
    };
}

/// Log a debug-level record.
///
/// # Examples
///
/// ```
/// # use debuglog::{log_debug, LogLevel, LogManager};
/// # let mut manager = LogManager::new();
/// # manager.set_console_level(LogLevel::Debug);
/// log_debug!(manager, "retry", 2, "of", 5);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($manager:expr $(, $arg:expr)+ $(,)?) => {
        $crate::log_at!($manager, $crate::LogLevel::Debug $(, $arg)+)
    };
}

/// Log a trace-level record.
///
/// # Examples
///
/// ```
/// # use debuglog::{log_trace, LogLevel, LogManager};
/// # let mut manager = LogManager::new();
/// # manager.set_console_level(LogLevel::Trace);
/// log_trace!(manager, "entering poll loop");
/// ```
#[macro_export]
macro_rules! log_trace {
    ($manager:expr $(, $arg:expr)+ $(,)?) => {
        $crate::log_at!($manager, $crate::LogLevel::Trace $(, $arg)+)
    };
}

/// Render arguments to every attached sink without header, terminator or
/// threshold check. Stays active under `disable-log`.
///
/// # Examples
///
/// ```
/// # use debuglog::{log_print, LogManager};
/// # let mut manager = LogManager::new();
/// log_print!(manager, "progress:", 75, "%");
/// ```
#[macro_export]
macro_rules! log_print {
    ($manager:expr $(, $arg:expr)* $(,)?) => {
        $manager.print(&[$(&$arg as &dyn $crate::Renderable),*])
    };
}

/// Like [`log_print!`], with a line terminator. An empty argument list emits
/// a bare newline.
///
/// # Examples
///
/// ```
/// # use debuglog::{log_println, LogManager};
/// # let mut manager = LogManager::new();
/// log_println!(manager, "done");
/// log_println!(manager);
/// ```
#[macro_export]
macro_rules! log_println {
    ($manager:expr $(, $arg:expr)* $(,)?) => {
        $manager.println(&[$(&$arg as &dyn $crate::Renderable),*])
    };
}

/// Halting assertion.
///
/// When the condition is false, emits one `[ASSERT]` line carrying the
/// stringified condition (and the optional message) to every attached sink,
/// then never returns. No-op under `disable-log`.
///
/// # Examples
///
/// ```
/// # use debuglog::{log_assert, LogManager};
/// # let mut manager = LogManager::new();
/// let voltage = 5;
/// log_assert!(manager, voltage > 0);
/// log_assert!(manager, voltage < 12, "needs a 5V rail");
/// ```
#[cfg(not(feature = "disable-log"))]
#[macro_export]
macro_rules! log_assert {
    ($manager:expr, $cond:expr $(,)?) => {
        $manager.assertion(
            $cond,
            file!(),
            line!(),
            module_path!(),
            stringify!($cond),
            None,
        )
    };
    ($manager:expr, $cond:expr, $msg:expr $(,)?) => {
        $manager.assertion(
            $cond,
            file!(),
            line!(),
            module_path!(),
            stringify!($cond),
            Some($msg),
        )
    };
}

#[cfg(feature = "disable-log")]
#[macro_export]
macro_rules! log_assert {
    ($manager:expr, $cond:expr $(,)?) => {
        ()
    };
    ($manager:expr, $cond:expr, $msg:expr $(,)?) => {
        ()
    };
}
