//! # shutdown-scheduler
//!
//! Pick a delay in a terminal menu and hand it to the operating system's
//! `shutdown` utility, or cancel a shutdown that is already pending.
//!
//! ## Example
//!
//! ```no_run
//! use shutdown_scheduler::{schedule_shutdown, Logger, NativeShutdown};
//!
//! let logger = Logger::stdout();
//! let started = schedule_shutdown(&NativeShutdown::default(), &logger, 45);
//! assert!(started);
//! ```

pub mod error;
pub mod logger;
pub mod shutdown;
pub mod tui;

pub use error::{Result, SchedulerError};
pub use logger::{Logger, Severity};
pub use shutdown::{
    abort_shutdown, minutes_to_delay, schedule_shutdown, NativeShutdown, Platform, PowerControl,
    ShutdownCommand,
};
