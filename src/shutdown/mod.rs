//! Scheduling and cancelling an operating-system shutdown.

pub mod platform;

pub use platform::{NativeShutdown, Platform, ShutdownCommand};

use crate::error::Result;
use crate::logger::{Logger, Severity};
use std::io::Write;
use std::time::Duration;
use tracing::{info, warn};

/// Power-off operations of the host.
pub trait PowerControl {
    /// Ask the OS to power off once `delay` has elapsed.
    fn schedule(&self, delay: Duration) -> Result<()>;

    /// Cancel a pending power-off.
    fn abort(&self) -> Result<()>;
}

pub fn minutes_to_delay(minutes: u32) -> Duration {
    Duration::from_secs(u64::from(minutes) * 60)
}

/// Schedule a shutdown in `minutes` and report the outcome through `logger`.
///
/// Returns whether the shutdown command could be started. Failures are logged,
/// never propagated.
pub fn schedule_shutdown<P, W>(power: &P, logger: &Logger<W>, minutes: u32) -> bool
where
    P: PowerControl + ?Sized,
    W: Write,
{
    let delay = minutes_to_delay(minutes);
    info!("Scheduling shutdown in {}s", delay.as_secs());

    match power.schedule(delay) {
        Ok(()) => {
            report(
                logger,
                &format!("Shutdown scheduled in {} minutes.", minutes),
                Severity::Success,
            );
            true
        }
        Err(e) => {
            warn!("Schedule failed: {}", e);
            report(
                logger,
                &format!("Failed to schedule shutdown: {}", e),
                Severity::Error,
            );
            false
        }
    }
}

/// Cancel a pending shutdown and report the outcome through `logger`.
pub fn abort_shutdown<P, W>(power: &P, logger: &Logger<W>) -> bool
where
    P: PowerControl + ?Sized,
    W: Write,
{
    info!("Aborting pending shutdown");

    match power.abort() {
        Ok(()) => {
            report(logger, "Shutdown aborted successfully.", Severity::Success);
            true
        }
        Err(e) => {
            warn!("Abort failed: {}", e);
            report(
                logger,
                &format!("Failed to abort shutdown: {}", e),
                Severity::Error,
            );
            false
        }
    }
}

pub(crate) fn report<W: Write>(logger: &Logger<W>, message: &str, severity: Severity) {
    if let Err(e) = logger.log(message, severity) {
        warn!("Could not write to terminal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedulerError;
    use std::cell::RefCell;
    use std::io;

    #[derive(Default)]
    struct FakePower {
        fail: bool,
        scheduled: RefCell<Vec<Duration>>,
        aborts: RefCell<usize>,
    }

    impl FakePower {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn outcome(&self) -> Result<()> {
            if self.fail {
                Err(SchedulerError::Spawn {
                    program: "shutdown".to_string(),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "access is denied"),
                })
            } else {
                Ok(())
            }
        }
    }

    impl PowerControl for FakePower {
        fn schedule(&self, delay: Duration) -> Result<()> {
            self.scheduled.borrow_mut().push(delay);
            self.outcome()
        }

        fn abort(&self) -> Result<()> {
            *self.aborts.borrow_mut() += 1;
            self.outcome()
        }
    }

    fn lines(logger: Logger<Vec<u8>>) -> Vec<String> {
        String::from_utf8(logger.into_inner())
            .unwrap()
            .split("\r\n")
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_minutes_to_delay() {
        assert_eq!(minutes_to_delay(15), Duration::from_secs(900));
        assert_eq!(minutes_to_delay(120), Duration::from_secs(7200));
    }

    #[test]
    fn test_schedule_passes_seconds_to_power() {
        let power = FakePower::default();
        let logger = Logger::new(Vec::new());

        assert!(schedule_shutdown(&power, &logger, 15));
        assert!(schedule_shutdown(&power, &logger, 120));

        assert_eq!(
            *power.scheduled.borrow(),
            [Duration::from_secs(900), Duration::from_secs(7200)]
        );
    }

    #[test]
    fn test_schedule_success_logs_minutes() {
        let power = FakePower::default();
        let logger = Logger::new(Vec::new());

        schedule_shutdown(&power, &logger, 45);

        let lines = lines(logger);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[SUCCESS] "));
        assert!(lines[0].contains("Shutdown scheduled in 45 minutes."));
    }

    #[test]
    fn test_schedule_failure_logs_one_error() {
        let power = FakePower::failing();
        let logger = Logger::new(Vec::new());

        assert!(!schedule_shutdown(&power, &logger, 25));

        let lines = lines(logger);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR] "));
        assert!(lines[0].contains("Failed to schedule shutdown"));
        assert!(lines[0].contains("access is denied"));
    }

    #[test]
    fn test_abort_success() {
        let power = FakePower::default();
        let logger = Logger::new(Vec::new());

        assert!(abort_shutdown(&power, &logger));
        assert_eq!(*power.aborts.borrow(), 1);

        let lines = lines(logger);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Shutdown aborted successfully."));
    }

    #[test]
    fn test_abort_failure_logs_one_error() {
        let power = FakePower::failing();
        let logger = Logger::new(Vec::new());

        assert!(!abort_shutdown(&power, &logger));

        let lines = lines(logger);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR] "));
        assert!(lines[0].contains("Failed to abort shutdown"));
        assert!(lines[0].contains("access is denied"));
    }

    #[test]
    fn test_native_spawn_error_is_contained() {
        struct Missing;

        impl PowerControl for Missing {
            fn schedule(&self, _delay: Duration) -> Result<()> {
                ShutdownCommand::new("shutdown-scheduler-missing", Vec::new()).spawn()
            }

            fn abort(&self) -> Result<()> {
                ShutdownCommand::new("shutdown-scheduler-missing", Vec::new()).spawn()
            }
        }

        let logger = Logger::new(Vec::new());
        assert!(!schedule_shutdown(&Missing, &logger, 15));
        assert!(!abort_shutdown(&Missing, &logger));
        assert_eq!(lines(logger).len(), 2);
    }
}
