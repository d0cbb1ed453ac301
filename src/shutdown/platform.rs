use crate::error::{Result, SchedulerError};
use crate::shutdown::PowerControl;
use std::fmt;
use std::process::{Command, Stdio};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and the other Unix-likes with a `shutdown -c` capable utility.
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }

    pub fn schedule_command(self, delay: Duration) -> ShutdownCommand {
        match self {
            Platform::Windows => ShutdownCommand::new(
                "shutdown",
                ["-s".to_string(), "-t".to_string(), delay.as_secs().to_string()],
            ),
            // The Unix utility only takes whole minutes.
            Platform::MacOs | Platform::Unix => ShutdownCommand::new(
                "shutdown",
                ["-h".to_string(), format!("+{}", delay.as_secs().div_ceil(60))],
            ),
        }
    }

    pub fn abort_command(self) -> ShutdownCommand {
        match self {
            Platform::Windows => ShutdownCommand::new("shutdown", ["-a".to_string()]),
            Platform::MacOs => ShutdownCommand::new("killall", ["shutdown".to_string()]),
            Platform::Unix => ShutdownCommand::new("shutdown", ["-c".to_string()]),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::MacOs => write!(f, "macos"),
            Platform::Unix => write!(f, "unix"),
        }
    }
}

/// A program plus its arguments, started directly without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShutdownCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl ShutdownCommand {
    pub fn new(program: &'static str, args: impl IntoIterator<Item = String>) -> Self {
        Self {
            program,
            args: args.into_iter().collect(),
        }
    }

    /// Start the command and return as soon as it is running.
    ///
    /// The child is not waited on and its output is discarded.
    pub fn spawn(&self) -> Result<()> {
        debug!("Spawning: {}", self);

        let mut command = Command::new(self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        command.spawn().map_err(|source| SchedulerError::Spawn {
            program: self.program.to_string(),
            source,
        })?;

        Ok(())
    }
}

impl fmt::Display for ShutdownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Drives the operating system's own `shutdown` utility.
#[derive(Debug, Clone, Copy)]
pub struct NativeShutdown {
    platform: Platform,
}

impl NativeShutdown {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }
}

impl Default for NativeShutdown {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl PowerControl for NativeShutdown {
    fn schedule(&self, delay: Duration) -> Result<()> {
        self.platform.schedule_command(delay).spawn()
    }

    fn abort(&self) -> Result<()> {
        self.platform.abort_command().spawn()
    }
}
