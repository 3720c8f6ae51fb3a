//! Detached process spawning with multi-head `DISPLAY` rewriting.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::os::unix::io::RawFd;
use std::os::unix::process::CommandExt;
use std::process::Command;

use log::{debug, warn};
use x11rb::connection::Connection;
use x11rb::protocol::xinerama::ConnectionExt as _;

const DEFAULT_SHELL: &str = "/bin/sh";

#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("exec `{shell} -c {cmd}` failed: {source}")]
    Exec {
        shell: String,
        cmd: String,
        #[source]
        source: io::Error,
    },
    #[error("wait on spawn helper failed: {0}")]
    Wait(#[source] io::Error),
}

/// Launches shell commands detached from the window manager.
///
/// Holds the shell resolved once at startup, so spawning never goes
/// back to the environment for it.
#[derive(Debug, Clone)]
pub struct Spawner {
    shell: OsString,
}

impl Spawner {
    pub fn new(shell: impl Into<OsString>) -> Self {
        Self { shell: shell.into() }
    }

    /// Resolves the shell from `$SHELL`, falling back to `/bin/sh`.
    pub fn from_env() -> Self {
        let shell = env::var_os("SHELL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| OsString::from(DEFAULT_SHELL));
        Self { shell }
    }

    pub fn shell(&self) -> &OsStr {
        &self.shell
    }

    /// Runs `arg` through the shell as a fully detached grandchild.
    ///
    /// Without Xinerama, a set `DISPLAY` is rewritten in the child's
    /// environment to target `screen`; the parent environment is
    /// never touched. The double fork reparents the command to init,
    /// so there is no zombie to reap and no SIGCHLD handler needed:
    /// this call only waits on the intermediate child, which exits as
    /// soon as it has forked.
    ///
    /// `conn_fd` is the X connection descriptor to close in the
    /// grandchild before exec.
    pub fn spawn(
        &self,
        arg: &str,
        screen: usize,
        xinerama_active: bool,
        conn_fd: Option<RawFd>,
    ) -> Result<(), SpawnError> {
        if arg.is_empty() {
            return Ok(());
        }

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(arg);

        if !xinerama_active {
            if let Ok(display) = env::var("DISPLAY") {
                cmd.env("DISPLAY", rewrite_display(&display, screen));
            }
        }

        unsafe {
            cmd.pre_exec(move || {
                match libc::fork() {
                    -1 => return Err(io::Error::last_os_error()),
                    0 => (),
                    _ => libc::_exit(0),
                }
                if let Some(fd) = conn_fd {
                    libc::close(fd);
                }
                if libc::setsid() == -1 {
                    return Err(io::Error::last_os_error());
                }
                Ok(())
            });
        }

        debug!("spawning `{} -c {}`", self.shell.to_string_lossy(), arg);
        let mut child = cmd.spawn().map_err(|source| {
            let err = SpawnError::Exec {
                shell: self.shell.to_string_lossy().into_owned(),
                cmd: arg.to_owned(),
                source,
            };
            warn!("{err}");
            err
        })?;

        // Reaps only the short-lived intermediate, never the command.
        child.wait().map_err(SpawnError::Wait)?;
        Ok(())
    }
}

/// Retargets a `host:display.screen` string at another screen,
/// dropping any existing screen suffix.
pub fn rewrite_display(display: &str, screen: usize) -> String {
    let base = display.rsplit_once('.').map_or(display, |(base, _)| base);
    format!("{base}.{screen}")
}

/// Whether the server spans screens natively, making per-screen
/// `DISPLAY` rewriting unnecessary. Protocol errors read as inactive.
pub fn xinerama_is_active(conn: &impl Connection) -> bool {
    conn.xinerama_is_active()
        .ok()
        .and_then(|cookie| cookie.reply().ok())
        .map_or(false, |reply| reply.state != 0)
}
