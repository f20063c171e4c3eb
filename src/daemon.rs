//! Run-as-background-service concerns.
//!
//! Everything here is outside the engine's contract: the engine just
//! runs forever on a fixed period, and this module decides how the
//! hosting process backgrounds itself. Kept deliberately narrow —
//! privilege check, then the classic detach sequence (fork, new session,
//! chdir to `/`, stdio to `/dev/null`, permissive umask).

use nix::sys::stat::{Mode, umask};
use nix::unistd::{daemon, geteuid};

use crate::error::{Error, Result};

/// The PWM device is only writable by root. Fail fast before touching
/// any hardware.
pub fn check_privileges() -> Result<()> {
    if geteuid().is_root() {
        Ok(())
    } else {
        Err(Error::Config("must be run as root"))
    }
}

/// Detach from the controlling terminal and become a session leader.
pub fn daemonize() -> Result<()> {
    daemon(false, false).map_err(|_| Error::Init("failed to daemonize"))?;
    umask(Mode::empty());
    Ok(())
}
