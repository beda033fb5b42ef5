//! Scoped interrupt handling for persistent commands.
//!
//! A development server runs until the operator presses Ctrl-C. The
//! terminal delivers SIGINT to the whole foreground process group, so the
//! runner ignores it for as long as the child is alive and lets the child
//! decide how to stop. The previous disposition is restored on drop.

/// Ignores SIGINT in this process until dropped.
///
/// Must be created *after* the child is spawned: ignored signals are
/// inherited across `exec`.
#[cfg(unix)]
#[derive(Debug)]
pub struct InterruptGuard {
    previous: Option<libc::sighandler_t>,
}

#[cfg(unix)]
impl InterruptGuard {
    /// Start ignoring SIGINT.
    pub fn ignore() -> Self {
        // SAFETY: SIG_IGN is a valid disposition and no Rust state is touched
        // by the signal machinery.
        let previous = unsafe { libc::signal(libc::SIGINT, libc::SIG_IGN) };
        let previous = (previous != libc::SIG_ERR).then_some(previous);
        if previous.is_none() {
            tracing::debug!("could not ignore SIGINT; interrupt will stop the runner too");
        }
        Self { previous }
    }
}

#[cfg(unix)]
impl Drop for InterruptGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous {
            // SAFETY: restores the disposition returned by the earlier call.
            unsafe {
                libc::signal(libc::SIGINT, previous);
            }
        }
    }
}

/// No-op on platforms without POSIX signals.
#[cfg(not(unix))]
#[derive(Debug)]
pub struct InterruptGuard;

#[cfg(not(unix))]
impl InterruptGuard {
    /// Nothing to do; console control events reach the child directly.
    pub fn ignore() -> Self {
        Self
    }
}

/// Serializes tests that change or observe the process SIGINT disposition.
#[cfg(all(test, unix))]
pub(crate) static SIGINT_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
