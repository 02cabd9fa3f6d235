//! Terminal setup and teardown.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{DefaultTerminal, Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, warn};

/// Restores the terminal on drop.
///
/// Created right after raw mode is enabled, so every later setup failure
/// and every exit from the event loop leaves the terminal usable.
pub struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    /// Enables raw mode, enters the alternate screen, and builds the terminal.
    pub fn enter() -> Result<(Self, DefaultTerminal)> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self {
            restore: restore_terminal,
        };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;

        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn count_restore() {
        RESTORES.fetch_add(1, Ordering::SeqCst);
    }

    fn setup(fail_after_raw_mode: bool) -> Result<TerminalGuard> {
        let guard = TerminalGuard {
            restore: count_restore,
        };
        if fail_after_raw_mode {
            anyhow::bail!("Failed to enter alternate screen");
        }
        Ok(guard)
    }

    #[test]
    fn test_restores_on_setup_failure_and_on_exit() {
        assert!(setup(true).is_err());
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);

        let guard = setup(false).unwrap();
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);

        drop(guard);
        assert_eq!(RESTORES.load(Ordering::SeqCst), 2);
    }
}
