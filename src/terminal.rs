use std::io::Write;

use crossterm::{
    cursor::Show,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::error::AppError;

/// Puts the terminal into game mode and undoes it on drop, whatever the exit path.
pub struct TerminalGuard<W: Write> {
    out: W,
    /// Key release events are reported.
    pub key_release: bool,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W) -> Result<Self, AppError> {
        enable_raw_mode()?;
        // From here on any early return drops the guard and restores.
        let mut guard = Self { out, key_release: false, restored: false };
        execute!(guard.out, EnterAlternateScreen)?;
        // Turning stops on key release, which plain terminals never report.
        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                guard.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            guard.key_release = true;
        } else {
            log::warn!("terminal does not report key releases; controls will latch");
        }
        Ok(guard)
    }

    /// Each step is attempted even if an earlier one fails.
    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        if self.key_release {
            let _ = execute!(self.out, PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard(key_release: bool) -> TerminalGuard<Vec<u8>> {
        TerminalGuard { out: Vec::new(), key_release, restored: false }
    }

    #[test]
    fn restore_leaves_alternate_screen_and_shows_cursor() {
        let mut g = guard(false);
        g.restore();
        let out = String::from_utf8_lossy(&g.out).into_owned();
        assert!(out.contains("\x1b[?1049l"), "{out:?}");
        assert!(out.contains("\x1b[?25h"), "{out:?}");
        assert!(!out.contains("\x1b[<1u"));
    }

    #[test]
    fn restore_pops_keyboard_flags_first_when_pushed() {
        let mut g = guard(true);
        g.restore();
        let out = String::from_utf8_lossy(&g.out).into_owned();
        let pop = out.find("\x1b[<1u").expect("flags popped");
        let leave = out.find("\x1b[?1049l").expect("screen left");
        assert!(pop < leave);
    }

    #[test]
    fn restore_runs_once() {
        let mut g = guard(true);
        g.restore();
        let len = g.out.len();
        g.restore();
        assert_eq!(g.out.len(), len);
    }
}
