use std::io::{self, IsTerminal};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use deals_core::{Notice, NoticeLevel, WizardSurface};

use crate::cli::output;

/// Renders wizard notices with the coloured output helpers and clears the
/// screen when the wizard asks to scroll back to the top.
#[derive(Debug, Clone, Copy)]
pub struct TerminalSurface {
    clear_screen: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            clear_screen: io::stdout().is_terminal(),
        }
    }

    pub fn without_clearing() -> Self {
        Self {
            clear_screen: false,
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSurface for TerminalSurface {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => output::info(notice.message),
            NoticeLevel::Success => output::success(notice.message),
            NoticeLevel::Warning => output::warning(notice.message),
            NoticeLevel::Error => output::error(notice.message),
        }
    }

    fn scroll_to_top(&self) {
        if !self.clear_screen {
            return;
        }
        if let Err(err) = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)) {
            tracing::debug!(error = %err, "could not clear terminal");
        }
    }
}
