use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type HostTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back the way the reel found it.
///
/// Restoration runs at most once, whether triggered by drop or by the
/// panic hook installed in [`setup_terminal`].
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
}

impl TerminalGuard {
    pub fn restore(&self) {
        leave_reel_mode(&self.restored);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn leave_reel_mode(restored: &AtomicBool) {
    if restored.swap(true, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    );
}

/// Enter raw mode on the alternate screen with mouse and focus reporting.
pub fn setup_terminal() -> io::Result<(HostTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        Clear(ClearType::All),
        Hide
    )?;

    let restored = Arc::new(AtomicBool::new(false));
    let on_panic = Arc::clone(&restored);
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        leave_reel_mode(&on_panic);
        previous(info);
    }));

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, TerminalGuard { restored }))
}
