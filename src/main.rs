use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use ledgerdesk::app::Workbench;
use ledgerdesk::kernel::services::adapters::SessionService;
use ledgerdesk::kernel::Store;
use ledgerdesk::logging;
use ledgerdesk::tui::TerminalGuard;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let logging_guard = logging::init();

    let session = SessionService::from_env();
    let store = Store::restore(session);
    let mut workbench = Workbench::new(store);

    let _terminal_guard = TerminalGuard::new()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut redraw = true;
    while !workbench.should_quit() {
        if redraw {
            terminal.draw(|frame| workbench.render(frame))?;
            redraw = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if workbench.handle_key(key) {
                    redraw = true;
                }
            }
            Event::Resize(..) => redraw = true,
            _ => {}
        }
    }

    drop(terminal);

    if let Some(guard) = &logging_guard {
        tracing::info!(log_dir = %guard.log_dir().display(), "shutting down");
    }

    Ok(())
}
