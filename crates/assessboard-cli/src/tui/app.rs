//! TUI application state and event loop.
//!
//! The dashboard is redrawn after every handled key. While the update dialog
//! is open, keys go to the edit form; otherwise they navigate the dashboard.

use std::io;
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::prelude::*;

use assessboard_core::{
    AssessmentSummary, DashboardView, EditForm, Field, ReopenPolicy, SaveOutcome, ValidationError,
};

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static;

/// Chain a hook that restores the terminal before the panic message is
/// printed. Returns the previous hook for [`reinstate_hook`].
fn install_restore_hook() -> Arc<PanicHook> {
    let original: Arc<PanicHook> = Arc::from(panic::take_hook());
    let chained = Arc::clone(&original);
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
        chained(info);
    }));
    original
}

fn reinstate_hook(original: Arc<PanicHook>) {
    let _ = panic::take_hook();
    panic::set_hook(Box::new(move |info| original(info)));
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    summary: AssessmentSummary,
    form: EditForm,
    average: u32,
    running: bool,
    /// A save was rejected since the dialog was opened.
    save_attempted: bool,
}

impl App {
    pub fn new(summary: AssessmentSummary, average: u32, policy: ReopenPolicy) -> Self {
        Self {
            form: EditForm::new(&summary, policy),
            summary,
            average,
            running: true,
            save_attempted: false,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let original_hook = install_restore_hook();

        info!("dashboard started (reopen policy {:?})", self.form.policy());
        let result = self.run_loop(&mut terminal);

        reinstate_hook(original_hook);
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;
        info!("dashboard closed");

        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        while self.is_running() {
            terminal.draw(|f| super::ui::draw(f, self))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        if self.form.is_open() {
            self.handle_form_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('u') | KeyCode::Char('e') | KeyCode::Enter => {
                self.form.open(&self.summary);
                self.save_attempted = false;
                debug!("update dialog opened");
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.form.cancel();
                debug!("update dialog cancelled");
            }
            KeyCode::Enter => match self.form.save(&mut self.summary) {
                SaveOutcome::Committed(_) => self.save_attempted = false,
                SaveOutcome::Rejected(_) => self.save_attempted = true,
            },
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) if !c.is_control() => self.form.push_char(c),
            _ => {}
        }
    }

    // --- Accessors ---

    pub fn summary(&self) -> &AssessmentSummary {
        &self.summary
    }

    pub fn form(&self) -> &EditForm {
        &self.form
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Errors still blocking a save, once a save has been rejected.
    ///
    /// Read from the live field states, so fixing a field drops it here.
    pub fn blocking_errors(&self) -> Vec<ValidationError> {
        if !self.save_attempted {
            return Vec::new();
        }
        Field::ALL
            .into_iter()
            .filter_map(|f| self.form.error(f))
            .collect()
    }

    /// Everything one frame shows, derived from the committed summary.
    pub fn view(&self) -> DashboardView {
        DashboardView::build(&self.summary, self.average)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
