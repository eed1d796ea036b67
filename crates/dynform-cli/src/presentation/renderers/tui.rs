//! TUI Renderer for the fill command
//!
//! Owns the terminal and the event loop. Every frame is drawn from
//! `FillApp::view()`; key presses go to the app, and gateway results are
//! drained from the channel between frames.
//!
//! ## Design:
//! - Renderer does NOT own form state (the app does)
//! - Uses View widgets to render each screen
//! - Terminal is restored even when the loop fails

use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::app::{AppEvent, FillApp};
use crate::presentation::view_models::{FormScreenViewModel, ScreenViewModel, StatusLevel};
use crate::presentation::views::tui::{
    HeaderView, LoginView, MessageView, ProgressView, SectionView, StatusBarView, SubmittedView,
};

pub struct TuiRenderer {
    tick: Duration,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            tick: Duration::from_millis(100),
        }
    }

    /// Run until the app asks to quit
    pub fn run(self, app: &mut FillApp, rx: Receiver<AppEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, app, &rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut FillApp,
        rx: &Receiver<AppEvent>,
    ) -> Result<()> {
        loop {
            let screen = app.view();
            terminal.draw(|f| render(f, &screen))?;

            if event::poll(self.tick)?
                && let Event::Key(key) = event::read()?
            {
                app.handle_key(key);
            }

            while let Ok(app_event) = rx.try_recv() {
                app.handle_event(app_event);
            }

            if app.should_quit() {
                break;
            }
        }

        Ok(())
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render(f: &mut Frame, screen: &ScreenViewModel) {
    let size = f.area();

    match screen {
        ScreenViewModel::Login(login) => f.render_widget(LoginView::new(login), size),
        ScreenViewModel::Loading { message } => {
            f.render_widget(MessageView::new("Loading", message, StatusLevel::Info, &[]), size)
        }
        ScreenViewModel::Failed { message, hints } => f.render_widget(
            MessageView::new("Error", message, StatusLevel::Error, hints),
            size,
        ),
        ScreenViewModel::Form(form) => render_form(f, form),
        ScreenViewModel::Submitted(submitted) => {
            f.render_widget(SubmittedView::new(submitted), size)
        }
    }
}

/// Layout: [Header | Progress | Section | Status Bar]
fn render_form(f: &mut Frame, screen: &FormScreenViewModel) {
    let banner = screen.banner.as_deref();
    let progress_height = if screen.progress.is_some() { 2 } else { 0 };

    let [header, progress, section, status] = Layout::vertical([
        Constraint::Length(HeaderView::height(banner)),
        Constraint::Length(progress_height),
        Constraint::Min(6),
        Constraint::Length(3),
    ])
    .areas(f.area());

    f.render_widget(HeaderView::new(&screen.header, banner), header);
    if let Some(model) = &screen.progress {
        f.render_widget(ProgressView::new(model), progress);
    }
    f.render_widget(SectionView::new(&screen.section, &screen.navigation), section);
    f.render_widget(StatusBarView::new(&screen.status_bar), status);
}
