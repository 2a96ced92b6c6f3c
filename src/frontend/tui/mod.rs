use crate::app::App;
use crate::config::EditorConfig;
use crate::error::{PadError, Result, UiError};
use crate::ui::Renderer;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::time::Duration;

pub struct TuiApplication {
    app: App,
    renderer: Renderer,
}

impl TuiApplication {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            app: App::new(config),
            renderer: Renderer::new(),
        }
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn run(&mut self) -> Result<()> {
        enter_terminal()?;

        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend).map_err(|_| PadError::Ui(UiError::TerminalInit))?;

        let loop_result = self.event_loop(&mut terminal);
        let show_cursor_result = terminal.show_cursor().map_err(|err| terminal_error("show cursor", err));
        drop(terminal);
        let cleanup_result = leave_terminal();

        loop_result.and(show_cursor_result).and(cleanup_result)
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.app.is_running() {
            self.renderer
                .render(terminal, &self.app)
                .map_err(|err| terminal_error("render", err))?;

            if event::poll(Duration::from_millis(250)).map_err(|err| terminal_error("event poll", err))? {
                match event::read().map_err(|err| terminal_error("event read", err))? {
                    Event::Key(key_event) => self.app.handle_key_event(key_event),
                    Event::Paste(text) => self.app.session_mut().insert_str(&text),
                    Event::Resize(_, _) | Event::Mouse(_) | Event::FocusGained | Event::FocusLost => {}
                }
            }
        }

        log::info!("event loop finished");
        Ok(())
    }
}

fn enter_terminal() -> Result<()> {
    enable_raw_mode().map_err(|_| PadError::Ui(UiError::TerminalInit))?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen).map_err(|err| terminal_error("enter alternate screen", err))?;
    Ok(())
}

fn leave_terminal() -> Result<()> {
    let mut out = stdout();
    execute!(out, LeaveAlternateScreen).map_err(|err| terminal_error("leave alternate screen", err))?;
    disable_raw_mode().map_err(|err| terminal_error("disable raw mode", err))?;
    Ok(())
}

fn terminal_error(context: &str, err: impl std::fmt::Display) -> PadError {
    PadError::Ui(UiError::RenderingFailed {
        component: format!("{}: {}", context, err),
    })
}
