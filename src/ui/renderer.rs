//! レンダラー
//!
//! テキストエリア・ステータスライン・メッセージ行を描画する

use crate::app::App;
use crate::session::NotificationLevel;
use crate::ui::text_area::{column_to_width, prepare_lines};
use crate::ui::theme::Theme;
use crate::ui::viewport::Viewport;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;

/// 画面レンダラー
#[derive(Debug, Default)]
pub struct Renderer {
    viewport: Viewport,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// 1フレーム描画
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>, app: &App) -> io::Result<()> {
        terminal.draw(|frame| self.draw(frame, app))?;
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame<'_>, app: &App) {
        let session = app.session();
        let theme = Theme::for_view(session.view());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());
        let (text_area, status_area, message_area) = (chunks[0], chunks[1], chunks[2]);

        // テキストエリア
        let (cursor_line, cursor_column) = session.caret_line_column();
        self.viewport.follow(cursor_line, text_area.height as usize);
        let lines = prepare_lines(
            session.text(),
            session.highlights(),
            &theme,
            self.viewport.top_line,
            text_area.height as usize,
        );
        let paragraph = Paragraph::new(lines).block(Block::default().style(theme.text_style()));
        frame.render_widget(paragraph, text_area);

        // ステータスライン
        let status = Paragraph::new(Line::from(Span::styled(
            session.status_line(),
            theme.status_style(),
        )))
        .style(theme.status_style());
        frame.render_widget(status, status_area);

        // メッセージ行（プロンプト優先）
        let prompt_cursor = self.draw_message_line(frame, app, &theme, message_area);

        match prompt_cursor {
            Some(position) => frame.set_cursor_position(position),
            None => {
                let line_text = session
                    .text()
                    .split('\n')
                    .nth(cursor_line)
                    .unwrap_or_default();
                let x = column_to_width(line_text, cursor_column) as u16;
                let y = cursor_line.saturating_sub(self.viewport.top_line) as u16;
                if x < text_area.width && y < text_area.height {
                    frame.set_cursor_position(Position::new(text_area.x + x, text_area.y + y));
                }
            }
        }
    }

    fn draw_message_line(
        &self,
        frame: &mut Frame<'_>,
        app: &App,
        theme: &Theme,
        area: Rect,
    ) -> Option<Position> {
        if let Some(prompt) = app.prompt() {
            let label = prompt.kind.label();
            let line = Line::from(vec![
                Span::styled(label, theme.prompt_style()),
                Span::styled(prompt.input.clone(), theme.text_style()),
            ]);
            frame.render_widget(Paragraph::new(line).style(theme.text_style()), area);

            let width = column_to_width(label, label.chars().count())
                + column_to_width(&prompt.input, prompt.input.chars().count());
            let x = (width as u16).min(area.width.saturating_sub(1));
            return Some(Position::new(area.x + x, area.y));
        }

        let line = match app.session().notification() {
            Some(notification) => {
                let style = match notification.level {
                    NotificationLevel::Error => theme.error_style(),
                    NotificationLevel::Info => theme.text_style(),
                };
                Line::from(Span::styled(notification.message.clone(), style))
            }
            None => Line::from(Span::styled(
                "C-o open  C-s save  C-w write  C-f search  C-z undo  C-y redo  C-t theme  C-q quit",
                theme.text_style(),
            )),
        };
        frame.render_widget(Paragraph::new(line).style(theme.text_style()), area);
        None
    }
}
